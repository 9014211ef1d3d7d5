//! Execution order of the two drivers via `SystemSet` phases.
//!
//! # FixedUpdate phases (`SimulationSet`), 1 Hz
//!
//! ```text
//! Clock  →  Counters
//! ```
//!
//! * **Clock** – Advance `SimulationClock` by one second.
//! * **Counters** – Recompute every counter from the clock and emit
//!   increase events.
//!
//! # Update phases (`FrameSet`), once per frame
//!
//! ```text
//! Pointer  →  Input  →  Motion  →  Visual
//! ```
//!
//! * **Pointer** – Hover pause toggles. Applied even while the frame driver
//!   is stopped, so a hover change is never lost across a stop.
//! * **Input** – Phase timers, reveals. Reset requests run just before.
//! * **Motion** – Orbit advance, particle frame update, particle triggers.
//! * **Visual** – Read-only consumers (rendering sync, UI).
//!
//! `Clock`, `Counters`, `Input` and `Motion` are gated by `DriverControl`: a
//! stopped driver skips its whole chain, never part of it. `Visual` keeps
//! running so the last state stays on screen while stopped.

use bevy::prelude::*;

/// Ordered phases for the 1 Hz driver in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Clock,
    Counters,
}

/// Ordered phases for the frame driver in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Pointer,
    Input,
    Motion,
    Visual,
}
