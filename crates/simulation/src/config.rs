pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Logical window size used before the first resize event arrives.
pub const DEFAULT_VIEW_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEW_HEIGHT: f32 = 720.0;

/// Number of orbital items sharing one ring.
pub const ITEMS_PER_RING: usize = 4;

/// Period of the 1 Hz simulation driver.
pub const CLOCK_TICK_SECS: f64 = 1.0;

/// Brightness multiplier applied to a particle the moment it is triggered.
pub const TRIGGER_BRIGHTNESS: f32 = 4.0;

/// Brightness never decays below this value.
pub const BRIGHTNESS_FLOOR: f32 = 1.0;

/// Absolute lower bound on fitted font sizes in pixels.
pub const MIN_FONT_PX: f32 = 8.0;

/// Default seed for the visual RNG when none is supplied.
pub const DEFAULT_VISUAL_SEED: u64 = 42;
