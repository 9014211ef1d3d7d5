//! Egui input guard: keeps pointer input on egui panels from reaching the
//! orbital items underneath.
//!
//! Labels and the central counter are non-interactable areas, so they don't
//! block hover; only the tooltip and panels that take input do.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer. Returns `false` when no egui
/// context exists yet.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}
