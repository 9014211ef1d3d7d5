//! Global keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::reset::ResetAllEvent;
use simulation::sim_clock::DriverControl;

pub const RESET_KEY: KeyCode = KeyCode::KeyR;
pub const PAUSE_KEY: KeyCode = KeyCode::Space;

/// R restarts the experience, Space stops or resumes both drivers.
pub fn handle_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut control: ResMut<DriverControl>,
    mut resets: EventWriter<ResetAllEvent>,
) {
    if contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
    {
        return;
    }
    if keys.just_pressed(RESET_KEY) {
        info!("Reset requested from keyboard");
        resets.send(ResetAllEvent);
    }
    if keys.just_pressed(PAUSE_KEY) {
        control.toggle_all();
        info!(
            "Drivers {}",
            if control.clock_running { "resumed" } else { "paused" }
        );
    }
}
