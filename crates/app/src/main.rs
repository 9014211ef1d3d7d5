use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use simulation::visual_params::VisualParams;
use simulation::visual_rng::VisualRng;

/// Path to a JSON override for [`VisualParams`].
const PARAMS_ENV: &str = "EVERY_SECOND_PARAMS";
/// Seed for the visual RNG, for reproducible star fields.
const SEED_ENV: &str = "EVERY_SECOND_SEED";

/// Messages from env parsing, logged once the log plugin is up.
#[derive(Resource, Default)]
struct StartupNotes {
    infos: Vec<String>,
    warnings: Vec<String>,
}

fn main() {
    let mut app = App::new();
    let mut notes = StartupNotes::default();

    if let Ok(path) = std::env::var(PARAMS_ENV) {
        match VisualParams::load(&path) {
            Ok(params) => {
                notes.infos.push(format!("Loaded visual params from {path}"));
                app.insert_resource(params);
            }
            Err(e) => notes
                .warnings
                .push(format!("Ignoring {PARAMS_ENV}={path}: {e}; using defaults")),
        }
    }
    if let Ok(raw) = std::env::var(SEED_ENV) {
        match raw.parse::<u64>() {
            Ok(seed) => {
                notes.infos.push(format!("Visual seed {seed}"));
                app.insert_resource(VisualRng::from_seed_u64(seed));
            }
            Err(e) => notes.warnings.push(format!("Ignoring {SEED_ENV}={raw}: {e}")),
        }
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Every Second".to_string(),
            resolution: (DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // The star field animates continuously, so keep a steady frame rate while focused
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .insert_resource(notes)
    .add_systems(Startup, log_startup_notes);

    app.run();
}

fn log_startup_notes(notes: Res<StartupNotes>) {
    for msg in &notes.infos {
        info!("{msg}");
    }
    for msg in &notes.warnings {
        warn!("{msg}");
    }
}
