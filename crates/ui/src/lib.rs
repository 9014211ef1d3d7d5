use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::phase::ExperiencePhase;
use simulation::reset::handle_reset_requests;
use simulation::FrameSet;

pub mod central_counter;
pub mod chrome;
pub mod finale;
pub mod format;
pub mod intro;
pub mod keybinds;
pub mod label_fit;
pub mod orbit_labels;
pub mod text_measure;
pub mod theme;

use label_fit::LabelFitCache;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<LabelFitCache>()
            .add_systems(Startup, theme::apply_night_theme)
            .add_systems(
                Update,
                keybinds::handle_shortcuts.before(handle_reset_requests),
            )
            .add_systems(
                Update,
                (
                    chrome::draw_header,
                    chrome::draw_footer,
                    intro::draw_intro.run_if(in_state(ExperiencePhase::Intro)),
                    central_counter::draw_central_counter
                        .run_if(in_state(ExperiencePhase::Orbital)),
                    orbit_labels::draw_orbit_labels.run_if(in_state(ExperiencePhase::Orbital)),
                    orbit_labels::draw_hover_tooltip.run_if(in_state(ExperiencePhase::Orbital)),
                    finale::draw_finale.run_if(in_state(ExperiencePhase::Finale)),
                )
                    .chain()
                    .after(FrameSet::Visual),
            );
    }
}
