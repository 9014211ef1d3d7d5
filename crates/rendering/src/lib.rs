use bevy::prelude::*;

pub mod ambient_audio;
pub mod camera;
pub mod egui_input_guard;
pub mod guide_rings;
pub mod hover;
pub mod item_animation;
pub mod orbit_render;
pub mod palette;
pub mod starfield;
pub mod view;

use ambient_audio::AmbientAudioState;
use hover::HoveredItem;
use item_animation::ItemAnimations;
use simulation::phase::ExperiencePhase;
use simulation::FrameSet;
use view::ViewTransform;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(camera::BACKGROUND))
            .init_resource::<ViewTransform>()
            .init_resource::<HoveredItem>()
            .init_resource::<ItemAnimations>()
            .init_resource::<AmbientAudioState>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    orbit_render::setup_disc_assets,
                    ambient_audio::load_ambient_track,
                ),
            )
            .add_systems(
                Update,
                (view::update_view_transform, hover::detect_item_hover)
                    .chain()
                    .before(FrameSet::Pointer),
            )
            .add_systems(
                Update,
                (
                    item_animation::start_count_pulses,
                    item_animation::step_item_animations,
                    orbit_render::sync_item_discs,
                    orbit_render::draw_item_outlines,
                    starfield::draw_starfield,
                    guide_rings::draw_guide_rings.run_if(in_state(ExperiencePhase::Orbital)),
                )
                    .chain()
                    .in_set(FrameSet::Visual),
            )
            .add_systems(Update, ambient_audio::start_ambient_on_interaction);
    }
}
