//! Looping ambient track that starts on the first click or key press.
//!
//! The track is loaded at startup from `audio/ambient-space.ogg` under the
//! asset root. If the file is missing the experience runs silently and a
//! single warning is logged.

use bevy::audio::Volume;
use bevy::prelude::*;

pub const AMBIENT_TRACK_PATH: &str = "audio/ambient-space.ogg";
pub const AMBIENT_VOLUME: f32 = 0.3;

#[derive(Component)]
pub struct AmbientTrack;

#[derive(Resource, Debug, Default)]
pub struct AmbientAudioState {
    handle: Option<Handle<AudioSource>>,
    interacted: bool,
    started: bool,
    gave_up: bool,
}

pub fn load_ambient_track(asset_server: Res<AssetServer>, mut state: ResMut<AmbientAudioState>) {
    state.handle = Some(asset_server.load(AMBIENT_TRACK_PATH));
}

pub fn start_ambient_on_interaction(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    asset_server: Res<AssetServer>,
    mut state: ResMut<AmbientAudioState>,
) {
    if state.started || state.gave_up {
        return;
    }
    if keys.get_just_pressed().next().is_some() || mouse.get_just_pressed().next().is_some() {
        state.interacted = true;
    }
    if !state.interacted {
        return;
    }
    let Some(handle) = state.handle.clone() else {
        return;
    };

    if asset_server.is_loaded_with_dependencies(&handle) {
        commands.spawn((
            AudioPlayer::new(handle),
            PlaybackSettings::LOOP.with_volume(Volume::new(AMBIENT_VOLUME)),
            AmbientTrack,
        ));
        state.started = true;
        info!("Ambient audio started");
    } else if asset_server
        .get_load_state(&handle)
        .is_some_and(|s| s.is_failed())
    {
        warn!("Ambient track {AMBIENT_TRACK_PATH} could not be loaded; continuing without audio");
        state.gave_up = true;
    }
}
