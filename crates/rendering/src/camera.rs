use bevy::prelude::*;

/// Background behind the star field.
pub const BACKGROUND: Color = Color::BLACK;

#[derive(Component)]
pub struct SceneCamera;

/// Single 2D camera centered on the aggregate counter.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, SceneCamera));
}
