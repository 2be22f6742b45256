//! The game camera. Frames a fixed area of world space regardless of
//! window size and persists across all states.

use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// World units visible from the bottom to the top of the window.
pub const VIEW_HEIGHT: f32 = 16.0;

pub fn plugin(app: &mut App) {
    app.register_type::<MainCamera>();
    app.add_systems(Startup, spawn_camera);
}

/// Marker for the main 2D camera.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
