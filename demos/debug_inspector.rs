//! Demonstrates the debug inspector window.
//!
//! Spawns a small scene with two user scripts, engine components and a
//! disabled entity. Press F12 to close and reopen the inspector.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;
use debug_inspector::{DebugInspectorPlugin, ReflectUserScript, RegisterUserScriptExt};

/// Registered through the derive.
#[derive(Component, Reflect)]
#[reflect(Component, UserScript)]
struct PlayerController {
    speed: f32,
    jump_height: f32,
    grounded: bool,
    nickname: String,
}

/// Registered through the app extension.
#[derive(Component, Reflect)]
#[reflect(Component)]
struct EnemySpawner {
    target: Option<Entity>,
    interval: f64,
    remaining: u32,
    tint: Color,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(DebugInspectorPlugin)
        .register_type::<PlayerController>()
        .register_user_script::<EnemySpawner>()
        .add_systems(Startup, setup)
        .add_systems(Update, bob_player)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Camera")));

    let player = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.2, 0.6, 1.0),
                custom_size: Some(Vec2::new(40.0, 40.0)),
                ..default()
            },
            PlayerController {
                speed: 6.5,
                jump_height: 2.0,
                grounded: true,
                nickname: "Ducky".to_string(),
            },
            Name::new("Player"),
        ))
        .id();

    commands.spawn((
        Sprite {
            color: Color::srgb(0.0, 1.0, 0.0),
            custom_size: Some(Vec2::new(50.0, 50.0)),
            ..default()
        },
        Transform::from_xyz(-150.0, 0.0, 0.0),
        Name::new("Standalone Green"),
    ));

    // Disabled entities still show up, marked inactive
    commands.spawn((
        EnemySpawner {
            target: Some(player),
            interval: 1.5,
            remaining: 3,
            tint: Color::srgb(1.0, 0.0, 0.0),
        },
        Name::new("Enemy Spawner"),
        Disabled,
    ));

    commands.spawn((
        Text::new("Check the Debug Inspector window!\nPress F12 to toggle it."),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        TextFont {
            font_size: 16.0,
            ..default()
        },
    ));
}

fn bob_player(time: Res<Time>, mut players: Query<(&mut Transform, &mut PlayerController)>) {
    for (mut transform, mut controller) in &mut players {
        let height = time.elapsed_secs().sin() * controller.jump_height * 20.0;
        transform.translation.y = height.max(0.0);
        controller.grounded = height <= 0.0;
    }
}
