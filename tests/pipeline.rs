//! Headless runs of the inspection pass inside a Bevy app.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;
use debug_inspector::inspection::{InspectorFilter, InspectorView, ObjectView, SCRIPT_FIELD_NAME};
use debug_inspector::inspector::InspectorState;
use debug_inspector::{InspectorCorePlugin, ReflectUserScript, RegisterUserScriptExt};

#[derive(Component, Reflect)]
#[reflect(Component, UserScript)]
#[allow(non_snake_case)]
struct PlayerController {
    speed: f32,
    grounded: bool,
    m_Script: String,
}

#[derive(Component, Reflect)]
#[reflect(Component)]
struct EnemySpawner {
    target: Option<Entity>,
    interval: f64,
}

fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InspectorCorePlugin))
        .register_type::<PlayerController>()
        .register_user_script::<EnemySpawner>();
    app
}

fn spawn_scene(app: &mut App) -> Entity {
    let world = app.world_mut();
    let player = world
        .spawn((
            Name::new("Player"),
            PlayerController {
                speed: 6.5,
                grounded: true,
                m_Script: "PlayerController".to_string(),
            },
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    world.spawn((Name::new("Camera"), Transform::from_xyz(0.0, 0.0, 10.0)));
    world.spawn((
        Name::new("Enemy Spawner"),
        EnemySpawner {
            target: Some(player),
            interval: 1.25,
        },
        Disabled,
    ));
    player
}

fn set_filter(app: &mut App, search: &str, scripts_only: bool) {
    app.world_mut().resource_mut::<InspectorState>().filter =
        InspectorFilter::new(search, scripts_only);
    app.update();
}

fn view(app: &App) -> InspectorView {
    app.world().resource::<InspectorView>().clone()
}

fn find<'a>(view: &'a InspectorView, name: &str) -> Option<&'a ObjectView> {
    view.objects.iter().find(|object| object.name == name)
}

fn fields(object: &ObjectView, type_name: &str) -> Vec<(String, String)> {
    object
        .components
        .iter()
        .find(|component| component.type_name == type_name)
        .map(|component| {
            component
                .fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn scripts_only_lists_script_owners_and_their_scripts() {
    let mut app = app();
    spawn_scene(&mut app);
    set_filter(&mut app, "", true);

    let view = view(&app);
    let names: Vec<&str> = view.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Player", "Enemy Spawner"]);

    let player = find(&view, "Player").unwrap();
    let types: Vec<&str> = player
        .components
        .iter()
        .map(|c| c.type_name.as_str())
        .collect();
    assert_eq!(types, vec!["PlayerController"]);
    assert_eq!(
        fields(player, "PlayerController"),
        vec![
            ("speed".to_string(), "6.5".to_string()),
            ("grounded".to_string(), "True".to_string()),
        ]
    );
}

#[test]
fn default_filter_lists_everything() {
    let mut app = app();
    spawn_scene(&mut app);
    app.update();

    let view = view(&app);
    let camera = find(&view, "Camera").unwrap();
    assert!(camera.active);
    assert!(camera.components.iter().any(|c| c.type_name == "Transform"));

    let player = find(&view, "Player").unwrap();
    assert!(player.components.iter().any(|c| c.type_name == "Visibility"));
    for component in &player.components {
        assert!(component.fields.iter().all(|f| f.name != SCRIPT_FIELD_NAME));
    }
}

#[test]
fn disabled_objects_are_inspected() {
    let mut app = app();
    spawn_scene(&mut app);
    set_filter(&mut app, "spawner", false);

    let view = view(&app);
    assert_eq!(view.objects.len(), 1);
    let spawner = &view.objects[0];
    assert!(!spawner.active);
    assert_eq!(
        fields(spawner, "EnemySpawner"),
        vec![
            ("target".to_string(), "Player".to_string()),
            ("interval".to_string(), "1.25".to_string()),
        ]
    );
}

#[test]
fn despawned_reference_shows_null() {
    let mut app = app();
    let player = spawn_scene(&mut app);
    app.world_mut().despawn(player);
    set_filter(&mut app, "enemy", false);

    let view = view(&app);
    let spawner = find(&view, "Enemy Spawner").unwrap();
    assert_eq!(
        fields(spawner, "EnemySpawner")[0],
        ("target".to_string(), "null".to_string())
    );
}

#[test]
fn view_follows_the_world_and_is_stable_otherwise() {
    let mut app = app();
    let player = spawn_scene(&mut app);
    set_filter(&mut app, "player", true);
    let first = view(&app);

    app.update();
    assert_eq!(view(&app), first);

    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .grounded = false;
    app.update();

    let updated = view(&app);
    assert_ne!(updated, first);
    assert_eq!(
        fields(&updated.objects[0], "PlayerController")[1],
        ("grounded".to_string(), "False".to_string())
    );
}

#[test]
fn unmatched_search_offers_a_suggestion() {
    let mut app = app();
    spawn_scene(&mut app);
    set_filter(&mut app, "Camrea", false);

    let view = view(&app);
    assert!(view.objects.is_empty());
    assert_eq!(view.suggestion.as_deref(), Some("Camera"));
}
