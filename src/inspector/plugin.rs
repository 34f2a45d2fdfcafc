//! Inspector plugins, window lifecycle and UI scaffold.

use bevy::camera::RenderTarget;
use bevy::feathers::dark_theme::create_dark_theme;
use bevy::feathers::theme::{ThemeBackgroundColor, UiTheme};
use bevy::feathers::tokens;
use bevy::feathers::FeathersPlugins;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input_focus::InputFocus;
use bevy::picking::hover::HoverMap;
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::window::{WindowRef, WindowResolution};

use super::config::InspectorConfig;
use super::panels::{
    spawn_object_list_panel, spawn_search_bar, sync_object_list, sync_scripts_only_label,
};
use super::state::{InspectorState, InspectorWindowState};
use super::widgets::{sync_search_field, SearchFieldPlugin};
use crate::inspection::{inspect_scene_with_threshold, InspectorInternal, InspectorView};

/// Pixels scrolled per line of mouse wheel movement.
const SCROLL_LINE_HEIGHT: f32 = 20.0;

/// Marker component for the inspector window.
#[derive(Component)]
pub struct InspectorWindow;

/// Marker to indicate UI has been initialized.
#[derive(Component)]
struct InspectorUiInitialized;

/// System sets for organizing inspector systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InspectorSet {
    /// Handle input events.
    Input,
    /// Recompute the inspected view from the live world.
    RefreshView,
    /// Sync UI with state.
    SyncUI,
}

/// Headless part of the inspector: panel state and the per-frame inspection pass.
///
/// Renders nothing. [`DebugInspectorPlugin`] adds it automatically.
pub struct InspectorCorePlugin;

impl Plugin for InspectorCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InspectorState>()
            .init_resource::<InspectorConfig>()
            .init_resource::<InspectorView>()
            .configure_sets(
                Update,
                (
                    InspectorSet::Input,
                    InspectorSet::RefreshView,
                    InspectorSet::SyncUI,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                refresh_inspector_view
                    .run_if(inspector_visible)
                    .in_set(InspectorSet::RefreshView),
            );
    }
}

/// Plugin that adds the inspector window and everything it needs.
pub struct DebugInspectorPlugin;

impl Plugin for DebugInspectorPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<InspectorCorePlugin>() {
            app.add_plugins(InspectorCorePlugin);
        }

        app.add_plugins(FeathersPlugins)
            .add_plugins(SearchFieldPlugin)
            .insert_resource(UiTheme(create_dark_theme()))
            .init_resource::<InspectorWindowState>()
            // Startup
            .add_systems(Startup, open_inspector_on_startup)
            // Update systems
            .add_systems(
                Update,
                (
                    // Input handling
                    (toggle_inspector_window, handle_mouse_wheel_scroll)
                        .in_set(InspectorSet::Input),
                    // UI sync - chain these to avoid resource conflicts
                    (
                        setup_inspector_ui,
                        sync_search_field,
                        sync_scripts_only_label,
                        sync_object_list,
                    )
                        .chain()
                        .in_set(InspectorSet::SyncUI),
                    // Cleanup
                    handle_window_close,
                ),
            );
    }
}

/// Exclusive system running one inspection pass.
///
/// The view resource is only touched when the result differs, so UI systems can
/// rely on change detection.
pub fn refresh_inspector_view(world: &mut World) {
    let filter = world.resource::<InspectorState>().filter.clone();
    let threshold = world.resource::<InspectorConfig>().suggestion_threshold;

    let view = inspect_scene_with_threshold(world, &filter, threshold);
    if world.resource_mut::<InspectorView>().set_if_neq(view) {
        debug!("Inspector view rebuilt");
    }
}

/// Runs the inspection pass headless, or while the window is open.
fn inspector_visible(window_state: Option<Res<InspectorWindowState>>) -> bool {
    window_state.is_none_or(|state| state.is_open)
}

fn open_inspector_on_startup(
    mut commands: Commands,
    mut window_state: ResMut<InspectorWindowState>,
    config: Res<InspectorConfig>,
) {
    if config.open_on_startup {
        open_inspector_window(&mut commands, &mut window_state, &config);
    }
}

fn open_inspector_window(
    commands: &mut Commands,
    window_state: &mut InspectorWindowState,
    config: &InspectorConfig,
) {
    let window_entity = commands
        .spawn((
            Window {
                title: config.window_title.clone(),
                resolution: WindowResolution::new(config.window_size.x, config.window_size.y),
                ..default()
            },
            InspectorWindow,
            InspectorInternal,
        ))
        .id();

    window_state.window_entity = Some(window_entity);
    window_state.is_open = true;

    info!("Inspector window created: {:?}", window_entity);
}

/// Opens the window when closed, and closes it when open.
fn toggle_inspector_window(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<InspectorConfig>,
    mut window_state: ResMut<InspectorWindowState>,
) {
    let Some(toggle_key) = config.toggle_key else {
        return;
    };
    if !keys.just_pressed(toggle_key) {
        return;
    }

    let window_entity = window_state.window_entity;
    match window_entity {
        // Cleanup happens in `handle_window_close` once the window is gone.
        Some(window_entity) => commands.entity(window_entity).despawn(),
        None => open_inspector_window(&mut commands, &mut window_state, &config),
    }
}

/// Sets up the UI scaffold once the window exists.
fn setup_inspector_ui(
    mut commands: Commands,
    mut window_state: ResMut<InspectorWindowState>,
    config: Res<InspectorConfig>,
    inspector_windows: Query<Entity, (With<InspectorWindow>, Without<InspectorUiInitialized>)>,
) {
    let Some(window_entity) = window_state.window_entity else {
        return;
    };

    if inspector_windows.get(window_entity).is_err() {
        return;
    }

    // Mark window as initialized
    commands.entity(window_entity).insert(InspectorUiInitialized);

    let camera_entity = commands
        .spawn((
            Camera2d,
            Camera {
                target: RenderTarget::Window(WindowRef::Entity(window_entity)),
                ..default()
            },
            InspectorInternal,
        ))
        .id();

    let root_entity = commands
        .spawn((
            Node {
                width: Percent(100.0),
                height: Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
            UiTargetCamera(camera_entity),
            InspectorInternal,
        ))
        .with_children(|root| {
            spawn_search_bar(root, &config);
            spawn_object_list_panel(root, &config);
        })
        .id();

    window_state.camera_entity = Some(camera_entity);
    window_state.root_entity = Some(root_entity);

    info!("Inspector UI initialized");
}

/// Despawns the window's camera and UI, and resets panel state and focus, when the window closes.
fn handle_window_close(
    mut commands: Commands,
    mut window_state: ResMut<InspectorWindowState>,
    mut state: ResMut<InspectorState>,
    mut view: ResMut<InspectorView>,
    mut input_focus: ResMut<InputFocus>,
    mut removed_windows: RemovedComponents<Window>,
) {
    for entity in removed_windows.read() {
        if window_state.window_entity != Some(entity) {
            continue;
        }

        let owned = [window_state.camera_entity, window_state.root_entity];
        for owned_entity in owned.into_iter().flatten() {
            if let Ok(mut entity_commands) = commands.get_entity(owned_entity) {
                entity_commands.despawn();
            }
        }

        *window_state = InspectorWindowState::default();
        *state = InspectorState::default();
        *view = InspectorView::default();
        input_focus.clear();
        info!("Inspector window closed");
    }
}

/// Scrolls the nearest scrollable ancestor of whatever the pointer hovers.
fn handle_mouse_wheel_scroll(
    mut mouse_wheel_reader: MessageReader<MouseWheel>,
    hover_map: Res<HoverMap>,
    parents: Query<&ChildOf>,
    mut scrollables: Query<(&mut ScrollPosition, &Node, &ComputedNode)>,
) {
    for event in mouse_wheel_reader.read() {
        let mut delta = -Vec2::new(event.x, event.y);
        if event.unit == MouseScrollUnit::Line {
            delta *= SCROLL_LINE_HEIGHT;
        }

        let hovered = hover_map
            .values()
            .flat_map(|pointer_map| pointer_map.keys().copied());

        'hovered: for hovered_entity in hovered {
            let mut current = hovered_entity;
            loop {
                if let Ok((mut scroll_pos, node, computed)) = scrollables.get_mut(current) {
                    let max = (computed.content_size() - computed.size()).max(Vec2::ZERO)
                        * computed.inverse_scale_factor();
                    if node.overflow.y == OverflowAxis::Scroll && delta.y != 0.0 {
                        scroll_pos.y = (scroll_pos.y + delta.y).clamp(0.0, max.y);
                    }
                    if node.overflow.x == OverflowAxis::Scroll && delta.x != 0.0 {
                        scroll_pos.x = (scroll_pos.x + delta.x).clamp(0.0, max.x);
                    }
                    break 'hovered;
                }

                match parents.get(current) {
                    Ok(child_of) => current = child_of.parent(),
                    Err(_) => break,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::InspectorFilter;

    #[test]
    fn closing_the_window_resets_panel_state_and_focus() {
        let mut app = App::new();
        app.init_resource::<InspectorWindowState>()
            .init_resource::<InspectorState>()
            .init_resource::<InspectorView>()
            .init_resource::<InputFocus>()
            .add_systems(Update, handle_window_close);

        let world = app.world_mut();
        let window = world.spawn((Window::default(), InspectorWindow)).id();
        let root = world.spawn((Node::default(), InspectorInternal)).id();
        let search_field = world.spawn_empty().id();
        {
            let mut window_state = world.resource_mut::<InspectorWindowState>();
            window_state.window_entity = Some(window);
            window_state.root_entity = Some(root);
            window_state.is_open = true;
        }
        world.resource_mut::<InspectorState>().filter = InspectorFilter::new("player", true);
        world.resource_mut::<InputFocus>().set(search_field);
        app.update();

        app.world_mut().despawn(window);
        app.update();

        let world = app.world();
        assert_eq!(world.resource::<InputFocus>().get(), None);
        assert_eq!(world.resource::<InspectorState>().filter, InspectorFilter::default());
        assert_eq!(world.resource::<InspectorWindowState>().window_entity, None);
        assert!(world.get_entity(root).is_err());
    }
}
