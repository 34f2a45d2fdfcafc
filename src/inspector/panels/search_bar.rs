//! Search bar across the top of the inspector: search field and "Scripts Only" toggle.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::observer::On;
use bevy::feathers::controls::{button, ButtonProps};
use bevy::input_focus::InputFocus;
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::ui_widgets::{observe, Activate};

use crate::inspector::config::InspectorConfig;
use crate::inspector::state::InspectorState;
use crate::inspector::widgets::spawn_search_field;

/// Marker component for the search bar container.
#[derive(Component)]
pub struct SearchBar;

/// Marker for the "Scripts Only" toggle button.
#[derive(Component)]
pub struct ScriptsOnlyToggle;

/// Marker for the toggle's label text.
#[derive(Component)]
pub struct ScriptsOnlyLabel;

/// Label for the "Scripts Only" toggle in the given state.
pub fn scripts_only_label(enabled: bool) -> &'static str {
    if enabled {
        "[x] Scripts Only"
    } else {
        "[ ] Scripts Only"
    }
}

/// Observer for toggle clicks.
fn on_scripts_only_toggle(
    activate: On<Activate>,
    mut state: ResMut<InspectorState>,
    mut input_focus: ResMut<InputFocus>,
    toggles: Query<(), With<ScriptsOnlyToggle>>,
) {
    if toggles.contains(activate.entity) {
        state.filter.scripts_only = !state.filter.scripts_only;
        input_focus.clear();
    }
}

/// Keeps the toggle label in line with the filter.
pub fn sync_scripts_only_label(
    state: Res<InspectorState>,
    mut labels: Query<&mut Text, With<ScriptsOnlyLabel>>,
) {
    let label = scripts_only_label(state.filter.scripts_only);
    for mut text in &mut labels {
        if text.0 != label {
            text.0 = label.to_string();
        }
    }
}

/// Spawns the search bar.
pub fn spawn_search_bar(parent: &mut ChildSpawnerCommands<'_>, config: &InspectorConfig) {
    parent
        .spawn((
            Node {
                width: Percent(100.0),
                height: config.search_bar_height,
                display: Display::Flex,
                align_items: AlignItems::Center,
                padding: config.panel_padding,
                column_gap: config.column_gap,
                border: UiRect::bottom(Px(1.0)),
                ..default()
            },
            BorderColor::all(config.border_color),
            SearchBar,
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new("Search:"),
                TextFont {
                    font_size: config.title_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            spawn_search_field(bar, config);

            bar.spawn((
                button(
                    ButtonProps::default(),
                    ScriptsOnlyToggle,
                    bevy::prelude::Spawn((
                        Text::new(scripts_only_label(false)),
                        TextFont {
                            font_size: config.body_font_size,
                            ..default()
                        },
                        ScriptsOnlyLabel,
                    )),
                ),
                observe(on_scripts_only_toggle),
            ));
        });
}
