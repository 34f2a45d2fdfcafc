//! Scrollable list of inspected objects, one card per object.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::feathers::theme::ThemeBackgroundColor;
use bevy::feathers::tokens;
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::ui_widgets::{ControlOrientation, CoreScrollbarThumb, Scrollbar};

use crate::inspection::{FieldView, InspectorFilter, InspectorView, ObjectView};
use crate::inspector::config::InspectorConfig;
use crate::inspector::state::InspectorState;

/// Marker component for the scrollable list content.
#[derive(Component)]
pub struct ObjectListContent;

/// Marker for an object card.
#[derive(Component)]
pub struct ObjectCard(pub Entity);

/// Marker for the message shown when nothing is listed.
#[derive(Component)]
pub struct EmptyStateMessage;

/// Header line of an object card.
pub fn object_header(object: &ObjectView) -> String {
    if object.active {
        format!("Object Name: {}", object.name)
    } else {
        format!("Object Name: {} (inactive)", object.name)
    }
}

/// Message to show instead of the list, if the list is empty.
pub fn empty_state_message(view: &InspectorView, filter: &InspectorFilter) -> Option<String> {
    if !view.objects.is_empty() {
        return None;
    }
    if view.scene_object_count == 0 {
        return Some("Scene is empty".to_string());
    }
    if !filter.search.is_empty() {
        let message = format!("No objects match \"{}\"", filter.search);
        return Some(match &view.suggestion {
            Some(suggestion) => format!("{message}. Did you mean \"{suggestion}\"?"),
            None => message,
        });
    }
    if filter.scripts_only {
        return Some("No objects with user scripts".to_string());
    }
    None
}

/// Rebuilds the list when the view or the filter changes.
pub fn sync_object_list(
    mut commands: Commands,
    view: Res<InspectorView>,
    state: Res<InspectorState>,
    config: Res<InspectorConfig>,
    list_content: Query<Entity, With<ObjectListContent>>,
    new_content: Query<(), Added<ObjectListContent>>,
    existing_rows: Query<Entity, Or<(With<ObjectCard>, With<EmptyStateMessage>)>>,
) {
    if !view.is_changed() && !state.is_changed() && new_content.is_empty() {
        return;
    }

    let Some(content_entity) = list_content.iter().next() else {
        return;
    };

    // Clear existing rows
    for row_entity in existing_rows.iter() {
        commands.entity(row_entity).despawn();
    }

    commands.entity(content_entity).with_children(|list| {
        if let Some(message) = empty_state_message(&view, &state.filter) {
            list.spawn((
                Text::new(message),
                TextFont {
                    font_size: config.body_font_size,
                    ..default()
                },
                TextColor(config.muted_text_color),
                Node {
                    padding: UiRect::all(Px(16.0)),
                    ..default()
                },
                EmptyStateMessage,
            ));
            return;
        }

        for object in &view.objects {
            spawn_object_card(list, object, &config);
        }
    });
}

fn spawn_object_card(
    parent: &mut ChildSpawnerCommands<'_>,
    object: &ObjectView,
    config: &InspectorConfig,
) {
    let small_font = TextFont {
        font_size: config.small_font_size,
        ..default()
    };

    parent
        .spawn((
            Node {
                width: Percent(100.0),
                padding: config.panel_padding,
                margin: UiRect::bottom(config.item_gap),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                border: UiRect::all(Px(1.0)),
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
            BorderColor::all(config.border_color),
            ObjectCard(object.entity),
        ))
        .with_children(|card| {
            card.spawn((
                Text::new(object_header(object)),
                TextFont {
                    font_size: config.title_font_size,
                    ..default()
                },
                TextColor(if object.active {
                    Color::WHITE
                } else {
                    config.inactive_text_color
                }),
                Node {
                    margin: UiRect::bottom(Px(4.0)),
                    ..default()
                },
            ));

            for component in &object.components {
                card.spawn((
                    Text::new(format!("Script Name: {}", component.type_name)),
                    TextFont {
                        font_size: config.body_font_size,
                        ..default()
                    },
                    TextColor(Color::srgba(0.9, 0.9, 0.9, 1.0)),
                    Node {
                        margin: UiRect::vertical(Px(4.0)),
                        ..default()
                    },
                ));

                if component.fields.is_empty() {
                    card.spawn((
                        Text::new("<no reflected data>"),
                        small_font.clone(),
                        TextColor(config.muted_text_color),
                    ));
                }

                for field in &component.fields {
                    spawn_field_row(card, field, &small_font, config);
                }
            }
        });
}

fn spawn_field_row(
    parent: &mut ChildSpawnerCommands<'_>,
    field: &FieldView,
    font: &TextFont,
    config: &InspectorConfig,
) {
    parent
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            column_gap: config.column_gap,
            margin: UiRect::left(Px(field.depth as f32 * config.field_indent)),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(format!("Variable Name: {}", field.name)),
                font.clone(),
                TextColor(config.field_name_color),
            ));
            row.spawn((
                Text::new(format!("Value: {}", field.value)),
                font.clone(),
                TextColor(config.muted_text_color),
            ));
        });
}

/// Spawns the scrollable list structure.
pub fn spawn_object_list_panel(parent: &mut ChildSpawnerCommands<'_>, config: &InspectorConfig) {
    // Scrollable area with scrollbar - use Grid layout
    let scrollbar_width = 8.0;
    parent
        .spawn(Node {
            width: Percent(100.0),
            flex_grow: 1.0,
            min_height: Px(0.0),
            display: Display::Grid,
            grid_template_columns: vec![GridTrack::fr(1.0), GridTrack::px(scrollbar_width)],
            ..default()
        })
        .with_children(|scroll_area| {
            let content_id = scroll_area
                .spawn((
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: config.item_gap,
                        padding: config.panel_padding,
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                    ScrollPosition::default(),
                    ObjectListContent,
                ))
                .id();

            scroll_area
                .spawn((
                    Scrollbar {
                        target: content_id,
                        orientation: ControlOrientation::Vertical,
                        min_thumb_length: 20.0,
                    },
                    Node {
                        width: Px(scrollbar_width),
                        height: Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.15, 0.15, 0.15, 0.5)),
                ))
                .with_children(|sb| {
                    sb.spawn((
                        CoreScrollbarThumb,
                        Node {
                            width: Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.5, 0.5, 0.5, 0.8)),
                    ));
                });
        });
}
