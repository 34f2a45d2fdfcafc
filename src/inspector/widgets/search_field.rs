//! Search field widget - a click-to-focus, single-line text input.
//!
//! Click the field to focus it, then type. Backspace deletes the last character,
//! Escape clears the search, Enter leaves the field.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::observer::On;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::input_focus::{FocusedInput, InputFocus};
use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;
use bevy::ui::Val::*;

use crate::inspector::config::InspectorConfig;
use crate::inspector::state::InspectorState;

/// Shown in an empty, unfocused field.
const PLACEHOLDER: &str = "Search objects...";

/// Marker for the search field's box. Receives focus and keyboard input.
#[derive(Component)]
pub struct SearchField;

/// Marker for the text inside the search field.
#[derive(Component)]
pub struct SearchFieldText;

/// Spawns a search field as a child of `parent`.
pub fn spawn_search_field(parent: &mut ChildSpawnerCommands<'_>, config: &InspectorConfig) {
    parent
        .spawn((
            Node {
                flex_grow: 1.0,
                min_width: Px(120.0),
                padding: UiRect::axes(Px(6.0), Px(3.0)),
                border: UiRect::all(Px(1.0)),
                ..default()
            },
            BorderColor::all(config.border_color),
            BackgroundColor(Color::srgba(0.15, 0.15, 0.15, 1.0)),
            Interaction::default(),
            SearchField,
        ))
        .with_child((
            Text::new(PLACEHOLDER),
            TextFont {
                font_size: config.body_font_size,
                ..default()
            },
            TextColor(config.muted_text_color),
            SearchFieldText,
        ));
}

/// What the field shows: the text and whether it is the placeholder.
pub fn search_field_display(search: &str, focused: bool) -> (String, bool) {
    if focused {
        // Cursor indicator
        (format!("{search}|"), false)
    } else if search.is_empty() {
        (PLACEHOLDER.to_string(), true)
    } else {
        (search.to_string(), false)
    }
}

/// Applies one key press to the search text. Returns `true` when the field should lose focus.
pub fn apply_search_key(search: &mut String, key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Escape => {
            search.clear();
            true
        }
        Key::Backspace => {
            search.pop();
            false
        }
        Key::Space => {
            search.push(' ');
            false
        }
        Key::Character(c) => {
            if !c.chars().any(char::is_control) {
                search.push_str(c);
            }
            false
        }
        _ => false,
    }
}

// Observer: focus the field on click
fn search_field_on_click(
    mut click: On<Pointer<Click>>,
    fields: Query<(), With<SearchField>>,
    mut input_focus: ResMut<InputFocus>,
) {
    if fields.contains(click.entity) {
        click.propagate(false);
        input_focus.set(click.entity);
    }
}

// Observer: handle keyboard input while the field has focus
fn search_field_on_keyboard_input(
    mut trigger: On<FocusedInput<KeyboardInput>>,
    fields: Query<(), With<SearchField>>,
    mut state: ResMut<InspectorState>,
    mut input_focus: ResMut<InputFocus>,
) {
    // Only process key presses
    if trigger.input.state != ButtonState::Pressed {
        return;
    }

    if !fields.contains(trigger.focused_entity) {
        return;
    }
    trigger.propagate(false);

    let mut search = state.filter.search.clone();
    let leave = apply_search_key(&mut search, &trigger.input.logical_key);
    if search != state.filter.search {
        state.filter.search = search;
    }
    if leave {
        input_focus.clear();
    }
}

/// Keeps the field's text in line with the search text and focus.
pub fn sync_search_field(
    state: Res<InspectorState>,
    input_focus: Res<InputFocus>,
    config: Res<InspectorConfig>,
    fields: Query<(Entity, &Children), With<SearchField>>,
    mut texts: Query<(&mut Text, &mut TextColor), With<SearchFieldText>>,
) {
    for (field, children) in &fields {
        let focused = input_focus.get() == Some(field);
        let (label, is_placeholder) = search_field_display(&state.filter.search, focused);
        let color = if is_placeholder {
            config.muted_text_color
        } else {
            Color::WHITE
        };

        for child in children.iter() {
            if let Ok((mut text, mut text_color)) = texts.get_mut(child) {
                if text.0 != label {
                    text.0 = label.clone();
                }
                if text_color.0 != color {
                    text_color.0 = color;
                }
            }
        }
    }
}

/// Plugin that adds the search field observers.
pub struct SearchFieldPlugin;

impl Plugin for SearchFieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(search_field_on_click)
            .add_observer(search_field_on_keyboard_input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_placeholder_only_when_idle_and_empty() {
        assert_eq!(
            search_field_display("", false),
            (PLACEHOLDER.to_string(), true)
        );
        assert_eq!(search_field_display("", true), ("|".to_string(), false));
        assert_eq!(
            search_field_display("cam", false),
            ("cam".to_string(), false)
        );
        assert_eq!(
            search_field_display("cam", true),
            ("cam|".to_string(), false)
        );
    }

    #[test]
    fn keys_edit_the_search() {
        let mut search = String::new();
        assert!(!apply_search_key(&mut search, &Key::Character("P".into())));
        assert!(!apply_search_key(&mut search, &Key::Character("l".into())));
        assert!(!apply_search_key(&mut search, &Key::Space));
        assert_eq!(search, "Pl ");

        assert!(!apply_search_key(&mut search, &Key::Backspace));
        assert_eq!(search, "Pl");

        assert!(!apply_search_key(&mut search, &Key::Character("\u{8}".into())));
        assert_eq!(search, "Pl");

        assert!(!apply_search_key(&mut search, &Key::ArrowLeft));
        assert_eq!(search, "Pl");

        assert!(apply_search_key(&mut search, &Key::Enter));
        assert_eq!(search, "Pl");

        assert!(apply_search_key(&mut search, &Key::Escape));
        assert!(search.is_empty());
    }
}
