//! Configuration for the inspector window.

use bevy::prelude::*;
use bevy::ui::Val;

use crate::inspection::DEFAULT_SUGGESTION_THRESHOLD;

/// Configuration for the inspector window, its layout and styling.
///
/// Insert your own copy of this resource to override the defaults.
#[derive(Resource, Clone)]
pub struct InspectorConfig {
    // Window
    pub window_title: String,
    /// Window size in logical pixels.
    pub window_size: UVec2,
    /// Open the window as soon as the app starts.
    pub open_on_startup: bool,
    /// Key that opens and closes the window. `None` disables the shortcut.
    pub toggle_key: Option<KeyCode>,

    // Layout
    /// Height of the search bar.
    pub search_bar_height: Val,
    /// Padding inside panels and cards.
    pub panel_padding: UiRect,
    /// Gap between items in lists.
    pub item_gap: Val,
    /// Gap between columns.
    pub column_gap: Val,
    /// Horizontal indent per level of field nesting, in pixels.
    pub field_indent: f32,

    // Typography
    pub title_font_size: f32,
    pub body_font_size: f32,
    pub small_font_size: f32,

    // Colors (for non-themed elements)
    pub border_color: Color,
    pub muted_text_color: Color,
    pub field_name_color: Color,
    /// Header color for disabled objects.
    pub inactive_text_color: Color,

    /// Minimum similarity (0..=1) for the "did you mean" hint.
    pub suggestion_threshold: f64,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            // Window
            window_title: "Debug Inspector".to_string(),
            window_size: UVec2::new(640, 720),
            open_on_startup: true,
            toggle_key: Some(KeyCode::F12),

            // Layout
            search_bar_height: Val::Px(40.0),
            panel_padding: UiRect::all(Val::Px(8.0)),
            item_gap: Val::Px(4.0),
            column_gap: Val::Px(8.0),
            field_indent: 12.0,

            // Typography
            title_font_size: 15.0,
            body_font_size: 13.0,
            small_font_size: 11.0,

            // Colors
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            muted_text_color: Color::srgba(0.6, 0.6, 0.6, 1.0),
            field_name_color: Color::srgba(0.6, 0.8, 1.0, 1.0),
            inactive_text_color: Color::srgba(0.7, 0.6, 0.4, 1.0),

            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}
