//! Central UI state for the inspector.

use bevy::prelude::*;

use crate::inspection::InspectorFilter;

/// Transient panel state. Reset to defaults whenever the window closes.
#[derive(Resource, Default)]
pub struct InspectorState {
    /// Search text and the "Scripts Only" toggle.
    pub filter: InspectorFilter,
}

/// Tracks the state of the inspector window.
#[derive(Resource, Default)]
pub struct InspectorWindowState {
    /// Entity ID of the inspector window, if it exists.
    pub window_entity: Option<Entity>,
    /// Entity ID of the camera rendering to the inspector window.
    pub camera_entity: Option<Entity>,
    /// Root node of the inspector UI.
    pub root_entity: Option<Entity>,
    /// Whether the inspector window is currently open.
    pub is_open: bool,
}
