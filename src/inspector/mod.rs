//! Inspector UI module.
//!
//! Provides a separate window listing entities, their components and field values
//! in a Bevy application using bevy_ui and bevy_experimental_feathers.

pub mod config;
pub mod panels;
pub mod plugin;
pub mod state;
pub mod widgets;

pub use config::InspectorConfig;
pub use plugin::{
    refresh_inspector_view, DebugInspectorPlugin, InspectorCorePlugin, InspectorSet,
    InspectorWindow,
};
pub use state::{InspectorState, InspectorWindowState};
pub use widgets::{SearchField, SearchFieldPlugin};
