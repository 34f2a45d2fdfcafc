//! A debug inspector window for Bevy.
//!
//! Lists every live entity, the components attached to it, and the reflected
//! values of each component's fields. Components registered as user scripts can
//! be singled out with the "Scripts Only" toggle.
//!
//! Built using bevy_feathers, powered by bevy_reflect.

pub mod inspection;
pub mod inspector;

// Re-export the main plugins for convenience
pub use inspection::{ReflectUserScript, RegisterUserScriptExt};
pub use inspector::{DebugInspectorPlugin, InspectorConfig, InspectorCorePlugin};
