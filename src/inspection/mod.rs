//! Headless scene inspection: enumerating objects, filtering them and formatting their fields.
//!
//! Nothing in here touches the UI, so the whole pass can run against any `World`.

pub mod classification;
pub mod fields;
pub mod filter;
pub mod reflection_tools;
pub mod scene_query;
pub mod view;

pub use classification::{ComponentOrigin, ReflectUserScript, RegisterUserScriptExt};
pub use fields::{
    format_field_value, walk_fields, FieldKind, FieldValue, FloatValue, IntegerValue,
    ReflectedField, SCRIPT_FIELD_NAME,
};
pub use filter::{name_matches, suggest_name, InspectorFilter, DEFAULT_SUGGESTION_THRESHOLD};
pub use reflection_tools::{get_reflected_component_ref, ReflectionError};
pub use scene_query::{
    component_fields, enumerate_scene_objects, list_components, object_display_name,
    InspectorInternal, SceneComponent, SceneObject,
};
pub use view::{
    inspect_scene, inspect_scene_with_threshold, ComponentView, FieldView, InspectorView,
    ObjectView,
};
