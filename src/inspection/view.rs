//! The full inspection pass: enumerate, filter, format.

use bevy::prelude::*;

use super::classification::ComponentOrigin;
use super::fields::{format_field_value, ReflectedField};
use super::filter::{suggest_name, InspectorFilter, DEFAULT_SUGGESTION_THRESHOLD};
use super::scene_query::{component_fields, enumerate_scene_objects, SceneObject};

/// Everything the panel displays for one pass, already filtered and formatted.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct InspectorView {
    pub objects: Vec<ObjectView>,
    /// Number of scene objects before filtering.
    pub scene_object_count: usize,
    /// Closest object name when the search matched nothing.
    pub suggestion: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectView {
    pub entity: Entity,
    pub name: String,
    pub active: bool,
    pub components: Vec<ComponentView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentView {
    pub type_name: String,
    pub origin: ComponentOrigin,
    pub fields: Vec<FieldView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub depth: u8,
    pub value: String,
}

impl From<ReflectedField> for FieldView {
    fn from(field: ReflectedField) -> Self {
        Self {
            value: format_field_value(&field.value),
            name: field.name,
            depth: field.depth,
        }
    }
}

/// Runs one inspection pass over the live world.
pub fn inspect_scene(world: &mut World, filter: &InspectorFilter) -> InspectorView {
    inspect_scene_with_threshold(world, filter, DEFAULT_SUGGESTION_THRESHOLD)
}

/// [`inspect_scene`] with an explicit minimum similarity for the search suggestion.
pub fn inspect_scene_with_threshold(
    world: &mut World,
    filter: &InspectorFilter,
    suggestion_threshold: f64,
) -> InspectorView {
    let objects = enumerate_scene_objects(world);

    let type_registry = world
        .get_resource::<AppTypeRegistry>()
        .cloned()
        .unwrap_or_default();
    let registry = type_registry.read();
    let world: &World = world;

    let shown: Vec<ObjectView> = objects
        .iter()
        .filter(|object| filter.object_passes(object))
        .map(|object| ObjectView {
            entity: object.entity,
            name: object.name.clone(),
            active: object.active,
            components: object
                .components
                .iter()
                .filter(|component| filter.component_passes(component))
                .map(|component| ComponentView {
                    type_name: component.type_name.clone(),
                    origin: component.origin,
                    fields: component_fields(world, &registry, object.entity, component)
                        .into_iter()
                        .map(FieldView::from)
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let suggestion = if shown.is_empty() && !filter.search.is_empty() {
        suggest_name(
            objects
                .iter()
                .filter(|object| filter.origin_passes(object))
                .map(|object: &SceneObject| object.name.as_str()),
            &filter.search,
            suggestion_threshold,
        )
        .map(str::to_string)
    } else {
        None
    };

    InspectorView {
        objects: shown,
        scene_object_count: objects.len(),
        suggestion,
    }
}
