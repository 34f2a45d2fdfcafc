//! Enumerates the live scene: every entity, its components, and their reflected fields.

use bevy::ecs::entity_disabling::Disabled;
use bevy::ecs::observer::Observer;
use bevy::prelude::*;
use bevy::reflect::TypeRegistry;
use core::any::TypeId;

use super::classification::ComponentOrigin;
use super::fields::{walk_fields, ReflectedField};
use super::reflection_tools::get_reflected_component_ref;

/// Marker for entities owned by the inspector itself (its window, camera and UI root).
///
/// Marked entities and all of their descendants are left out of the scene listing.
#[derive(Component, Default)]
pub struct InspectorInternal;

/// A live scene object, captured for one inspection pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub entity: Entity,
    pub name: String,
    /// `false` when the entity is disabled.
    pub active: bool,
    pub components: Vec<SceneComponent>,
}

impl SceneObject {
    /// Whether any attached component is a user-authored script.
    pub fn has_user_script(&self) -> bool {
        self.components
            .iter()
            .any(|component| component.origin.is_user_authored())
    }
}

/// A component attached to a [`SceneObject`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneComponent {
    /// Short type name, e.g. `Transform`.
    pub type_name: String,
    pub type_id: Option<TypeId>,
    pub origin: ComponentOrigin,
}

/// Returns every scene object in the world, disabled ones included, ordered by entity index.
///
/// Inspector-owned entities and observers are skipped; no other filtering is applied.
pub fn enumerate_scene_objects(world: &mut World) -> Vec<SceneObject> {
    let mut query = world.query::<(Entity, Has<Disabled>, Has<Observer>)>();
    let mut candidates: Vec<(Entity, bool)> = query
        .iter(world)
        .filter(|(_, _, is_observer)| !is_observer)
        .map(|(entity, disabled, _)| (entity, !disabled))
        .collect();
    candidates.retain(|(entity, _)| !is_inspector_owned(world, *entity));
    candidates.sort_by_key(|(entity, _)| entity.index());

    let type_registry = world
        .get_resource::<AppTypeRegistry>()
        .cloned()
        .unwrap_or_default();
    let registry = type_registry.read();

    candidates
        .into_iter()
        .map(|(entity, active)| SceneObject {
            entity,
            name: object_display_name(world, entity),
            active,
            components: list_components(world, &registry, entity),
        })
        .collect()
}

/// Lists the components attached to `entity`, in the order the ECS stores them.
pub fn list_components(
    world: &World,
    registry: &TypeRegistry,
    entity: Entity,
) -> Vec<SceneComponent> {
    let Ok(infos) = world.inspect_entity(entity) else {
        return Vec::new();
    };

    infos
        .map(|info| {
            let type_id = info.type_id();
            let type_name = type_id
                .and_then(|id| registry.get(id))
                .map(|registration| ShortName::from(registration.type_info().type_path()).to_string())
                .unwrap_or_else(|| info.name().shortname().to_string());

            SceneComponent {
                type_name,
                type_id,
                origin: ComponentOrigin::classify(registry, type_id),
            }
        })
        .collect()
}

/// Reads the visible fields of one component.
///
/// Components that cannot be reflected yield no fields.
pub fn component_fields(
    world: &World,
    registry: &TypeRegistry,
    entity: Entity,
    component: &SceneComponent,
) -> Vec<ReflectedField> {
    let Some(type_id) = component.type_id else {
        return Vec::new();
    };

    match get_reflected_component_ref(world, registry, entity, type_id) {
        Ok(reflected) => walk_fields(reflected.as_partial_reflect(), &|target| {
            resolve_reference(world, target)
        }),
        Err(err) => {
            trace!("No reflected data for `{}`: {err}", component.type_name);
            Vec::new()
        }
    }
}

/// The name shown for an entity: its `Name`, or its id.
pub fn object_display_name(world: &World, entity: Entity) -> String {
    world
        .get::<Name>(entity)
        .map(|name| name.as_str().to_string())
        .unwrap_or_else(|| format!("Entity {entity}"))
}

/// Display string for the target of an entity reference, `None` if it is not alive.
fn resolve_reference(world: &World, target: Entity) -> Option<String> {
    world
        .get_entity(target)
        .ok()
        .map(|_| object_display_name(world, target))
}

fn is_inspector_owned(world: &World, entity: Entity) -> bool {
    let mut current = entity;
    loop {
        if world.get::<InspectorInternal>(current).is_some() {
            return true;
        }
        match world.get::<ChildOf>(current) {
            Some(child_of) => current = child_of.parent(),
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::classification::RegisterUserScriptExt;

    #[derive(Component, Reflect)]
    #[reflect(Component)]
    struct Follower {
        leader: Entity,
        spacing: f32,
    }

    fn world_with_registry() -> World {
        let mut world = World::new();
        let type_registry = AppTypeRegistry::default();
        {
            let mut registry = type_registry.write();
            registry.register_user_script::<Follower>();
            registry.register::<Name>();
        }
        world.insert_resource(type_registry);
        world
    }

    #[test]
    fn empty_world_has_no_objects() {
        let mut world = World::new();
        assert!(enumerate_scene_objects(&mut world).is_empty());
    }

    #[test]
    fn includes_disabled_objects() {
        let mut world = world_with_registry();
        world.spawn(Name::new("Visible"));
        world.spawn((Name::new("Hidden"), Disabled));

        let objects = enumerate_scene_objects(&mut world);
        let summary: Vec<(&str, bool)> = objects
            .iter()
            .map(|object| (object.name.as_str(), object.active))
            .collect();
        assert_eq!(summary, vec![("Visible", true), ("Hidden", false)]);
    }

    #[test]
    fn skips_inspector_entities_and_their_children() {
        let mut world = world_with_registry();
        world
            .spawn((Name::new("Inspector Root"), InspectorInternal))
            .with_children(|root| {
                root.spawn(Name::new("Inspector Row"));
            });
        world.spawn(Name::new("Scene Object"));

        let names: Vec<String> = enumerate_scene_objects(&mut world)
            .into_iter()
            .map(|object| object.name)
            .collect();
        assert_eq!(names, vec!["Scene Object".to_string()]);
    }

    #[test]
    fn observers_are_not_scene_objects() {
        use bevy::ecs::observer::On;

        #[derive(Event)]
        struct Ping;

        let mut world = world_with_registry();
        let observer = world.add_observer(|_: On<Ping>| {}).id();
        world.spawn(Name::new("Scene Object"));

        let objects = enumerate_scene_objects(&mut world);
        assert!(objects.iter().all(|object| object.entity != observer));
        let names: Vec<&str> = objects.iter().map(|object| object.name.as_str()).collect();
        assert_eq!(names, vec!["Scene Object"]);
    }

    #[test]
    fn unnamed_objects_use_their_id() {
        let mut world = world_with_registry();
        let entity = world.spawn_empty().id();

        let objects = enumerate_scene_objects(&mut world);
        assert_eq!(objects[0].name, format!("Entity {entity}"));
        assert!(objects[0].components.is_empty());
    }

    #[test]
    fn lists_and_reads_components() {
        let mut world = world_with_registry();
        let leader = world.spawn(Name::new("Leader")).id();
        let follower = world
            .spawn((
                Name::new("Follower"),
                Follower {
                    leader,
                    spacing: 2.0,
                },
            ))
            .id();

        let objects = enumerate_scene_objects(&mut world);
        let object = objects
            .iter()
            .find(|object| object.entity == follower)
            .unwrap();
        assert!(object.has_user_script());

        let script = object
            .components
            .iter()
            .find(|component| component.type_name == "Follower")
            .unwrap();
        assert_eq!(script.origin, ComponentOrigin::UserAuthored);

        let name = object
            .components
            .iter()
            .find(|component| component.type_name == "Name")
            .unwrap();
        assert_eq!(name.origin, ComponentOrigin::EngineProvided);

        let type_registry = world.resource::<AppTypeRegistry>().clone();
        let registry = type_registry.read();
        let fields: Vec<(String, String)> = component_fields(&world, &registry, follower, script)
            .into_iter()
            .map(|field| (field.name, field.value.to_string()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("leader".to_string(), "Leader".to_string()),
                ("spacing".to_string(), "2".to_string()),
            ]
        );

        world.despawn(leader);
        let fields = component_fields(&world, &registry, follower, script);
        assert_eq!(fields[0].value.to_string(), "null");
    }
}
