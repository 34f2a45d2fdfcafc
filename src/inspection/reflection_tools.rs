//! Helpers for reaching reflected component data through the type registry.

use bevy::prelude::*;
use bevy::reflect::TypeRegistry;
use core::any::TypeId;
use thiserror::Error;

/// Reasons a component could not be read through reflection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectionError {
    /// The entity was despawned or never existed.
    #[error("entity {0} does not exist")]
    EntityNotFound(Entity),
    /// The component type was never registered with the `AppTypeRegistry`.
    #[error("type {0:?} is not registered in the type registry")]
    TypeNotRegistered(TypeId),
    /// The type is registered, but not with `#[reflect(Component)]`.
    #[error("`{0}` is registered without `ReflectComponent`")]
    MissingReflectComponent(&'static str),
    /// The entity does not carry the component.
    #[error("entity {entity} has no `{type_path}` component")]
    ComponentNotPresent {
        entity: Entity,
        type_path: &'static str,
    },
}

/// Returns the reflected value of the component with `type_id` on `entity`.
pub fn get_reflected_component_ref<'w>(
    world: &'w World,
    registry: &TypeRegistry,
    entity: Entity,
    type_id: TypeId,
) -> Result<&'w dyn Reflect, ReflectionError> {
    let entity_ref = world
        .get_entity(entity)
        .map_err(|_| ReflectionError::EntityNotFound(entity))?;
    let registration = registry
        .get(type_id)
        .ok_or(ReflectionError::TypeNotRegistered(type_id))?;
    let type_path = registration.type_info().type_path();
    let reflect_component = registration
        .data::<ReflectComponent>()
        .ok_or(ReflectionError::MissingReflectComponent(type_path))?;

    reflect_component
        .reflect(entity_ref)
        .ok_or(ReflectionError::ComponentNotPresent { entity, type_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component, Reflect)]
    #[reflect(Component)]
    struct Health(i32);

    #[derive(Component, Reflect)]
    struct NotReflectedAsComponent;

    #[derive(Component)]
    struct Unregistered;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::default();
        registry.register::<Health>();
        registry.register::<NotReflectedAsComponent>();
        registry
    }

    #[test]
    fn reads_registered_component() {
        let mut world = World::new();
        let entity = world.spawn(Health(7)).id();
        let registry = registry();

        let reflected =
            get_reflected_component_ref(&world, &registry, entity, TypeId::of::<Health>()).unwrap();
        assert_eq!(reflected.downcast_ref::<Health>().map(|h| h.0), Some(7));
    }

    #[test]
    fn reports_each_failure() {
        let mut world = World::new();
        let entity = world.spawn((NotReflectedAsComponent, Unregistered)).id();
        let registry = registry();

        assert_eq!(
            get_reflected_component_ref(&world, &registry, entity, TypeId::of::<Unregistered>())
                .err(),
            Some(ReflectionError::TypeNotRegistered(TypeId::of::<Unregistered>()))
        );
        assert!(matches!(
            get_reflected_component_ref(
                &world,
                &registry,
                entity,
                TypeId::of::<NotReflectedAsComponent>()
            ),
            Err(ReflectionError::MissingReflectComponent(_))
        ));
        assert!(matches!(
            get_reflected_component_ref(&world, &registry, entity, TypeId::of::<Health>()),
            Err(ReflectionError::ComponentNotPresent { .. })
        ));

        world.despawn(entity);
        assert_eq!(
            get_reflected_component_ref(&world, &registry, entity, TypeId::of::<Health>()).err(),
            Some(ReflectionError::EntityNotFound(entity))
        );
    }
}
