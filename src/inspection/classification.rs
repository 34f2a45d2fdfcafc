//! Splits components into user-authored scripts and engine-provided types.
//!
//! The split is decided once, when a type is registered, by attaching
//! [`ReflectUserScript`] type data. Nothing here looks at type names or
//! module paths.

use bevy::prelude::*;
use bevy::reflect::{FromType, GetTypeRegistration, TypePath, TypeRegistry};
use core::any::TypeId;

/// Type data marking a component type as a user-authored script.
///
/// Attach it with [`RegisterUserScriptExt::register_user_script`], or through the derive:
///
/// ```ignore
/// use debug_inspector::ReflectUserScript;
///
/// #[derive(Component, Reflect)]
/// #[reflect(Component, UserScript)]
/// struct PlayerController {
///     speed: f32,
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ReflectUserScript;

impl<T: Component + Reflect> FromType<T> for ReflectUserScript {
    fn from_type() -> Self {
        ReflectUserScript
    }
}

/// Where a component's type comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentOrigin {
    /// A script written by the user of the engine.
    UserAuthored,
    /// Anything else: engine built-ins, third-party plugins, unregistered types.
    #[default]
    EngineProvided,
}

impl ComponentOrigin {
    /// Classifies a component type.
    ///
    /// A type is user-authored only if it is registered as a reflected component
    /// and carries [`ReflectUserScript`].
    pub fn classify(registry: &TypeRegistry, type_id: Option<TypeId>) -> Self {
        let Some(registration) = type_id.and_then(|id| registry.get(id)) else {
            return Self::EngineProvided;
        };

        if registration.data::<ReflectComponent>().is_some()
            && registration.data::<ReflectUserScript>().is_some()
        {
            Self::UserAuthored
        } else {
            Self::EngineProvided
        }
    }

    pub fn is_user_authored(self) -> bool {
        self == Self::UserAuthored
    }
}

/// Registers a component type as a user-authored script.
///
/// The type must also reflect `Component` (`#[reflect(Component)]`) to be
/// inspectable.
pub trait RegisterUserScriptExt {
    fn register_user_script<T>(&mut self) -> &mut Self
    where
        T: Component + Reflect + TypePath + GetTypeRegistration;
}

impl RegisterUserScriptExt for App {
    fn register_user_script<T>(&mut self) -> &mut Self
    where
        T: Component + Reflect + TypePath + GetTypeRegistration,
    {
        self.register_type::<T>()
            .register_type_data::<T, ReflectUserScript>()
    }
}

impl RegisterUserScriptExt for TypeRegistry {
    fn register_user_script<T>(&mut self) -> &mut Self
    where
        T: Component + Reflect + TypePath + GetTypeRegistration,
    {
        self.register::<T>();
        self.register_type_data::<T, ReflectUserScript>();
        self
    }
}
