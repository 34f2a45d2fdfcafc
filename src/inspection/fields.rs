//! Walking a reflected component's fields and turning their values into display strings.

use std::borrow::Cow;
use std::fmt;

use bevy::color::{LinearRgba, Srgba};
use bevy::prelude::*;
use bevy::reflect::ReflectRef;

/// Back-reference a script carries to its own type definition. Never displayed.
pub const SCRIPT_FIELD_NAME: &str = "m_Script";

/// Display string for a reference that points at nothing.
pub const NULL_REFERENCE: &str = "null";

/// Display string for any value kind the formatter does not recognize.
pub const UNKNOWN_VALUE: &str = "<unknown>";

/// The fixed set of value kinds the formatter knows how to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Boolean,
    Float,
    String,
    Color,
    ObjectReference,
    Unrecognized,
}

/// An integer value. Unsigned values keep their own variant so `u128` fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerValue {
    Signed(i128),
    Unsigned(u128),
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerValue::Signed(value) => fmt::Display::fmt(value, f),
            IntegerValue::Unsigned(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// A floating-point value, kept at its declared width so it prints the way it is stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FloatValue {
    Single(f32),
    Double(f64),
}

impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatValue::Single(value) => fmt::Display::fmt(value, f),
            FloatValue::Double(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// A field value extracted through its typed accessor.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Integer(IntegerValue),
    Boolean(bool),
    Float(FloatValue),
    String(String),
    Color(Color),
    /// Display string of the referenced object, or `None` for a null reference.
    ObjectReference(Option<String>),
    Unrecognized,
}

impl FieldValue {
    /// Extracts a value from reflected data.
    ///
    /// `resolve` turns an entity reference into the referent's display string,
    /// returning `None` when the entity is not alive.
    pub fn from_reflect(
        value: &dyn PartialReflect,
        resolve: &dyn Fn(Entity) -> Option<String>,
    ) -> Self {
        if let Some(integer) = extract_integer(value) {
            return FieldValue::Integer(integer);
        }
        if let Some(flag) = value.try_downcast_ref::<bool>() {
            return FieldValue::Boolean(*flag);
        }
        if let Some(float) = value.try_downcast_ref::<f32>() {
            return FieldValue::Float(FloatValue::Single(*float));
        }
        if let Some(float) = value.try_downcast_ref::<f64>() {
            return FieldValue::Float(FloatValue::Double(*float));
        }
        if let Some(text) = extract_string(value) {
            return FieldValue::String(text);
        }
        if let Some(color) = extract_color(value) {
            return FieldValue::Color(color);
        }
        if let Some(entity) = value.try_downcast_ref::<Entity>() {
            return FieldValue::ObjectReference(resolve(*entity));
        }
        if let Some(entity) = value.try_downcast_ref::<Option<Entity>>() {
            return FieldValue::ObjectReference((*entity).and_then(resolve));
        }
        FieldValue::Unrecognized
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Color(_) => FieldKind::Color,
            FieldValue::ObjectReference(_) => FieldKind::ObjectReference,
            FieldValue::Unrecognized => FieldKind::Unrecognized,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Boolean(true) => f.write_str("True"),
            FieldValue::Boolean(false) => f.write_str("False"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::String(value) => f.write_str(value),
            FieldValue::Color(color) => {
                let Srgba {
                    red,
                    green,
                    blue,
                    alpha,
                } = color.to_srgba();
                write!(f, "RGBA({red:.3}, {green:.3}, {blue:.3}, {alpha:.3})")
            }
            FieldValue::ObjectReference(Some(label)) => f.write_str(label),
            FieldValue::ObjectReference(None) => f.write_str(NULL_REFERENCE),
            FieldValue::Unrecognized => f.write_str(UNKNOWN_VALUE),
        }
    }
}

/// Formats a field value for display.
pub fn format_field_value(value: &FieldValue) -> String {
    value.to_string()
}

fn extract_integer(value: &dyn PartialReflect) -> Option<IntegerValue> {
    macro_rules! try_integers {
        ($variant:ident as $wide:ty: $($ty:ty),*) => {
            $(
                if let Some(integer) = value.try_downcast_ref::<$ty>() {
                    return Some(IntegerValue::$variant(*integer as $wide));
                }
            )*
        };
    }

    try_integers!(Signed as i128: i8, i16, i32, i64, i128, isize);
    try_integers!(Unsigned as u128: u8, u16, u32, u64, u128, usize);
    None
}

fn extract_string(value: &dyn PartialReflect) -> Option<String> {
    if let Some(text) = value.try_downcast_ref::<String>() {
        return Some(text.clone());
    }
    if let Some(text) = value.try_downcast_ref::<&'static str>() {
        return Some((*text).to_string());
    }
    if let Some(text) = value.try_downcast_ref::<Cow<'static, str>>() {
        return Some(text.to_string());
    }
    if let Some(name) = value.try_downcast_ref::<Name>() {
        return Some(name.as_str().to_string());
    }
    None
}

fn extract_color(value: &dyn PartialReflect) -> Option<Color> {
    if let Some(color) = value.try_downcast_ref::<Color>() {
        return Some(*color);
    }
    if let Some(color) = value.try_downcast_ref::<Srgba>() {
        return Some(Color::from(*color));
    }
    if let Some(color) = value.try_downcast_ref::<LinearRgba>() {
        return Some(Color::from(*color));
    }
    None
}

/// One visible field of a component.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectedField {
    pub name: String,
    /// Nesting level; top-level fields are 0.
    pub depth: u8,
    pub value: FieldValue,
}

/// Walks every visible field of a reflected component, depth first, in declaration order.
///
/// Fields of an unrecognized kind are reported as [`FieldValue::Unrecognized`] and then
/// entered, so their own fields follow at the next depth. [`SCRIPT_FIELD_NAME`] and
/// everything under it is skipped.
pub fn walk_fields(
    root: &dyn PartialReflect,
    resolve: &dyn Fn(Entity) -> Option<String>,
) -> Vec<ReflectedField> {
    let mut walker = FieldWalker {
        resolve,
        fields: Vec::new(),
    };

    let root_value = FieldValue::from_reflect(root, resolve);
    let root_is_container = matches!(
        root.reflect_ref(),
        ReflectRef::Struct(_) | ReflectRef::TupleStruct(_) | ReflectRef::Enum(_)
    );

    if root_value == FieldValue::Unrecognized && root_is_container {
        walker.visit_children(root, 0);
    } else {
        walker.fields.push(ReflectedField {
            name: "value".to_string(),
            depth: 0,
            value: root_value,
        });
    }

    walker.fields
}

struct FieldWalker<'a> {
    resolve: &'a dyn Fn(Entity) -> Option<String>,
    fields: Vec<ReflectedField>,
}

impl FieldWalker<'_> {
    fn visit(&mut self, name: String, value: &dyn PartialReflect, depth: u8) {
        if name == SCRIPT_FIELD_NAME {
            return;
        }

        let extracted = FieldValue::from_reflect(value, self.resolve);
        let enter = extracted == FieldValue::Unrecognized;
        self.fields.push(ReflectedField {
            name,
            depth,
            value: extracted,
        });

        if enter {
            self.visit_children(value, depth.saturating_add(1));
        }
    }

    fn visit_children(&mut self, value: &dyn PartialReflect, depth: u8) {
        match value.reflect_ref() {
            ReflectRef::Struct(s) => {
                for i in 0..s.field_len() {
                    if let (Some(name), Some(field)) = (s.name_at(i), s.field_at(i)) {
                        self.visit(name.to_string(), field, depth);
                    }
                }
            }
            ReflectRef::TupleStruct(ts) => {
                for (i, field) in ts.iter_fields().enumerate() {
                    self.visit(format!(".{i}"), field, depth);
                }
            }
            ReflectRef::Tuple(t) => {
                for (i, field) in t.iter_fields().enumerate() {
                    self.visit(format!(".{i}"), field, depth);
                }
            }
            ReflectRef::List(list) => {
                for (i, item) in list.iter().enumerate() {
                    self.visit(format!("[{i}]"), item, depth);
                }
            }
            ReflectRef::Array(array) => {
                for (i, item) in array.iter().enumerate() {
                    self.visit(format!("[{i}]"), item, depth);
                }
            }
            ReflectRef::Enum(e) => {
                self.fields.push(ReflectedField {
                    name: "variant".to_string(),
                    depth,
                    value: FieldValue::String(e.variant_name().to_string()),
                });
                for i in 0..e.field_len() {
                    let name = e
                        .name_at(i)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!(".{i}"));
                    if let Some(field) = e.field_at(i) {
                        self.visit(name, field, depth);
                    }
                }
            }
            // Maps, sets and opaque values are shown by their header row only.
            _ => {}
        }
    }
}
