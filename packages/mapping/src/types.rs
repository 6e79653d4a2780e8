//! Declared types of members, parameters and mapping targets.

use std::any::{Any, TypeId};
use std::fmt;

use crate::descriptor::{Mappable, TypeDescriptor};

/// The declared type of a field, accessor, setter or constructor parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Enum(EnumType),
    /// Ordered collection of the element type.
    Sequence(Box<ValueType>),
    /// String-keyed collection of the value type.
    Mapping(Box<ValueType>),
    /// Nullable form of the inner type.
    Optional(Box<ValueType>),
    Object(ObjectType),
}

impl ValueType {
    /// The type with any nullable wrappers removed.
    pub fn normalized(&self) -> &ValueType {
        match self {
            ValueType::Optional(inner) => inner.normalized(),
            other => other,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.normalized(),
            ValueType::I8
                | ValueType::I16
                | ValueType::I32
                | ValueType::I64
                | ValueType::F32
                | ValueType::F64
        )
    }

    /// True for every type the engine stores as-is rather than mapping
    /// through a descriptor.
    pub fn is_builtin(&self) -> bool {
        !matches!(self.normalized(), ValueType::Object(_))
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self.normalized() {
            ValueType::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Bool => write!(f, "bool"),
            ValueType::I8 => write!(f, "i8"),
            ValueType::I16 => write!(f, "i16"),
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::F32 => write!(f, "f32"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::String => write!(f, "String"),
            ValueType::Enum(e) => write!(f, "{}", e.name()),
            ValueType::Sequence(inner) => write!(f, "Vec<{}>", inner),
            ValueType::Mapping(inner) => write!(f, "BTreeMap<String, {}>", inner),
            ValueType::Optional(inner) => write!(f, "Option<{}>", inner),
            ValueType::Object(o) => write!(f, "{}", o.name()),
        }
    }
}

/// A fieldless enum whose values map to their variant names.
#[derive(Clone, Copy, Debug)]
pub struct EnumType {
    name: &'static str,
    type_id: TypeId,
    variants: &'static [&'static str],
}

impl EnumType {
    pub fn of<E: Any>(name: &'static str, variants: &'static [&'static str]) -> Self {
        EnumType {
            name,
            type_id: TypeId::of::<E>(),
            variants,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Exact, case-sensitive lookup of a variant name.
    pub fn variant(&self, name: &str) -> Option<&'static str> {
        self.variants.iter().copied().find(|v| *v == name)
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

/// A type mapped through its [`TypeDescriptor`].
///
/// Usually obtained with [`ObjectType::of`]. [`ObjectType::view`] pairs a
/// concrete type with a different descriptor, so an instance can be mapped
/// through a narrower declared shape than its own.
#[derive(Clone, Copy)]
pub struct ObjectType {
    name: &'static str,
    type_id: TypeId,
    describe: fn() -> TypeDescriptor,
}

impl ObjectType {
    pub fn of<T: Mappable>() -> Self {
        ObjectType {
            name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            describe: T::describe,
        }
    }

    pub fn view<T: Any>(name: &'static str, describe: fn() -> TypeDescriptor) -> Self {
        ObjectType {
            name,
            type_id: TypeId::of::<T>(),
            describe,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Build a fresh descriptor. Descriptors are never cached.
    pub fn describe(&self) -> TypeDescriptor {
        (self.describe)()
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType").field("name", &self.name).finish()
    }
}
