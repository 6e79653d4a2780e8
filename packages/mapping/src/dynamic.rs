//! Runtime values flowing through the engine.

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;

use jsonmap_document::Document;

use crate::descriptor::Mappable;
use crate::types::{EnumType, ObjectType, ValueType};
use crate::Error;

/// A value read from an instance or decoded from a document, before it is
/// bound to a concrete Rust type.
#[derive(Debug)]
pub enum Dynamic {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Enum(EnumValue),
    List(Vec<Dynamic>),
    /// Untyped nested map, as decoded from an object node.
    Map(BTreeMap<String, Dynamic>),
    Object(ObjectValue),
}

impl Dynamic {
    /// Decode a document without any target type in mind.
    ///
    /// Integers become `I32` when they fit and `I64` otherwise, floats
    /// become `F64` and object nodes become untyped maps.
    pub fn from_document(document: &Document) -> Dynamic {
        match document {
            Document::Null => Dynamic::Null,
            Document::Bool(b) => Dynamic::Bool(*b),
            Document::Integer(i) => match i32::try_from(*i) {
                Ok(small) => Dynamic::I32(small),
                Err(_) => Dynamic::I64(*i),
            },
            Document::Float(f) => Dynamic::F64(*f),
            Document::String(s) => Dynamic::String(s.clone()),
            Document::Array(items) => Dynamic::List(items.iter().map(Dynamic::from_document).collect()),
            Document::Object(map) => Dynamic::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Dynamic::from_document(v)))
                    .collect(),
            ),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    /// Short name of this value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "bool",
            Dynamic::I8(_) => "i8",
            Dynamic::I16(_) => "i16",
            Dynamic::I32(_) => "i32",
            Dynamic::I64(_) => "i64",
            Dynamic::F32(_) => "f32",
            Dynamic::F64(_) => "f64",
            Dynamic::String(_) => "String",
            Dynamic::Enum(e) => e.enum_type().name(),
            Dynamic::List(_) => "list",
            Dynamic::Map(_) => "map",
            Dynamic::Object(o) => o.object_type().name(),
        }
    }

    /// Whether this value already has the normalized kind of `target`.
    ///
    /// Only the outer kind is compared; list and map elements are not inspected.
    pub fn has_kind_of(&self, target: &ValueType) -> bool {
        match (self, target.normalized()) {
            (Dynamic::Bool(_), ValueType::Bool)
            | (Dynamic::I8(_), ValueType::I8)
            | (Dynamic::I16(_), ValueType::I16)
            | (Dynamic::I32(_), ValueType::I32)
            | (Dynamic::I64(_), ValueType::I64)
            | (Dynamic::F32(_), ValueType::F32)
            | (Dynamic::F64(_), ValueType::F64)
            | (Dynamic::String(_), ValueType::String)
            | (Dynamic::List(_), ValueType::Sequence(_))
            | (Dynamic::Map(_), ValueType::Mapping(_)) => true,
            (Dynamic::Enum(value), ValueType::Enum(t)) => value.enum_type() == t,
            (Dynamic::Object(value), ValueType::Object(t)) => value.object_type() == t,
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Dynamic::I8(_)
                | Dynamic::I16(_)
                | Dynamic::I32(_)
                | Dynamic::I64(_)
                | Dynamic::F32(_)
                | Dynamic::F64(_)
        )
    }

    /// Convert back into a document, as long as no mapped object is inside.
    pub fn into_plain_document(self) -> Option<Document> {
        Some(match self {
            Dynamic::Null => Document::Null,
            Dynamic::Bool(b) => Document::Bool(b),
            Dynamic::I8(i) => Document::Integer(i.into()),
            Dynamic::I16(i) => Document::Integer(i.into()),
            Dynamic::I32(i) => Document::Integer(i.into()),
            Dynamic::I64(i) => Document::Integer(i),
            Dynamic::F32(f) => Document::Float(f.into()),
            Dynamic::F64(f) => Document::Float(f),
            Dynamic::String(s) => Document::String(s),
            Dynamic::Enum(e) => Document::String(e.variant().to_string()),
            Dynamic::List(items) => Document::Array(
                items
                    .into_iter()
                    .map(Dynamic::into_plain_document)
                    .collect::<Option<_>>()?,
            ),
            Dynamic::Map(map) => Document::Object(
                map.into_iter()
                    .map(|(k, v)| v.into_plain_document().map(|v| (k, v)))
                    .collect::<Option<_>>()?,
            ),
            Dynamic::Object(_) => return None,
        })
    }
}

/// One variant of a fieldless enum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnumValue {
    enum_type: EnumType,
    variant: &'static str,
}

impl EnumValue {
    pub fn new(enum_type: EnumType, variant: &'static str) -> Self {
        EnumValue { enum_type, variant }
    }

    pub fn enum_type(&self) -> &EnumType {
        &self.enum_type
    }

    pub fn variant(&self) -> &'static str {
        self.variant
    }
}

/// A boxed instance of a mappable type.
pub struct ObjectValue {
    object_type: ObjectType,
    value: Box<dyn Any>,
}

impl ObjectValue {
    pub fn new<T: Mappable>(value: T) -> Self {
        ObjectValue {
            object_type: ObjectType::of::<T>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn from_parts(object_type: ObjectType, value: Box<dyn Any>) -> Self {
        ObjectValue { object_type, value }
    }

    pub fn object_type(&self) -> &ObjectType {
        &self.object_type
    }

    pub fn as_any(&self) -> &dyn Any {
        self.value.as_ref()
    }

    pub fn downcast<T: Any>(self) -> Result<T, Error> {
        let found = self.object_type.name();
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::mismatch(std::any::type_name::<T>(), found))
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectValue")
            .field(&self.object_type.name())
            .finish()
    }
}

/// Conversion between a concrete Rust type and [`Dynamic`].
///
/// Implemented for the built-in scalars, `String`, `Option`, `Vec`,
/// `BTreeMap<String, _>`, every [`Mappable`] type, and enums declared with
/// [`mapping_enum!`](crate::mapping_enum).
pub trait MapValue: Sized {
    fn value_type() -> ValueType;

    fn into_dynamic(self) -> Dynamic;

    fn from_dynamic(value: Dynamic) -> Result<Self, Error>;
}

macro_rules! scalar_map_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl MapValue for $ty {
                fn value_type() -> ValueType {
                    ValueType::$variant
                }

                fn into_dynamic(self) -> Dynamic {
                    Dynamic::$variant(self)
                }

                fn from_dynamic(value: Dynamic) -> Result<Self, Error> {
                    match value {
                        Dynamic::$variant(v) => Ok(v),
                        other => Err(Error::mismatch(stringify!($ty), other.kind())),
                    }
                }
            }
        )+
    };
}

scalar_map_value! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl<T: MapValue> MapValue for Option<T> {
    fn value_type() -> ValueType {
        ValueType::Optional(Box::new(T::value_type()))
    }

    fn into_dynamic(self) -> Dynamic {
        match self {
            Some(v) => v.into_dynamic(),
            None => Dynamic::Null,
        }
    }

    fn from_dynamic(value: Dynamic) -> Result<Self, Error> {
        match value {
            Dynamic::Null => Ok(None),
            other => T::from_dynamic(other).map(Some),
        }
    }
}

impl<T: MapValue> MapValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::Sequence(Box::new(T::value_type()))
    }

    fn into_dynamic(self) -> Dynamic {
        Dynamic::List(self.into_iter().map(MapValue::into_dynamic).collect())
    }

    fn from_dynamic(value: Dynamic) -> Result<Self, Error> {
        match value {
            Dynamic::List(items) => items.into_iter().map(T::from_dynamic).collect(),
            other => Err(Error::mismatch(Self::value_type().to_string(), other.kind())),
        }
    }
}

impl<T: MapValue> MapValue for BTreeMap<String, T> {
    fn value_type() -> ValueType {
        ValueType::Mapping(Box::new(T::value_type()))
    }

    fn into_dynamic(self) -> Dynamic {
        Dynamic::Map(self.into_iter().map(|(k, v)| (k, v.into_dynamic())).collect())
    }

    fn from_dynamic(value: Dynamic) -> Result<Self, Error> {
        match value {
            Dynamic::Map(map) => map
                .into_iter()
                .map(|(k, v)| T::from_dynamic(v).map(|v| (k, v)))
                .collect(),
            other => Err(Error::mismatch(Self::value_type().to_string(), other.kind())),
        }
    }
}

impl<T: Mappable> MapValue for T {
    fn value_type() -> ValueType {
        ValueType::Object(ObjectType::of::<T>())
    }

    fn into_dynamic(self) -> Dynamic {
        Dynamic::Object(ObjectValue::new(self))
    }

    fn from_dynamic(value: Dynamic) -> Result<Self, Error> {
        match value {
            Dynamic::Object(object) if object.object_type().type_id() == TypeId::of::<T>() => {
                object.downcast()
            }
            other => Err(Error::mismatch(std::any::type_name::<T>(), other.kind())),
        }
    }
}

/// Declare a fieldless enum that maps to and from its variant names.
///
/// ```rust
/// jsonmap_mapping::mapping_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq)]
///     pub enum ProviderKind { Azure, OneLogin, Okta, Generic }
/// }
///
/// use jsonmap_mapping::MapValue;
/// let value = ProviderKind::Okta.into_dynamic();
/// assert_eq!(ProviderKind::from_dynamic(value).unwrap(), ProviderKind::Okta);
/// ```
#[macro_export]
macro_rules! mapping_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant),+
        }

        impl $crate::MapValue for $name {
            fn value_type() -> $crate::ValueType {
                $crate::ValueType::Enum($crate::EnumType::of::<$name>(
                    stringify!($name),
                    &[$(stringify!($variant)),+],
                ))
            }

            fn into_dynamic(self) -> $crate::Dynamic {
                let enum_type = $crate::EnumType::of::<$name>(
                    stringify!($name),
                    &[$(stringify!($variant)),+],
                );
                let variant = match self {
                    $($name::$variant => stringify!($variant)),+
                };
                $crate::Dynamic::Enum($crate::EnumValue::new(enum_type, variant))
            }

            fn from_dynamic(value: $crate::Dynamic) -> Result<Self, $crate::Error> {
                match value {
                    $crate::Dynamic::Enum(e)
                        if e.enum_type().type_id() == ::std::any::TypeId::of::<$name>() =>
                    {
                        match e.variant() {
                            $(stringify!($variant) => Ok($name::$variant),)+
                            other => Err($crate::Error::TypeMismatch {
                                expected: stringify!($name).to_string(),
                                found: other.to_string(),
                            }),
                        }
                    }
                    other => Err($crate::Error::TypeMismatch {
                        expected: stringify!($name).to_string(),
                        found: other.kind().to_string(),
                    }),
                }
            }
        }
    };
}
