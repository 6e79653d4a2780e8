//! Value conversion rules between a runtime value and a declared type.
//!
//! Rules are tried in order and the first that matches applies:
//!
//! 1. the value already has the declared kind: kept (collections are
//!    coerced element by element)
//! 2. string into enum: the variant with exactly that name
//! 3. number into number: `as` conversion, which may truncate
//! 4. untyped map into a mapped type: read as a nested document one level down
//!
//! Anything else passes through unchanged, and binding it to the concrete
//! type later reports the mismatch. Only rule 4 can fail.

use crate::context::MappingContext;
use crate::de;
use crate::dynamic::{Dynamic, EnumValue, ObjectValue};
use crate::types::{ObjectType, ValueType};
use crate::Error;

pub fn coerce(target: &ValueType, value: Dynamic, ctx: &MappingContext) -> Result<Dynamic, Error> {
    if value.is_null() {
        return Ok(value);
    }
    let target = target.normalized();

    if value.has_kind_of(target) {
        return match (target, value) {
            (ValueType::Sequence(element), Dynamic::List(items)) => items
                .into_iter()
                .map(|item| coerce(element, item, ctx))
                .collect::<Result<_, _>>()
                .map(Dynamic::List),
            (ValueType::Mapping(element), Dynamic::Map(map)) => map
                .into_iter()
                .map(|(key, item)| coerce(element, item, ctx).map(|item| (key, item)))
                .collect::<Result<_, _>>()
                .map(Dynamic::Map),
            (_, value) => Ok(value),
        };
    }

    match (target, value) {
        (ValueType::Enum(enum_type), Dynamic::String(name)) => Ok(match enum_type.variant(&name) {
            Some(variant) => Dynamic::Enum(EnumValue::new(*enum_type, variant)),
            None => Dynamic::String(name),
        }),
        (target, value) if target.is_numeric() && value.is_numeric() => {
            Ok(cast_numeric(target, value))
        }
        (ValueType::Object(object_type), value @ Dynamic::Map(_)) => {
            read_nested(object_type, value, ctx)
        }
        (_, value) => Ok(value),
    }
}

/// Whether [`coerce`] has a rule for this value and target. Null never applies.
pub fn is_applicable(target: &ValueType, value: &Dynamic) -> bool {
    if value.is_null() {
        return false;
    }
    let target = target.normalized();

    value.has_kind_of(target)
        || matches!(
            (target, value),
            (ValueType::Enum(_), Dynamic::String(_)) | (ValueType::Object(_), Dynamic::Map(_))
        )
        || (target.is_numeric() && value.is_numeric())
}

enum Number {
    Int(i64),
    Float(f64),
}

fn cast_numeric(target: &ValueType, value: Dynamic) -> Dynamic {
    let number = match value {
        Dynamic::I8(v) => Number::Int(v.into()),
        Dynamic::I16(v) => Number::Int(v.into()),
        Dynamic::I32(v) => Number::Int(v.into()),
        Dynamic::I64(v) => Number::Int(v),
        Dynamic::F32(v) => Number::Float(v.into()),
        Dynamic::F64(v) => Number::Float(v),
        other => return other,
    };

    macro_rules! cast {
        ($ty:ty) => {
            match number {
                Number::Int(i) => i as $ty,
                Number::Float(f) => f as $ty,
            }
        };
    }

    match target {
        ValueType::I8 => Dynamic::I8(cast!(i8)),
        ValueType::I16 => Dynamic::I16(cast!(i16)),
        ValueType::I32 => Dynamic::I32(cast!(i32)),
        ValueType::I64 => Dynamic::I64(cast!(i64)),
        ValueType::F32 => Dynamic::F32(cast!(f32)),
        _ => Dynamic::F64(cast!(f64)),
    }
}

fn read_nested(
    object_type: &ObjectType,
    value: Dynamic,
    ctx: &MappingContext,
) -> Result<Dynamic, Error> {
    let failure = |source: Error| Error::TypeCoercionFailure {
        target: object_type.name().to_string(),
        source: Box::new(source),
    };

    let document = value
        .into_plain_document()
        .ok_or_else(|| failure(Error::mismatch("plain map", "map holding mapped objects")))?;
    let instance = de::read_value(&document, object_type, &ctx.descend()).map_err(failure)?;

    Ok(Dynamic::Object(ObjectValue::from_parts(*object_type, instance)))
}
