//! Instance → document.
//!
//! Strategies, in order:
//!
//! 1. accessors of the declared type
//! 2. builder (never produces anything)
//! 3. fields of the runtime type
//!
//! A member that cannot be read or written is left out of the document
//! rather than failing the strategy. A strategy that ends up with no members
//! at all has failed.

use std::any::Any;

use jsonmap_document::{Document, Map};

use crate::chain::{first_success, Strategy};
use crate::context::MappingContext;
use crate::descriptor::{Mappable, TypeDescriptor};
use crate::dynamic::Dynamic;
use crate::introspect::{discover_members_for_write, WriteMember, WriteSource};
use crate::types::ObjectType;
use crate::Error;

/// Write a typed instance, optionally through a declared view of its type.
pub fn to_document<T: Mappable>(
    value: &T,
    declared: Option<&ObjectType>,
    ctx: &MappingContext,
) -> Result<Document, Error> {
    write_document(value, &ObjectType::of::<T>(), declared, ctx)
}

/// Write an erased instance of `runtime`.
///
/// Accessors come from `declared` (the runtime type when absent), fields
/// always come from the runtime type. The declared type must carry the marker.
pub fn write_document(
    instance: &dyn Any,
    runtime: &ObjectType,
    declared: Option<&ObjectType>,
    ctx: &MappingContext,
) -> Result<Document, Error> {
    let declared = declared.unwrap_or(runtime);
    if declared.type_id() != runtime.type_id() {
        return Err(Error::mismatch(declared.name(), runtime.name()));
    }

    let descriptor = declared.describe();
    if !descriptor.is_marked() {
        return Err(Error::MissingMarker {
            type_name: descriptor.name().to_string(),
        });
    }

    let accessors = || accessor_strategy(instance, &descriptor, ctx);
    let builder = || builder_strategy(&descriptor);
    let fields = || field_strategy(instance, runtime, ctx);

    let strategies: [Strategy<'_, Document>; 3] = [
        ("accessor", &accessors),
        ("builder", &builder),
        ("field", &fields),
    ];
    first_success(descriptor.name(), &strategies)
}

fn accessor_strategy(
    instance: &dyn Any,
    descriptor: &TypeDescriptor,
    ctx: &MappingContext,
) -> Result<Document, Error> {
    ctx.check_depth()?;
    let members = discover_members_for_write(descriptor, WriteSource::Accessors)?;
    write_members(instance, descriptor, &members, "accessor", ctx)
}

// Kept as a slot in the chain for builder-style types; no such
// registration exists, so it always falls through.
fn builder_strategy(descriptor: &TypeDescriptor) -> Result<Document, Error> {
    Err(Error::EmptyResult {
        type_name: descriptor.name().to_string(),
        strategy: "builder",
    })
}

fn field_strategy(
    instance: &dyn Any,
    runtime: &ObjectType,
    ctx: &MappingContext,
) -> Result<Document, Error> {
    ctx.check_depth()?;
    let descriptor = runtime.describe();
    let members = discover_members_for_write(&descriptor, WriteSource::Fields)?;
    if members.is_empty() {
        log::debug!("Instance of {} has no fields", descriptor.name());
    }
    write_members(instance, &descriptor, &members, "field", ctx)
}

fn write_members(
    instance: &dyn Any,
    descriptor: &TypeDescriptor,
    members: &[WriteMember<'_>],
    strategy: &'static str,
    ctx: &MappingContext,
) -> Result<Document, Error> {
    let mut map = Map::new();
    for member in members {
        match member
            .read(instance, ctx)
            .and_then(|value| write_value(value, ctx))
        {
            Ok(document) => {
                map.insert(member.name().to_string(), document);
            }
            Err(err) => {
                log::trace!("Omitting {}.{}: {}", descriptor.name(), member.name(), err);
            }
        }
    }

    if map.is_empty() {
        return Err(Error::EmptyResult {
            type_name: descriptor.name().to_string(),
            strategy,
        });
    }
    Ok(Document::Object(map))
}

/// Turn one member value into a document. Mapped objects recurse one level down.
pub(crate) fn write_value(value: Dynamic, ctx: &MappingContext) -> Result<Document, Error> {
    Ok(match value {
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
                .map(|item| write_value(item, ctx))
                .collect::<Result<_, _>>()?,
        ),
        Dynamic::Map(map) => Document::Object(
            map.into_iter()
                .map(|(key, item)| write_value(item, ctx).map(|item| (key, item)))
                .collect::<Result<_, _>>()?,
        ),
        Dynamic::Object(object) => {
            write_document(object.as_any(), object.object_type(), None, &ctx.descend())?
        }
    })
}
