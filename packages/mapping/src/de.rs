//! Document → instance.
//!
//! Strategies, in order:
//!
//! 1. the single public constructor whose parameters cover every field type
//! 2. setters on an instance from the public zero-argument constructor
//! 3. fields on an instance from the zero-argument constructor
//!
//! The setter strategy is all-or-nothing, and a key missing from the
//! document reaches its setter as null. The field strategy keeps whatever it
//! managed to assign and leaves fields without a key at their defaults.

use std::any::Any;

use jsonmap_document::{Document, Map};

use crate::chain::{first_success, Strategy};
use crate::coerce::{coerce, is_applicable};
use crate::context::MappingContext;
use crate::descriptor::{Mappable, TypeDescriptor, Visibility};
use crate::dynamic::Dynamic;
use crate::introspect::{
    discover_constructors, discover_members_for_read, force_access, mapped_field_types,
    ReadSource,
};
use crate::types::ObjectType;
use crate::Error;

/// Read a new `T` from an object node.
pub fn from_document<T: Mappable>(document: &Document, ctx: &MappingContext) -> Result<T, Error> {
    let target = ObjectType::of::<T>();
    read_value(document, &target, ctx)?
        .downcast::<T>()
        .map(|instance| *instance)
        .map_err(|_| Error::mismatch(target.name(), "instance of another type"))
}

/// Read a new, boxed instance of `target` from an object node.
pub fn read_value(
    document: &Document,
    target: &ObjectType,
    ctx: &MappingContext,
) -> Result<Box<dyn Any>, Error> {
    let fields = expect_object(document)?;
    let descriptor = describe_marked(target)?;

    let constructor = || constructor_strategy(fields, &descriptor, ctx);
    let setters = || setter_strategy(fields, &descriptor, ctx);
    let field = || field_strategy(fields, &descriptor, ctx);

    let strategies: [Strategy<'_, Box<dyn Any>>; 3] = [
        ("constructor", &constructor),
        ("setter", &setters),
        ("field", &field),
    ];
    first_success(descriptor.name(), &strategies)
}

/// Run the setters of `declared` (or of `T` itself) on an existing instance.
pub fn populate<T: Mappable>(
    document: &Document,
    instance: &mut T,
    declared: Option<&ObjectType>,
    ctx: &MappingContext,
) -> Result<(), Error> {
    let target = declared.copied().unwrap_or_else(ObjectType::of::<T>);
    populate_instance(document, instance, &target, ctx)
}

/// Run the setters of `target` on an existing, erased instance.
///
/// Fails when the type has no setters or any single setter fails.
pub fn populate_instance(
    document: &Document,
    instance: &mut dyn Any,
    target: &ObjectType,
    ctx: &MappingContext,
) -> Result<(), Error> {
    let fields = expect_object(document)?;
    if (*instance).type_id() != target.type_id() {
        return Err(Error::mismatch(target.name(), "instance of another type"));
    }
    let descriptor = describe_marked(target)?;
    apply_setters(fields, instance, &descriptor, ctx)
}

fn expect_object(document: &Document) -> Result<&Map, Error> {
    document
        .as_object()
        .ok_or_else(|| Error::mismatch("object", document.kind()))
}

fn describe_marked(target: &ObjectType) -> Result<TypeDescriptor, Error> {
    let descriptor = target.describe();
    if descriptor.type_id() != target.type_id() {
        return Err(Error::mismatch(target.name(), descriptor.name()));
    }
    if !descriptor.is_marked() {
        return Err(Error::MissingMarker {
            type_name: descriptor.name().to_string(),
        });
    }
    Ok(descriptor)
}

fn constructor_strategy(
    fields: &Map,
    descriptor: &TypeDescriptor,
    ctx: &MappingContext,
) -> Result<Box<dyn Any>, Error> {
    ctx.check_depth()?;

    let field_types = mapped_field_types(descriptor);
    let candidates: Vec<_> = discover_constructors(descriptor)?
        .into_iter()
        .filter(|c| {
            field_types
                .iter()
                .all(|field| c.params().iter().any(|p| p.value_type() == *field))
        })
        .collect();

    let constructor = match candidates.as_slice() {
        [] => {
            return Err(Error::ConstructorNotFound {
                type_name: descriptor.name().to_string(),
            })
        }
        [constructor] => *constructor,
        _ => {
            return Err(Error::AmbiguousConstructor {
                type_name: descriptor.name().to_string(),
                candidates: candidates.len(),
            })
        }
    };

    let aliases = constructor
        .params()
        .iter()
        .enumerate()
        .map(|(position, param)| match param.alias_name() {
            Some(alias) if !alias.is_empty() => Ok(alias),
            _ => Err(Error::MissingAliasOnParameter {
                type_name: descriptor.name().to_string(),
                position,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut args = Vec::with_capacity(aliases.len());
    for (param, alias) in constructor.params().iter().zip(aliases) {
        let value = match fields.get(alias) {
            Some(document) => {
                let value = Dynamic::from_document(document);
                if is_applicable(param.value_type(), &value) {
                    coerce(param.value_type(), value, ctx)?
                } else {
                    log::trace!(
                        "Binding null to {}({}): {} does not fit {}",
                        descriptor.name(),
                        alias,
                        value.kind(),
                        param.value_type()
                    );
                    Dynamic::Null
                }
            }
            None => Dynamic::Null,
        };
        args.push(value);
    }

    constructor.construct(args)
}

fn setter_strategy(
    fields: &Map,
    descriptor: &TypeDescriptor,
    ctx: &MappingContext,
) -> Result<Box<dyn Any>, Error> {
    let constructor = descriptor
        .default_constructor()
        .filter(|c| c.visibility() == Visibility::Public)
        .ok_or_else(|| Error::ConstructorNotFound {
            type_name: descriptor.name().to_string(),
        })?;
    ctx.check_depth()?;

    let mut instance = constructor.construct();
    apply_setters(fields, instance.as_mut(), descriptor, ctx)?;
    Ok(instance)
}

fn apply_setters(
    fields: &Map,
    instance: &mut dyn Any,
    descriptor: &TypeDescriptor,
    ctx: &MappingContext,
) -> Result<(), Error> {
    ctx.check_depth()?;

    let setters = discover_members_for_read(descriptor, ReadSource::Setters)?;
    if setters.is_empty() {
        return Err(Error::EmptyResult {
            type_name: descriptor.name().to_string(),
            strategy: "setter",
        });
    }

    for setter in &setters {
        let value = fields
            .get(setter.name())
            .map(Dynamic::from_document)
            .unwrap_or(Dynamic::Null);
        let value = coerce(setter.value_type(), value, ctx)?;
        setter.write(instance, value, ctx)?;
    }
    Ok(())
}

fn field_strategy(
    fields: &Map,
    descriptor: &TypeDescriptor,
    ctx: &MappingContext,
) -> Result<Box<dyn Any>, Error> {
    ctx.check_depth()?;

    let constructor = descriptor
        .default_constructor()
        .ok_or_else(|| Error::ConstructorNotFound {
            type_name: descriptor.name().to_string(),
        })?;
    force_access(
        ctx,
        descriptor.name(),
        "default constructor",
        constructor.visibility() == Visibility::Private,
    )?;

    let mut instance = constructor.construct();
    for member in discover_members_for_read(descriptor, ReadSource::Fields)? {
        let Some(document) = fields.get(member.name()) else {
            log::trace!("Skipping {}.{}: no such key", descriptor.name(), member.name());
            continue;
        };
        let assigned = coerce(member.value_type(), Dynamic::from_document(document), ctx)
            .and_then(|value| member.write(instance.as_mut(), value, ctx));
        if let Err(err) = assigned {
            log::trace!("Skipping {}.{}: {}", descriptor.name(), member.name(), err);
        }
    }
    Ok(instance)
}
