//! Member discovery over a [`TypeDescriptor`].
//!
//! Discovery answers "what can be read or written on this type, and under
//! which document key". It never looks at a document.

use std::any::Any;

use crate::context::MappingContext;
use crate::descriptor::{
    ConstructorDescriptor, FieldDescriptor, Mutability, ReadFn, TypeDescriptor, Visibility,
    WriteFn,
};
use crate::dynamic::Dynamic;
use crate::types::ValueType;
use crate::Error;

/// Where a discovered member comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Field,
    Accessor,
    Setter,
    ConstructorParameter,
}

/// Members used to turn an instance into a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteSource {
    /// Alias-annotated `get`/`is` accessors.
    Accessors,
    /// Every declared, non-synthetic field.
    Fields,
}

/// Members used to fill an instance from a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadSource {
    /// `set` methods, with or without an alias.
    Setters,
    /// Every declared, non-synthetic field.
    Fields,
}

/// A member that yields a value from an instance.
pub struct WriteMember<'a> {
    name: String,
    value_type: &'a ValueType,
    origin: Origin,
    type_name: &'static str,
    restricted: bool,
    read: &'a ReadFn,
}

impl WriteMember<'_> {
    /// The document key this member is written under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        self.value_type
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn read(&self, instance: &dyn Any, ctx: &MappingContext) -> Result<Dynamic, Error> {
        force_access(ctx, self.type_name, &self.name, self.restricted)?;
        (self.read)(instance)
    }
}

/// A member that accepts a value into an instance.
pub struct ReadMember<'a> {
    name: String,
    value_type: &'a ValueType,
    origin: Origin,
    type_name: &'static str,
    restricted: bool,
    write: Option<&'a WriteFn>,
}

impl ReadMember<'_> {
    /// The document key this member is read from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        self.value_type
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn write(
        &self,
        instance: &mut dyn Any,
        value: Dynamic,
        ctx: &MappingContext,
    ) -> Result<(), Error> {
        let write = self.write.ok_or_else(|| self.denied())?;
        force_access(ctx, self.type_name, &self.name, self.restricted)?;
        write(instance, value)
    }

    fn denied(&self) -> Error {
        Error::ReflectionAccessDenied {
            type_name: self.type_name.to_string(),
            member: self.name.clone(),
        }
    }
}

/// The single place where restricted members are let through.
///
/// Restricted means private for reads, and private or immutable for writes.
/// Access is granted only when the call was made with private access allowed.
pub fn force_access(
    ctx: &MappingContext,
    type_name: &str,
    member: &str,
    restricted: bool,
) -> Result<(), Error> {
    if restricted && !ctx.allow_private_access() {
        return Err(Error::ReflectionAccessDenied {
            type_name: type_name.to_string(),
            member: member.to_string(),
        });
    }
    Ok(())
}

fn require_marker(descriptor: &TypeDescriptor) -> Result<(), Error> {
    if descriptor.is_marked() {
        Ok(())
    } else {
        Err(Error::MissingMarker {
            type_name: descriptor.name().to_string(),
        })
    }
}

/// Derive a document key from an accessor or setter method name.
///
/// The `get`, `is` or `set` prefix and an `_` right after it are dropped,
/// then the first letter is lower-cased: `getUserName` and `get_user_name`
/// become `userName` and `user_name`.
pub fn derive_member_name(method: &str) -> String {
    let stripped = ["get", "is", "set"]
        .iter()
        .find_map(|prefix| method.strip_prefix(*prefix))
        .unwrap_or(method);
    let stripped = stripped.strip_prefix('_').unwrap_or(stripped);

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn effective_name(alias: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match alias {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ => fallback(),
    }
}

fn mapped_fields(descriptor: &TypeDescriptor) -> impl Iterator<Item = &FieldDescriptor> {
    descriptor.fields().iter().filter(|f| !f.is_synthetic())
}

fn field_name(field: &FieldDescriptor) -> String {
    effective_name(field.alias(), || field.name().to_string())
}

/// Members to read when writing an instance out as a document.
pub fn discover_members_for_write(
    descriptor: &TypeDescriptor,
    source: WriteSource,
) -> Result<Vec<WriteMember<'_>>, Error> {
    require_marker(descriptor)?;

    let members = match source {
        WriteSource::Accessors => descriptor
            .getters()
            .iter()
            .filter(|g| g.method().starts_with("get") || g.method().starts_with("is"))
            .filter_map(|g| {
                let alias = g.alias()?;
                Some(WriteMember {
                    name: effective_name(Some(alias), || derive_member_name(g.method())),
                    value_type: g.value_type(),
                    origin: Origin::Accessor,
                    type_name: descriptor.name(),
                    restricted: false,
                    read: &g.read,
                })
            })
            .filter(|m| !m.name.is_empty())
            .collect(),
        WriteSource::Fields => mapped_fields(descriptor)
            .map(|f| WriteMember {
                name: field_name(f),
                value_type: f.value_type(),
                origin: Origin::Field,
                type_name: descriptor.name(),
                restricted: f.visibility() == Visibility::Private,
                read: &f.read,
            })
            .collect(),
    };

    Ok(members)
}

/// Members to write when reading an instance in from a document.
pub fn discover_members_for_read(
    descriptor: &TypeDescriptor,
    source: ReadSource,
) -> Result<Vec<ReadMember<'_>>, Error> {
    require_marker(descriptor)?;

    let members = match source {
        ReadSource::Setters => descriptor
            .setters()
            .iter()
            .filter(|s| s.method().starts_with("set"))
            .map(|s| ReadMember {
                name: effective_name(s.alias(), || derive_member_name(s.method())),
                value_type: s.value_type(),
                origin: Origin::Setter,
                type_name: descriptor.name(),
                restricted: false,
                write: Some(&s.write),
            })
            .filter(|m| !m.name.is_empty())
            .collect(),
        ReadSource::Fields => mapped_fields(descriptor)
            .map(|f| ReadMember {
                name: field_name(f),
                value_type: f.value_type(),
                origin: Origin::Field,
                type_name: descriptor.name(),
                restricted: f.visibility() == Visibility::Private
                    || f.mutability() == Mutability::Immutable,
                write: f.write.as_ref(),
            })
            .collect(),
    };

    Ok(members)
}

/// Publicly visible constructors of the type.
pub fn discover_constructors(
    descriptor: &TypeDescriptor,
) -> Result<Vec<&ConstructorDescriptor>, Error> {
    require_marker(descriptor)?;

    Ok(descriptor
        .constructors()
        .iter()
        .filter(|c| c.visibility() == Visibility::Public)
        .collect())
}

/// Declared types of the fields a constructor has to cover.
pub fn mapped_field_types(descriptor: &TypeDescriptor) -> Vec<&ValueType> {
    mapped_fields(descriptor).map(|f| f.value_type()).collect()
}
