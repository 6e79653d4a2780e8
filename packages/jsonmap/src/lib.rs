//! jsonmap: map object instances to JSON documents and back.
//!
//! Types describe themselves at runtime through [`Mappable`]; no
//! serialization code is generated for them. The free functions here use a
//! default [`Mapper`] and take the private-access switch per call.
//!
//! # Example
//!
//! ```rust
//! use jsonmap::{Constructor, Field, Getter, Mappable, Param, TypeDescriptor};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: i32,
//!     username: String,
//! }
//!
//! impl Mappable for User {
//!     fn describe() -> TypeDescriptor {
//!         TypeDescriptor::builder::<User>("User")
//!             .marked()
//!             .field(Field::new("id", |u: &User| u.id, |u: &mut User, v| u.id = v))
//!             .field(Field::new("username", |u: &User| u.username.clone(), |u: &mut User, v| u.username = v))
//!             .getter(Getter::new("get_id", |u: &User| u.id).property())
//!             .getter(Getter::new("get_username", |u: &User| u.username.clone()).property())
//!             .constructor(Constructor::new(
//!                 [Param::of::<i32>().alias("id"), Param::of::<String>().alias("username")],
//!                 |args| Ok(User { id: args.take()?, username: args.take()? }),
//!             ))
//!             .build()
//!     }
//! }
//!
//! let user = User { id: 8777, username: "jondoe".into() };
//! let text = jsonmap::object_to_document_string(&user, None, false).unwrap();
//! assert_eq!(text, r#"{"id":8777,"username":"jondoe"}"#);
//!
//! let back: User = jsonmap::text_to_value(&text, false).unwrap();
//! assert_eq!(back, user);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

mod error;
mod mapper;

pub use error::Error;
pub use mapper::Mapper;

pub use jsonmap_document::{Document, Map};
pub use jsonmap_json::JsonCodec;
pub use jsonmap_mapping::{
    mapping_enum, Arguments, Constructor, Dynamic, EnumType, Field, Getter, MapValue, Mappable,
    MappingContext, MappingOptions, ObjectType, Param, Setter, TypeDescriptor, ValueType,
    MAX_RECURSION_DEPTH,
};

fn mapper(allow_private_access: bool) -> Mapper {
    Mapper::new().allow_private_access(allow_private_access)
}

pub fn object_to_document<T: Mappable>(
    value: &T,
    declared: Option<&ObjectType>,
    allow_private_access: bool,
) -> Result<Document, Error> {
    mapper(allow_private_access).object_to_document(value, declared)
}

pub fn object_to_document_string<T: Mappable>(
    value: &T,
    declared: Option<&ObjectType>,
    allow_private_access: bool,
) -> Result<String, Error> {
    mapper(allow_private_access).object_to_document_string(value, declared)
}

pub fn document_to_value<T: Mappable>(
    document: &Document,
    allow_private_access: bool,
) -> Result<T, Error> {
    mapper(allow_private_access).document_to_value(document)
}

pub fn text_to_value<T: Mappable>(text: &str, allow_private_access: bool) -> Result<T, Error> {
    mapper(allow_private_access).text_to_value(text)
}

pub fn populate_instance<T: Mappable>(
    document: &Document,
    existing: &mut T,
    declared: Option<&ObjectType>,
    allow_private_access: bool,
) -> Result<(), Error> {
    mapper(allow_private_access).populate_instance(document, existing, declared)
}

/// Build an object node from key/document pairs.
pub fn map_to_document<I>(entries: I) -> Document
where
    I: IntoIterator<Item = (String, Document)>,
{
    jsonmap_json::map_to_document(entries)
}

pub fn document_from_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    Ok(jsonmap_json::document_from_file(path)?)
}

/// Flatten an object node into key → display string.
pub fn document_to_string_map(document: &Document) -> Result<BTreeMap<String, String>, Error> {
    Ok(jsonmap_json::document_to_string_map(document)?)
}

pub fn text_to_document(text: &str) -> Result<Document, Error> {
    Ok(JsonCodec::default().decode(text)?)
}

pub fn text_to_document_map(text: &str) -> Result<BTreeMap<String, Document>, Error> {
    Ok(jsonmap_json::text_to_document_map(text)?)
}

pub fn text_to_string_map(text: &str) -> Result<BTreeMap<String, String>, Error> {
    Ok(jsonmap_json::text_to_string_map(text)?)
}
