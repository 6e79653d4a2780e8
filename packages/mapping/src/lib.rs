//! Descriptor-driven mapping between object instances and documents.
//!
//! Types opt in by implementing [`Mappable`], which returns a runtime
//! [`TypeDescriptor`] of their fields, accessors, setters and constructors.
//! The engine then tries several strategies in a fixed order:
//! - writing: accessors, then fields
//! - reading: a matching constructor, then setters, then fields
//!
//! Values are coerced between numeric widths, enum names and nested objects
//! on the way in, and recursion is bounded by [`MAX_RECURSION_DEPTH`].
//!
//! # Example
//!
//! ```rust
//! use jsonmap_document::Document;
//! use jsonmap_mapping::{from_document, to_document, Field, Mappable, MappingContext, Setter, TypeDescriptor};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tenant {
//!     name: String,
//!     seats: i64,
//! }
//!
//! impl Mappable for Tenant {
//!     fn describe() -> TypeDescriptor {
//!         TypeDescriptor::builder::<Tenant>("Tenant")
//!             .marked()
//!             .field(Field::new("name", |t: &Tenant| t.name.clone(), |t: &mut Tenant, v| t.name = v))
//!             .field(Field::new("seats", |t: &Tenant| t.seats, |t: &mut Tenant, v| t.seats = v))
//!             .setter(Setter::new("set_name", |t: &mut Tenant, v: String| t.name = v))
//!             .setter(Setter::new("set_seats", |t: &mut Tenant, v: i64| t.seats = v))
//!             .default_constructor(Tenant::default)
//!             .build()
//!     }
//! }
//!
//! let ctx = MappingContext::default();
//! let tenant = Tenant { name: "acme".into(), seats: 5 };
//! let document = to_document(&tenant, None, &ctx).unwrap();
//! assert_eq!(document.get("seats"), Some(&Document::Integer(5)));
//!
//! let back: Tenant = from_document(&document, &ctx).unwrap();
//! assert_eq!(back, tenant);
//! ```

mod chain;
pub mod coerce;
mod context;
pub mod de;
mod descriptor;
mod dynamic;
mod error;
pub mod introspect;
pub mod ser;
mod types;

#[cfg(test)]
mod test_types;

pub use context::{MappingContext, MappingOptions, MAX_RECURSION_DEPTH};
pub use de::{from_document, populate, populate_instance, read_value};
pub use descriptor::{
    Arguments, Constructor, ConstructorDescriptor, DefaultConstructor, Field, FieldDescriptor,
    Getter, GetterDescriptor, Mappable, Mutability, Param, Setter, SetterDescriptor,
    TypeDescriptor, TypeDescriptorBuilder, Visibility,
};
pub use dynamic::{Dynamic, EnumValue, MapValue, ObjectValue};
pub use error::Error;
pub use ser::{to_document, write_document};
pub use types::{EnumType, ObjectType, ValueType};
