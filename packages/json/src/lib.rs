//! JSON text support for jsonmap documents.
//!
//! This crate owns everything that touches JSON text or the filesystem:
//! - `JsonCodec`: parse and print documents
//! - `document_from_file`: load a document from disk
//! - string-map helpers that flatten an object node into display strings
//!
//! The mapping engine itself never parses text; it only sees `Document`s.

mod codec;
mod convert;
mod error;
mod file;
mod maps;

pub use codec::JsonCodec;
pub use convert::{document_to_json, json_to_document};
pub use error::Error;
pub use file::document_from_file;
pub use maps::{
    display_string, document_to_string_map, map_to_document, text_to_document_map,
    text_to_string_map,
};
