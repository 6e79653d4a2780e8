//! Flat map views over object nodes.

use std::collections::BTreeMap;

use jsonmap_document::{Document, Map};

use crate::convert::document_to_json;
use crate::{Error, JsonCodec};

/// Build an object node from key/document pairs. Later keys win.
pub fn map_to_document<I>(entries: I) -> Document
where
    I: IntoIterator<Item = (String, Document)>,
{
    entries.into_iter().collect()
}

/// Render one document the way a string map shows it.
///
/// Strings are returned verbatim; everything else is compact JSON text.
pub fn display_string(document: &Document) -> String {
    match document {
        Document::String(s) => s.clone(),
        other => document_to_json(other.clone()).to_string(),
    }
}

/// Flatten an object node into key → display string.
pub fn document_to_string_map(document: &Document) -> Result<BTreeMap<String, String>, Error> {
    let map = expect_object(document)?;
    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), display_string(value)))
        .collect())
}

/// Parse JSON text whose top level is an object into key → document.
pub fn text_to_document_map(text: &str) -> Result<BTreeMap<String, Document>, Error> {
    match JsonCodec::default().decode(text)? {
        Document::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            found: other.kind(),
        }),
    }
}

/// Parse JSON text whose top level is an object into key → display string.
pub fn text_to_string_map(text: &str) -> Result<BTreeMap<String, String>, Error> {
    let document = JsonCodec::default().decode(text)?;
    document_to_string_map(&document)
}

fn expect_object(document: &Document) -> Result<&Map, Error> {
    document.as_object().ok_or(Error::NotAnObject {
        found: document.kind(),
    })
}
