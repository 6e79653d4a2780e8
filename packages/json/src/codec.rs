//! JSON codec implementation.

use jsonmap_document::Document;

use crate::convert::{document_to_json, json_to_document};
use crate::Error;

/// Parses JSON text into documents and prints documents as JSON text.
///
/// # Example
///
/// ```rust
/// use jsonmap_json::JsonCodec;
/// use jsonmap_document::Document;
///
/// let codec = JsonCodec::default();
/// let document = codec.decode(r#"{"username": "jondoe"}"#).unwrap();
///
/// assert_eq!(document.get("username"), Some(&Document::from("jondoe")));
/// assert_eq!(codec.encode(&document).unwrap(), r#"{"username":"jondoe"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// A codec that prints indented, multi-line JSON.
    pub fn pretty() -> Self {
        JsonCodec { pretty: true }
    }

    pub fn decode(&self, text: &str) -> Result<Document, Error> {
        let json: serde_json::Value = serde_json::from_str(text).map_err(Error::Decode)?;
        Ok(json_to_document(json))
    }

    pub fn encode(&self, document: &Document) -> Result<String, Error> {
        let json = document_to_json(document.clone());
        if self.pretty {
            serde_json::to_string_pretty(&json).map_err(Error::Encode)
        } else {
            serde_json::to_string(&json).map_err(Error::Encode)
        }
    }
}
