//! Conversions between Document and serde_json::Value.

use jsonmap_document::Document;

/// Convert a Document to serde_json::Value.
///
/// Non-finite floats have no JSON form and become `null`.
pub fn document_to_json(document: Document) -> serde_json::Value {
    match document {
        Document::Null => serde_json::Value::Null,
        Document::Bool(b) => serde_json::Value::Bool(b),
        Document::Integer(i) => serde_json::Value::Number(i.into()),
        Document::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Document::String(s) => serde_json::Value::String(s),
        Document::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(document_to_json).collect())
        }
        Document::Object(map) => serde_json::Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, document_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert serde_json::Value to a Document.
pub fn json_to_document(json: serde_json::Value) -> Document {
    match json {
        serde_json::Value::Null => Document::Null,
        serde_json::Value::Bool(b) => Document::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Document::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Document::Float(f)
            } else {
                // Fallback for numbers outside both ranges
                Document::String(n.to_string())
            }
        }
        serde_json::Value::String(s) => Document::String(s),
        serde_json::Value::Array(arr) => {
            Document::Array(arr.into_iter().map(json_to_document).collect())
        }
        serde_json::Value::Object(map) => Document::Object(
            map.into_iter()
                .map(|(k, v)| (k, json_to_document(v)))
                .collect(),
        ),
    }
}
