//! The Document type - a JSON-shaped tree.

use std::collections::BTreeMap;

/// The key/value node of a `Document`.
pub type Map = BTreeMap<String, Document>;

/// A tree-shaped value following the JSON data model.
///
/// # Design Notes
///
/// - Object nodes use `BTreeMap`, so printed output is ordered by key
/// - Integers and floats are kept apart so integral values survive a round trip
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Document {
    /// JSON `null`.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of documents.
    Array(Vec<Document>),
    /// Object node with unique string keys.
    Object(Map),
}

impl Document {
    /// Create a null document.
    pub fn null() -> Self {
        Document::Null
    }

    /// Create an empty object node.
    pub fn object() -> Self {
        Document::Object(Map::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Document::Array(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Document::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Document::Array(_))
    }

    /// The JSON name of this node's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Integer(_) | Document::Float(_) => "number",
            Document::String(_) => "string",
            Document::Array(_) => "array",
            Document::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Look up a key on an object node.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_object()?.get(key)
    }

    /// Get a reference to a nested document by path.
    ///
    /// Array elements are addressed by their decimal index. Returns `None`
    /// when the path doesn't exist or runs through a scalar.
    pub fn get_path(&self, path: &[&str]) -> Option<&Document> {
        let mut current = self;
        for component in path {
            current = match current {
                Document::Object(map) => map.get(*component)?,
                Document::Array(arr) => {
                    let index: usize = component.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

// Conversion from common types

impl From<bool> for Document {
    fn from(v: bool) -> Self {
        Document::Bool(v)
    }
}

impl From<i64> for Document {
    fn from(v: i64) -> Self {
        Document::Integer(v)
    }
}

impl From<i32> for Document {
    fn from(v: i32) -> Self {
        Document::Integer(v as i64)
    }
}

impl From<f64> for Document {
    fn from(v: f64) -> Self {
        Document::Float(v)
    }
}

impl From<String> for Document {
    fn from(v: String) -> Self {
        Document::String(v)
    }
}

impl From<&str> for Document {
    fn from(v: &str) -> Self {
        Document::String(v.to_string())
    }
}

impl<T: Into<Document>> From<Vec<T>> for Document {
    fn from(v: Vec<T>) -> Self {
        Document::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Document {
    fn from(v: Map) -> Self {
        Document::Object(v)
    }
}

impl FromIterator<(String, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Document)>>(iter: I) -> Self {
        Document::Object(iter.into_iter().collect())
    }
}
