//! The Document layer.
//!
//! A `Document` is the generic tree every other jsonmap layer speaks:
//! - the JSON layer parses text into it and prints it back out
//! - the mapping layer builds it from object instances and reads instances from it
//!
//! # Example
//!
//! ```rust
//! use jsonmap_document::Document;
//!
//! let doc: Document = vec![
//!     ("username".to_string(), Document::from("jondoe")),
//!     ("groups".to_string(), Document::from(vec!["group 1", "group 2"])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(doc.get("username").and_then(Document::as_str), Some("jondoe"));
//! assert_eq!(doc.get_path(&["groups", "1"]), Some(&Document::from("group 2")));
//! ```

mod document;

pub use document::{Document, Map};
