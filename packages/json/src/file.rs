use std::fs;
use std::path::Path;

use jsonmap_document::Document;

use crate::{Error, JsonCodec};

/// Load and parse a JSON file into a document.
pub fn document_from_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let path = path.as_ref();
    log::debug!("Reading {}...", path.display());

    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    JsonCodec::default().decode(&text)
}
