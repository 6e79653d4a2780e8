use jsonmap_document::Document;
use jsonmap_json::JsonCodec;
use jsonmap_mapping::{Mappable, MappingContext, MappingOptions, ObjectType};

use crate::Error;

/// A configured entry point for every object ⇄ document operation.
///
/// ```rust
/// use jsonmap::Mapper;
///
/// let mapper = Mapper::new().allow_private_access(true).pretty();
/// assert!(mapper.options().allow_private_access);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper {
    options: MappingOptions,
    codec: JsonCodec,
}

impl Mapper {
    pub fn new() -> Self {
        Mapper::default()
    }

    pub fn with_options(options: MappingOptions) -> Self {
        Mapper {
            options,
            ..Mapper::default()
        }
    }

    pub fn allow_private_access(mut self, allow: bool) -> Self {
        self.options.allow_private_access = allow;
        self
    }

    /// Print documents as indented JSON.
    pub fn pretty(mut self) -> Self {
        self.codec = JsonCodec::pretty();
        self
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    fn context(&self) -> MappingContext {
        MappingContext::new(&self.options)
    }

    /// Write `value` as a document, through `declared` when given.
    pub fn object_to_document<T: Mappable>(
        &self,
        value: &T,
        declared: Option<&ObjectType>,
    ) -> Result<Document, Error> {
        Ok(jsonmap_mapping::to_document(value, declared, &self.context())?)
    }

    pub fn object_to_document_string<T: Mappable>(
        &self,
        value: &T,
        declared: Option<&ObjectType>,
    ) -> Result<String, Error> {
        let document = self.object_to_document(value, declared)?;
        Ok(self.codec.encode(&document)?)
    }

    /// Read a new `T` from an object node.
    pub fn document_to_value<T: Mappable>(&self, document: &Document) -> Result<T, Error> {
        Ok(jsonmap_mapping::from_document(document, &self.context())?)
    }

    /// Parse JSON text and read a new `T` from it.
    pub fn text_to_value<T: Mappable>(&self, text: &str) -> Result<T, Error> {
        let document = self.codec.decode(text)?;
        self.document_to_value(&document)
    }

    /// Apply the setters of `declared` (or of `T`) to an existing instance.
    pub fn populate_instance<T: Mappable>(
        &self,
        document: &Document,
        existing: &mut T,
        declared: Option<&ObjectType>,
    ) -> Result<(), Error> {
        Ok(jsonmap_mapping::populate(
            document,
            existing,
            declared,
            &self.context(),
        )?)
    }
}
