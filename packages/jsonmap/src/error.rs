#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Mapping(#[from] jsonmap_mapping::Error),

    #[error("{0}")]
    Json(#[from] jsonmap_json::Error),
}

impl Error {
    /// The stable code of a mapping error.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Mapping(err) => Some(err.code()),
            Error::Json(_) => None,
        }
    }
}
