//! Error types for the mapping engine.
//!
//! Every variant carries a stable code, and `Display` renders as
//! `[code] message` so the code survives into logs and chained errors.

/// Errors raised while mapping between objects and documents.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("[JSONMAP-MARKER] {type_name} is not registered as mappable")]
    MissingMarker { type_name: String },

    #[error("[JSONMAP-EMPTY] {strategy} strategy produced nothing for {type_name}")]
    EmptyResult {
        type_name: String,
        strategy: &'static str,
    },

    #[error("[JSONMAP-NO-CONSTRUCTOR] no usable constructor for {type_name}")]
    ConstructorNotFound { type_name: String },

    #[error("[JSONMAP-AMBIGUOUS-CONSTRUCTOR] {candidates} constructors of {type_name} match its fields")]
    AmbiguousConstructor { type_name: String, candidates: usize },

    #[error("[JSONMAP-PARAMETER-ALIAS] parameter {position} of the {type_name} constructor has no alias")]
    MissingAliasOnParameter { type_name: String, position: usize },

    #[error("[JSONMAP-DEPTH] recursion depth {depth} reached the limit of {max}")]
    RecursionLimitExceeded { depth: usize, max: usize },

    #[error("[JSONMAP-ACCESS] {type_name}::{member} is not accessible")]
    ReflectionAccessDenied { type_name: String, member: String },

    #[error("[JSONMAP-COERCION] could not convert nested object into {target}")]
    TypeCoercionFailure {
        target: String,
        #[source]
        source: Box<Error>,
    },

    #[error("[JSONMAP-TYPE] expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("[JSONMAP-INVOCATION] {member} failed: {message}")]
    Invocation { member: String, message: String },
}

impl Error {
    /// The stable code of this error, without brackets.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingMarker { .. } => "JSONMAP-MARKER",
            Error::EmptyResult { .. } => "JSONMAP-EMPTY",
            Error::ConstructorNotFound { .. } => "JSONMAP-NO-CONSTRUCTOR",
            Error::AmbiguousConstructor { .. } => "JSONMAP-AMBIGUOUS-CONSTRUCTOR",
            Error::MissingAliasOnParameter { .. } => "JSONMAP-PARAMETER-ALIAS",
            Error::RecursionLimitExceeded { .. } => "JSONMAP-DEPTH",
            Error::ReflectionAccessDenied { .. } => "JSONMAP-ACCESS",
            Error::TypeCoercionFailure { .. } => "JSONMAP-COERCION",
            Error::TypeMismatch { .. } => "JSONMAP-TYPE",
            Error::Invocation { .. } => "JSONMAP-INVOCATION",
        }
    }

    pub(crate) fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
