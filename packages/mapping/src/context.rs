//! Per-call mapping configuration and the recursion guard.

use serde::{Deserialize, Serialize};

use crate::Error;

/// How many nested objects a single mapping call may descend into.
///
/// Cyclic object graphs terminate by exhausting this depth.
pub const MAX_RECURSION_DEPTH: usize = 10;

/// Caller-facing switches for a mapping call.
///
/// Deserializable so applications can keep it next to their other settings:
///
/// ```rust
/// use jsonmap_mapping::MappingOptions;
///
/// let options: MappingOptions = serde_json::from_str(r#"{"allow_private_access": true}"#).unwrap();
/// assert!(options.allow_private_access);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Let the field strategies read private fields, write private or
    /// immutable fields and call private zero-argument constructors.
    pub allow_private_access: bool,
}

/// State threaded through one mapping call.
///
/// Nested objects are mapped with [`MappingContext::descend`], so every
/// sibling branch sees the same depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingContext {
    depth: usize,
    max_depth: usize,
    allow_private_access: bool,
}

impl MappingContext {
    /// A context at depth zero.
    pub fn new(options: &MappingOptions) -> Self {
        MappingContext {
            depth: 0,
            max_depth: MAX_RECURSION_DEPTH,
            allow_private_access: options.allow_private_access,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        MappingContext { max_depth, ..self }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn allow_private_access(&self) -> bool {
        self.allow_private_access
    }

    /// The context for a nested object one level down.
    pub fn descend(&self) -> Self {
        MappingContext {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Refuse any further work once the depth limit is reached.
    pub fn check_depth(&self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::RecursionLimitExceeded {
                depth: self.depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for MappingContext {
    fn default() -> Self {
        MappingContext::new(&MappingOptions::default())
    }
}
