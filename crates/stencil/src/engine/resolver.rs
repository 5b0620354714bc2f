//! Resource resolver contract for inclusion directives.

use std::collections::HashMap;

use crate::engine::error::BoxedError;
use crate::types::Value;

/// Maps a resource name to template text for inclusion.
///
/// Implemented outside the engine; how names map to storage is the
/// resolver's concern. Returning `Ok(None)` or empty text leaves the
/// inclusion marker verbatim in the output, while errors propagate out of
/// `render` unchanged.
pub trait ResourceResolver {
    /// Return the raw text of the named resource.
    ///
    /// `data` is an optional payload for the resource. The inclusion pass
    /// passes `None` at its call site, but the contract supports a payload
    /// for callers that invoke resolvers directly.
    fn resolve(&self, name: &str, data: Option<&Value>) -> Result<Option<String>, BoxedError>;
}

/// In-memory resolver backed by a name-to-text map.
///
/// Useful for embedded template sets and tests.
impl ResourceResolver for HashMap<String, String> {
    fn resolve(&self, name: &str, _data: Option<&Value>) -> Result<Option<String>, BoxedError> {
        Ok(self.get(name).cloned())
    }
}
