//! Error types for rendering.

use thiserror::Error;

/// Boxed error raised by a collaborator (an invoked function or a resource
/// resolver).
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// An error that occurred during rendering.
///
/// Rendering itself never fails: unmatched and malformed markers are left
/// verbatim in the output. These variants only surface failures raised by
/// collaborators, propagated without local recovery or retry.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An invoked template function returned an error.
    #[error("function '{name}' failed: {source}")]
    Function {
        name: String,
        #[source]
        source: BoxedError,
    },

    /// The resource resolver failed while loading an included resource.
    #[error("failed to resolve resource '{name}': {source}")]
    Resolve {
        name: String,
        #[source]
        source: BoxedError,
    },
}
