//! Function registry for embedded template calls.
//!
//! The function pass looks names up in an explicit, caller-supplied
//! registry rather than any ambient namespace. A marker naming an
//! unregistered function is left untouched.

use std::collections::HashMap;

use crate::engine::error::BoxedError;
use crate::types::Value;

/// Boxed callable invoked by the function pass.
///
/// Receives the parsed arguments in call order; each is `Value::String` or
/// `Value::Null`. The returned value's `Display` form replaces the marker.
/// Errors propagate out of `render` as [`RenderError::Function`].
///
/// [`RenderError::Function`]: crate::engine::RenderError::Function
pub type TemplateFn = Box<dyn Fn(&[Value]) -> Result<Value, BoxedError> + Send + Sync>;

/// Registry mapping function names to callables.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, TemplateFn>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under `name`, replacing any previous
    /// registration with that name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        function: impl Fn(&[Value]) -> Result<Value, BoxedError> + Send + Sync + 'static,
    ) {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Get a registered function by exact name.
    pub fn get(&self, name: &str) -> Option<&TemplateFn> {
        self.functions.get(name)
    }

    /// Check whether a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
