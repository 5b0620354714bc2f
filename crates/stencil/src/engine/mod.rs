//! The rendering engine: variable store, function registry, resolver
//! contract, and the three-pass pipeline.

mod error;
mod functions;
mod lint;
mod passes;
mod resolver;
mod store;

pub use error::{BoxedError, RenderError};
pub use functions::{FunctionRegistry, TemplateFn};
pub use lint::{MarkerKind, RenderReport, UnresolvedMarker, compute_suggestions};
pub use resolver::ResourceResolver;
pub use store::VariableStore;

use crate::types::Value;

/// A template plus the state needed to render it: bindings, registered
/// functions, and an optional resource resolver.
///
/// The template is set once at construction and never mutated; each render
/// call runs the three-pass pipeline (substitute variables, evaluate
/// functions, resolve inclusions) over it and returns a new string.
/// Bindings may be added incrementally between renders.
///
/// # Example
///
/// ```
/// use stencil::TemplateEngine;
///
/// let mut template = TemplateEngine::new("<p>Hello, {{ $name }}!</p>");
/// template.assign("name", "John");
/// assert_eq!(template.render().unwrap(), "<p>Hello, John!</p>");
/// ```
pub struct TemplateEngine {
    template: String,
    variables: VariableStore,
    functions: FunctionRegistry,
    resolver: Option<Box<dyn ResourceResolver>>,
}

impl TemplateEngine {
    /// Create an engine for `template` with no bindings, no functions, and
    /// no resolver.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: VariableStore::new(),
            functions: FunctionRegistry::new(),
            resolver: None,
        }
    }

    /// Insert or overwrite the binding for `key`. Always succeeds.
    pub fn assign(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.variables.assign(key, value);
    }

    /// Apply [`assign`](Self::assign) for every pair, in iteration order.
    /// A no-op for an empty iterator.
    pub fn assign_many<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.variables.assign_many(pairs);
    }

    /// Register a template function under `name`.
    ///
    /// Function markers naming `name` (exact match) are replaced by the
    /// function's result during rendering; see [`TemplateFn`] for the
    /// calling convention.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        function: impl Fn(&[Value]) -> Result<Value, BoxedError> + Send + Sync + 'static,
    ) {
        self.functions.register(name, function);
    }

    /// Inject the resolver consulted by the inclusion pass.
    ///
    /// Without a resolver, inclusion directives are left verbatim.
    pub fn set_resolver(&mut self, resolver: impl ResourceResolver + 'static) {
        self.resolver = Some(Box::new(resolver));
    }

    /// The template text this engine renders.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Current bindings.
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Registered template functions.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Render the template: substitute variables, evaluate functions,
    /// resolve inclusions, in that order. Each pass scans the previous
    /// pass's full output.
    ///
    /// Unmatched and malformed markers survive verbatim; the only errors
    /// are failures raised by invoked functions or by the resolver, which
    /// propagate without local recovery.
    pub fn render(&self) -> Result<String, RenderError> {
        let output = passes::substitute_variables(&self.template, &self.variables)?;
        let output = passes::apply_functions(&output, &self.functions)?;
        passes::resolve_inclusions(&output, self.resolver.as_deref())
    }

    /// Render, then scan the final output for markers that survived and
    /// report them with close-name suggestions.
    ///
    /// The output string is identical to what [`render`](Self::render)
    /// returns; the report is purely diagnostic.
    pub fn render_with_report(&self) -> Result<RenderReport, RenderError> {
        let output = self.render()?;
        let unresolved = lint::scan_unresolved(&output, &self.variables, &self.functions);
        Ok(RenderReport { output, unresolved })
    }
}
