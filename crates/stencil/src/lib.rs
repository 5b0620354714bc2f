pub mod engine;
pub mod parser;
pub mod types;

pub use engine::{
    BoxedError, FunctionRegistry, MarkerKind, RenderError, RenderReport, ResourceResolver,
    TemplateEngine, TemplateFn, UnresolvedMarker, VariableStore, compute_suggestions,
};
pub use types::Value;

/// Creates an ordered `Vec<(String, Value)>` of bindings from key-value
/// pairs, suitable for `assign_many`.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans,
/// and strings can be passed directly. Pair order is preserved, matching
/// the variable store's insertion-order semantics.
///
/// # Example
///
/// ```
/// use stencil::{TemplateEngine, bindings};
///
/// let mut template = TemplateEngine::new("{{ $name }} is {{ $age }}");
/// template.assign_many(bindings! { "name" => "Alice", "age" => 30 });
/// assert_eq!(template.render().unwrap(), "Alice is 30");
/// ```
#[macro_export]
macro_rules! bindings {
    {} => {
        ::std::vec::Vec::<(::std::string::String, $crate::Value)>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        ::std::vec::Vec::from([
            $((
                ::std::string::ToString::to_string(&$key),
                ::std::convert::Into::<$crate::Value>::into($value),
            ),)+
        ])
    };
}
