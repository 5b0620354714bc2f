//! Public marker types for the three recognized template directives.
//!
//! These types are public to enable external tooling (reporters, linters).
//! They are ephemeral: each rewrite pass parses markers out of the current
//! text, acts on them, and discards them.

use crate::types::Value;

/// A variable placeholder: `{{ $name }}`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableMarker {
    /// Identifier after the `$` sigil, as written in the template.
    pub name: String,
}

/// An embedded function call: `{{ name(arg1, arg2) }}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMarker {
    /// Function name.
    pub name: String,
    /// Parsed arguments, in call order.
    ///
    /// Each argument is `Value::String` (one layer of surrounding quotes
    /// stripped) or `Value::Null` for the unquoted literal `null`.
    pub args: Vec<Value>,
}

/// An inclusion directive: `{{ @extends("__resource__") }}`.
#[derive(Debug, Clone, PartialEq)]
pub struct InclusionMarker {
    /// Resource name with the `__` wrapper removed.
    pub resource: String,
}
