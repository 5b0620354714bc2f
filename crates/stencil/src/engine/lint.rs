//! Post-render diagnostics for markers that survived rendering.
//!
//! Rendering is fail-open: unknown variables, functions, and resources are
//! left verbatim rather than erroring. This module scans rendered output
//! for those survivors and attaches close-name suggestions, so partially
//! templated output stays easy to debug.

use strsim::levenshtein;

use crate::engine::functions::FunctionRegistry;
use crate::engine::store::VariableStore;
use crate::parser::{parse_function, parse_inclusion, parse_variable};

/// The kind of marker that survived rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A variable placeholder with no matching binding.
    Variable,
    /// A function call naming an unregistered function.
    Function,
    /// An inclusion directive the resolver returned nothing for.
    Inclusion,
}

/// A marker left verbatim in rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedMarker {
    pub kind: MarkerKind,
    /// Variable identifier, function name, or resource name.
    pub name: String,
    /// Close known names, best match first.
    pub suggestions: Vec<String>,
}

/// Rendered output together with unresolved-marker diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// The rendered string, identical to what `render` returns.
    pub output: String,
    /// Markers that survived rendering, in output order.
    pub unresolved: Vec<UnresolvedMarker>,
}

impl RenderReport {
    /// True when every marker in the template resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Scan rendered output for markers that survived all three passes.
pub(crate) fn scan_unresolved(
    output: &str,
    store: &VariableStore,
    functions: &FunctionRegistry,
) -> Vec<UnresolvedMarker> {
    let variable_names: Vec<String> = store.keys().map(str::to_string).collect();
    let mut function_names: Vec<String> = functions.names().map(str::to_string).collect();
    function_names.sort_unstable();

    let mut unresolved = Vec::new();
    let mut rest = output;
    while let Some(start) = rest.find("{{") {
        rest = &rest[start..];
        if let Some((marker, consumed)) = parse_inclusion(rest) {
            unresolved.push(UnresolvedMarker {
                kind: MarkerKind::Inclusion,
                name: marker.resource,
                suggestions: Vec::new(),
            });
            rest = &rest[consumed..];
        } else if let Some((marker, consumed)) = parse_function(rest) {
            let suggestions = compute_suggestions(&marker.name, &function_names);
            unresolved.push(UnresolvedMarker {
                kind: MarkerKind::Function,
                name: marker.name,
                suggestions,
            });
            rest = &rest[consumed..];
        } else if let Some((marker, consumed)) = parse_variable(rest) {
            let suggestions = compute_suggestions(&marker.name, &variable_names);
            unresolved.push(UnresolvedMarker {
                kind: MarkerKind::Variable,
                name: marker.name,
                suggestions,
            });
            rest = &rest[consumed..];
        } else {
            rest = &rest[1..];
        }
    }
    unresolved
}

/// Compute up to three "did you mean" candidates for `input` from
/// `available`, best match first.
///
/// The edit-distance cap is 1 for names of three characters or fewer and 2
/// otherwise; exact matches are excluded. Ties break alphabetically.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let max_distance = if input.len() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| (1..=max_distance).contains(distance))
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
