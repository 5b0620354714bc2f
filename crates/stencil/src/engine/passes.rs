//! The three rewrite passes of the rendering pipeline.
//!
//! Each pass takes the previous pass's full output and produces a new
//! string; no shared mutable buffer. Markers that fail to parse, or that
//! parse but do not resolve, are copied through verbatim.

use crate::engine::error::RenderError;
use crate::engine::functions::FunctionRegistry;
use crate::engine::resolver::ResourceResolver;
use crate::engine::store::VariableStore;
use crate::parser::{parse_function, parse_inclusion, parse_variable};

/// One sweep over `input`, rewriting every marker recognized by `parse`.
///
/// `resolve` maps a parsed marker to replacement text; `Ok(None)` keeps the
/// marker verbatim. Replacement text is appended to the output without
/// being rescanned, so a sweep never processes text it produced itself.
fn rewrite<M>(
    input: &str,
    parse: impl Fn(&str) -> Option<(M, usize)>,
    mut resolve: impl FnMut(&M) -> Result<Option<String>, RenderError>,
) -> Result<String, RenderError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        rest = &rest[start..];
        match parse(rest) {
            Some((marker, consumed)) => {
                match resolve(&marker)? {
                    Some(replacement) => output.push_str(&replacement),
                    None => output.push_str(&rest[..consumed]),
                }
                rest = &rest[consumed..];
            }
            None => {
                // Not a marker for this pass. Emit one brace and rescan
                // from the next byte, so `{{{ $x }}}` still matches the
                // inner well-formed marker.
                output.push('{');
                rest = &rest[1..];
            }
        }
    }
    output.push_str(rest);
    Ok(output)
}

/// Variable pass: one sweep per binding, in store iteration order.
///
/// A marker is replaced when its identifier matches the binding key
/// case-insensitively; the value's `Display` form is inserted as raw text.
/// Because each binding gets its own sweep, a marker injected by an
/// earlier binding's value is visible to the sweeps of later bindings.
pub fn substitute_variables(input: &str, store: &VariableStore) -> Result<String, RenderError> {
    let mut output = input.to_string();
    for (key, value) in store.iter() {
        output = rewrite(&output, parse_variable, |marker| {
            Ok(marker
                .name
                .eq_ignore_ascii_case(key)
                .then(|| value.to_string()))
        })?;
    }
    Ok(output)
}

/// Function pass: a single sweep over the post-substitution text.
///
/// Registered functions are invoked with the parsed argument list and the
/// marker is replaced by the returned value's string form; function return
/// values are not rescanned for further markers. Unregistered names stay
/// verbatim, and function failures propagate unwrapped.
pub fn apply_functions(input: &str, registry: &FunctionRegistry) -> Result<String, RenderError> {
    rewrite(input, parse_function, |marker| {
        let Some(function) = registry.get(&marker.name) else {
            return Ok(None);
        };
        let value = function(&marker.args).map_err(|source| RenderError::Function {
            name: marker.name.clone(),
            source,
        })?;
        Ok(Some(value.to_string()))
    })
}

/// Inclusion pass: a single sweep, run last so directives whose resource
/// name was built by earlier passes see the substituted name.
///
/// Non-empty resolver content replaces the marker verbatim and is not
/// rescanned for nested markers. Empty or absent content, or the absence
/// of a resolver, keeps the marker verbatim.
pub fn resolve_inclusions(
    input: &str,
    resolver: Option<&dyn ResourceResolver>,
) -> Result<String, RenderError> {
    let Some(resolver) = resolver else {
        return Ok(input.to_string());
    };
    rewrite(input, parse_inclusion, |marker| {
        let content = resolver
            .resolve(&marker.resource, None)
            .map_err(|source| RenderError::Resolve {
                name: marker.resource.clone(),
                source,
            })?;
        Ok(content.filter(|text| !text.is_empty()))
    })
}
