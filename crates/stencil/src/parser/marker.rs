//! Marker recognizers using winnow.
//!
//! Each recognizer parses exactly one marker from the head of the input and
//! backtracks on anything malformed, so unrecognized text flows through a
//! rewrite pass untouched. Grammar (whitespace-tolerant around braces and
//! parentheses):
//! - Variable:  `{{ $name }}`
//! - Function:  `{{ name(arg1, arg2) }}`
//! - Inclusion: `{{ @extends("__resource__") }}`

use super::ast::{FunctionMarker, InclusionMarker, VariableMarker};
use crate::types::Value;
use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a variable marker at the head of `input`.
///
/// Returns the marker and the number of bytes consumed, or `None` if the
/// input does not start with a well-formed variable marker.
pub fn parse_variable(input: &str) -> Option<(VariableMarker, usize)> {
    run(variable_marker, input)
}

/// Parse a function-call marker at the head of `input`.
///
/// Returns the marker and the number of bytes consumed, or `None` if the
/// input does not start with a well-formed function marker.
pub fn parse_function(input: &str) -> Option<(FunctionMarker, usize)> {
    run(function_marker, input)
}

/// Parse an inclusion marker at the head of `input`.
///
/// Returns the marker and the number of bytes consumed, or `None` if the
/// input does not start with a well-formed inclusion marker.
pub fn parse_inclusion(input: &str) -> Option<(InclusionMarker, usize)> {
    run(inclusion_marker, input)
}

/// Run a marker parser against the head of `input`, reporting how many
/// bytes it consumed.
fn run<'i, M>(
    mut parser: impl FnMut(&mut &'i str) -> ModalResult<M>,
    input: &'i str,
) -> Option<(M, usize)> {
    let mut rest = input;
    let marker = parser(&mut rest).ok()?;
    Some((marker, input.len() - rest.len()))
}

/// `{{` ws `$` identifier ws `}}`
fn variable_marker(input: &mut &str) -> ModalResult<VariableMarker> {
    delimited(("{{", ws, '$'), identifier, (ws, "}}"))
        .map(|name: &str| VariableMarker {
            name: name.to_string(),
        })
        .parse_next(input)
}

/// `{{` ws identifier ws `(` arguments `)` ws `}}`
///
/// The raw argument span may not contain `)` or a newline; unbalanced
/// parentheses simply fail to parse.
fn function_marker(input: &mut &str) -> ModalResult<FunctionMarker> {
    let (name, raw): (&str, &str) = delimited(
        ("{{", ws),
        (
            identifier,
            delimited(
                (ws, '('),
                take_while(0.., |c: char| c != ')' && c != '\n'),
                ')',
            ),
        ),
        (ws, "}}"),
    )
    .parse_next(input)?;

    Ok(FunctionMarker {
        name: name.to_string(),
        args: parse_arguments(raw),
    })
}

/// `{{` ws `@extends(` ws `"__` resource `__"` ws `)` ws `}}`
fn inclusion_marker(input: &mut &str) -> ModalResult<InclusionMarker> {
    let resource = delimited(
        ("{{", ws, "@extends(", ws, '"'),
        take_while(1.., |c: char| c != '"').verify_map(unwrap_resource),
        ('"', ws, ')', ws, "}}"),
    )
    .parse_next(input)?;

    Ok(InclusionMarker {
        resource: resource.to_string(),
    })
}

/// Split the raw argument span on commas and interpret each token.
///
/// No nested-comma or nested-parenthesis handling: an argument containing a
/// literal comma is split apart. Splitting an empty span yields a single
/// empty-string argument.
fn parse_arguments(raw: &str) -> Vec<Value> {
    raw.split(',').map(argument).collect()
}

/// Interpret one argument token: unquoted `null` is the null value,
/// anything else is a literal string with one layer of quotes stripped.
fn argument(token: &str) -> Value {
    let token = token.trim();
    if token == "null" {
        return Value::Null;
    }
    Value::String(strip_quotes(token).to_string())
}

/// Strip a single layer of surrounding single or double quotes.
fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix(['\'', '"']).unwrap_or(token);
    token.strip_suffix(['\'', '"']).unwrap_or(token)
}

/// Strip the `__resource__` wrapper, requiring a non-empty resource name.
fn unwrap_resource(quoted: &str) -> Option<&str> {
    let inner = quoted.strip_prefix("__")?.strip_suffix("__")?;
    if inner.is_empty() { None } else { Some(inner) }
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an identifier (alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
