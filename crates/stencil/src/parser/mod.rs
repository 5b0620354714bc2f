//! Template marker parsers.
//!
//! This module provides recognition for the three marker kinds a template
//! can contain. Recognition is deliberately local: each function parses one
//! marker from the head of its input, and malformed text fails to match
//! rather than erroring, which is what lets a render pass copy it through
//! unchanged.

pub mod ast;
mod marker;

pub use ast::{FunctionMarker, InclusionMarker, VariableMarker};
pub use marker::{parse_function, parse_inclusion, parse_variable};
