//! Integration tests for unresolved-marker reporting and suggestions.

use std::collections::HashMap;

use stencil::{MarkerKind, TemplateEngine, Value, compute_suggestions};

// =============================================================================
// Reports
// =============================================================================

#[test]
fn fully_resolved_template_reports_complete() {
    let mut template = TemplateEngine::new("Hello, {{ $name }}!");
    template.assign("name", "Ada");
    let report = template.render_with_report().unwrap();
    assert!(report.is_complete());
    assert_eq!(report.output, "Hello, Ada!");
}

#[test]
fn misspelled_variable_is_reported_with_suggestion() {
    let mut template = TemplateEngine::new("Hello, {{ $nmae }}!");
    template.assign("name", "Ada");
    let report = template.render_with_report().unwrap();
    assert_eq!(report.output, "Hello, {{ $nmae }}!");
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].kind, MarkerKind::Variable);
    assert_eq!(report.unresolved[0].name, "nmae");
    assert_eq!(report.unresolved[0].suggestions, vec!["name"]);
}

#[test]
fn unregistered_function_is_reported_with_suggestion() {
    let mut template = TemplateEngine::new("{{ dobule(3) }}");
    template.register_function("double", |_| Ok(Value::Null));
    let report = template.render_with_report().unwrap();
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].kind, MarkerKind::Function);
    assert_eq!(report.unresolved[0].name, "dobule");
    assert_eq!(report.unresolved[0].suggestions, vec!["double"]);
}

#[test]
fn unresolved_inclusion_is_reported() {
    let template = TemplateEngine::new("{{ @extends(\"__sidebar__\") }}");
    let report = template.render_with_report().unwrap();
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].kind, MarkerKind::Inclusion);
    assert_eq!(report.unresolved[0].name, "sidebar");
}

#[test]
fn survivors_are_reported_in_output_order() {
    let mut template = TemplateEngine::new("{{ $a }} {{ missing() }} {{ $b }}");
    template.assign("a", "A");
    let report = template.render_with_report().unwrap();
    let names: Vec<&str> = report
        .unresolved
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["missing", "b"]);
}

// =============================================================================
// Suggestion scoring
// =============================================================================

#[test]
fn compute_suggestions_finds_similar_names() {
    let available = vec![
        "one".to_string(),
        "other".to_string(),
        "few".to_string(),
        "many".to_string(),
    ];

    // "on" is close to "one" (distance 1)
    assert_eq!(compute_suggestions("on", &available), vec!["one"]);

    // "oter" is within distance 2 of both "other" and "one"; closest first
    let suggestions = compute_suggestions("oter", &available);
    assert_eq!(suggestions[0], "other");
    assert!(suggestions.contains(&"one".to_string()));

    // "xyz" has no close matches
    assert!(compute_suggestions("xyz", &available).is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    assert!(compute_suggestions("item", &available).len() <= 3);
}

#[test]
fn compute_suggestions_excludes_exact_matches() {
    let available = vec!["name".to_string()];
    assert!(compute_suggestions("name", &available).is_empty());
}

// =============================================================================
// Interaction with resolvers
// =============================================================================

#[test]
fn resolved_inclusion_does_not_appear_in_report() {
    let mut template = TemplateEngine::new("{{ @extends(\"__header__\") }}");
    template.set_resolver(HashMap::from([(
        "header".to_string(),
        "<h1>Hi</h1>".to_string(),
    )]));
    let report = template.render_with_report().unwrap();
    assert!(report.is_complete());
    assert_eq!(report.output, "<h1>Hi</h1>");
}
