//! Integration tests for the inclusion pass.

use std::collections::HashMap;

use stencil::{BoxedError, RenderError, ResourceResolver, TemplateEngine, Value};

fn pages(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect()
}

struct FailingResolver;

impl ResourceResolver for FailingResolver {
    fn resolve(&self, _name: &str, _data: Option<&Value>) -> Result<Option<String>, BoxedError> {
        Err("storage offline".into())
    }
}

// =============================================================================
// Splicing
// =============================================================================

#[test]
fn resolved_content_replaces_the_marker() {
    let mut template = TemplateEngine::new("{{ @extends(\"__header__\") }}<p>body</p>");
    template.set_resolver(pages(&[("header", "<h1>Hi</h1>")]));
    assert_eq!(template.render().unwrap(), "<h1>Hi</h1><p>body</p>");
}

#[test]
fn whitespace_in_directive_is_tolerated() {
    let mut template = TemplateEngine::new("{{   @extends( \"__header__\" )   }}");
    template.set_resolver(pages(&[("header", "ok")]));
    assert_eq!(template.render().unwrap(), "ok");
}

#[test]
fn resource_name_may_contain_underscores() {
    let mut template = TemplateEngine::new("{{ @extends(\"__main__nav__\") }}");
    template.set_resolver(pages(&[("main__nav", "nav")]));
    assert_eq!(template.render().unwrap(), "nav");
}

// =============================================================================
// Missing or empty resources
// =============================================================================

#[test]
fn unknown_resource_leaves_marker_verbatim() {
    let mut template = TemplateEngine::new("{{ @extends(\"__missing__\") }}");
    template.set_resolver(pages(&[("header", "x")]));
    assert_eq!(template.render().unwrap(), "{{ @extends(\"__missing__\") }}");
}

#[test]
fn empty_resource_leaves_marker_verbatim() {
    let mut template = TemplateEngine::new("{{ @extends(\"__blank__\") }}");
    template.set_resolver(pages(&[("blank", "")]));
    assert_eq!(template.render().unwrap(), "{{ @extends(\"__blank__\") }}");
}

#[test]
fn without_resolver_markers_are_untouched() {
    let template = TemplateEngine::new("{{ @extends(\"__header__\") }}");
    assert_eq!(template.render().unwrap(), "{{ @extends(\"__header__\") }}");
}

#[test]
fn directive_without_underscore_wrapper_is_not_recognized() {
    let mut template = TemplateEngine::new("{{ @extends(\"header\") }}");
    template.set_resolver(pages(&[("header", "x")]));
    assert_eq!(template.render().unwrap(), "{{ @extends(\"header\") }}");
}

// =============================================================================
// Pass ordering
// =============================================================================

#[test]
fn resource_name_built_from_a_variable_is_respected() {
    // The inclusion pass runs last, so it sees the substituted name.
    let mut template = TemplateEngine::new("{{ @extends(\"__{{ $page }}__\") }}");
    template.assign("page", "header");
    template.set_resolver(pages(&[("header", "<h1>Hi</h1>")]));
    assert_eq!(template.render().unwrap(), "<h1>Hi</h1>");
}

#[test]
fn included_content_is_not_rescanned() {
    let mut template = TemplateEngine::new("{{ @extends(\"__outer__\") }}");
    template.assign("x", "X");
    template.set_resolver(pages(&[
        ("outer", "{{ $x }} {{ @extends(\"__inner__\") }}"),
        ("inner", "should not appear"),
    ]));
    assert_eq!(
        template.render().unwrap(),
        "{{ $x }} {{ @extends(\"__inner__\") }}"
    );
}

// =============================================================================
// Failure propagation
// =============================================================================

#[test]
fn resolver_error_propagates_with_resource_name() {
    let mut template = TemplateEngine::new("{{ @extends(\"__header__\") }}");
    template.set_resolver(FailingResolver);
    match template.render() {
        Err(RenderError::Resolve { name, source }) => {
            assert_eq!(name, "header");
            assert_eq!(source.to_string(), "storage offline");
        }
        other => panic!("expected resolve error, got {other:?}"),
    }
}
