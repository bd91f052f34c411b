//! Integration tests for the validating selector builder.

use cassia_selector::{SelectorBuilder, SelectorError};

#[test]
fn test_build_single_compound_selector() {
    let mut builder = SelectorBuilder::new();
    let _ = builder
        .element("a")
        .unwrap()
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();

    assert_eq!(builder.build().to_string(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_build_id_with_repeated_classes() {
    let mut builder = SelectorBuilder::new();
    let _ = builder
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();

    assert_eq!(builder.build().to_string(), "#main.container.editable");
}

#[test]
fn test_build_full_fragment_order() {
    let mut builder = SelectorBuilder::new();
    let _ = builder
        .element("input")
        .unwrap()
        .id("login")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("type=text")
        .unwrap()
        .pseudo_class("enabled")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();

    assert_eq!(
        builder.build().to_string(),
        "input#login.wide[type=text]:enabled::placeholder"
    );
}

#[test]
fn test_duplicate_element_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.element("div").unwrap();
    assert_eq!(
        builder.element("span").unwrap_err(),
        SelectorError::DuplicateFragment
    );
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.id("x").unwrap();
    assert_eq!(builder.id("y").unwrap_err(), SelectorError::DuplicateFragment);
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.pseudo_element("before").unwrap();
    assert_eq!(
        builder.pseudo_element("after").unwrap_err(),
        SelectorError::DuplicateFragment
    );
}

#[test]
fn test_id_after_class_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.class("x").unwrap();
    assert_eq!(builder.id("y").unwrap_err(), SelectorError::OrderViolation);
}

#[test]
fn test_id_after_pseudo_element_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.pseudo_element("selection").unwrap();
    assert_eq!(builder.id("y").unwrap_err(), SelectorError::OrderViolation);
}

#[test]
fn test_class_after_attribute_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.attr("href").unwrap();
    assert_eq!(
        builder.class("nav").unwrap_err(),
        SelectorError::OrderViolation
    );
}

#[test]
fn test_attribute_after_pseudo_class_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.pseudo_class("hover").unwrap();
    assert_eq!(
        builder.attr("href").unwrap_err(),
        SelectorError::OrderViolation
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_rejected() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.pseudo_element("first-line").unwrap();
    assert_eq!(
        builder.pseudo_class("hover").unwrap_err(),
        SelectorError::OrderViolation
    );
}

#[test]
fn test_legacy_tags_after_id_are_tolerated() {
    // `tr` and `img` may follow an id fragment; any other tag may not.
    let mut builder = SelectorBuilder::new();
    let _ = builder
        .element("table")
        .unwrap()
        .id("data")
        .unwrap()
        .element("tr")
        .unwrap();
    assert_eq!(builder.build().to_string(), "table#data   tr");

    let mut rejected = SelectorBuilder::new();
    let _ = rejected.element("table").unwrap().id("data").unwrap();
    assert_eq!(
        rejected.element("div").unwrap_err(),
        SelectorError::OrderViolation
    );
}

#[test]
fn test_element_on_nonempty_builder_starts_descendant_compound() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.class("container").unwrap().element("div").unwrap();

    // The descendant join carries the same one-space padding as every
    // other combinator, around a token that is itself a space.
    assert_eq!(builder.build().to_string(), ".container   div");
}

#[test]
fn test_builder_is_empty_after_build() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.element("a").unwrap().pseudo_class("visited").unwrap();
    assert_eq!(builder.build().to_string(), "a:visited");

    // Same instance, fresh session: no fragment or kind state survives.
    let _ = builder.element("div").unwrap().id("x").unwrap();
    assert_eq!(builder.build().to_string(), "div#x");
}

#[test]
fn test_empty_build_renders_empty_string() {
    let mut builder = SelectorBuilder::new();
    assert_eq!(builder.build().to_string(), "");
}

#[test]
fn test_order_violation_clears_kind_tracker() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.class("x").unwrap();
    assert_eq!(builder.id("y").unwrap_err(), SelectorError::OrderViolation);

    // With the tracker cleared, the same append is accepted on retry; the
    // fragments recorded before the error are untouched.
    let _ = builder.id("y").unwrap();
    assert_eq!(builder.build().to_string(), ".x#y");
}

#[test]
fn test_duplicate_error_keeps_kind_tracker() {
    let mut builder = SelectorBuilder::new();
    let _ = builder.id("x").unwrap();
    assert_eq!(builder.id("y").unwrap_err(), SelectorError::DuplicateFragment);

    // Unlike an ordering error, a duplicate leaves the tracker in place.
    assert_eq!(builder.id("z").unwrap_err(), SelectorError::DuplicateFragment);
}

#[test]
fn test_independent_builders_do_not_interfere() {
    let mut first = SelectorBuilder::new();
    let mut second = SelectorBuilder::new();

    let _ = first.element("ul").unwrap();
    let _ = second.element("ol").unwrap().class("steps").unwrap();
    let _ = first.class("nav").unwrap();

    assert_eq!(first.build().to_string(), "ul.nav");
    assert_eq!(second.build().to_string(), "ol.steps");
}
