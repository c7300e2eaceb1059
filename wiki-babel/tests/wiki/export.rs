//! Export tests for the wiki format (intermediate → markup)

use super::{Case, EMPHASIS, HEADINGS, IMAGES, LINKS, LISTS, OPAQUE, TABLES, TEMPLATES};
use insta::assert_snapshot;
use wiki_babel::format::Format;
use wiki_babel::formats::WikiFormat;
use wiki_babel::{intermediate_to_markup, Document};

fn assert_exports(cases: &[Case]) {
    for case in cases {
        assert_eq!(
            intermediate_to_markup(case.intermediate),
            case.expected_markup(),
            "{}: converting {:?}",
            case.name,
            case.intermediate
        );
    }
}

#[test]
fn test_emphasis() {
    assert_exports(EMPHASIS);
}

#[test]
fn test_links() {
    assert_exports(LINKS);
}

#[test]
fn test_images() {
    assert_exports(IMAGES);
}

#[test]
fn test_protected_spans() {
    assert_exports(OPAQUE);
}

#[test]
fn test_templates() {
    assert_exports(TEMPLATES);
}

#[test]
fn test_headings() {
    assert_exports(HEADINGS);
}

#[test]
fn test_lists() {
    assert_exports(LISTS);
}

#[test]
fn test_tables() {
    assert_exports(TABLES);
}

#[test]
fn test_serialize_through_format_trait() {
    let doc = Document::new("<strong>a</strong>");
    assert_eq!(WikiFormat::default().serialize(&doc).unwrap(), "'''a'''");
}

#[test]
fn test_bold_and_italic_synonyms() {
    assert_snapshot!(intermediate_to_markup("<b>a</b> <i>b</i>"), @"'''a''' ''b''");
}

#[test]
fn test_stray_template_text_becomes_positional() {
    assert_snapshot!(
        intermediate_to_markup(r#"<template name="x">loose<arg name="k">v</arg></template>"#),
        @"{{x|loose|k=v}}"
    );
}

#[test]
fn test_prefixed_tag_names_are_not_templates() {
    assert_eq!(
        intermediate_to_markup(r#"<template name="a"><arg name="">x<templates/></arg></template>"#),
        "{{a|x<templates/>}}"
    );
}

#[test]
fn test_undecodable_payload_stays_literal() {
    assert_snapshot!(
        intermediate_to_markup(r#"<ref data="!!!"></ref>"#),
        @r#"<ref data="!!!"></ref>"#
    );
}
