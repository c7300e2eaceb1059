//! Import tests for the wiki format (markup → intermediate)

use super::{Case, EMPHASIS, HEADINGS, IMAGES, LINKS, LISTS, OPAQUE, TABLES, TEMPLATES};
use insta::assert_snapshot;
use wiki_babel::format::Format;
use wiki_babel::formats::WikiFormat;
use wiki_babel::{markup_to_intermediate, TranscodeOptions, Transcoder};

fn assert_imports(cases: &[Case]) {
    for case in cases {
        assert_eq!(
            markup_to_intermediate(case.markup),
            case.intermediate,
            "{}: converting {:?}",
            case.name,
            case.markup
        );
    }
}

#[test]
fn test_emphasis() {
    assert_imports(EMPHASIS);
}

#[test]
fn test_links() {
    assert_imports(LINKS);
}

#[test]
fn test_images() {
    assert_imports(IMAGES);
}

#[test]
fn test_protected_spans() {
    assert_imports(OPAQUE);
}

#[test]
fn test_templates() {
    assert_imports(TEMPLATES);
}

#[test]
fn test_headings() {
    assert_imports(HEADINGS);
}

#[test]
fn test_lists() {
    assert_imports(LISTS);
}

#[test]
fn test_tables() {
    assert_imports(TABLES);
}

#[test]
fn test_parse_through_format_trait() {
    let doc = WikiFormat::default().parse("''a'' [[B]]").unwrap();
    assert_eq!(doc.as_str(), r#"<em>a</em> <a href="B">B</a>"#);
}

#[test]
fn test_emphasis_inside_template_argument() {
    assert_snapshot!(
        markup_to_intermediate("{{note|text=''careful''}}"),
        @r#"<template name="note"><arg name="text"><em>careful</em></arg></template>"#
    );
}

#[test]
fn test_protected_template_is_not_expanded() {
    assert_snapshot!(
        markup_to_intermediate("<nowiki>{{x}}</nowiki>"),
        @r#"<nowiki data="e3t4fX0="></nowiki>"#
    );
}

#[test]
fn test_unbalanced_braces_stay_literal() {
    assert_snapshot!(markup_to_intermediate("a }} b {{c"), @"a }} b {{c");
}

#[test]
fn test_depth_limit_keeps_deep_calls_literal() {
    let transcoder = Transcoder::new(TranscodeOptions {
        max_depth: 1,
        ..TranscodeOptions::default()
    });
    assert_snapshot!(
        transcoder.to_intermediate("{{a|{{b|{{c}}}}}}"),
        @r#"<template name="a"><arg name=""><template name="b"><arg name="">{{c}}</arg></template></arg></template>"#
    );
}

#[test]
fn test_depth_limit_keeps_deep_call_arguments_together() {
    let transcoder = Transcoder::new(TranscodeOptions {
        max_depth: 1,
        ..TranscodeOptions::default()
    });
    assert_snapshot!(
        transcoder.to_intermediate("{{a|{{b|{{c|d}}}}}}"),
        @r#"<template name="a"><arg name=""><template name="b"><arg name="">{{c|d}}</arg></template></arg></template>"#
    );
}

#[test]
fn test_link_label_pipes_stay_in_one_argument() {
    assert_snapshot!(
        markup_to_intermediate("{{t|[[Bar|a|b]]}}"),
        @r#"<template name="t"><arg name=""><a href="Bar">a|b</a></arg></template>"#
    );
    assert_snapshot!(
        markup_to_intermediate("{{a|b=[[c|d|e]]}}"),
        @r#"<template name="a"><arg name="b"><a href="c">d|e</a></arg></template>"#
    );
}

#[test]
fn test_stray_closing_tags_are_dropped() {
    assert_eq!(markup_to_intermediate("foo bar</bar> baz"), "foo bar baz");
}

#[test]
fn test_table_with_attributes_and_packed_cells() {
    assert_eq!(
        markup_to_intermediate("{| class=\"wide\"\n! A !! B\n|-\n| 1 || 2\n|}"),
        "<table  class=\"wide\">\n<tr>\n<th > A </th>\n<th > B</th>\n</tr>\n<tr >\n<td > 1 </td>\n<td > 2</td>\n</tr>\n</table>"
    );
}
