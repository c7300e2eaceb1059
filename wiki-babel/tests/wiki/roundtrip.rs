//! Round trip tests (markup → intermediate → markup)

use super::ALL;
use wiki_babel::{intermediate_to_markup, markup_to_intermediate, FormatRegistry};

#[test]
fn test_every_case_returns_to_canonical_markup() {
    for case in ALL.iter().flat_map(|cases| cases.iter()) {
        let back = intermediate_to_markup(&markup_to_intermediate(case.markup));
        assert_eq!(back, case.expected_markup(), "{}", case.name);
    }
}

#[test]
fn test_canonical_markup_is_a_fixed_point() {
    for case in ALL.iter().flat_map(|cases| cases.iter()) {
        let canonical = case.expected_markup();
        let back = intermediate_to_markup(&markup_to_intermediate(canonical));
        assert_eq!(back, canonical, "{}", case.name);
    }
}

#[test]
fn test_registry_round_trip() {
    let registry = FormatRegistry::default();
    let source = "== Intro ==\n* one ''two''\n{{cite|title=[[Page|A page]]}}";
    let html = registry.convert(source, "wiki", "html").unwrap();
    assert_eq!(registry.convert(&html, "html", "wiki").unwrap(), source);
}

#[test]
fn test_piped_link_labels_inside_templates_round_trip() {
    for source in ["{{t|[[Bar|a|b]]}}", "{{a|b=[[c|d|e]]}}"] {
        assert_eq!(
            intermediate_to_markup(&markup_to_intermediate(source)),
            source
        );
    }
}
