//! Property tests for the shared conversion algorithms.

use proptest::prelude::*;
use wiki_babel::common::balance::balance_tags;
use wiki_babel::common::nesting::{nesting_markers, MarkerKind};
use wiki_babel::common::templates;
use wiki_babel::{intermediate_to_markup, markup_to_intermediate};

/// Text built from whole tags only, so dropping a tag never glues two fragments into a new one.
fn tag_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "<a>", "</a>", "<b x=1>", "</b>", "<br>", "<img/>", "text", " ",
        ]),
        0..24,
    )
    .prop_map(|tokens| tokens.concat())
}

/// `{{name|arg|…}}` with an optional nested call as the last argument.
fn template_call() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,6}",
        prop::collection::vec("[a-z]{1,6}", 0..4),
        prop::option::of(("[a-z]{1,6}", prop::collection::vec("[a-z]{1,6}", 0..3))),
    )
        .prop_map(|(name, mut args, inner)| {
            if let Some((inner_name, inner_args)) = inner {
                let mut parts = vec![inner_name];
                parts.extend(inner_args);
                args.push(format!("{{{{{}}}}}", parts.join("|")));
            }
            let mut parts = vec![name];
            parts.extend(args);
            format!("{{{{{}}}}}", parts.join("|"))
        })
}

proptest! {
    #[test]
    fn prop_close_depth_matches_pending_opens(text in "[{}x]{0,40}") {
        let mut pending: i32 = 0;
        for marker in nesting_markers(&text, "{{", "}}") {
            match marker.kind {
                MarkerKind::Open => {
                    prop_assert_eq!(marker.depth, pending);
                    pending += 1;
                }
                MarkerKind::Close => {
                    pending -= 1;
                    prop_assert_eq!(marker.depth, pending);
                }
            }
            prop_assert_eq!(marker.end - marker.start, 2);
        }
    }

    #[test]
    fn prop_balanced_text_pairs_every_depth(call in template_call()) {
        let markers = nesting_markers(&call, "{{", "}}");
        let max = markers.iter().map(|marker| marker.depth).max().unwrap_or(0);
        for depth in 0..=max {
            let count = |kind: MarkerKind| {
                markers
                    .iter()
                    .filter(|marker| marker.kind == kind && marker.depth == depth)
                    .count()
            };
            prop_assert_eq!(count(MarkerKind::Open), count(MarkerKind::Close));
        }
    }

    #[test]
    fn prop_balancing_is_idempotent(text in tag_soup()) {
        let once = balance_tags(&text);
        prop_assert_eq!(balance_tags(&once), once);
    }

    #[test]
    fn prop_balancing_keeps_text(text in tag_soup()) {
        let outside_tags = |s: &str| s.replace(|c: char| !"tex ".contains(c), "");
        prop_assert_eq!(outside_tags(&balance_tags(&text)), outside_tags(&text));
    }

    #[test]
    fn prop_template_calls_round_trip(call in template_call()) {
        let tagged = templates::to_intermediate(&call, 8);
        prop_assert!(tagged.starts_with("<template name="));
        prop_assert_eq!(templates::to_markup(&tagged, 8), call);
    }

    #[test]
    fn prop_depth_limited_calls_round_trip(call in template_call(), max_depth in 0usize..3) {
        let tagged = templates::to_intermediate(&call, max_depth);
        prop_assert_eq!(templates::to_markup(&tagged, max_depth), call);
    }

    #[test]
    fn prop_conversion_never_panics(text in "[a-z '=*#{}|\\[\\]<>!\n-]{0,60}") {
        let intermediate = markup_to_intermediate(&text);
        let _ = intermediate_to_markup(&intermediate);
    }
}

#[test]
fn test_balancing_already_balanced_text_is_identity() {
    let text = "foo <qux><bar>bar</bar><bar>quxx</bar></qux> baz";
    assert_eq!(balance_tags(text), text);
}
