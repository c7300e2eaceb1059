//! Depth tagging for nestable delimiter pairs.
//!
//! Templates (`{{ … }}` in markup, `<template … </template>` in the intermediate form) nest
//! arbitrarily and share separators with other constructs. Rather than a recursive parser,
//! every delimiter occurrence is given a depth from a running tally scanned left to right:
//! an open takes the current count and then increments it, a close decrements first and then
//! takes the count. In balanced text a close therefore always carries the same number as the
//! innermost open still pending, so matching becomes "same number on both ends".
//!
//! The tally is not a stack. Unbalanced input produces negative or leftover depths, and
//! consumers must treat those markers as literal text.
//!
//! [`nesting_markers`] yields the markers with their byte spans, which is what the template
//! parser consumes. [`tag_nesting`] renders the classic textual form (`{{0 … 0}}`).

use serde::Serialize;

/// Which side of a delimiter pair a marker is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Open,
    Close,
}

/// One delimiter occurrence with its assigned depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NestingMarker {
    pub kind: MarkerKind,
    pub depth: i32,
    /// Byte offset of the delimiter in the scanned text.
    pub start: usize,
    /// Byte offset just past the delimiter.
    pub end: usize,
}

/// Scan `text` for `open` / `close` delimiters and assign each one a depth.
///
/// When both delimiters match at the same position the open delimiter wins. Empty
/// delimiters never match.
pub fn nesting_markers(text: &str, open: &str, close: &str) -> Vec<NestingMarker> {
    nesting_markers_with(text, open, close, |_| true)
}

/// Like [`nesting_markers`], but an `open` only counts when `open_ends` accepts the text
/// right after it. This keeps a prefix delimiter such as `<template` from matching
/// `<templates>`.
pub fn nesting_markers_with(
    text: &str,
    open: &str,
    close: &str,
    open_ends: impl Fn(&str) -> bool,
) -> Vec<NestingMarker> {
    let mut markers = Vec::new();
    if open.is_empty() || close.is_empty() {
        return markers;
    }

    let mut depth: i32 = 0;
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with(open) && open_ends(&rest[open.len()..]) {
            markers.push(NestingMarker {
                kind: MarkerKind::Open,
                depth,
                start: pos,
                end: pos + open.len(),
            });
            depth += 1;
            pos += open.len();
        } else if rest.starts_with(close) {
            depth -= 1;
            markers.push(NestingMarker {
                kind: MarkerKind::Close,
                depth,
                start: pos,
                end: pos + close.len(),
            });
            pos += close.len();
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    markers
}

/// Rewrite every `open` as `open<d>` and every `close` as `<d>close`.
///
/// # Example
///
/// ```ignore
/// assert_eq!(tag_nesting("{{a{{b}}}}", "{{", "}}"), "{{0a{{1b1}}0}}");
/// ```
pub fn tag_nesting(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut cursor = 0;
    for marker in nesting_markers(text, open, close) {
        out.push_str(&text[cursor..marker.start]);
        match marker.kind {
            MarkerKind::Open => {
                out.push_str(open);
                out.push_str(&marker.depth.to_string());
            }
            MarkerKind::Close => {
                out.push_str(&marker.depth.to_string());
                out.push_str(close);
            }
        }
        cursor = marker.end;
    }
    out.push_str(&text[cursor..]);
    out
}
