//! Template call parsing in both notations.
//!
//! Markup writes calls as `{{name|positional|key=value}}`, the intermediate form as
//! `<template name="name"><arg name="">positional</arg><arg name="key">value</arg></template>`.
//! Both nest arbitrarily.
//!
//! Parsing walks the depth markers from [`crate::common::nesting`] with an explicit stack of
//! open frames. A close marker resolves the innermost frame only when both carry the same
//! depth, so calls are built innermost first and an inner call is already a
//! [`TemplateCall`] node by the time its parent is resolved. No placeholders, no re-scanning.
//!
//! Anything that cannot be resolved stays literal:
//!
//! - closes without a matching open, and opens never closed;
//! - frames deeper than the configured maximum depth;
//! - frames whose head is not a valid call (blank name, name built from another call).
//!
//! A closed frame that stays literal becomes a [`Segment::Literal`], so the call around it
//! takes it as one value and never reads its pipes or `<arg>` tags as its own.

use crate::common::nesting::{nesting_markers_with, MarkerKind};
use crate::formats::{html, wiki};
use crate::ir::nodes::{Segment, TemplateArg, TemplateCall};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MARKUP_OPEN: &str = "{{";
pub const MARKUP_CLOSE: &str = "}}";
pub const TAG_OPEN: &str = "<template";
pub const TAG_CLOSE: &str = "</template>";

static NAMED_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\t\n\f\r ]+=").unwrap());
static TAG_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s+name="([^"]*)"[^<>]*>"#).unwrap());
static ARG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<arg name="([^"]*)">|</arg>"#).unwrap());
/// Open and close tags of rendered links and images, whose labels may carry pipes.
static LINK_SPAN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(a|img)\s[^<>]*>|</(a|img)>").unwrap());

/// Characters that cannot appear in a template name.
const INVALID_NAME_CHARS: &[char] = &['{', '}', '<', '>', '[', ']'];

struct Syntax {
    open: &'static str,
    close: &'static str,
    /// Whether the text following `open` completes the delimiter.
    open_ends: fn(&str) -> bool,
    resolve: fn(&[Segment]) -> Option<TemplateCall>,
}

const MARKUP: Syntax = Syntax {
    open: MARKUP_OPEN,
    close: MARKUP_CLOSE,
    open_ends: any_boundary,
    resolve: resolve_markup_call,
};

const INTERMEDIATE: Syntax = Syntax {
    open: TAG_OPEN,
    close: TAG_CLOSE,
    open_ends: ends_tag_name,
    resolve: resolve_tag_call,
};

fn any_boundary(_rest: &str) -> bool {
    true
}

/// `<template` must be followed by whitespace or `>`, not by more name characters.
fn ends_tag_name(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_whitespace() || c == '>')
}

/// Convert every resolvable `{{…}}` call into its tagged form.
pub fn to_intermediate(text: &str, max_depth: usize) -> String {
    html::serializer::serialize_segments(&parse_markup(text, max_depth))
}

/// Convert every resolvable `<template>` element back into brace form.
pub fn to_markup(text: &str, max_depth: usize) -> String {
    wiki::serializer::serialize_segments(&parse_intermediate(text, max_depth))
}

/// Split markup into literal text and resolved template calls.
pub fn parse_markup(text: &str, max_depth: usize) -> Vec<Segment> {
    parse(text, &MARKUP, max_depth)
}

/// Split intermediate text into literal text and resolved template calls.
pub fn parse_intermediate(text: &str, max_depth: usize) -> Vec<Segment> {
    parse(text, &INTERMEDIATE, max_depth)
}

struct Frame {
    depth: i32,
    segments: Vec<Segment>,
}

fn parse(text: &str, syntax: &Syntax, max_depth: usize) -> Vec<Segment> {
    let mut root = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut cursor = 0;

    for marker in nesting_markers_with(text, syntax.open, syntax.close, syntax.open_ends) {
        push_text(current(&mut root, &mut frames), &text[cursor..marker.start]);
        cursor = marker.end;

        match marker.kind {
            MarkerKind::Open => frames.push(Frame {
                depth: marker.depth,
                segments: Vec::new(),
            }),
            MarkerKind::Close => {
                let frame = match frames.pop() {
                    Some(frame) if frame.depth == marker.depth => frame,
                    other => {
                        frames.extend(other);
                        push_text(current(&mut root, &mut frames), syntax.close);
                        continue;
                    }
                };

                let within_limit =
                    usize::try_from(frame.depth).is_ok_and(|depth| depth <= max_depth);
                let call = if within_limit {
                    (syntax.resolve)(&frame.segments)
                } else {
                    tracing::debug!(
                        depth = frame.depth,
                        max_depth,
                        "template nested beyond the depth limit left literal"
                    );
                    None
                };

                let parent = current(&mut root, &mut frames);
                match call {
                    Some(call) => parent.push(Segment::Template(call)),
                    None => {
                        let mut source = Vec::with_capacity(frame.segments.len() + 2);
                        push_text(&mut source, syntax.open);
                        append(&mut source, frame.segments);
                        push_text(&mut source, syntax.close);
                        parent.push(Segment::Literal(source));
                    }
                }
            }
        }
    }
    push_text(current(&mut root, &mut frames), &text[cursor..]);

    while let Some(frame) = frames.pop() {
        tracing::debug!(depth = frame.depth, "unclosed template left literal");
        let parent = current(&mut root, &mut frames);
        push_text(parent, syntax.open);
        append(parent, frame.segments);
    }
    root
}

fn current<'a>(root: &'a mut Vec<Segment>, frames: &'a mut [Frame]) -> &'a mut Vec<Segment> {
    match frames.last_mut() {
        Some(frame) => &mut frame.segments,
        None => root,
    }
}

/// Append text, merging it into a trailing text segment.
fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

fn append(target: &mut Vec<Segment>, segments: Vec<Segment>) {
    for segment in segments {
        match segment {
            Segment::Text(text) => push_text(target, &text),
            call => target.push(call),
        }
    }
}

/// `name|arg|key=value`, where only pipes in plain text outside link and image spans
/// separate arguments.
fn resolve_markup_call(segments: &[Segment]) -> Option<TemplateCall> {
    let mut pieces = split_on_pipes(segments).into_iter();

    let name = match pieces.next()?.as_slice() {
        [Segment::Text(name)] => name.trim().to_string(),
        _ => return None,
    };
    if !is_valid_name(&name) {
        tracing::debug!(name = %name, "not a template name, left literal");
        return None;
    }

    let rest: Vec<Vec<Segment>> = pieces.collect();
    // `{{name|}}` has an empty argument list, not one empty argument
    let args = if rest.len() == 1 && rest[0].is_empty() {
        Vec::new()
    } else {
        rest.into_iter().map(classify_arg).collect()
    };

    Some(TemplateCall { name, args })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(INVALID_NAME_CHARS)
}

fn split_on_pipes(segments: &[Segment]) -> Vec<Vec<Segment>> {
    let mut pieces: Vec<Vec<Segment>> = vec![Vec::new()];
    // open link or image spans, carried across segments
    let mut spans = 0usize;
    for segment in segments {
        let Segment::Text(text) = segment else {
            if let Some(piece) = pieces.last_mut() {
                piece.push(segment.clone());
            }
            continue;
        };

        let mut cursor = 0;
        for caps in LINK_SPAN_TAG.captures_iter(text) {
            let Some(tag) = caps.get(0) else { continue };
            split_text(&mut pieces, &text[cursor..tag.start()], spans == 0);
            split_text(&mut pieces, tag.as_str(), false);
            cursor = tag.end();
            if caps.get(2).is_some() {
                spans = spans.saturating_sub(1);
            } else if !tag.as_str().ends_with("/>") {
                spans += 1;
            }
        }
        split_text(&mut pieces, &text[cursor..], spans == 0);
    }
    pieces
}

fn split_text(pieces: &mut Vec<Vec<Segment>>, text: &str, at_pipes: bool) {
    if !at_pipes {
        if let Some(piece) = pieces.last_mut() {
            push_text(piece, text);
        }
        return;
    }
    for (index, part) in text.split('|').enumerate() {
        if index > 0 {
            pieces.push(Vec::new());
        }
        if let Some(piece) = pieces.last_mut() {
            push_text(piece, part);
        }
    }
}

/// An argument is named when its leading text is word characters and spaces followed by `=`.
/// The key is trimmed and the value kept verbatim after the first `=`.
fn classify_arg(piece: Vec<Segment>) -> TemplateArg {
    let named = match piece.first() {
        Some(Segment::Text(first)) if NAMED_ARG.is_match(first) => first
            .split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string())),
        _ => None,
    };

    match named {
        Some((key, value)) => {
            let mut segments = Vec::with_capacity(piece.len());
            push_text(&mut segments, &value);
            segments.extend(piece.into_iter().skip(1));
            TemplateArg::named(key, segments)
        }
        None => TemplateArg::positional(piece),
    }
}

/// ` name="N">` followed by `<arg name="K">…</arg>` elements.
fn resolve_tag_call(segments: &[Segment]) -> Option<TemplateCall> {
    let (head, rest) = segments.split_first()?;
    let head = head.as_text()?;
    let caps = TAG_HEAD.captures(head)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    let mut collector = ArgCollector::default();
    collector.text(&head[caps.get(0)?.end()..]);
    for segment in rest {
        match segment {
            Segment::Text(text) => collector.text(text),
            atom => collector.atom(atom.clone()),
        }
    }

    Some(TemplateCall {
        name: name.to_string(),
        args: collector.finish(),
    })
}

/// Groups the content of a `<template>` element into arguments. Content outside any
/// `<arg>` element becomes a positional argument unless it is only whitespace.
#[derive(Default)]
struct ArgCollector {
    args: Vec<TemplateArg>,
    open: Option<TemplateArg>,
}

impl ArgCollector {
    fn text(&mut self, text: &str) {
        let mut cursor = 0;
        for caps in ARG_TAG.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            self.content(&text[cursor..whole.start()]);
            cursor = whole.end();
            self.close();
            if let Some(name) = caps.get(1) {
                let name = name.as_str();
                self.open = Some(if name.is_empty() {
                    TemplateArg::positional(Vec::new())
                } else {
                    TemplateArg::named(name, Vec::new())
                });
            }
        }
        self.content(&text[cursor..]);
    }

    fn content(&mut self, text: &str) {
        match &mut self.open {
            Some(arg) => push_text(&mut arg.value, text),
            None if !text.trim().is_empty() => self
                .args
                .push(TemplateArg::positional(vec![Segment::Text(text.to_string())])),
            None => {}
        }
    }

    /// A nested call or literal, kept whole.
    fn atom(&mut self, segment: Segment) {
        match &mut self.open {
            Some(arg) => arg.value.push(segment),
            None => self.args.push(TemplateArg::positional(vec![segment])),
        }
    }

    fn close(&mut self) {
        if let Some(arg) = self.open.take() {
            self.args.push(arg);
        }
    }

    fn finish(mut self) -> Vec<TemplateArg> {
        self.close();
        self.args
    }
}
