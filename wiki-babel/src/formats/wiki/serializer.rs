//! Wiki markup serialization
//!
//! Renders IR nodes back into markup. Each function is the inverse of the matching
//! `formats::html::serializer` function for the canonical form of its construct.

use crate::ir::nodes::{
    Emphasis, Heading, Image, Link, ListItem, OpaqueSpan, Segment, Table, TemplateCall,
};

/// `{{name|key=value|positional}}`; a call without arguments has no trailing pipe.
pub fn serialize_template(call: &TemplateCall) -> String {
    let mut out = format!("{{{{{}", call.name);
    for arg in &call.args {
        out.push('|');
        if let Some(name) = arg.name.as_deref().filter(|name| !name.is_empty()) {
            out.push_str(name);
            out.push('=');
        }
        out.push_str(&serialize_segments(&arg.value));
    }
    out.push_str("}}");
    out
}

pub fn serialize_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::Template(call) => serialize_template(call),
            Segment::Literal(source) => serialize_segments(source),
        })
        .collect()
}

/// The tick run that opens and closes `kind`.
pub fn emphasis_ticks(kind: Emphasis) -> &'static str {
    match kind {
        Emphasis::Bold => "'''",
        Emphasis::Italic => "''",
        Emphasis::BoldItalic => "'''''",
    }
}

pub fn serialize_emphasis(kind: Emphasis, content: &str) -> String {
    let ticks = emphasis_ticks(kind);
    format!("{ticks}{content}{ticks}")
}

/// Anchors collapse to `[[target]]` when the label adds nothing, use the single-bracket form
/// for external targets and the piped form otherwise.
pub fn serialize_link(link: &Link) -> String {
    if link.label.is_empty() || link.label == link.target {
        format!("[[{}]]", link.target)
    } else if link.is_external() {
        format!("[{} {}]", link.target, link.label)
    } else {
        format!("[[{}|{}]]", link.target, link.label)
    }
}

/// Optional fields are emitted only as far as needed: the options slot is written whenever
/// anything follows it, and `link=` takes the caption slot, pushing the caption after it.
pub fn serialize_image(image: &Image) -> String {
    let mut out = format!("[[File:{}", image.src);
    if !image.options.is_empty() || !image.link.is_empty() || !image.caption.is_empty() {
        out.push('|');
        out.push_str(&image.options);
    }
    if !image.link.is_empty() {
        out.push_str("|link=");
        out.push_str(&image.link);
    }
    if !image.caption.is_empty() {
        out.push('|');
        out.push_str(&image.caption);
    }
    out.push_str("]]");
    out
}

pub fn serialize_heading(heading: &Heading) -> String {
    let marks = "=".repeat(heading.level);
    format!("{marks}{}{marks}", heading.text)
}

pub fn serialize_list_item(item: &ListItem) -> String {
    let marker = if item.ordered { '#' } else { '*' };
    format!("{marker}{}", item.text)
}

pub fn serialize_table(table: &Table) -> String {
    let mut out = format!("{{|{}\n", table.attrs);
    for row in &table.rows {
        if let Some(attrs) = &row.attrs {
            out.push_str("|-");
            out.push_str(attrs);
            out.push('\n');
        }
        for cell in &row.cells {
            out.push(if cell.header { '!' } else { '|' });
            if !cell.style.is_empty() {
                out.push_str(&cell.style);
                out.push('|');
            }
            out.push_str(&cell.body);
            out.push('\n');
        }
    }
    out.push_str("|}");
    out
}

pub fn serialize_opaque(span: &OpaqueSpan) -> String {
    format!(
        "<{tag}{attrs}>{payload}</{tag}>",
        tag = span.tag,
        attrs = span.attrs,
        payload = span.payload
    )
}
