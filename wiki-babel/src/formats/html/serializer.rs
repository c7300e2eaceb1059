//! Intermediate-form serialization
//!
//! Renders IR nodes as the tags of the intermediate form. Attribute values and bodies are
//! written verbatim: the intermediate form is a pivot, not a browser document, and any
//! escaping would break the way back to markup.

use crate::ir::nodes::{
    Emphasis, Heading, Image, Link, ListItem, OpaqueSpan, Segment, Table, TemplateCall,
};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;

/// `<template name="N"><arg name="K">V</arg>…</template>`; positional args get `name=""`.
pub fn serialize_template(call: &TemplateCall) -> String {
    let mut out = format!("<template name=\"{}\">", call.name);
    for arg in &call.args {
        out.push_str("<arg name=\"");
        out.push_str(arg.name.as_deref().unwrap_or(""));
        out.push_str("\">");
        out.push_str(&serialize_segments(&arg.value));
        out.push_str("</arg>");
    }
    out.push_str("</template>");
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

pub fn serialize_emphasis(kind: Emphasis, content: &str) -> String {
    match kind {
        Emphasis::Bold => format!("<strong>{content}</strong>"),
        Emphasis::Italic => format!("<em>{content}</em>"),
        Emphasis::BoldItalic => format!("<strong><em>{content}</em></strong>"),
    }
}

pub fn serialize_link(link: &Link) -> String {
    format!("<a href=\"{}\">{}</a>", link.target, link.label)
}

/// Images always carry all three attributes, even when empty.
pub fn serialize_image(image: &Image) -> String {
    format!(
        "<img src=\"{}\" options=\"{}\" link=\"{}\">{}</img>",
        image.src, image.options, image.link, image.caption
    )
}

pub fn serialize_heading(heading: &Heading) -> String {
    format!("<h{0}>{1}</h{0}>", heading.level, heading.text)
}

pub fn serialize_list_item(item: &ListItem) -> String {
    if item.ordered {
        format!("<oli>{}</oli>", item.text)
    } else {
        format!("<li>{}</li>", item.text)
    }
}

/// Tables render one tag per line. Explicit rows and all cells keep a space before their
/// attribute text even when it is empty (`<tr >`, `<td >`); implicit rows render as `<tr>`.
pub fn serialize_table(table: &Table) -> String {
    let mut out = format!("<table {}>\n", table.attrs);
    for row in &table.rows {
        match &row.attrs {
            Some(attrs) => out.push_str(&format!("<tr {attrs}>\n")),
            None => out.push_str("<tr>\n"),
        }
        for cell in &row.cells {
            let tag = if cell.header { "th" } else { "td" };
            out.push_str(&format!("<{tag} {}>{}</{tag}>\n", cell.style, cell.body));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    out
}

/// Encodes the payload into a `data` attribute and leaves the element empty.
pub fn serialize_opaque(span: &OpaqueSpan) -> String {
    format!(
        "<{tag} data=\"{data}\"{attrs}></{tag}>",
        tag = span.tag,
        data = BASE64_STANDARD.encode(span.payload.as_bytes()),
        attrs = span.attrs
    )
}
