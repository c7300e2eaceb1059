//! Core data structures for the Intermediate Representation (IR).
//!
//! Each variant mirrors one construct both notations can express. Parsers in
//! `common` build these, and `formats::wiki::serializer` /
//! `formats::html::serializer` render them.

use serde::Serialize;

/// A piece of template content: plain text, a nested call, or a call that could not be
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    Template(TemplateCall),
    /// Source of an unresolved call, delimiters included. It is written back unchanged and
    /// an enclosing call treats it as a single value, never splitting inside it.
    Literal(Vec<Segment>),
}

impl Segment {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text),
            Segment::Template(_) | Segment::Literal(_) => None,
        }
    }
}

/// A template invocation with its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCall {
    pub name: String,
    pub args: Vec<TemplateArg>,
}

impl TemplateCall {
    pub fn new(name: impl Into<String>) -> Self {
        TemplateCall {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A single template argument.
///
/// `name` is `None` for positional arguments. Argument order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateArg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Vec<Segment>,
}

impl TemplateArg {
    pub fn positional(value: Vec<Segment>) -> Self {
        TemplateArg { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: Vec<Segment>) -> Self {
        TemplateArg {
            name: Some(name.into()),
            value,
        }
    }
}

/// Inline emphasis kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Bold,
    Italic,
    BoldItalic,
}

/// A link to an internal page or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub target: String,
    pub label: String,
}

impl Link {
    /// External targets carry a scheme separator.
    pub fn is_external(&self) -> bool {
        self.target.contains("://")
    }
}

/// An embedded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub options: String,
    pub link: String,
    pub caption: String,
}

/// A heading of level 1 to 6. `text` keeps its surrounding spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub text: String,
}

/// A single list line. Lists are never grouped into containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub ordered: bool,
    pub text: String,
}

/// A table block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub attrs: String,
    pub rows: Vec<TableRow>,
}

/// A table row. `attrs` is `None` when the row was opened implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub attrs: Option<String>,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub header: bool,
    pub style: String,
    pub body: String,
}

/// A region whose payload no structural stage may touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpaqueSpan {
    pub tag: String,
    /// Attribute text as written, including its leading whitespace.
    pub attrs: String,
    pub payload: String,
}
