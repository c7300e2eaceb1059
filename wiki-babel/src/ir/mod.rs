//! Intermediate Representation
//!
//!     Conversions pivot through the HTML-like intermediate form. A [`Document`] carries that
//!     text between formats; the node types in [`nodes`] are the transient structures each
//!     stage parses into before rendering them back out through a format serializer.
//!
//!     Nothing here outlives a single stage: a stage parses a construct into a node, hands it
//!     to the serializer of the target notation and splices the result back into the buffer.

pub mod nodes;

/// A document held in intermediate form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Wrap text that is already in intermediate form.
    pub fn new(text: impl Into<String>) -> Self {
        Document { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}
