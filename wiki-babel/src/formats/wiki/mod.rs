//! Wiki markup format
//!
//! Parsing runs the markup → intermediate stages of the [`Transcoder`]; serialization runs the
//! reverse stages. Rendering of individual constructs lives in [`serializer`].
//!
//! # Lossy Conversions
//!
//! - Whitespace around template names and named-argument keys is dropped.
//! - Implicit table rows gain an explicit `|-` line.
//! - Unterminated `''` / `'''` runs come back closed.
//! - `<b>` / `<i>` come back as tick runs, indistinguishable from `<strong>` / `<em>`.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;
use crate::pipeline::{TranscodeOptions, Transcoder};

pub mod serializer;

/// Format implementation for wiki markup
#[derive(Debug, Default)]
pub struct WikiFormat {
    transcoder: Transcoder,
}

impl WikiFormat {
    pub fn new(options: TranscodeOptions) -> Self {
        Self {
            transcoder: Transcoder::new(options),
        }
    }
}

impl Format for WikiFormat {
    fn name(&self) -> &str {
        "wiki"
    }

    fn description(&self) -> &str {
        "Wiki markup (templates, links, emphasis, headings, lists, tables)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["wiki", "wikitext", "mediawiki"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(Document::new(self.transcoder.to_intermediate(source)))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.transcoder.to_markup(doc.as_str()))
    }
}
