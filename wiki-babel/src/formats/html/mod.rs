//! Intermediate (HTML-like) format
//!
//! The intermediate form is the pivot every conversion passes through, so parsing and
//! serializing it are almost identity operations. Parsing balances tags when the options ask
//! for it, so hand-edited input is as well formed as generated input.
//!
//! # Element Mapping Table
//!
//! | Construct        | Intermediate                                                   |
//! |------------------|----------------------------------------------------------------|
//! | Bold / italic    | `<strong>`, `<em>` (`<b>`, `<i>` accepted on import)           |
//! | Wiki-link        | `<a href="target">label</a>`                                   |
//! | File embed       | `<img src="…" options="…" link="…">caption</img>`              |
//! | Heading          | `<h1>` … `<h6>`                                                |
//! | List line        | `<li>` (unordered), `<oli>` (ordered)                          |
//! | Table            | `<table>`, `<tr>`, `<td>`, `<th>`                              |
//! | Template call    | `<template name="…"><arg name="…">…</arg></template>`          |
//! | Nowiki / ref     | `<nowiki data="base64">`, `<ref data="base64" …>`              |

use crate::common::balance::balance_tags;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;
use crate::pipeline::TranscodeOptions;

pub mod serializer;

/// Format implementation for the intermediate form
#[derive(Debug, Default)]
pub struct HtmlFormat {
    options: TranscodeOptions,
}

impl HtmlFormat {
    pub fn new(options: TranscodeOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML-like intermediate form"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        if self.options.balance_tags {
            Ok(Document::new(balance_tags(source)))
        } else {
            Ok(Document::new(source))
        }
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(doc.as_str().to_string())
    }
}
