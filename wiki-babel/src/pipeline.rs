//! Stage ordering for both conversion directions.
//!
//! Each stage is a pure `&str -> String` pass over the whole document. The order is part of
//! the contract:
//!
//! - protection runs first, so nothing else ever reads a `<nowiki>` or `<ref>` payload;
//! - wiki-links run before templates, because both use `|` and a link inside a template
//!   argument would otherwise split that argument;
//! - tables run after templates and links, so the only pipes left are table syntax;
//! - leftover tick runs become opening tags last and the balancer closes them.
//!
//! Going back, payloads are revealed as the very last step.

use crate::common::{balance, inline, lists, opaque, tables, templates};
use std::fmt;

/// Nesting depth up to which template calls are resolved.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Knobs shared by both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// Calls nested deeper than this stay in their literal form.
    pub max_depth: usize,
    /// Repair tag nesting at the end of markup → intermediate conversion.
    pub balance_tags: bool,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        TranscodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            balance_tags: true,
        }
    }
}

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MarkupToIntermediate,
    IntermediateToMarkup,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::MarkupToIntermediate => write!(f, "markup-to-intermediate"),
            Direction::IntermediateToMarkup => write!(f, "intermediate-to-markup"),
        }
    }
}

type StageFn = fn(&str, &TranscodeOptions) -> String;

/// A named pass over the document.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    run: StageFn,
}

impl Stage {
    pub fn run(&self, text: &str, options: &TranscodeOptions) -> String {
        (self.run)(text, options)
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

pub const MARKUP_TO_INTERMEDIATE: &[Stage] = &[
    Stage {
        name: "protect",
        run: |text, _| opaque::protect(text),
    },
    Stage {
        name: "emphasis",
        run: |text, _| inline::emphasis_to_intermediate(text),
    },
    Stage {
        name: "links",
        run: |text, _| inline::links_to_intermediate(text),
    },
    Stage {
        name: "templates",
        run: |text, options| templates::to_intermediate(text, options.max_depth),
    },
    Stage {
        name: "external-links",
        run: |text, _| inline::external_links_to_intermediate(text),
    },
    Stage {
        name: "headings",
        run: |text, _| inline::headings_to_intermediate(text),
    },
    Stage {
        name: "lists",
        run: |text, _| lists::to_intermediate(text),
    },
    Stage {
        name: "tables",
        run: |text, _| tables::to_intermediate(text),
    },
    Stage {
        name: "unclosed-emphasis",
        run: |text, _| inline::unclosed_emphasis_to_intermediate(text),
    },
    Stage {
        name: "balance",
        run: |text, options| {
            if options.balance_tags {
                balance::balance_tags(text)
            } else {
                text.to_string()
            }
        },
    },
];

pub const INTERMEDIATE_TO_MARKUP: &[Stage] = &[
    Stage {
        name: "images",
        run: |text, _| inline::images_to_markup(text),
    },
    Stage {
        name: "links",
        run: |text, _| inline::links_to_markup(text),
    },
    Stage {
        name: "emphasis",
        run: |text, _| inline::emphasis_to_markup(text),
    },
    Stage {
        name: "lists",
        run: |text, _| lists::to_markup(text),
    },
    Stage {
        name: "headings",
        run: |text, _| inline::headings_to_markup(text),
    },
    Stage {
        name: "templates",
        run: |text, options| templates::to_markup(text, options.max_depth),
    },
    Stage {
        name: "tables",
        run: |text, _| tables::to_markup(text),
    },
    Stage {
        name: "reveal",
        run: |text, _| opaque::reveal(text),
    },
];

/// The ordered stages of a direction.
pub fn stages(direction: Direction) -> &'static [Stage] {
    match direction {
        Direction::MarkupToIntermediate => MARKUP_TO_INTERMEDIATE,
        Direction::IntermediateToMarkup => INTERMEDIATE_TO_MARKUP,
    }
}

/// Runs the stage list for a direction.
///
/// A `Transcoder` holds no state besides its options, so one instance can serve any number
/// of documents, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcoder {
    options: TranscodeOptions,
}

impl Transcoder {
    pub fn new(options: TranscodeOptions) -> Self {
        Transcoder { options }
    }

    pub fn options(&self) -> &TranscodeOptions {
        &self.options
    }

    pub fn to_intermediate(&self, markup: &str) -> String {
        self.run(Direction::MarkupToIntermediate, markup)
    }

    pub fn to_markup(&self, intermediate: &str) -> String {
        self.run(Direction::IntermediateToMarkup, intermediate)
    }

    /// Run every stage of `direction` in order.
    pub fn run(&self, direction: Direction, text: &str) -> String {
        let span = tracing::debug_span!("transcode", %direction, bytes = text.len());
        let _entered = span.enter();

        stages(direction).iter().fold(text.to_string(), |acc, stage| {
            let out = stage.run(&acc, &self.options);
            tracing::trace!(stage = stage.name, bytes = out.len(), "stage complete");
            out
        })
    }

    /// Run the stages of `direction` up to and including `last`.
    ///
    /// Returns `None` when the direction has no stage by that name.
    pub fn run_until(&self, direction: Direction, text: &str, last: &str) -> Option<String> {
        let stages = stages(direction);
        let end = stages.iter().position(|stage| stage.name == last)?;
        Some(
            stages[..=end]
                .iter()
                .fold(text.to_string(), |acc, stage| stage.run(&acc, &self.options)),
        )
    }
}

/// Convert wiki markup to the intermediate form with default options.
pub fn markup_to_intermediate(text: &str) -> String {
    Transcoder::default().to_intermediate(text)
}

/// Convert the intermediate form back to wiki markup with default options.
pub fn intermediate_to_markup(text: &str) -> String {
    Transcoder::default().to_markup(text)
}
