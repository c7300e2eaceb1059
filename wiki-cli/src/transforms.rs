//! CLI-specific transforms
//!
//! `wiki inspect` shows what the transcoder sees at a given point. Each transform takes the
//! input as-is and prints one view of it:
//!
//! - `protect`: markup with `<nowiki>` / `<ref>` payloads encoded
//! - `nesting`: markup with every `{{` / `}}` tagged with its depth
//! - `templates-json`: the template parse of the markup, as JSON
//! - `intermediate`: full markup → intermediate conversion
//! - `markup`: full intermediate → markup conversion
//! - `balance`: the input run through the tag balancer only
//!
//! ## Extra Parameters
//!
//! - `until`: for `intermediate` and `markup`, stop after the named stage
//!
//! Example: `wiki inspect page.wiki intermediate --extra-until templates`

use std::collections::HashMap;
use wiki_babel::common::balance::balance_tags;
use wiki_babel::common::nesting::tag_nesting;
use wiki_babel::common::opaque;
use wiki_babel::common::templates::{self, MARKUP_CLOSE, MARKUP_OPEN};
use wiki_babel::pipeline::{stages, Direction};
use wiki_babel::{TranscodeOptions, Transcoder};

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "protect",
    "nesting",
    "templates-json",
    "intermediate",
    "markup",
    "balance",
];

/// Execute a named transform on the source text
///
/// # Arguments
///
/// * `source` - The source text to transform
/// * `transform_name` - One of [`AVAILABLE_TRANSFORMS`]
/// * `options` - Transcoder options (depth limit, balancing)
/// * `extra_params` - Optional parameters for the transform
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &TranscodeOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let transcoder = Transcoder::new(options.clone());

    match transform_name {
        "protect" => Ok(opaque::protect(source)),
        "nesting" => Ok(tag_nesting(source, MARKUP_OPEN, MARKUP_CLOSE)),
        "templates-json" => {
            let segments = templates::parse_markup(source, options.max_depth);
            serde_json::to_string_pretty(&segments)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "intermediate" => run(&transcoder, Direction::MarkupToIntermediate, source, extra_params),
        "markup" => run(&transcoder, Direction::IntermediateToMarkup, source, extra_params),
        "balance" => Ok(balance_tags(source)),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn run(
    transcoder: &Transcoder,
    direction: Direction,
    source: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match extra_params.get("until") {
        Some(stage) => transcoder.run_until(direction, source, stage).ok_or_else(|| {
            let names: Vec<_> = stages(direction).iter().map(|stage| stage.name).collect();
            format!(
                "Unknown stage '{stage}' for {direction}, expected one of: {}",
                names.join(", ")
            )
        }),
        None => Ok(transcoder.run(direction, source)),
    }
}
