//! List lines.
//!
//! Every line starting with `*` becomes `<li>…</li>` and every line starting with `#` becomes
//! `<oli>…</oli>`. Items are mapped one line at a time; consecutive items are not grouped into
//! a container and nested markers (`**`) stay part of the item text.

use crate::formats::{html, wiki};
use crate::ir::nodes::ListItem;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MARKUP_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([*#])([^\n]+)").unwrap());
static UNORDERED_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li>(.*?)</li>").unwrap());
static ORDERED_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<oli>(.*?)</oli>").unwrap());

pub fn to_intermediate(text: &str) -> String {
    MARKUP_ITEM
        .replace_all(text, |caps: &Captures| {
            html::serializer::serialize_list_item(&ListItem {
                ordered: &caps[1] == "#",
                text: caps[2].to_string(),
            })
        })
        .into_owned()
}

pub fn to_markup(text: &str) -> String {
    [(&*UNORDERED_TAG, false), (&*ORDERED_TAG, true)]
        .into_iter()
        .fold(text.to_string(), |acc, (pattern, ordered)| {
            pattern
                .replace_all(&acc, |caps: &Captures| {
                    wiki::serializer::serialize_list_item(&ListItem {
                        ordered,
                        text: caps[1].to_string(),
                    })
                })
                .into_owned()
        })
}
