//! Inline constructs: emphasis, wiki-links, file embeds, external links and headings.
//!
//! | Markup                              | Intermediate                                      |
//! |-------------------------------------|---------------------------------------------------|
//! | `''x''`                             | `<em>x</em>`                                      |
//! | `'''x'''`                           | `<strong>x</strong>`                              |
//! | `'''''x'''''`                       | `<strong><em>x</em></strong>`                     |
//! | `[[Target]]`, `[[Target\|label]]`   | `<a href="Target">label</a>`                      |
//! | `[https://host/path label]`         | `<a href="https://host/path">label</a>`           |
//! | `[[File:src\|options\|caption]]`    | `<img src="src" options="options" link="">caption</img>` |
//! | `== Title ==`                       | `<h2> Title </h2>`                                |
//!
//! Emphasis is converted in two passes. Closed runs are converted early, before links and
//! templates see the text; lone tick runs left over at the end become opening tags only, and
//! the tag balancer closes them.

use crate::formats::{html, wiki};
use crate::ir::nodes::{Emphasis, Heading, Image, Link};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"'''(.+?)'''").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"''(.+?)''").unwrap());
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static EXTERNAL_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([A-Za-z][A-Za-z0-9+.\-]*://[^\s\[\]]*)(?: ([^\[\]\n]*))?\]").unwrap()
});
static IMAGE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img src="([^"]*)" options="([^"]*)" link="([^"]*)">(.*?)</img>"#).unwrap()
});
static ANCHOR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]*)">(.*?)</a>"#).unwrap());

/// Heading patterns for levels 1 to 6, indexed by `level - 1`.
static MARKUP_HEADINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            Regex::new(&format!(r"(?m)^([ \t]*)={{{level}}}(.+?)={{{level}}}([ \t]*)$")).unwrap()
        })
        .collect()
});
static HEADING_TAGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| Regex::new(&format!(r"<h{level}>(.+?)</h{level}>")).unwrap())
        .collect()
});

const FILE_PREFIX: &str = "File:";
const LINK_PREFIX: &str = "link=";

/// Convert closed `'''…'''` and `''…''` runs.
pub fn emphasis_to_intermediate(text: &str) -> String {
    let text = BOLD.replace_all(text, |caps: &Captures| {
        html::serializer::serialize_emphasis(Emphasis::Bold, &caps[1])
    });
    ITALIC
        .replace_all(&text, |caps: &Captures| {
            html::serializer::serialize_emphasis(Emphasis::Italic, &caps[1])
        })
        .into_owned()
}

/// Turn tick runs that never found a closer into opening tags.
pub fn unclosed_emphasis_to_intermediate(text: &str) -> String {
    text.replace("'''", "<strong>").replace("''", "<em>")
}

/// Convert emphasis tags back to tick runs. `<b>` and `<i>` are accepted as synonyms.
pub fn emphasis_to_markup(text: &str) -> String {
    use Emphasis::{Bold, BoldItalic, Italic};
    [
        ("<strong><em>", BoldItalic),
        ("</em></strong>", BoldItalic),
        ("</strong></em>", BoldItalic),
        ("<strong>", Bold),
        ("</strong>", Bold),
        ("<b>", Bold),
        ("</b>", Bold),
        ("<em>", Italic),
        ("</em>", Italic),
        ("<i>", Italic),
        ("</i>", Italic),
    ]
    .iter()
    .fold(text.to_string(), |acc, &(tag, kind)| {
        acc.replace(tag, wiki::serializer::emphasis_ticks(kind))
    })
}

/// Convert `[[…]]` wiki-links and `[[File:…]]` embeds.
pub fn links_to_intermediate(text: &str) -> String {
    WIKI_LINK
        .replace_all(text, |caps: &Captures| {
            let inner = &caps[1];
            match inner.strip_prefix(FILE_PREFIX) {
                Some(spec) => html::serializer::serialize_image(&parse_image(spec)),
                None => html::serializer::serialize_link(&parse_wiki_link(inner)),
            }
        })
        .into_owned()
}

/// Convert `[scheme://target label]` external links.
pub fn external_links_to_intermediate(text: &str) -> String {
    EXTERNAL_LINK
        .replace_all(text, |caps: &Captures| {
            html::serializer::serialize_link(&Link {
                target: caps[1].to_string(),
                label: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            })
        })
        .into_owned()
}

pub fn images_to_markup(text: &str) -> String {
    IMAGE_TAG
        .replace_all(text, |caps: &Captures| {
            wiki::serializer::serialize_image(&Image {
                src: caps[1].to_string(),
                options: caps[2].to_string(),
                link: caps[3].to_string(),
                caption: caps[4].to_string(),
            })
        })
        .into_owned()
}

pub fn links_to_markup(text: &str) -> String {
    ANCHOR_TAG
        .replace_all(text, |caps: &Captures| {
            wiki::serializer::serialize_link(&Link {
                target: caps[1].to_string(),
                label: caps[2].to_string(),
            })
        })
        .into_owned()
}

/// Convert `=`-delimited heading lines, longest runs first so `==` never matches inside `===`.
pub fn headings_to_intermediate(text: &str) -> String {
    MARKUP_HEADINGS
        .iter()
        .enumerate()
        .rev()
        .fold(text.to_string(), |acc, (index, pattern)| {
            pattern
                .replace_all(&acc, |caps: &Captures| {
                    let heading = Heading {
                        level: index + 1,
                        text: caps[2].to_string(),
                    };
                    format!(
                        "{}{}{}",
                        &caps[1],
                        html::serializer::serialize_heading(&heading),
                        &caps[3]
                    )
                })
                .into_owned()
        })
}

pub fn headings_to_markup(text: &str) -> String {
    HEADING_TAGS
        .iter()
        .enumerate()
        .fold(text.to_string(), |acc, (index, pattern)| {
            pattern
                .replace_all(&acc, |caps: &Captures| {
                    wiki::serializer::serialize_heading(&Heading {
                        level: index + 1,
                        text: caps[1].to_string(),
                    })
                })
                .into_owned()
        })
}

/// `Target` or `Target|label`. Without a label, internal targets label themselves and
/// external targets get an empty label.
pub fn parse_wiki_link(inner: &str) -> Link {
    match inner.split_once('|') {
        Some((target, label)) => Link {
            target: target.to_string(),
            label: label.to_string(),
        },
        None => {
            let mut link = Link {
                target: inner.to_string(),
                label: String::new(),
            };
            if !link.is_external() {
                link.label = link.target.clone();
            }
            link
        }
    }
}

/// `src|options|caption`, where a caption of `link=L|rest` carries a link target.
pub fn parse_image(spec: &str) -> Image {
    let mut fields = spec.splitn(3, '|');
    let src = fields.next().unwrap_or_default().to_string();
    let options = fields.next().unwrap_or_default().to_string();
    let tail = fields.next().unwrap_or_default();

    let (link, caption) = match tail.strip_prefix(LINK_PREFIX) {
        Some(rest) => match rest.split_once('|') {
            Some((link, caption)) => (link, caption),
            None => (rest, ""),
        },
        None => ("", tail),
    };

    Image {
        src,
        options,
        link: link.to_string(),
        caption: caption.to_string(),
    }
}
