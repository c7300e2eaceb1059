//! Opaque content protection for `<nowiki>` and `<ref>` regions.
//!
//! The payload of a protected element must reach the other side untouched, so before any
//! structural stage runs it is base64-encoded into a `data` attribute and the element body is
//! emptied. The base64 alphabet contains none of the delimiters the other stages look for.
//! On the way back the payload is decoded as the very last step.
//!
//! Protection runs `nowiki` first so a `<ref>` written inside a `<nowiki>` stays literal.
//! Revealing runs in the opposite order.

use crate::formats::{html, wiki};
use crate::ir::nodes::OpaqueSpan;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Element names whose content is protected, in protection order.
pub const PROTECTED_TAGS: &[&str] = &["nowiki", "ref"];

struct ProtectedTag {
    name: &'static str,
    opener: Regex,
    closer: String,
    encoded: Regex,
}

static TAGS: Lazy<Vec<ProtectedTag>> = Lazy::new(|| {
    PROTECTED_TAGS
        .iter()
        .map(|&name| ProtectedTag {
            name,
            opener: Regex::new(&format!(r"<{name}(\s[^<>]*)?>")).unwrap(),
            closer: format!("</{name}>"),
            encoded: Regex::new(&format!(r#"<{name} data="([^"]*)"([^<>]*)></{name}>"#)).unwrap(),
        })
        .collect()
});

/// Replace the body of every protected element with its encoded form.
pub fn protect(text: &str) -> String {
    TAGS.iter()
        .fold(text.to_string(), |acc, tag| protect_tag(&acc, tag))
}

/// Decode every protected element back into its literal body.
pub fn reveal(text: &str) -> String {
    TAGS.iter()
        .rev()
        .fold(text.to_string(), |acc, tag| reveal_tag(&acc, tag))
}

fn protect_tag(text: &str, tag: &ProtectedTag) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(caps) = tag.opener.captures(&text[cursor..]) {
        let Some(whole) = caps.get(0) else { break };
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let opener_end = cursor + whole.end();

        // `<ref name="x" />` has no body to protect
        if attrs.trim_end().ends_with('/') {
            out.push_str(&text[cursor..opener_end]);
            cursor = opener_end;
            continue;
        }

        let Some(body_len) = text[opener_end..].find(&tag.closer) else {
            tracing::debug!(tag = tag.name, "unterminated protected element left as is");
            break;
        };

        let span = OpaqueSpan {
            tag: tag.name.to_string(),
            attrs: attrs.to_string(),
            payload: text[opener_end..opener_end + body_len].to_string(),
        };
        out.push_str(&text[cursor..cursor + whole.start()]);
        out.push_str(&html::serializer::serialize_opaque(&span));
        cursor = opener_end + body_len + tag.closer.len();
    }

    out.push_str(&text[cursor..]);
    out
}

fn reveal_tag(text: &str, tag: &ProtectedTag) -> String {
    tag.encoded
        .replace_all(text, |caps: &Captures| {
            match decode_payload(&caps[1]) {
                Some(payload) => wiki::serializer::serialize_opaque(&OpaqueSpan {
                    tag: tag.name.to_string(),
                    attrs: caps[2].to_string(),
                    payload,
                }),
                None => {
                    tracing::warn!(
                        tag = tag.name,
                        data = &caps[1],
                        "payload is not valid base64 text, leaving element untouched"
                    );
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

fn decode_payload(data: &str) -> Option<String> {
    let bytes = BASE64_STANDARD.decode(data).ok()?;
    String::from_utf8(bytes).ok()
}
