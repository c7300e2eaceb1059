//! Tag balancing for intermediate-form text.
//!
//! Earlier stages emit tags without checking that they pair up (an unterminated `''` becomes
//! a lone `<em>`). This pass repairs the result with an explicit stack of open tag names:
//!
//! - an opening tag is emitted and its name pushed;
//! - a closing tag pops the stack, emitting a close for every popped name, until the name
//!   matches or the stack runs dry, so stray closes disappear and mismatched closes are
//!   replaced by closes for whatever was actually open;
//! - names left on the stack at the end are closed innermost first.
//!
//! Self-closing tags, void elements, comments and stray angle brackets pass through as text.
//! The output is always well nested, and balancing it again changes nothing.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(/)?([A-Za-z][^<>]*)>").unwrap());

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Close every unclosed tag and drop or re-target every unmatched close.
pub fn balance_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut stack: Vec<&str> = Vec::new();
    let mut cursor = 0;

    for caps in TAG.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        out.push_str(&text[cursor..whole.start()]);
        cursor = whole.end();

        let inner = inner.as_str();
        let name = tag_name(inner);

        if caps.get(1).is_some() {
            if !stack.contains(&name) {
                tracing::debug!(tag = name, "closing tag does not match any open tag");
            }
            if stack.is_empty() {
                continue;
            }
            while let Some(open) = stack.pop() {
                push_close(&mut out, open);
                if open == name {
                    break;
                }
            }
        } else {
            out.push_str(whole.as_str());
            if !is_self_contained(inner, name) {
                stack.push(name);
            }
        }
    }
    out.push_str(&text[cursor..]);

    if !stack.is_empty() {
        tracing::debug!(count = stack.len(), "auto-closing tags left open");
    }
    while let Some(open) = stack.pop() {
        push_close(&mut out, open);
    }
    out
}

fn tag_name(inner: &str) -> &str {
    inner.split_whitespace().next().unwrap_or(inner)
}

fn is_self_contained(inner: &str, name: &str) -> bool {
    inner.ends_with('/')
        || VOID_ELEMENTS
            .iter()
            .any(|void| void.eq_ignore_ascii_case(name))
}

fn push_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
