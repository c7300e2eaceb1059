//! Pipe tables.
//!
//! ```text
//! {| class="wide"             <table  class="wide">
//! |-                          <tr >
//! ! Name !! Age               <th > Name </th>
//!                             <th > Age</th>
//!                             </tr>
//! |-                          <tr >
//! |style="x"|Ada || 36        <td style="x">Ada </td>
//!                             <td style="x"> 36</td>
//!                             </tr>
//! |}                          </table>
//! ```
//!
//! Cells before the first `|-` line open a row implicitly, rendered as `<tr>` without the
//! attribute space. On the way back every row gets an explicit `|-` line, so implicit rows
//! do not survive a round trip.
//!
//! Nested tables are not supported: the first `|}` or `</table>` closes the outermost table.

use crate::formats::{html, wiki};
use crate::ir::nodes::{Table, TableCell, TableRow};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MARKUP_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\|([^\n]*)(.*?)\|\}").unwrap());
static TABLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<table(\s[^>]*)?>(.*?)</table>").unwrap());
static ROW_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<tr(\s[^>]*)?>(.*?)</tr>").unwrap());
static CELL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<t([dh])(\s[^>]*)?>(.*?)</t[dh]>").unwrap());

/// Separators packing several cells onto one line.
const CELL_SEPARATORS: &[&str] = &["!!", "||"];

pub fn to_intermediate(text: &str) -> String {
    MARKUP_TABLE
        .replace_all(text, |caps: &Captures| {
            html::serializer::serialize_table(&parse_markup_table(&caps[1], &caps[2]))
        })
        .into_owned()
}

pub fn to_markup(text: &str) -> String {
    TABLE_TAG
        .replace_all(text, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            wiki::serializer::serialize_table(&parse_table_tags(attrs, &caps[2]))
        })
        .into_owned()
}

/// Build a table from the attribute text after `{|` and the lines up to `|}`.
pub fn parse_markup_table(attrs: &str, body: &str) -> Table {
    let mut table = Table {
        attrs: attrs.to_string(),
        rows: Vec::new(),
    };

    for line in body.lines() {
        let trimmed = line.trim_start();
        if let Some(row_attrs) = trimmed.strip_prefix("|-") {
            table.rows.push(TableRow {
                attrs: Some(row_attrs.to_string()),
                cells: Vec::new(),
            });
        } else if let Some(rest) = trimmed.strip_prefix('|') {
            push_cells(&mut table, false, rest);
        } else if let Some(rest) = trimmed.strip_prefix('!') {
            push_cells(&mut table, true, rest);
        } else if !line.is_empty() {
            // continuation of the previous cell
            if let Some(cell) = table.rows.last_mut().and_then(|row| row.cells.last_mut()) {
                cell.body.push('\n');
                cell.body.push_str(line);
            }
        }
    }
    table
}

fn push_cells(table: &mut Table, header: bool, line: &str) {
    if table.rows.is_empty() {
        table.rows.push(TableRow::default());
    }
    let Some(row) = table.rows.last_mut() else {
        return;
    };

    let (style, bodies) = split_style(line);
    for body in split_bodies(bodies) {
        row.cells.push(TableCell {
            header,
            style: style.to_string(),
            body: body.to_string(),
        });
    }
}

/// Split `style|body` on the first lone pipe. A `||` pair is a cell separator, not a style
/// separator.
fn split_style(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'|' {
            if bytes.get(index + 1) == Some(&b'|') {
                index += 2;
                continue;
            }
            return (&line[..index], &line[index + 1..]);
        }
        index += 1;
    }
    ("", line)
}

fn split_bodies(bodies: &str) -> Vec<&str> {
    CELL_SEPARATORS.iter().fold(vec![bodies], |parts, separator| {
        parts
            .into_iter()
            .flat_map(|part| part.split(separator))
            .collect()
    })
}

/// Build a table from `<tr>` / `<td>` / `<th>` tags. The single space the markup direction
/// puts before attribute text is dropped again.
pub fn parse_table_tags(attrs: &str, body: &str) -> Table {
    let rows = ROW_TAG
        .captures_iter(body)
        .map(|row| TableRow {
            attrs: Some(strip_attr_space(row.get(1).map_or("", |m| m.as_str())).to_string()),
            cells: CELL_TAG
                .captures_iter(row.get(2).map_or("", |m| m.as_str()))
                .map(|cell| TableCell {
                    header: &cell[1] == "h",
                    style: strip_attr_space(cell.get(2).map_or("", |m| m.as_str())).to_string(),
                    body: cell[3].to_string(),
                })
                .collect(),
        })
        .collect();

    Table {
        attrs: strip_attr_space(attrs).to_string(),
        rows,
    }
}

fn strip_attr_space(attrs: &str) -> &str {
    attrs.strip_prefix(' ').unwrap_or(attrs)
}
