use compact_str::CompactString;
use smallvec::SmallVec;

use super::item::{Item, MAX_FIELDS};

/// Marker declaring an item as the header of a submenu
pub const TAG_MARKER: &str = "^tag(";
/// Directive opening another submenu on activation
pub const CHECKOUT_MARKER: &str = "^checkout(";
/// Directive running the wrapped command on activation
pub const SUB_MARKER: &str = "^sub(";

/// Returns `bar` from `^foo(bar)` when `s` starts with `token` (`^foo(`).
///
/// Text after the first `)` is dropped. A directive without a closing
/// parenthesis captures the rest of the string.
pub fn caret_argument<'a>(s: &'a str, token: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(token)?;
    Some(match rest.find(')') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Parse one input line into an item.
///
/// Returns `None` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Option<Item> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields: SmallVec<[CompactString; MAX_FIELDS]> = line
        .split(',')
        .take(MAX_FIELDS)
        .map(|f| CompactString::from(f.trim()))
        .collect();

    // Every item needs something to run
    if fields.len() < 2 {
        let label = fields[0].clone();
        fields.push(label);
    } else if fields[1].is_empty() {
        fields[1] = fields[0].clone();
    }

    let tag = fields[1..]
        .iter()
        .find_map(|f| caret_argument(f, TAG_MARKER))
        .map(CompactString::from);

    Some(Item {
        fields,
        tag,
        ..Default::default()
    })
}
