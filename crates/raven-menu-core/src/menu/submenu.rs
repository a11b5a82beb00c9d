use compact_str::CompactString;
use tracing::debug;

use super::list::ItemList;
use crate::error::{MenuError, Result};

/// Extent of a checked out submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuRange {
    pub head: usize,
    pub tail: usize,
    /// Header item the submenu was checked out from
    pub header: Option<usize>,
}

impl SubmenuRange {
    pub fn len(&self) -> usize {
        self.tail - self.head + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.head..=self.tail).contains(&index)
    }
}

/// Locate the submenu for `tag`, or the root submenu when `tag` is `None`.
///
/// Tags match by prefix: a header tagged `apps-extra` answers a request for
/// `apps` if it comes first in the input. The submenu runs from the item
/// after the header up to the item before the next header, or to the end of
/// the list.
pub fn resolve_submenu(items: &ItemList, tag: Option<&str>) -> Result<SubmenuRange> {
    let (head, header) = match tag {
        None => (items.head(), None),
        Some(tag) => {
            let header = items
                .indices()
                .find(|&i| items[i].tag().is_some_and(|t| t.starts_with(tag)))
                .ok_or_else(|| MenuError::TagNotFound(CompactString::from(tag)))?;

            let head = items[header]
                .next()
                .ok_or_else(|| MenuError::NoContent(CompactString::from(tag)))?;

            if items[head].is_header() {
                return Err(MenuError::NoContent(CompactString::from(tag)));
            }

            (head, Some(header))
        }
    };

    let mut tail = head;
    while let Some(next) = items[tail].next() {
        if items[next].is_header() {
            break;
        }
        tail = next;
    }

    let range = SubmenuRange { head, tail, header };
    debug!(
        "Resolved submenu {:?}: items {}..={} ({} entries)",
        tag,
        range.head,
        range.tail,
        range.len()
    );
    Ok(range)
}
