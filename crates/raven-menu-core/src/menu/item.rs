use compact_str::CompactString;
use smallvec::SmallVec;

use super::parser::TAG_MARKER;
use crate::services::Area;

/// Number of comma separated fields kept per input line
pub const MAX_FIELDS: usize = 3;

/// A single menu entry parsed from one input line
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// label, command and (optional) spare field, in input order
    pub(crate) fields: SmallVec<[CompactString; MAX_FIELDS]>,
    /// Set when this item is the header of a tagged submenu
    pub(crate) tag: Option<CompactString>,
    pub(crate) area: Area,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Item {
    /// Text shown in the menu
    pub fn label(&self) -> &str {
        &self.fields[0]
    }

    /// Command run on activation (defaults to the label)
    pub fn command(&self) -> &str {
        &self.fields[1]
    }

    pub fn spare(&self) -> Option<&str> {
        self.fields.get(2).map(|s| s.as_str())
    }

    /// Submenu name declared by a `^tag(name)` marker
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Headers start with `^tag(` in the command field and bound submenus.
    /// A tag given in the spare field only names the item.
    pub fn is_header(&self) -> bool {
        self.fields.get(1).is_some_and(|c| c.starts_with(TAG_MARKER))
    }

    /// Rectangle assigned by the last layout pass
    pub fn area(&self) -> Area {
        self.area
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }
}
