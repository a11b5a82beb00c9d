//! Menu model: parsed items, the checked out submenu and the visible window.

mod item;
mod list;
mod parser;
mod submenu;
mod viewport;

pub use item::{Item, MAX_FIELDS};
pub use list::ItemList;
pub use parser::{caret_argument, parse_line, CHECKOUT_MARKER, SUB_MARKER, TAG_MARKER};
pub use submenu::{resolve_submenu, SubmenuRange};
pub use viewport::{Movement, Viewport};

use compact_str::CompactString;
use tracing::debug;

use crate::config::VisibleLimits;
use crate::error::Result;
use crate::services::Geometry;

/// The live menu: every item plus the range markers of the current submenu.
///
/// Positions always satisfy
/// `subhead <= first <= selected <= last <= subtail`.
#[derive(Debug, Clone)]
pub struct Menu {
    items: ItemList,
    limits: VisibleLimits,
    submenu: SubmenuRange,
    viewport: Viewport,
    selected: usize,
}

impl Menu {
    /// Check out the initial submenu.
    ///
    /// Without an explicit tag, a menu whose first item is a header opens
    /// that header's submenu; otherwise the root submenu is shown.
    pub fn open(items: ItemList, checkout: Option<&str>, limits: VisibleLimits) -> Result<Self> {
        let head = &items[items.head()];
        let tag: Option<CompactString> = checkout
            .map(CompactString::from)
            .or_else(|| head.is_header().then(|| head.tag.clone()).flatten());

        let submenu = resolve_submenu(&items, tag.as_deref())?;
        let viewport = Viewport::fit(&submenu, limits);

        let menu = Self {
            items,
            limits,
            submenu,
            viewport,
            selected: viewport.first,
        };
        menu.debug_check();
        Ok(menu)
    }

    /// Make the submenu for `tag` current and reset the viewport to its top
    pub fn checkout(&mut self, tag: Option<&str>) -> Result<()> {
        let submenu = resolve_submenu(&self.items, tag)?;

        self.submenu = submenu;
        self.viewport = Viewport::fit(&submenu, self.limits);
        self.selected = self.viewport.first;

        debug!("Checked out {:?} ({} items)", tag, submenu.len());
        self.debug_check();
        Ok(())
    }

    /// Push the visible count to the geometry service and assign a
    /// rectangle to every visible item
    pub fn layout<G: Geometry + ?Sized>(&mut self, geometry: &mut G) {
        geometry.set_nr_visible_items(self.viewport.visible);
        geometry.set_show_title(self.title().is_some());

        let offset = usize::from(self.title().is_some());
        for (row, index) in (self.viewport.first..=self.viewport.last).enumerate() {
            let area = geometry.item_area(row + offset);
            if let Some(item) = self.items.get_mut(index) {
                item.area = area;
            }
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn limits(&self) -> VisibleLimits {
        self.limits
    }

    pub fn submenu(&self) -> SubmenuRange {
        self.submenu
    }

    pub fn subhead(&self) -> usize {
        self.submenu.head
    }

    pub fn subtail(&self) -> usize {
        self.submenu.tail
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn first(&self) -> usize {
        self.viewport.first
    }

    pub fn last(&self) -> usize {
        self.viewport.last
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &Item {
        &self.items[self.selected]
    }

    /// Label of the header the current submenu was checked out from
    pub fn title(&self) -> Option<&str> {
        self.submenu.header.map(|h| self.items[h].label())
    }

    /// Visible items with their indices, top to bottom
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.items.range(self.viewport.first, self.viewport.last)
    }

    /// Range ordering and viewport size constraints
    pub fn invariants_hold(&self) -> bool {
        let SubmenuRange { head, tail, .. } = self.submenu;
        let Viewport { first, last, visible } = self.viewport;

        let ordered = head <= first && first <= self.selected && self.selected <= last && last <= tail;
        let within_max = last - first < self.limits.max_items;
        let within_min = self.viewport.len() >= self.limits.min_items.min(self.submenu.len());

        ordered && within_max && within_min && self.viewport.len() <= visible
    }

    fn debug_check(&self) {
        debug_assert!(
            self.invariants_hold(),
            "menu invariants broken: submenu {:?}, viewport {:?}, selected {}",
            self.submenu,
            self.viewport,
            self.selected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use crate::services::{Area, GridGeometry, Point};

    const MENU: &str = "\
Root,^tag(root)
Terminal,xterm
Apps,^checkout(apps)
Applications,^tag(apps)
Editor,vim
..,^checkout(root)
";

    #[test]
    fn test_open_follows_leading_header() {
        let menu = Menu::open(ItemList::parse(MENU).unwrap(), None, VisibleLimits::new(1, 10)).unwrap();
        assert_eq!(menu.title(), Some("Root"));
        assert_eq!((menu.subhead(), menu.subtail()), (1, 2));
        assert_eq!(menu.selected_item().label(), "Terminal");
    }

    #[test]
    fn test_open_with_explicit_checkout() {
        let menu = Menu::open(ItemList::parse(MENU).unwrap(), Some("apps"), VisibleLimits::new(1, 10)).unwrap();
        assert_eq!(menu.title(), Some("Applications"));
        let labels: Vec<_> = menu.visible_items().map(|(_, i)| i.label()).collect();
        assert_eq!(labels, ["Editor", ".."]);
    }

    #[test]
    fn test_checkout_resets_viewport_and_selection() {
        let mut menu = Menu::open(ItemList::parse(MENU).unwrap(), None, VisibleLimits::new(1, 10)).unwrap();
        menu.move_down();
        assert_eq!(menu.selected(), 2);

        menu.checkout(Some("apps")).unwrap();
        assert_eq!(menu.selected(), 4);
        assert_eq!((menu.first(), menu.last()), (4, 5));

        menu.checkout(Some("root")).unwrap();
        assert_eq!(menu.title(), Some("Root"));
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_failed_checkout_keeps_current_submenu() {
        let mut menu = Menu::open(ItemList::parse(MENU).unwrap(), None, VisibleLimits::new(1, 10)).unwrap();
        assert!(matches!(menu.checkout(Some("games")), Err(MenuError::TagNotFound(_))));
        assert_eq!(menu.title(), Some("Root"));
        assert!(menu.invariants_hold());
    }

    #[test]
    fn test_layout_skips_title_row() {
        let mut menu = Menu::open(ItemList::parse(MENU).unwrap(), None, VisibleLimits::new(1, 10)).unwrap();
        let mut geo = GridGeometry::new(Point::default(), 20, 1);
        menu.layout(&mut geo);

        assert!(geo.show_title());
        assert_eq!(geo.nr_visible_items(), 2);
        assert_eq!(menu.items()[1].area(), Area::new(0, 1, 20, 1));
        assert_eq!(menu.items()[2].area(), Area::new(0, 2, 20, 1));
    }

    #[test]
    fn test_open_ignores_leading_spare_field_tag() {
        let items = ItemList::parse("Firefox,firefox,^tag(none)\nB,b").unwrap();
        let menu = Menu::open(items, None, VisibleLimits::new(1, 10)).unwrap();
        assert_eq!(menu.title(), None);
        let labels: Vec<_> = menu.visible_items().map(|(_, i)| i.label()).collect();
        assert_eq!(labels, ["Firefox", "B"]);
    }

    #[test]
    fn test_root_menu_has_no_title() {
        let menu = Menu::open(ItemList::parse("A\nB").unwrap(), None, VisibleLimits::new(1, 10)).unwrap();
        assert_eq!(menu.title(), None);
    }
}
