use super::submenu::SubmenuRange;
use super::Menu;
use crate::config::VisibleLimits;
use crate::services::Point;

/// Visible window onto the checked out submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first: usize,
    pub last: usize,
    /// Rows the menu reserves for items. Larger than `len()` only when the
    /// submenu is shorter than the configured minimum.
    pub visible: usize,
}

impl Viewport {
    /// Size a viewport for a freshly checked out submenu
    pub fn fit(submenu: &SubmenuRange, limits: VisibleLimits) -> Self {
        let count = submenu.len();

        let visible = if count > limits.max_items {
            limits.max_items
        } else if count < limits.min_items {
            limits.min_items
        } else {
            count
        };

        Self {
            first: submenu.head,
            last: submenu.head + visible.min(count) - 1,
            visible,
        }
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }
}

/// What a navigation step changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Unchanged,
    /// Only the highlighted item moved
    Selection,
    /// The visible window scrolled (item rectangles need a new layout)
    Viewport,
}

impl Menu {
    /// Move the selection up one item, scrolling at the top edge
    pub fn move_up(&mut self) -> Movement {
        let Some(prev) = self.items[self.selected].prev() else {
            return Movement::Unchanged;
        };

        let movement = if self.selected != self.viewport.first {
            self.selected = prev;
            Movement::Selection
        } else if self.viewport.first != self.submenu.head {
            match (
                self.items[self.viewport.first].prev(),
                self.items[self.viewport.last].prev(),
            ) {
                (Some(first), Some(last)) => {
                    self.viewport.first = first;
                    self.viewport.last = last;
                    self.selected = first;
                    Movement::Viewport
                }
                _ => Movement::Unchanged,
            }
        } else {
            Movement::Unchanged
        };

        self.debug_check();
        movement
    }

    /// Move the selection down one item, scrolling at the bottom edge
    pub fn move_down(&mut self) -> Movement {
        let Some(next) = self.items[self.selected].next() else {
            return Movement::Unchanged;
        };

        let movement = if self.selected != self.viewport.last {
            self.selected = next;
            Movement::Selection
        } else if self.viewport.last != self.submenu.tail {
            match (
                self.items[self.viewport.first].next(),
                self.items[self.viewport.last].next(),
            ) {
                (Some(first), Some(last)) => {
                    self.viewport.first = first;
                    self.viewport.last = last;
                    self.selected = last;
                    Movement::Viewport
                }
                _ => Movement::Unchanged,
            }
        } else {
            Movement::Unchanged
        };

        self.debug_check();
        movement
    }

    /// Rows page-down may scroll: a full page, or what is left below
    pub fn scroll_step_down(&self) -> usize {
        (self.submenu.tail - self.viewport.last).min(self.viewport.visible)
    }

    /// Rows page-up may scroll: a full page, or what is left above
    pub fn scroll_step_up(&self) -> usize {
        (self.viewport.first - self.submenu.head).min(self.viewport.visible)
    }

    pub fn page_down(&mut self) -> Movement {
        self.reposition(|menu| {
            if menu.is_scrollable() {
                menu.viewport.first += menu.scroll_step_down();
                menu.viewport.last = menu.viewport.first + menu.viewport.visible - 1;
            }
            menu.selected = menu.viewport.last;
        })
    }

    pub fn page_up(&mut self) -> Movement {
        self.reposition(|menu| {
            if menu.is_scrollable() {
                menu.viewport.first -= menu.scroll_step_up();
                menu.viewport.last = menu.viewport.first + menu.viewport.visible - 1;
            }
            menu.selected = menu.viewport.first;
        })
    }

    pub fn home(&mut self) -> Movement {
        self.reposition(|menu| {
            if menu.is_scrollable() {
                menu.viewport.first = menu.submenu.head;
                menu.viewport.last = menu.submenu.head + menu.viewport.visible - 1;
            }
            menu.selected = menu.viewport.first;
        })
    }

    pub fn end(&mut self) -> Movement {
        self.reposition(|menu| {
            if menu.is_scrollable() {
                menu.viewport.first = menu.submenu.tail + 1 - menu.viewport.visible;
                menu.viewport.last = menu.submenu.tail;
            }
            menu.selected = menu.viewport.last;
        })
    }

    /// Visible item under `point` (window coordinates)
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items
            .range(self.viewport.first, self.viewport.last)
            .find(|(_, item)| item.area().contains(point))
            .map(|(i, _)| i)
    }

    /// Highlight the item under the pointer, if it is not already selected
    pub fn hover(&mut self, point: Point) -> Movement {
        match self.item_at(point) {
            Some(index) if index != self.selected => {
                self.selected = index;
                Movement::Selection
            }
            _ => Movement::Unchanged,
        }
    }

    /// More items than fit in the viewport
    fn is_scrollable(&self) -> bool {
        self.submenu.len() > self.viewport.visible
    }

    fn reposition(&mut self, f: impl FnOnce(&mut Self)) -> Movement {
        let (first, selected) = (self.viewport.first, self.selected);
        f(self);
        self.debug_check();

        if self.viewport.first != first {
            Movement::Viewport
        } else if self.selected != selected {
            Movement::Selection
        } else {
            Movement::Unchanged
        }
    }
}
