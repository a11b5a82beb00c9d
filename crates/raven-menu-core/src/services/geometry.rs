use crate::config::MenuConfig;

/// A point in window or screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Area {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Edges are inclusive on the top/left and exclusive on the bottom/right
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w - 1 && p.y >= self.y && p.y <= self.y + self.h - 1
    }
}

/// Menu geometry service.
///
/// Item rectangles are relative to the menu window; the origin places the
/// window on screen.
pub trait Geometry {
    fn set_nr_visible_items(&mut self, count: usize);
    fn nr_visible_items(&self) -> usize;
    /// Reserve the first row for a title bar
    fn set_show_title(&mut self, show: bool);
    fn show_title(&self) -> bool;
    /// Rectangle of the row at `index` (the title, when shown, is row 0)
    fn item_area(&self, index: usize) -> Area;
    fn item_height(&self) -> i32;
    fn menu_origin(&self) -> Point;
    fn menu_width(&self) -> i32;
    fn menu_height(&self) -> i32;

    /// Screen coordinates of the menu window
    fn menu_bounds(&self) -> Area {
        let origin = self.menu_origin();
        Area::new(origin.x, origin.y, self.menu_width(), self.menu_height())
    }
}

/// Fixed-height rows stacked inside a margin
#[derive(Debug, Clone)]
pub struct GridGeometry {
    origin: Point,
    menu_width: i32,
    item_height: i32,
    item_margin_x: i32,
    item_margin_y: i32,
    nr_visible: usize,
    show_title: bool,
}

impl GridGeometry {
    pub fn new(origin: Point, menu_width: i32, item_height: i32) -> Self {
        Self {
            origin,
            menu_width,
            item_height,
            item_margin_x: 0,
            item_margin_y: 0,
            nr_visible: 0,
            show_title: false,
        }
    }

    pub fn with_item_margins(mut self, x: i32, y: i32) -> Self {
        self.item_margin_x = x;
        self.item_margin_y = y;
        self
    }

    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(
            Point::new(config.menu.margin_x, config.menu.margin_y),
            config.menu.width,
            config.item.height,
        )
        .with_item_margins(config.item.margin_x, config.item.margin_y)
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn rows(&self) -> usize {
        self.nr_visible + usize::from(self.show_title)
    }
}

impl Geometry for GridGeometry {
    fn set_nr_visible_items(&mut self, count: usize) {
        self.nr_visible = count;
    }

    fn nr_visible_items(&self) -> usize {
        self.nr_visible
    }

    fn set_show_title(&mut self, show: bool) {
        self.show_title = show;
    }

    fn show_title(&self) -> bool {
        self.show_title
    }

    fn item_area(&self, index: usize) -> Area {
        Area::new(
            self.item_margin_x,
            self.item_margin_y + index as i32 * self.item_height,
            self.menu_width - 2 * self.item_margin_x,
            self.item_height,
        )
    }

    fn item_height(&self) -> i32 {
        self.item_height
    }

    fn menu_origin(&self) -> Point {
        self.origin
    }

    fn menu_width(&self) -> i32 {
        self.menu_width
    }

    fn menu_height(&self) -> i32 {
        self.rows() as i32 * self.item_height + 2 * self.item_margin_y
    }
}
