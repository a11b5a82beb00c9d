use super::geometry::{Area, Point};
use crate::config::Rgba;
use crate::error::Result;

/// How a rectangle is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Fill,
    /// Outline with the given line width
    Outline(i32),
}

/// Drawing service used by the menu painter.
///
/// Coordinates are relative to the menu window. Nothing is shown until
/// `map_window` is called.
pub trait Renderer {
    fn clear(&mut self) -> Result<()>;
    fn draw_rectangle(&mut self, area: Area, stroke: Stroke, color: Rgba) -> Result<()>;
    /// Draw `text` left aligned at `x`, vertically centred in the row
    /// starting at `y` with height `h`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, h: i32, color: Rgba) -> Result<()>;
    fn map_window(&mut self, origin: Point, width: i32, height: i32) -> Result<()>;
}
