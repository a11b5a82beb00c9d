//! Composes a menu frame out of renderer primitives.

use crate::config::MenuConfig;
use crate::dispatch::display_hint;
use crate::error::Result;
use crate::menu::Menu;
use crate::services::{Area, Geometry, ProgramLookup, Renderer, Stroke};

/// Paint background, title bar, border and the visible items, then show
/// the window
pub fn draw_menu<G: Geometry + ?Sized>(
    menu: &Menu,
    geometry: &G,
    config: &MenuConfig,
    renderer: &mut dyn Renderer,
    programs: &dyn ProgramLookup,
) -> Result<()> {
    let colors = &config.colors;
    let padding = config.item.padding_x;
    let width = geometry.menu_width();
    let height = geometry.menu_height();
    let window = Area::new(0, 0, width, height);

    renderer.clear()?;
    renderer.draw_rectangle(window, Stroke::Fill, colors.menu_bg)?;

    if let Some(title) = menu.title() {
        let bar = geometry.item_area(0);
        renderer.draw_rectangle(bar, Stroke::Fill, colors.title_bg)?;
        renderer.draw_text(title, bar.x + padding, bar.y, bar.h, colors.norm_fg)?;
    }

    if config.menu.border > 0 {
        renderer.draw_rectangle(window, Stroke::Outline(config.menu.border), colors.menu_fg)?;
    }

    let arrow_width = config.arrow_string.chars().count() as i32;

    for (index, item) in menu.visible_items() {
        let area = item.area();
        let selected = index == menu.selected();
        let (bg, fg) = if selected {
            (colors.sel_bg, colors.sel_fg)
        } else {
            (colors.norm_bg, colors.norm_fg)
        };

        renderer.draw_rectangle(area, Stroke::Fill, bg)?;
        if config.item.border > 0 {
            renderer.draw_rectangle(area, Stroke::Outline(config.item.border), fg)?;
        }

        let hint = display_hint(item, programs);
        if hint.arrow {
            let x = area.x + area.w - padding - arrow_width;
            renderer.draw_text(&config.arrow_string, x, area.y, area.h, fg)?;
        }

        let text_color = if hint.unavailable { colors.noprog_fg } else { fg };
        renderer.draw_text(item.label(), area.x + padding, area.y, area.h, text_color)?;
    }

    renderer.map_window(geometry.menu_origin(), width, height)
}
