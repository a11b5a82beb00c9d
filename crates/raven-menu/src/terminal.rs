//! Terminal backend: crossterm setup and a cell-grid renderer.
//!
//! Everything is drawn on `/dev/tty` so stdout stays free for commands
//! printed in `--no-spawn` mode.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use raven_menu_core::{Area, Point, Renderer, Rgba, Stroke};

/// Color the terminal is assumed to show behind the menu
const BACKDROP: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgba,
    bg: Rgba,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: BACKDROP,
            bg: BACKDROP,
        }
    }
}

/// Off-screen frame in menu window coordinates
#[derive(Debug, Default)]
struct CellGrid {
    rows: Vec<Vec<Cell>>,
}

impl CellGrid {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if self.rows.len() <= y {
            self.rows.resize_with(y + 1, Vec::new);
        }
        let row = &mut self.rows[y];
        if row.len() <= x {
            row.resize(x + 1, Cell::default());
        }
        Some(&mut row[x])
    }

    fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or_default()
    }

    fn fill(&mut self, area: Area, color: Rgba) {
        for y in area.y..area.y + area.h {
            for x in area.x..area.x + area.w {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.bg = color.over(cell.bg);
                }
            }
        }
    }

    fn outline(&mut self, area: Area, color: Rgba) {
        if area.w < 2 || area.h < 2 {
            return;
        }
        let (left, top) = (area.x, area.y);
        let (right, bottom) = (area.x + area.w - 1, area.y + area.h - 1);

        let mut put = |x: i32, y: i32, ch: char| {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.ch = ch;
                cell.fg = color;
            }
        };

        for x in left + 1..right {
            put(x, top, '─');
            put(x, bottom, '─');
        }
        for y in top + 1..bottom {
            put(left, y, '│');
            put(right, y, '│');
        }
        put(left, top, '┌');
        put(right, top, '┐');
        put(left, bottom, '└');
        put(right, bottom, '┘');
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Rgba) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(x + i as i32, y) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }
}

fn to_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb { r, g, b }
}

/// Raw-mode terminal session; restores the terminal when dropped
pub struct Terminal {
    out: BufWriter<File>,
    grid: CellGrid,
}

impl Terminal {
    pub fn open() -> io::Result<Self> {
        let tty = OpenOptions::new().read(true).write(true).open("/dev/tty")?;
        let mut out = BufWriter::new(tty);

        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        debug!("Terminal initialized");

        Ok(Self {
            out,
            grid: CellGrid::default(),
        })
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            debug!("Failed to restore terminal: {}", e);
        }
    }
}

impl Renderer for Terminal {
    fn clear(&mut self) -> raven_menu_core::Result<()> {
        self.grid.clear();
        Ok(())
    }

    fn draw_rectangle(&mut self, area: Area, stroke: Stroke, color: Rgba) -> raven_menu_core::Result<()> {
        match stroke {
            Stroke::Fill => self.grid.fill(area, color),
            Stroke::Outline(_) => self.grid.outline(area, color),
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, h: i32, color: Rgba) -> raven_menu_core::Result<()> {
        self.grid.text(text, x, y + (h - 1).max(0) / 2, color);
        Ok(())
    }

    fn map_window(&mut self, origin: Point, width: i32, height: i32) -> raven_menu_core::Result<()> {
        let (cols, lines) = terminal::size()?;
        let cols = (cols as i32 - origin.x).clamp(0, width.max(0)) as usize;
        let lines = (lines as i32 - origin.y).clamp(0, height.max(0)) as usize;

        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        for y in 0..lines {
            queue!(self.out, MoveTo(origin.x as u16, (origin.y as usize + y) as u16))?;
            for x in 0..cols {
                let cell = self.grid.cell(x, y);
                queue!(
                    self.out,
                    SetBackgroundColor(to_color(cell.bg)),
                    SetForegroundColor(to_color(cell.fg.over(cell.bg))),
                    Print(cell.ch)
                )?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
