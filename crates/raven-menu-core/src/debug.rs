//! `--debug` dump of the parsed list and the current range markers.

use std::io::{self, Write};

use crate::menu::Menu;

const COLUMN: usize = 20;
const RULE: &str = "---------------------------------------------------------------";

/// Write the item table followed by the positions of every range marker
pub fn dump_menu<W: Write>(menu: &Menu, out: &mut W) -> io::Result<()> {
    let items = menu.items();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<w$}{:<w$}{:<w$}Tag", "Name", "Cmd", "Spare", w = COLUMN)?;
    writeln!(out, "{}", RULE)?;

    for item in items.iter() {
        writeln!(
            out,
            "{:<w$}{:<w$}{:<w$}{}",
            item.label(),
            item.command(),
            item.spare().unwrap_or("(null)"),
            item.tag().unwrap_or("(null)"),
            w = COLUMN,
        )?;
    }

    let label = |index: usize| items[index].label();
    writeln!(out, "head:     {}", label(items.head()))?;
    writeln!(out, "tail:     {}", label(items.tail()))?;
    writeln!(out, "subhead:  {}", label(menu.subhead()))?;
    writeln!(out, "subtail:  {}", label(menu.subtail()))?;
    writeln!(out, "first:    {}", label(menu.first()))?;
    writeln!(out, "selected: {}", label(menu.selected()))?;
    writeln!(out, "last:     {}", label(menu.last()))?;
    writeln!(out, "title:    {}", menu.title().unwrap_or("(none)"))?;
    writeln!(out, "items in submenu: {}", menu.submenu().len())?;
    Ok(())
}
