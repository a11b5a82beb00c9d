//! Decides what activating an item does.

use tracing::info;

use crate::error::Result;
use crate::menu::{caret_argument, Item, Menu, CHECKOUT_MARKER, SUB_MARKER, TAG_MARKER};
use crate::services::{ProgramLookup, Spawner};

/// Label of the conventional "back to parent" item
pub const PARENT_LABEL: &str = "..";

/// A command field, classified by its leading directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `^checkout(name)`: open another submenu
    Checkout(&'a str),
    /// `^sub(cmd)`: run `cmd`
    Sub(&'a str),
    /// `^tag(name)`: submenu header
    Tag(&'a str),
    /// Anything else is run as is
    Command(&'a str),
}

impl<'a> Directive<'a> {
    pub fn parse(command: &'a str) -> Self {
        if let Some(tag) = caret_argument(command, CHECKOUT_MARKER) {
            Directive::Checkout(tag)
        } else if let Some(cmd) = caret_argument(command, SUB_MARKER) {
            Directive::Sub(cmd)
        } else if let Some(tag) = caret_argument(command, TAG_MARKER) {
            Directive::Tag(tag)
        } else {
            Directive::Command(command)
        }
    }
}

/// Whether activated commands are executed or printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Spawn,
    /// Print to stdout (`--no-spawn`)
    Print,
}

impl LaunchMode {
    pub fn from_spawn_flag(spawn: bool) -> Self {
        if spawn {
            LaunchMode::Spawn
        } else {
            LaunchMode::Print
        }
    }
}

/// Result of activating an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Another submenu is now current; the window must be resized
    Checkout(String),
    /// The command was handed to the spawner; the menu should exit
    Spawned(String),
    /// The command must be written to stdout before the menu exits
    Print(String),
}

impl Activation {
    /// Exit status once the activation is complete, if the menu should exit
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Activation::Checkout(_) => None,
            Activation::Spawned(_) | Activation::Print(_) => Some(0),
        }
    }
}

/// Carry out `command` for the activated item
pub fn dispatch(
    menu: &mut Menu,
    command: &str,
    mode: LaunchMode,
    spawner: &mut dyn Spawner,
) -> Result<Activation> {
    let run = match Directive::parse(command) {
        Directive::Checkout(tag) => {
            menu.checkout(Some(tag))?;
            info!("Opened submenu '{}'", tag);
            return Ok(Activation::Checkout(tag.to_string()));
        }
        Directive::Sub(cmd) => cmd,
        Directive::Tag(_) | Directive::Command(_) => command,
    };

    match mode {
        LaunchMode::Spawn => {
            info!("Launching: {}", run);
            spawner.spawn(run)?;
            Ok(Activation::Spawned(run.to_string()))
        }
        LaunchMode::Print => Ok(Activation::Print(run.to_string())),
    }
}

/// How the painter should style an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayHint {
    /// Draw the submenu arrow
    pub arrow: bool,
    /// Program missing from `$PATH`
    pub unavailable: bool,
}

/// Styling rules for one item.
///
/// The parent item (`..`) never shows an arrow and is never grayed out.
pub fn display_hint(item: &Item, programs: &dyn ProgramLookup) -> DisplayHint {
    let is_parent = item.label() == PARENT_LABEL;

    match Directive::parse(item.command()) {
        Directive::Checkout(_) => DisplayHint {
            arrow: !is_parent,
            unavailable: false,
        },
        Directive::Sub(_) => DisplayHint {
            arrow: true,
            unavailable: false,
        },
        Directive::Tag(_) | Directive::Command(_) => DisplayHint {
            arrow: false,
            unavailable: !is_parent && !programs.is_prog(item.command()),
        },
    }
}
