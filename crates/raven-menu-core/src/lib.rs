//! Menu engine for raven-menu.
//!
//! Turns line-oriented menu definitions into a tree of tagged submenus and
//! drives selection, scrolling and activation from abstract input events.
//! Windowing, drawing and process spawning are reached through the traits in
//! [`services`].

pub mod config;
pub mod debug;
pub mod dispatch;
pub mod draw;
pub mod error;
pub mod input;
pub mod menu;
pub mod services;
pub mod session;

pub use config::{ConfigPaths, MenuConfig, Rgba, VisibleLimits};
pub use dispatch::{Activation, LaunchMode};
pub use error::{MenuError, Result};
pub use input::{InputEvent, KeyAction, Outcome, PointerButton};
pub use menu::{Item, ItemList, Menu, Movement};
pub use services::{
    Area, Geometry, GridGeometry, PathLookup, Point, ProgramLookup, Renderer, ShellSpawner, Spawner, Stroke,
};
pub use session::MenuSession;
