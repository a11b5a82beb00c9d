use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::color::Rgba;
use crate::error::{MenuError, Result};

/// Menu configuration (config.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub menu: MenuSection,
    #[serde(default)]
    pub item: ItemSection,
    #[serde(default)]
    pub colors: ColorSection,
    #[serde(default = "default_arrow_string")]
    pub arrow_string: String,
}

/// Window level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    /// Run commands (true) or print them to stdout (false)
    #[serde(default = "default_true")]
    pub spawn: bool,
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default = "default_menu_width")]
    pub width: i32,
    #[serde(default)]
    pub margin_x: i32,
    #[serde(default)]
    pub margin_y: i32,
    #[serde(default = "default_border")]
    pub border: i32,
}

/// Per-row settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSection {
    #[serde(default = "default_item_height")]
    pub height: i32,
    #[serde(default = "default_item_margin")]
    pub margin_x: i32,
    #[serde(default = "default_item_margin")]
    pub margin_y: i32,
    #[serde(default = "default_item_padding")]
    pub padding_x: i32,
    #[serde(default)]
    pub border: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSection {
    #[serde(default = "default_menu_bg")]
    pub menu_bg: Rgba,
    #[serde(default = "default_menu_fg")]
    pub menu_fg: Rgba,
    #[serde(default = "default_title_bg")]
    pub title_bg: Rgba,
    #[serde(default = "default_norm_bg")]
    pub norm_bg: Rgba,
    #[serde(default = "default_norm_fg")]
    pub norm_fg: Rgba,
    #[serde(default = "default_sel_bg")]
    pub sel_bg: Rgba,
    #[serde(default = "default_sel_fg")]
    pub sel_fg: Rgba,
    #[serde(default = "default_noprog_fg")]
    pub noprog_fg: Rgba,
}

fn default_true() -> bool {
    true
}

fn default_min_items() -> usize {
    1
}

fn default_max_items() -> usize {
    40
}

fn default_menu_width() -> i32 {
    32
}

fn default_border() -> i32 {
    1
}

fn default_item_height() -> i32 {
    1
}

fn default_item_margin() -> i32 {
    1
}

fn default_item_padding() -> i32 {
    1
}

fn default_arrow_string() -> String {
    "→".to_string()
}

fn default_menu_bg() -> Rgba {
    Rgba::from_hex(0x000000, 70)
}

fn default_menu_fg() -> Rgba {
    Rgba::from_hex(0xeeeeee, 20)
}

fn default_title_bg() -> Rgba {
    Rgba::from_hex(0x2a3138, 100)
}

fn default_norm_bg() -> Rgba {
    Rgba::from_hex(0x000000, 0)
}

fn default_norm_fg() -> Rgba {
    Rgba::from_hex(0xeeeeee, 100)
}

fn default_sel_bg() -> Rgba {
    Rgba::from_hex(0x009688, 100)
}

fn default_sel_fg() -> Rgba {
    Rgba::from_hex(0xffffff, 100)
}

fn default_noprog_fg() -> Rgba {
    Rgba::from_hex(0x888888, 100)
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu: MenuSection::default(),
            item: ItemSection::default(),
            colors: ColorSection::default(),
            arrow_string: default_arrow_string(),
        }
    }
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            spawn: true,
            min_items: default_min_items(),
            max_items: default_max_items(),
            width: default_menu_width(),
            margin_x: 0,
            margin_y: 0,
            border: default_border(),
        }
    }
}

impl Default for ItemSection {
    fn default() -> Self {
        Self {
            height: default_item_height(),
            margin_x: default_item_margin(),
            margin_y: default_item_margin(),
            padding_x: default_item_padding(),
            border: 0,
        }
    }
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            menu_bg: default_menu_bg(),
            menu_fg: default_menu_fg(),
            title_bg: default_title_bg(),
            norm_bg: default_norm_bg(),
            norm_fg: default_norm_fg(),
            sel_bg: default_sel_bg(),
            sel_fg: default_sel_fg(),
            noprog_fg: default_noprog_fg(),
        }
    }
}

/// Bounds on the number of rows the menu shows at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLimits {
    pub min_items: usize,
    pub max_items: usize,
}

impl VisibleLimits {
    /// Forces `max_items >= 1` and `min_items <= max_items`
    pub fn new(min_items: usize, max_items: usize) -> Self {
        let max_items = max_items.max(1);
        Self {
            min_items: min_items.min(max_items),
            max_items,
        }
    }

    /// Same minimum and maximum
    pub fn fixed(count: usize) -> Self {
        Self::new(count, count)
    }
}

impl MenuConfig {
    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut config: MenuConfig = toml::from_str(&content).map_err(|source| MenuError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalize();

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Show exactly `count` rows (`--fixed-height`)
    pub fn set_fixed_height(&mut self, count: usize) {
        self.menu.min_items = count;
        self.menu.max_items = count;
        self.normalize();
    }

    pub fn set_spawn(&mut self, spawn: bool) {
        self.menu.spawn = spawn;
    }

    pub fn limits(&self) -> VisibleLimits {
        VisibleLimits::new(self.menu.min_items, self.menu.max_items)
    }

    fn normalize(&mut self) {
        let limits = self.limits();
        self.menu.min_items = limits.min_items;
        self.menu.max_items = limits.max_items;
        self.item.height = self.item.height.max(1);
    }
}
