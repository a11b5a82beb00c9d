mod color;
mod paths;
mod settings;

pub use color::Rgba;
pub use paths::{expand_tilde, ConfigPaths};
pub use settings::{ColorSection, ItemSection, MenuConfig, MenuSection, VisibleLimits};
