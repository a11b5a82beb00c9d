use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with components in `0.0..=1.0`.
///
/// Config files write colors as `"#rrggbb aa"` where `aa` is the alpha as a
/// percentage (0-100). The alpha part is optional and defaults to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and an alpha percentage
    pub fn from_hex(rgb: u32, alpha_percent: u8) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f64 / 255.0,
            g: ((rgb >> 8) & 0xff) as f64 / 255.0,
            b: (rgb & 0xff) as f64 / 255.0,
            a: alpha_percent.min(100) as f64 / 100.0,
        }
    }

    /// Channels as 8-bit values, alpha ignored
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Composite this color over `base` using its alpha
    pub fn over(self, base: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |top: f64, bottom: f64| top * a + bottom * (1.0 - a);
        Rgba::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b), 1.0)
    }

    /// Shift alpha by `delta`, clamped to `0.0..=1.0`
    pub fn adjust_alpha(&mut self, delta: f64) {
        self.a = (self.a + delta).clamp(0.0, 1.0);
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl std::str::FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let hex = parts
            .next()
            .and_then(|p| p.strip_prefix('#'))
            .filter(|h| h.len() == 6)
            .ok_or_else(|| format!("expected '#rrggbb [alpha]', got '{}'", s))?;
        let rgb = u32::from_str_radix(hex, 16).map_err(|e| format!("bad color '{}': {}", s, e))?;

        let alpha = match parts.next() {
            Some(a) => a
                .parse::<u8>()
                .ok()
                .filter(|a| *a <= 100)
                .ok_or_else(|| format!("alpha must be 0-100 in '{}'", s))?,
            None => 100,
        };

        if parts.next().is_some() {
            return Err(format!("trailing data in color '{}'", s));
        }

        Ok(Self::from_hex(rgb, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        let alpha = (self.a.clamp(0.0, 1.0) * 100.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x} {}", r, g, b, alpha)
    }
}
