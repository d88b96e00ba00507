// File: crates/progress-chart-core/src/theme.rs
// Summary: Series colors per dashboard section, plus legend dimming levels.

use serde::Serialize;

/// Straight RGBA color, handed to the renderer as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Legend opacity when the series has at least one non-zero value.
pub const LEGEND_OPACITY_ACTIVE: f64 = 1.0;
/// Legend opacity when the field is offered but every value is zero.
pub const LEGEND_OPACITY_ZERO: f64 = 0.5;
/// Legend opacity when no bucket offers the field at all.
pub const LEGEND_OPACITY_ABSENT: f64 = 0.25;

/// Line colors of one dashboard section. Sections with a single count line have no secondary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Option<Rgba>,
    pub ratio: Rgba,
}

impl Palette {
    /// Color of the second count line, falling back to the primary one.
    pub fn secondary_or_primary(&self) -> Rgba {
        self.secondary.unwrap_or(self.primary)
    }

    pub const fn lessons() -> Self {
        Self {
            primary: Rgba::from_argb(255, 64, 160, 255),
            secondary: Some(Rgba::from_argb(255, 40, 200, 120)),
            ratio: Rgba::from_argb(255, 255, 170, 40),
        }
    }

    pub const fn challenges() -> Self {
        Self {
            primary: Rgba::from_argb(255, 0xdc, 0x32, 0x2f),
            secondary: Some(Rgba::from_argb(255, 0x93, 0xa1, 0xa1)),
            ratio: Rgba::from_argb(255, 0xb5, 0x89, 0x00),
        }
    }

    pub const fn quizzes() -> Self {
        Self {
            primary: Rgba::from_argb(255, 0x6c, 0x71, 0xc4),
            secondary: None,
            ratio: Rgba::from_argb(255, 0xcb, 0x4b, 0x16),
        }
    }

    pub const fn exercises() -> Self {
        Self {
            primary: Rgba::from_argb(255, 0x26, 0x8b, 0xd2),
            secondary: None,
            ratio: Rgba::from_argb(255, 0xd3, 0x36, 0x82),
        }
    }
}
