//! Light and dark display themes.
//!
//! The theme is session-wide display configuration: it is initialised once
//! from config and only changes through [`Theme::toggle`]. It never affects
//! game state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Named display theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the config/display name of this theme.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Switches between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colors used to draw this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Title and focused controls.
    pub accent: Color,
    /// Grid lines, hints and empty cell numbers.
    pub muted: Color,
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
    /// Background of the cell under the cursor.
    pub cursor: Color,
    /// Background of cells on the winning line.
    pub highlight: Color,
    /// Status line text.
    pub status: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    foreground: Color::Rgb(0x1f, 0x29, 0x37),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    mark_x: Color::Rgb(0x1d, 0x4e, 0xd8),
    mark_o: Color::Rgb(0xdc, 0x26, 0x26),
    cursor: Color::Rgb(0xe5, 0xe7, 0xeb),
    highlight: Color::Rgb(0xbb, 0xf7, 0xd0),
    status: Color::Rgb(0x37, 0x41, 0x51),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    foreground: Color::Rgb(0xe5, 0xe5, 0xe5),
    accent: Color::Rgb(0xda, 0x77, 0x56),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    mark_x: Color::Rgb(0x60, 0xa5, 0xfa),
    mark_o: Color::Rgb(0xf8, 0x71, 0x71),
    cursor: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x16, 0x65, 0x34),
    status: Color::Rgb(0xfa, 0xcc, 0x15),
};
