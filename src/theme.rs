use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Semantic color tokens handed to the renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ThemeTokens {
    pub name: &'static str,
    pub background: Color,
    pub grid_lines: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Accent for power-ups on the board and active effect labels.
    pub power_up: Color,
    pub text: Color,
    /// Titles, borders and highlighted HUD values.
    pub accent: Color,
}

pub const THEME_NEON: ThemeTokens = ThemeTokens {
    name: "Neon",
    background: Color::Rgb(10, 6, 24),
    grid_lines: Color::Rgb(40, 28, 72),
    snake_head: Color::Rgb(57, 255, 20),
    snake_body: Color::Rgb(0, 200, 120),
    food: Color::Rgb(255, 0, 170),
    power_up: Color::Rgb(0, 229, 255),
    text: Color::Rgb(230, 230, 255),
    accent: Color::Rgb(255, 0, 170),
};

pub const THEME_RETRO: ThemeTokens = ThemeTokens {
    name: "Retro",
    background: Color::Rgb(15, 56, 15),
    grid_lines: Color::Rgb(48, 98, 48),
    snake_head: Color::Rgb(155, 188, 15),
    snake_body: Color::Rgb(139, 172, 15),
    food: Color::Rgb(202, 220, 159),
    power_up: Color::Rgb(255, 255, 255),
    text: Color::Rgb(202, 220, 159),
    accent: Color::Rgb(155, 188, 15),
};

pub const THEME_OCEAN: ThemeTokens = ThemeTokens {
    name: "Ocean",
    background: Color::Rgb(4, 24, 48),
    grid_lines: Color::Rgb(16, 52, 88),
    snake_head: Color::Rgb(240, 248, 255),
    snake_body: Color::Rgb(0, 180, 216),
    food: Color::Rgb(255, 183, 3),
    power_up: Color::Rgb(144, 224, 239),
    text: Color::Rgb(202, 240, 248),
    accent: Color::Rgb(0, 180, 216),
};

pub const THEME_CLASSIC: ThemeTokens = ThemeTokens {
    name: "Classic",
    background: Color::Black,
    grid_lines: Color::DarkGray,
    snake_head: Color::White,
    snake_body: Color::Blue,
    food: Color::Red,
    power_up: Color::Yellow,
    text: Color::White,
    accent: Color::Green,
};

/// Identifier of a built-in theme.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Neon,
    Retro,
    Ocean,
    Classic,
}

impl ThemeId {
    /// All themes in cycle order.
    pub const ALL: [Self; 4] = [Self::Neon, Self::Retro, Self::Ocean, Self::Classic];

    #[must_use]
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Neon => &THEME_NEON,
            Self::Retro => &THEME_RETRO,
            Self::Ocean => &THEME_OCEAN,
            Self::Classic => &THEME_CLASSIC,
        }
    }

    /// The theme after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|id| *id == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
