use std::time::Duration;

use ratatui::symbols::border;

/// Points granted for each food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Amount the base tick interval shrinks after each food, in milliseconds.
pub const SPEED_STEP_MS: u64 = 4;

/// Floor for the base tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Multiplier applied to the base interval while the slow effect is active.
pub const SLOW_MULTIPLIER: f64 = 1.6;

/// Lifetime of an effect picked up from a power-up.
pub const EFFECT_DURATION: Duration = Duration::from_secs(6);

/// Chance of spawning a power-up after food is eaten (when none is active).
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.25;

/// Length of a freshly spawned snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Upper bound for how long the frame loop blocks on input.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Terminal columns used to draw one logical cell.
pub const CELL_WIDTH: u16 = 2;

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "()";
pub const GLYPH_POWER_UP_SLOW: &str = "<>";
pub const GLYPH_POWER_UP_GHOST: &str = "{}";
pub const GLYPH_GRID_DOT: &str = " ·";
