//! Terminal Snake with timed power-ups.
//!
//! [`game::GameSession`] is the tick-driven simulation; [`app::App`] wires it
//! to input, the score store and settings, and [`renderer`] draws snapshots.

pub mod app;
pub mod config;
pub mod effects;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod settings;
pub mod snake;
pub mod spawner;
pub mod storage;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
