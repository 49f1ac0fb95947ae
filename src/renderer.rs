use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_POWER_UP_GHOST,
    GLYPH_POWER_UP_SLOW, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::effects::EffectKind;
use crate::game::{RunState, Snapshot};
use crate::grid::{Cell, GridSize};
use crate::settings::Settings;
use crate::theme::ThemeTokens;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from an immutable snapshot.
///
/// `pending` are the settings the next reset will apply; the start and
/// game-over screens show them.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot,
    theme: &ThemeTokens,
    pending: Settings,
) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(theme.background)), area);

    let play_area = render_hud(frame, area, snapshot, theme);
    let board_area = board_rect(play_area, snapshot.grid);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.accent).bg(theme.background));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, snapshot.grid, theme);
    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    match snapshot.status {
        RunState::Ready => {
            render_start_menu(frame, play_area, snapshot.best_score, pending, theme);
        }
        RunState::Paused => render_pause_menu(frame, play_area, theme),
        RunState::GameOver => {
            render_game_over_menu(frame, play_area, snapshot.game_over, pending, theme);
        }
        RunState::Victory => render_victory_menu(frame, play_area, snapshot.score, theme),
        RunState::Running => {}
    }
}

/// Centers a bordered board for `grid` inside `area`.
fn board_rect(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, grid: GridSize, theme: &ThemeTokens) {
    let style = Style::new().fg(theme.grid_lines).bg(theme.background);
    let buffer = frame.buffer_mut();
    for cell in grid.cells() {
        if let Some((x, y)) = logical_to_terminal(inner, grid, cell) {
            buffer.set_string(x, y, GLYPH_GRID_DOT, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &ThemeTokens) {
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, snapshot.food) {
        buffer.set_string(
            x,
            y,
            GLYPH_FOOD,
            Style::new()
                .fg(theme.food)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    }

    let Some(power_up) = snapshot.power_up else {
        return;
    };
    if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, power_up.cell) {
        let glyph = match power_up.kind {
            EffectKind::Slow => GLYPH_POWER_UP_SLOW,
            EffectKind::Ghost => GLYPH_POWER_UP_GHOST,
        };
        buffer.set_string(
            x,
            y,
            glyph,
            Style::new()
                .fg(theme.power_up)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &ThemeTokens) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins wherever a ghost run overlaps the body.
    for (idx, segment) in snapshot.snake.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let (glyph, color) = if idx == 0 {
            (GLYPH_SNAKE_HEAD, theme.snake_head)
        } else {
            (GLYPH_SNAKE_BODY, theme.snake_body)
        };
        buffer.set_string(x, y, glyph, Style::new().fg(color).bg(theme.background));
    }
}

/// Maps a logical cell to the terminal position of its left column.
fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
