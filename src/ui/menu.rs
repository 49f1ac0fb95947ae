use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{DeathReason, GameOverSummary};
use crate::settings::Settings;
use crate::theme::ThemeTokens;

const POPUP_WIDTH: u16 = 34;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    best_score: u32,
    pending: Settings,
    theme: &ThemeTokens,
) {
    let mut lines = vec![
        title_line("SNAKE", theme),
        Line::from(""),
        Line::from(format!("Best: {best_score}")),
        Line::from(""),
    ];
    lines.extend(settings_lines(pending));
    lines.extend([Line::from(""), Line::from("[Enter] Start  [Q] Quit")]);

    render_popup(frame, area, " start ", lines, theme);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &ThemeTokens) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("[R] Reset  [Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over screen with the final and best scores.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: Option<GameOverSummary>,
    pending: Settings,
    theme: &ThemeTokens,
) {
    let mut lines = vec![title_line("GAME OVER", theme), Line::from("")];

    if let Some(summary) = summary {
        let best = summary.final_score.max(summary.previous_best);
        lines.extend([
            Line::from(format!("Score: {}", summary.final_score)),
            Line::from(format!("Best: {best}")),
            Line::from(match summary.reason {
                DeathReason::WallCollision => "Cause: hit wall",
                DeathReason::SelfCollision => "Cause: hit yourself",
            }),
            Line::from(if summary.is_new_best() {
                "New best score!"
            } else {
                ""
            }),
        ]);
    }

    lines.extend(settings_lines(pending));
    lines.extend([Line::from(""), Line::from("[Enter] Play again  [Q] Quit")]);

    render_popup(frame, area, " game over ", lines, theme);
}

/// Draws the board-cleared screen.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &ThemeTokens) {
    let lines = vec![
        title_line("BOARD CLEARED", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[Enter] Play again  [Q] Quit"),
    ];

    render_popup(frame, area, " victory ", lines, theme);
}

fn title_line<'a>(title: &'a str, theme: &ThemeTokens) -> Line<'a> {
    Line::from(title).style(Style::new().fg(theme.accent).add_modifier(Modifier::BOLD))
}

fn settings_lines<'a>(pending: Settings) -> [Line<'a>; 3] {
    [
        Line::from(format!(
            "[G] Grid   {0}x{0}",
            pending.grid_size.cells_per_side()
        )),
        Line::from(format!("[V] Speed  {}", pending.speed.label())),
        Line::from(format!("[T] Theme  {}", pending.theme.tokens().name)),
    ]
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    theme: &ThemeTokens,
) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text).bg(theme.background))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(theme.accent)),
            ),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
