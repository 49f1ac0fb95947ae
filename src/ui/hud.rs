use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::Snapshot;
use crate::theme::ThemeTokens;

const HUD_MARGIN_X: u16 = 1;

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    theme: &ThemeTokens,
) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_area = inset_horizontal(score_area, HUD_MARGIN_X);
    let status_area = inset_horizontal(status_area, HUD_MARGIN_X);

    frame.render_widget(
        Paragraph::new(score_line(snapshot, theme)).style(Style::new().bg(theme.background)),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(status_line(snapshot, theme, usize::from(status_area.width)))
            .style(Style::new().bg(theme.background)),
        status_area,
    );

    play_area
}

/// `Score 40  Best 120  Length 7  Speed 124ms`
fn score_line<'a>(snapshot: &Snapshot, theme: &ThemeTokens) -> Line<'a> {
    let label = Style::new().fg(theme.grid_lines);
    let value = Style::new().fg(theme.text).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Best ", label),
        Span::styled(snapshot.best_score.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format!("{}ms", snapshot.tick_interval.as_millis()), value),
    ])
}

/// Status label on the left, active effects pushed to the right edge.
fn status_line<'a>(snapshot: &Snapshot, theme: &ThemeTokens, width: usize) -> Line<'a> {
    let status = snapshot.status.label();
    let effects = snapshot
        .effects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("  ");

    let gap = width.saturating_sub(status.width() + effects.width());
    Line::from(vec![
        Span::styled(status, Style::new().fg(theme.accent)),
        Span::raw(" ".repeat(gap)),
        Span::styled(effects, Style::new().fg(theme.power_up)),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let [_, inner, _] = Layout::horizontal([
        Constraint::Length(margin),
        Constraint::Min(0),
        Constraint::Length(margin),
    ])
    .areas(area);
    inner
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::config::EFFECT_DURATION;
    use crate::effects::EffectKind;
    use crate::game::GameSession;
    use crate::settings::Settings;

    use super::status_line;

    #[test]
    fn status_line_right_aligns_effects() {
        let now = Instant::now();
        let mut session = GameSession::new_with_seed(Settings::default(), 0, 1);
        session.start(now);
        session.effects.activate(EffectKind::Ghost, now, EFFECT_DURATION);
        let snapshot = session.snapshot(now);

        let line = status_line(&snapshot, Settings::default().theme.tokens(), 30);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert_eq!(text.len(), 30);
        assert!(text.starts_with("Running"));
        assert!(text.ends_with("Ghost 6s"));
    }
}
