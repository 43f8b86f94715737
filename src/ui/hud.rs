use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::board::Board;
use crate::config::Theme;
use crate::terminal_view::TerminalView;

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, board: &Board, view: &TerminalView) -> Rect {
    let [play_area, score_row, status_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let theme = view.theme();

    // Score and level come from the view: the board resets them on game over.
    frame.render_widget(
        Paragraph::new(info_line(
            &[
                ("Score", view.score().to_string()),
                ("Level", view.level().to_string()),
                ("Length", board.snake.len().to_string()),
            ],
            theme,
        ))
        .alignment(Alignment::Center),
        score_row,
    );

    let size = board.size();
    frame.render_widget(
        Paragraph::new(info_line(
            &[
                ("Speed", format!("{} ms", board.timeout().as_millis())),
                ("Ticks", view.ticks().to_string()),
                ("Best", view.best_score().to_string()),
                ("Board", format!("{}x{}", size.width - 2, size.height - 2)),
                ("Theme", theme.name.to_owned()),
            ],
            theme,
        ))
        .alignment(Alignment::Center),
        status_row,
    );

    play_area
}

fn info_line(fields: &[(&'static str, String)], theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (idx, (name, text)) in fields.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", label));
        }
        spans.push(Span::styled(format!("{name}: "), label));
        spans.push(Span::styled(text.clone(), value));
    }

    Line::from(spans)
}
