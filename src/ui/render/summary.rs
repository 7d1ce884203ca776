use super::Frame;
use crate::state::State;
use crate::ui::widgets::{mascot, styling};
use crate::utils::amounts::format_ml;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the end-of-run summary.
///
pub fn summary(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let session = state.get_session();
    let snapshot = state.snapshot();
    let tier = state.reaction_tier();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(size);

    let goal_line = if session.has_goal() {
        format!("Goal: {} ml", session.goal())
    } else {
        "Goal: not set".to_string()
    };

    let stats = vec![
        Line::from(""),
        Line::from(Span::styled(goal_line, styling::normal_text_style(theme))),
        Line::from(Span::styled(
            format!(
                "Logged: {} in {} entries",
                format_ml(session.total_intake()),
                session.entry_count()
            ),
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            format!("Progress: {:.0}%", snapshot.percent),
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            format!("Remaining: {} ml", snapshot.remaining),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mascot: ", styling::normal_text_style(theme)),
            Span::styled(
                format!("{} ", tier.label()),
                Style::default()
                    .fg(mascot::tier_color(theme, tier))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(mascot::message(tier), styling::secondary_text_style(theme)),
        ]),
    ];

    let widget = Paragraph::new(stats)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Daily Summary")
                .border_style(styling::active_block_border_style(theme)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(widget, chunks[0]);

    let hint = Paragraph::new("y: copy summary, r: start a new day, b: go back, q: quit")
        .style(Style::default().fg(theme.text_muted.to_color()))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}
