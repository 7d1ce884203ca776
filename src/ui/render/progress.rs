use super::Frame;
use crate::state::State;
use crate::ui::widgets::{mascot, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Render the progress screen: a gauge plus the remaining volume.
///
pub fn progress(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let session = state.get_session();

    if !session.has_goal() {
        let notice = Paragraph::new(
            "No goal committed yet, so there is nothing to measure. Go back and set one.",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(notice, size);
        return;
    }

    let snapshot = state.snapshot();
    let tier = state.reaction_tier();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(size);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress")
                .border_style(styling::active_block_border_style(theme)),
        )
        .gauge_style(
            Style::default()
                .fg(mascot::tier_color(theme, tier))
                .bg(theme.surface.to_color()),
        )
        .ratio(snapshot.percent / 100.0)
        .label(format!("{:.0}% of {} ml", snapshot.percent, session.goal()));
    frame.render_widget(gauge, chunks[0]);

    let figures = vec![
        Line::from(Span::styled(
            format!(
                "Drunk {} ml of {} ml.",
                session.total_intake(),
                session.goal()
            ),
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            if snapshot.is_goal_met() {
                "Nothing left to drink today.".to_string()
            } else {
                format!("{} ml to go.", snapshot.remaining)
            },
            styling::secondary_text_style(theme),
        )),
    ];
    let figures_widget = Paragraph::new(figures).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Figures")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(figures_widget, chunks[1]);

    let reaction = Paragraph::new(Line::from(vec![
        Span::styled("Mascot mood: ", styling::normal_text_style(theme)),
        Span::styled(
            tier.label(),
            Style::default()
                .fg(mascot::tier_color(theme, tier))
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(reaction, chunks[2]);
}
