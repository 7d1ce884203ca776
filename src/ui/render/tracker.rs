use super::{log_intake, Frame};
use crate::state::State;
use crate::ui::widgets::{mascot, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Render the compact tracker: logging on the left, progress on the right.
///
pub fn tracker(frame: &mut Frame, size: Rect, state: &mut State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(columns[0]);

    render_progress_pane(frame, columns[1], state);
    log_intake::render_amount_input(frame, left_rows[0], state);
    log_intake::render_quick_list(frame, left_rows[1], state);
}

fn render_progress_pane(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let session = state.get_session();
    let snapshot = state.snapshot();
    let tier = state.reaction_tier();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(size);

    let gauge_label = if session.has_goal() {
        format!("{:.0}% of {} ml", snapshot.percent, session.goal())
    } else {
        "no goal yet".to_string()
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .gauge_style(
            Style::default()
                .fg(mascot::tier_color(theme, tier))
                .bg(theme.surface.to_color()),
        )
        .ratio(snapshot.percent / 100.0)
        .label(gauge_label);
    frame.render_widget(gauge, rows[0]);

    let first_line = if let Some(error) = state.get_intake_error() {
        Line::from(Span::styled(
            error.to_string(),
            styling::error_text_style(theme),
        ))
    } else if let Some(last) = state.get_last_logged() {
        Line::from(Span::styled(
            format!("Logged {} ml.", last),
            Style::default().fg(theme.success.to_color()),
        ))
    } else {
        Line::from(Span::styled(
            "Log your first sip.",
            Style::default().fg(theme.text_muted.to_color()),
        ))
    };

    let remaining_line = if session.has_goal() {
        if snapshot.is_goal_met() {
            "Nothing left to drink today.".to_string()
        } else {
            format!("{} ml to go.", snapshot.remaining)
        }
    } else {
        "Set a goal to see remaining volume.".to_string()
    };

    let lines = vec![
        first_line,
        Line::from(Span::styled(
            format!(
                "Total today: {} ml in {} entries.",
                session.total_intake(),
                session.entry_count()
            ),
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            remaining_line,
            styling::secondary_text_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}: ", tier.label()),
                Style::default()
                    .fg(mascot::tier_color(theme, tier))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(mascot::message(tier), styling::normal_text_style(theme)),
        ]),
    ];

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Today")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(status, rows[1]);
}
