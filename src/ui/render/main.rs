use super::{goals, home, log_intake, mascot, progress, summary, tracker, Frame};
use crate::state::{RestartPolicy, Screen, State};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_screen() {
        Screen::Home => {
            home::home(frame, size, state);
        }
        Screen::Goals => {
            goals::goals(frame, size, state);
        }
        Screen::LogIntake => {
            log_intake::log_intake(frame, size, state);
        }
        Screen::Progress => {
            progress::progress(frame, size, state);
        }
        Screen::Mascot => {
            mascot::mascot(frame, size, state);
        }
        Screen::Summary => {
            summary::summary(frame, size, state);
        }
        Screen::Tracker => {
            tracker::tracker(frame, size, state);
        }
    }

    // Confirmation dialog renders on top of whatever screen requested it
    if state.is_restart_requested() {
        render_restart_confirmation(frame, size, state);
    }
}

fn render_restart_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    use ratatui::{
        layout::Alignment,
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    };

    // Create a centered popup dialog using ratatui pattern
    let popup_area = centered_rect(60, 25, size);

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, popup_area);

    let consequence = match state.get_restart_policy() {
        RestartPolicy::KeepGoal => "Logged intake will be cleared. Your goal is kept.",
        RestartPolicy::ClearAll => "Logged intake and your goal will be cleared.",
    };

    let theme = state.get_theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Start a new day?",
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            consequence,
            Style::default()
                .fg(theme.warning.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "⚠️  Confirm Restart",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
