use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::amounts::format_ml;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const BANNER: &str = "
      _                _           _
 ___ (_) _ __         | |_  _   _ (_)
/ __|| || '_ \\  _____ | __|| | | || |
\\__ \\| || |_) ||_____|| |_ | |_| || |
|___/|_|| .__/         \\__| \\__,_||_|
        |_|
";

/// Render the home screen: banner, goal status and the current tip.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Home")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .margin(2)
        .split(size);

    let banner = Paragraph::new(BANNER)
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let session = state.get_session();
    let status = if session.has_goal() {
        let group = session
            .age_group()
            .map(|group| group.label())
            .unwrap_or("custom");
        format!(
            "Today's goal: {} ml ({}). Logged so far: {}.",
            session.goal(),
            group,
            format_ml(session.total_intake())
        )
    } else {
        "No goal set yet. The next screen helps you pick one.".to_string()
    };
    let status_widget = Paragraph::new(status)
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(status_widget, rows[1]);

    let tip = state.get_current_tip().unwrap_or("Keep a bottle nearby.");
    let tip_widget = Paragraph::new(tip)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tip of the moment")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::secondary_text_style(theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(tip_widget, rows[2]);

    let hint = Paragraph::new("n: continue, t: switch theme, q: quit")
        .style(Style::default().fg(theme.text_muted.to_color()))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[3]);
}
