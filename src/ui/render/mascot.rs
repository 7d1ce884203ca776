use super::Frame;
use crate::state::State;
use crate::ui::widgets::{mascot, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Render the mascot screen: reaction art, water ripple and message.
///
pub fn mascot(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let tier = state.reaction_tier();
    let snapshot = state.snapshot();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Mascot")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .margin(2)
        .split(size);

    let art = Paragraph::new(mascot::art(tier))
        .style(
            Style::default()
                .fg(mascot::tier_color(theme, tier))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(art, rows[0]);

    let ripple = Paragraph::new(mascot::FRAMES[state.get_mascot_frame()])
        .style(Style::default().fg(theme.info.to_color()))
        .alignment(Alignment::Center);
    frame.render_widget(ripple, rows[1]);

    let message = Paragraph::new(format!(
        "{} ({:.0}%)",
        mascot::message(tier),
        snapshot.percent
    ))
    .style(styling::normal_text_style(theme))
    .alignment(Alignment::Center);
    frame.render_widget(message, rows[2]);
}
