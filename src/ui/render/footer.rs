use super::Frame;
use crate::state::{Screen, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format controls for the current screen as a display string.
///
fn controls_for_screen(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => " n: continue, t: theme, d: debug mode, q: quit",
        Screen::Goals => " Tab: switch field, j/k: group, Enter: save, b: back, q: quit",
        Screen::LogIntake => " Enter: log, j/k: quick pick, x: reset, n: continue, b: back",
        Screen::Progress => " n: continue, x: reset, b: back, q: quit",
        Screen::Mascot => " n: continue, b: back, q: quit",
        Screen::Summary => " y: copy summary, r: new day, b: back, q: quit",
        Screen::Tracker => " Enter: log, j/k: quick pick, x: reset, n: summary, b: back",
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let controls_text = if state.is_debug_mode() {
        " j/k: navigate logs, y: copy log, d/Esc: exit debug mode"
    } else if state.is_restart_requested() {
        " Enter/y: confirm restart, Esc/n: cancel"
    } else {
        controls_for_screen(state.current_screen())
    };

    let theme = state.get_theme();
    let controls_content = if state.is_debug_mode() {
        Line::from(vec![
            Span::styled(
                "DEBUG:",
                Style::default()
                    .fg(theme.text.to_color())
                    .bg(theme.footer_debug.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                controls_text,
                Style::default().fg(theme.warning.to_color()),
            ),
        ])
    } else if state.is_restart_requested() {
        Line::from(vec![
            Span::styled(
                "RESTART:",
                Style::default()
                    .fg(theme.text.to_color())
                    .bg(theme.footer_restart.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                controls_text,
                Style::default().fg(theme.warning.to_color()),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "NORMAL:",
                Style::default()
                    .fg(theme.text.to_color())
                    .bg(theme.footer_normal.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                controls_text,
                Style::default().fg(theme.warning.to_color()),
            ),
        ])
    };

    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Screen position and version number on the right
    let right_content = Line::from(vec![
        Span::styled(
            format!(
                "{} {}/{}",
                state.current_screen().title(),
                state.get_screen_index() + 1,
                state.screen_count()
            ),
            Style::default().fg(theme.text_muted.to_color()),
        ),
        Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.secondary.to_color()),
        ),
    ]);

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
