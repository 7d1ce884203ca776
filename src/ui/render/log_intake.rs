use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the intake logging screen: free-form input plus quick amounts.
///
pub fn log_intake(frame: &mut Frame, size: Rect, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(size);

    render_amount_input(frame, chunks[0], state);
    render_status(frame, chunks[2], state);
    // Stateful render goes last so the list state borrow stands alone
    render_quick_list(frame, chunks[1], state);
}

pub(super) fn render_amount_input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let border_style = if state.get_intake_error().is_some() {
        Style::default()
            .fg(theme.error.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        styling::active_block_border_style(theme)
    };

    let input = state.get_amount_input();
    let (display_value, text_style) = if input.is_empty() {
        (
            "e.g. 250, 0.5l or 330ml".to_string(),
            Style::default().fg(theme.text_muted.to_color()),
        )
    } else {
        (input.to_string(), styling::normal_text_style(theme))
    };

    let widget = Paragraph::new(display_value)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Amount")
                .border_style(border_style),
        )
        .style(text_style);

    frame.render_widget(widget, size);
}

pub(super) fn render_quick_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    let items: Vec<ListItem> = state
        .get_quick_amounts()
        .iter()
        .map(|amount| ListItem::new(format!("{} ml", amount)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quick add (Enter while the input is empty)")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, size, state.get_quick_list_state());
}

fn render_status(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let session = state.get_session();

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
            "Nothing logged yet.",
            Style::default().fg(theme.text_muted.to_color()),
        ))
    };

    let totals = Line::from(Span::styled(
        format!(
            "Total today: {} ml in {} entries.",
            session.total_intake(),
            session.entry_count()
        ),
        styling::normal_text_style(theme),
    ));

    let widget = Paragraph::new(vec![first_line, totals]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Today")
            .border_style(styling::normal_block_border_style(theme)),
    );

    frame.render_widget(widget, size);
}
