use super::Frame;
use crate::hydration::AgeGroup;
use crate::state::{GoalField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the goal selection form: an age group list and a free goal input.
///
pub fn goals(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(size);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let title = Paragraph::new("Set Your Hydration Goal")
        .block(title_block)
        .style(styling::active_block_title_style())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_age_group_list(frame, chunks[1], state);
    render_goal_input(frame, chunks[2], state);

    // The two figures the form is choosing between
    let form = state.get_goal_form();
    let staged = match form.staged_value() {
        0 => "none yet".to_string(),
        value => format!("{} ml", value),
    };
    let metrics = Paragraph::new(Line::from(vec![
        Span::styled("Recommended: ", styling::secondary_text_style(theme)),
        Span::styled(
            format!("{} ml", form.age_group().recommended_goal()),
            styling::normal_text_style(theme),
        ),
        Span::styled("    Your goal: ", styling::secondary_text_style(theme)),
        Span::styled(staged, styling::normal_text_style(theme)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(metrics, chunks[3]);

    // Validation error takes the hint line over the controls
    let feedback = if let Some(error) = state.get_form_error() {
        Paragraph::new(error.to_string())
            .style(styling::error_text_style(theme))
            .alignment(Alignment::Center)
    } else {
        Paragraph::new("Tab: switch field, j/k: choose group, 0-9: edit goal, Enter: save")
            .style(Style::default().fg(theme.text_muted.to_color()))
            .alignment(Alignment::Center)
    };
    frame.render_widget(feedback, chunks[4]);
}

fn render_age_group_list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_goal_form();

    let items: Vec<ListItem> = AgeGroup::ALL
        .iter()
        .map(|group| {
            ListItem::new(format!(
                "{}  (recommended {} ml)",
                group.label(),
                group.recommended_goal()
            ))
        })
        .collect();

    let border_style = if form.active_field() == GoalField::AgeGroup {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Age group")
                .border_style(border_style),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // The staged selection lives in the form, so a throwaway ListState does
    let mut list_state = ListState::default();
    list_state.select(Some(form.age_index()));

    frame.render_stateful_widget(list, size, &mut list_state);
}

fn render_goal_input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_goal_form();

    let active = form.active_field() == GoalField::Goal;
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    let value = form.value_input();
    let display_value = if value.is_empty() {
        "Type a goal in millilitres...".to_string()
    } else {
        format!("{} ml", value)
    };

    let text_style = if value.is_empty() {
        Style::default().fg(theme.text_muted.to_color())
    } else {
        styling::normal_text_style(theme)
    };

    let input = Paragraph::new(display_value)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Daily goal (ml)")
                .border_style(border_style),
        )
        .style(text_style);

    frame.render_widget(input, size);
}
