use super::{footer, log, main, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole frame: current screen, log pane and footer.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(size);

    main(frame, rows[0], state);
    log(frame, rows[1], state);
    footer(frame, rows[2], state);
}
