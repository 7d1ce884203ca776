use crate::state::{GoalField, Screen, State};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    // Key releases and repeats are reported on some terminals
                    if key.kind == KeyEventKind::Press {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers,
                    ..
                } if modifiers.contains(KeyModifiers::CONTROL) => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                // The restart confirmation modal captures all input while open
                KeyEvent {
                    code: KeyCode::Enter | KeyCode::Char('y'),
                    ..
                } if state.is_restart_requested() => {
                    debug!("Processing restart confirmation event '{:?}'...", event);
                    state.confirm_restart();
                }
                KeyEvent {
                    code: KeyCode::Esc | KeyCode::Char('n'),
                    ..
                } if state.is_restart_requested() => {
                    debug!("Processing cancel restart event '{:?}'...", event);
                    state.cancel_restart();
                }
                KeyEvent { .. } if state.is_restart_requested() => {}
                // Debug mode captures list navigation and the copy key
                KeyEvent {
                    code: KeyCode::Char('j') | KeyCode::Down,
                    ..
                } if state.is_debug_mode() => {
                    state.next_debug();
                }
                KeyEvent {
                    code: KeyCode::Char('k') | KeyCode::Up,
                    ..
                } if state.is_debug_mode() => {
                    state.previous_debug();
                }
                KeyEvent {
                    code: KeyCode::Char('y'),
                    ..
                } if state.is_debug_mode() => {
                    debug!("Processing copy debug log event '{:?}'...", event);
                    if let Some(debug_entry) = state.get_current_debug() {
                        copy_to_clipboard("debug log entry", debug_entry.to_string());
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('d') | KeyCode::Esc | KeyCode::Enter,
                    ..
                } if state.is_debug_mode() => {
                    debug!("Processing exit debug mode event '{:?}'...", event);
                    state.exit_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    ..
                } => {
                    debug!("Processing enter debug mode event '{:?}'...", event);
                    state.enter_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Char('t'),
                    ..
                } => {
                    debug!("Processing cycle theme event '{:?}'...", event);
                    state.cycle_theme();
                }
                KeyEvent {
                    code: KeyCode::Char('r'),
                    ..
                } => {
                    debug!("Processing restart request event '{:?}'...", event);
                    state.request_restart();
                }
                KeyEvent {
                    code: KeyCode::Char('x'),
                    ..
                } if matches!(
                    state.current_screen(),
                    Screen::LogIntake | Screen::Tracker | Screen::Progress
                ) =>
                {
                    debug!("Processing reset intake event '{:?}'...", event);
                    state.reset_intake();
                }
                KeyEvent {
                    code: KeyCode::Char('y'),
                    ..
                } if state.current_screen() == Screen::Summary => {
                    debug!("Processing copy summary event '{:?}'...", event);
                    copy_to_clipboard("summary", state.summary_line());
                }
                KeyEvent {
                    code: KeyCode::Tab | KeyCode::BackTab,
                    ..
                } if state.current_screen() == Screen::Goals => {
                    state.toggle_goal_field();
                }
                KeyEvent {
                    code: KeyCode::Right | KeyCode::Char('n'),
                    ..
                } => {
                    debug!("Processing advance screen event '{:?}'...", event);
                    advance_or_commit(state);
                }
                KeyEvent {
                    code: KeyCode::Left | KeyCode::Char('b') | KeyCode::Esc,
                    ..
                } => {
                    debug!("Processing retreat screen event '{:?}'...", event);
                    state.retreat_screen();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => match state.current_screen() {
                    Screen::LogIntake | Screen::Tracker => {
                        debug!("Processing submit intake event '{:?}'...", event);
                        state.submit_intake();
                    }
                    // On the form, Enter moves into the goal field first
                    Screen::Goals
                        if state.get_goal_form().active_field() == GoalField::AgeGroup =>
                    {
                        debug!("Processing advance form field event '{:?}'...", event);
                        state.toggle_goal_field();
                    }
                    Screen::Summary => {}
                    _ => {
                        debug!("Processing advance screen event '{:?}'...", event);
                        advance_or_commit(state);
                    }
                },
                KeyEvent {
                    code: KeyCode::Down | KeyCode::Char('j'),
                    ..
                } => match state.current_screen() {
                    Screen::Goals
                        if state.get_goal_form().active_field() == GoalField::AgeGroup =>
                    {
                        state.next_age_group();
                    }
                    Screen::LogIntake | Screen::Tracker => {
                        state.next_quick_amount();
                    }
                    _ => {}
                },
                KeyEvent {
                    code: KeyCode::Up | KeyCode::Char('k'),
                    ..
                } => match state.current_screen() {
                    Screen::Goals
                        if state.get_goal_form().active_field() == GoalField::AgeGroup =>
                    {
                        state.previous_age_group();
                    }
                    Screen::LogIntake | Screen::Tracker => {
                        state.previous_quick_amount();
                    }
                    _ => {}
                },
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } => match state.current_screen() {
                    Screen::Goals if state.get_goal_form().active_field() == GoalField::Goal => {
                        state.pop_goal_digit();
                    }
                    Screen::LogIntake | Screen::Tracker => {
                        state.pop_amount_char();
                    }
                    _ => {}
                },
                KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                } => match state.current_screen() {
                    Screen::Goals if state.get_goal_form().active_field() == GoalField::Goal => {
                        state.push_goal_digit(c);
                    }
                    Screen::LogIntake | Screen::Tracker => {
                        state.push_amount_char(c);
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::Tick => {
                state.advance_mascot_frame().drain_log_entries();
            }
        }
        Ok(true)
    }
}

/// Advance to the next screen. On the goal screen the staged goal is
/// committed first and navigation is blocked while validation fails.
///
fn advance_or_commit(state: &mut State) {
    if state.current_screen() == Screen::Goals {
        match state.commit_goal() {
            Ok(()) => {
                state.advance_screen();
            }
            Err(error) => {
                warn!("Goal rejected: {}", error);
                state.set_form_error(error.to_string());
            }
        }
    } else {
        state.advance_screen();
    }
}

/// Copy the given contents to the system clipboard, logging the outcome.
///
fn copy_to_clipboard(label: &str, contents: String) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(contents) {
            Ok(_) => {
                info!("Copied {} to clipboard", label);
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
            }
        },
        Err(e) => {
            warn!("Failed to initialize clipboard: {}", e);
        }
    }
}
