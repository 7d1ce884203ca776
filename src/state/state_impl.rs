use crate::config::Config;
use crate::hydration::{
    self, validate_goal, HydrationError, ProgressSnapshot, RandomTipPicker, ReactionPolicy,
    ReactionTier, TipPicker,
};
use crate::logger::LogBuffer;
use crate::ui::{Theme, MASCOT_FRAME_COUNT};
use crate::utils::amounts::parse_amount;
use log::*;
use ratatui::widgets::ListState;

use super::form::{GoalField, GoalForm};
use super::navigation::{Screen, ScreenFlow};
use super::session::{RestartPolicy, Session};

/// Maximum number of characters accepted in the free-form amount input.
const AMOUNT_INPUT_LIMIT: usize = 10;

/// Maximum number of log entries kept for the debug pane.
const LOG_ENTRY_LIMIT: usize = 1000;

/// Houses data representative of application state.
///
pub struct State {
    flow: ScreenFlow,
    screen_index: usize,
    session: Session,
    goal_form: GoalForm,
    form_error: Option<String>,
    amount_input: String,
    intake_error: Option<String>,
    last_logged: Option<u32>,
    quick_amounts: Vec<u32>,
    quick_list_state: ListState,
    restart_policy: RestartPolicy,
    reaction_policy: ReactionPolicy,
    tip_picker: Box<dyn TipPicker>,
    current_tip: Option<String>,
    restart_requested: bool, // Whether the restart confirmation modal is open
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>, // Store log entries for navigation and copying
    log_buffer: Option<LogBuffer>,
    theme: Theme,
    mascot_frame: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let mut quick_list_state = ListState::default();
        quick_list_state.select(Some(0));
        State {
            flow: ScreenFlow::default(),
            screen_index: 0,
            session: Session::new(hydration::default_tips()),
            goal_form: GoalForm::default(),
            form_error: None,
            amount_input: String::new(),
            intake_error: None,
            last_logged: None,
            quick_amounts: crate::config::default_quick_amounts(),
            quick_list_state,
            restart_policy: RestartPolicy::default(),
            reaction_policy: ReactionPolicy::default(),
            tip_picker: Box::new(RandomTipPicker),
            current_tip: None,
            restart_requested: false,
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            log_buffer: None,
            theme: Theme::default(),
            mascot_frame: 0,
        }
    }
}

impl State {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let mut state = State {
            flow: config.flow,
            session: Session::new(config.tips.clone()),
            quick_amounts: config.quick_amounts.clone(),
            restart_policy: config.restart,
            reaction_policy: config.reaction,
            theme: Theme::from_name(&config.theme).unwrap_or_else(Theme::default),
            log_buffer: Some(log_buffer),
            ..State::default()
        };
        state.enter_current_screen();
        state
    }

    /// Return the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next available theme, wrapping around.
    ///
    pub fn cycle_theme(&mut self) -> &mut Self {
        let available = Theme::available_themes();
        let position = available
            .iter()
            .position(|name| *name == self.theme.name)
            .map(|index| (index + 1) % available.len())
            .unwrap_or(0);
        if let Some(theme) = Theme::from_name(&available[position]) {
            info!("Switched theme to {}", available[position]);
            self.theme = theme;
        }
        self
    }

    /// Return the screen currently shown.
    ///
    pub fn current_screen(&self) -> Screen {
        self.flow.screens()[self.screen_index]
    }

    /// Return the position of the current screen in the sequence.
    ///
    pub fn get_screen_index(&self) -> usize {
        self.screen_index
    }

    /// Return the number of screens in the configured sequence.
    ///
    pub fn screen_count(&self) -> usize {
        self.flow.screens().len()
    }

    /// Move to the next screen, staying put when already on the last one.
    ///
    pub fn advance_screen(&mut self) -> &mut Self {
        if self.screen_index < self.flow.last_index() {
            self.screen_index += 1;
            self.enter_current_screen();
        }
        self
    }

    /// Move to the previous screen, staying put when already on the first one.
    ///
    /// Leaving the goal screen this way discards any staged edits: the form
    /// is re-filled from the committed values on the next visit.
    ///
    pub fn retreat_screen(&mut self) -> &mut Self {
        if self.screen_index > 0 {
            self.screen_index -= 1;
            self.form_error = None;
            self.enter_current_screen();
        }
        self
    }

    /// Applies per-screen entry effects after any navigation step.
    ///
    fn enter_current_screen(&mut self) {
        match self.current_screen() {
            Screen::Home => {
                self.pick_tip();
            }
            Screen::Goals => {
                self.goal_form
                    .prefill(self.session.goal(), self.session.age_group());
                self.form_error = None;
            }
            Screen::LogIntake | Screen::Tracker => {
                self.amount_input.clear();
                self.intake_error = None;
            }
            _ => {}
        }
    }

    /// Open the restart confirmation modal.
    ///
    pub fn request_restart(&mut self) -> &mut Self {
        self.restart_requested = true;
        self
    }

    /// Close the restart confirmation modal without restarting.
    ///
    pub fn cancel_restart(&mut self) -> &mut Self {
        self.restart_requested = false;
        self
    }

    /// Whether the restart confirmation modal is open.
    ///
    pub fn is_restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Return the configured restart policy.
    ///
    pub fn get_restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    /// Restart the run: back to the first screen with a cleared intake
    /// total. Whether the committed goal survives depends on the configured
    /// restart policy.
    ///
    pub fn confirm_restart(&mut self) -> &mut Self {
        info!("Restarting session ({:?})", self.restart_policy);
        self.restart_requested = false;
        self.session.restart(self.restart_policy);
        self.screen_index = 0;
        self.amount_input.clear();
        self.intake_error = None;
        self.form_error = None;
        self.last_logged = None;
        self.enter_current_screen();
        self
    }

    /// Return the committed session data.
    ///
    pub fn get_session(&self) -> &Session {
        &self.session
    }

    /// Return the staged goal form.
    ///
    pub fn get_goal_form(&self) -> &GoalForm {
        &self.goal_form
    }

    /// Switch the goal form to its other field.
    ///
    pub fn toggle_goal_field(&mut self) -> &mut Self {
        self.goal_form.toggle_field();
        self
    }

    /// Cycle the staged selection down the age group list, or append to the
    /// goal input depending on the active field.
    ///
    pub fn next_age_group(&mut self) -> &mut Self {
        self.goal_form.next_age_group(self.session.goal());
        self
    }

    /// Cycle the staged selection up the age group list.
    ///
    pub fn previous_age_group(&mut self) -> &mut Self {
        self.goal_form.previous_age_group(self.session.goal());
        self
    }

    /// Append a digit to the staged goal input.
    ///
    pub fn push_goal_digit(&mut self, digit: char) -> &mut Self {
        self.goal_form.push_digit(digit);
        self.form_error = None;
        self
    }

    /// Remove the last digit from the staged goal input.
    ///
    pub fn pop_goal_digit(&mut self) -> &mut Self {
        self.goal_form.pop_digit();
        self.form_error = None;
        self
    }

    /// Commit the staged goal to the session.
    ///
    /// The staged value is validated first; an out-of-range value leaves the
    /// session untouched and surfaces the error to the caller.
    ///
    pub fn commit_goal(&mut self) -> Result<(), HydrationError> {
        let value = validate_goal(self.goal_form.staged_value())?;
        let group = self.goal_form.age_group();
        self.session.set_goal(group, value);
        self.form_error = None;
        info!("Committed goal of {} ml for {}", value, group.label());
        Ok(())
    }

    /// Return the goal form validation error, if any.
    ///
    pub fn get_form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Record a goal form validation error for display.
    ///
    pub fn set_form_error(&mut self, message: String) -> &mut Self {
        self.form_error = Some(message);
        self
    }

    /// Return the free-form amount input as typed.
    ///
    pub fn get_amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Append a character to the free-form amount input.
    ///
    /// Digits and a decimal point are always accepted; the unit characters
    /// only once the input is non-empty, so screen hotkeys keep working on
    /// an empty field.
    ///
    pub fn push_amount_char(&mut self, character: char) -> &mut Self {
        let accepted = character.is_ascii_digit()
            || character == '.'
            || ((character == 'm' || character == 'l') && !self.amount_input.is_empty());
        if accepted && self.amount_input.len() < AMOUNT_INPUT_LIMIT {
            self.amount_input.push(character);
            self.intake_error = None;
        }
        self
    }

    /// Remove the last character from the free-form amount input.
    ///
    pub fn pop_amount_char(&mut self) -> &mut Self {
        self.amount_input.pop();
        self.intake_error = None;
        self
    }

    /// Return the quick-add amounts in millilitres.
    ///
    pub fn get_quick_amounts(&self) -> &[u32] {
        &self.quick_amounts
    }

    /// Return the selection state of the quick-add list for rendering.
    ///
    pub fn get_quick_list_state(&mut self) -> &mut ListState {
        &mut self.quick_list_state
    }

    /// Select the next quick-add amount, wrapping around.
    ///
    pub fn next_quick_amount(&mut self) -> &mut Self {
        if !self.quick_amounts.is_empty() {
            let index = self.quick_list_state.selected().unwrap_or(0);
            self.quick_list_state
                .select(Some((index + 1) % self.quick_amounts.len()));
        }
        self
    }

    /// Select the previous quick-add amount, wrapping around.
    ///
    pub fn previous_quick_amount(&mut self) -> &mut Self {
        if !self.quick_amounts.is_empty() {
            let index = self.quick_list_state.selected().unwrap_or(0);
            let previous = index
                .checked_sub(1)
                .unwrap_or(self.quick_amounts.len() - 1);
            self.quick_list_state.select(Some(previous));
        }
        self
    }

    /// Return the quick-add amount currently selected, 0 when there is none.
    ///
    pub fn selected_quick_amount(&self) -> u32 {
        let index = self.quick_list_state.selected().unwrap_or(0);
        self.quick_amounts.get(index).copied().unwrap_or(0)
    }

    /// Log an intake entry.
    ///
    /// A non-empty free-form input takes precedence and is parsed first; a
    /// malformed input surfaces an error and logs nothing. With an empty
    /// input the selected quick-add amount is logged instead.
    ///
    pub fn submit_intake(&mut self) -> &mut Self {
        let amount = if self.amount_input.trim().is_empty() {
            self.selected_quick_amount()
        } else {
            match parse_amount(&self.amount_input) {
                Ok(amount) => amount,
                Err(error) => {
                    warn!("Rejected intake input {:?}: {}", self.amount_input, error);
                    self.intake_error = Some(error.to_string());
                    return self;
                }
            }
        };
        if amount == 0 {
            return self;
        }
        let total = self.session.add_intake(amount);
        info!("Logged {} ml, total is now {} ml", amount, total);
        self.last_logged = Some(amount);
        self.amount_input.clear();
        self.intake_error = None;
        self
    }

    /// Clear the intake total while keeping the committed goal.
    ///
    pub fn reset_intake(&mut self) -> &mut Self {
        self.session.reset_intake();
        self.last_logged = None;
        self.intake_error = None;
        info!("Cleared the intake total");
        self
    }

    /// Return the intake input error, if any.
    ///
    pub fn get_intake_error(&self) -> Option<&str> {
        self.intake_error.as_deref()
    }

    /// Return the most recently logged amount, if any.
    ///
    pub fn get_last_logged(&self) -> Option<u32> {
        self.last_logged
    }

    /// Return the progress snapshot for the committed goal and total.
    ///
    pub fn snapshot(&self) -> ProgressSnapshot {
        hydration::assess(self.session.goal(), self.session.total_intake())
    }

    /// Return the mascot reaction tier for the current progress.
    ///
    pub fn reaction_tier(&self) -> ReactionTier {
        self.reaction_policy.tier(self.snapshot().percent)
    }

    /// Return a one-line summary of the day, as used by the clipboard copy.
    ///
    pub fn summary_line(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "Water intake: {} of {} ml ({:.0}%), {} ml to go. Mascot says: {}",
            self.session.total_intake(),
            self.session.goal(),
            snapshot.percent,
            snapshot.remaining,
            self.reaction_tier().label(),
        )
    }

    /// Pick a fresh tip from the pool.
    ///
    pub fn pick_tip(&mut self) -> &mut Self {
        self.current_tip = self.tip_picker.pick(self.session.tips());
        self
    }

    /// Return the tip shown on the home screen, if any.
    ///
    pub fn get_current_tip(&self) -> Option<&str> {
        self.current_tip.as_deref()
    }

    /// Replace the tip picker.
    ///
    #[allow(dead_code)]
    pub fn set_tip_picker(&mut self, picker: Box<dyn TipPicker>) -> &mut Self {
        self.tip_picker = picker;
        self
    }

    /// Advance the mascot animation frame.
    ///
    pub fn advance_mascot_frame(&mut self) -> &mut Self {
        self.mascot_frame += 1;
        if self.mascot_frame >= MASCOT_FRAME_COUNT {
            self.mascot_frame = 0;
        }
        self
    }

    /// Return the current mascot animation frame.
    ///
    pub fn get_mascot_frame(&self) -> usize {
        self.mascot_frame
    }

    /// Move captured log entries from the shared buffer into the debug pane.
    ///
    pub fn drain_log_entries(&mut self) -> &mut Self {
        let drained: Vec<String> = match &self.log_buffer {
            Some(buffer) => match buffer.lock() {
                Ok(mut entries) => entries.drain(..).collect(),
                Err(_) => vec![],
            },
            None => vec![],
        };
        for entry in drained {
            self.add_log_entry(entry);
        }
        self
    }

    /// Enter debug mode for navigating and copying logs.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        // Set debug_index to the most recent log (last in the list)
        if !self.debug_entries.is_empty() {
            self.debug_index = self.debug_entries.len() - 1;
        } else {
            self.debug_index = 0;
        }
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Check if in debug mode.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Get current debug index.
    ///
    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            self.debug_index = (self.debug_index + 1) % self.debug_entries.len();
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            if self.debug_index == 0 {
                self.debug_index = self.debug_entries.len() - 1;
            } else {
                self.debug_index -= 1;
            }
        }
        self
    }

    /// Get the currently selected log entry.
    ///
    pub fn get_current_debug(&self) -> Option<&String> {
        self.debug_entries.get(self.debug_index)
    }

    /// Add a log entry to the debug buffer.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.debug_entries.push(entry);
        // Keep only the most recent entries to prevent memory issues
        if self.debug_entries.len() > LOG_ENTRY_LIMIT {
            self.debug_entries.remove(0);
            // Adjust debug_index if we removed entries before it
            if self.debug_index > 0 {
                self.debug_index -= 1;
            }
        }
        // Always update index to point to the newest log so the list auto-scrolls
        if !self.debug_entries.is_empty() {
            self.debug_index = self.debug_entries.len() - 1;
        }
    }

    /// Get debug entries for rendering (read-only access).
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }
}
