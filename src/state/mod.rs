//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Screen, ScreenFlow)
//! - Goal form staging types (GoalForm, GoalField)
//! - Committed session data (Session, RestartPolicy)

mod form;
mod navigation;
mod session;
mod state_impl;

pub use form::{GoalField, GoalForm};
pub use navigation::{Screen, ScreenFlow};
pub use session::{RestartPolicy, Session};
pub use state_impl::State;
