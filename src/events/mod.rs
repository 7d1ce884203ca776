//! Event handling module.
//!
//! This module contains the handler for terminal events: user input and the
//! periodic tick that drives animations and log draining.

pub mod terminal;
