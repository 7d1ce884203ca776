//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as the mascot art and styling utilities.

pub mod mascot;
pub mod styling;
