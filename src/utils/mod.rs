//! Small parsing and formatting utilities.

pub mod amounts;
