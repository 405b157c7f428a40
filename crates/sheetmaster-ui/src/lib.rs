//! Terminal styling for the `sm` command-line tool.
//!
//! Provides the Ayu-themed palette, color detection and helpers that render
//! categories, formulas and check results.

pub mod styles;
pub mod terminal;
