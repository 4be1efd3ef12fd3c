//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and credential prompts.

mod prompt;
mod spinner;

pub use prompt::{prompt_password, prompt_username};
pub use spinner::{create_spinner, finish_spinner, set_spinner_message};
