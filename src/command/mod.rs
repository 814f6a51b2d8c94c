//! Command Dispatch Module
//!
//! This module contains the console command vocabulary, including:
//! - Command models and constants (Command, action names, prompt)
//! - Handlers executing commands against a session

pub mod handlers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::{handle_command, handle_line, Outcome};
pub use models::Command;
