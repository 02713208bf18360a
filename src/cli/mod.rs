//! Command-line interface: arguments and interactive prompts.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{ConsolePrompter, Prompter};
