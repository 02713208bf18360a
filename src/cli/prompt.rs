//! Interactive console prompts.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use console::style;

use crate::error::{Error, Result};

/// Source of free-text answers to labelled questions.
#[async_trait]
pub trait Prompter: Send {
    /// Ask for one line of text. The answer is returned trimmed and may be empty.
    async fn input(&mut self, label: &str) -> Result<String>;
}

/// Prompter reading from stdin.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for ConsolePrompter {
    async fn input(&mut self, label: &str) -> Result<String> {
        let label = label.to_string();
        tokio::task::spawn_blocking(move || read_answer(&label))
            .await
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::Other, e)))?
    }
}

fn read_answer(label: &str) -> Result<String> {
    print!("{} {} {} ", style("?").green().bold(), style(label).bold(), style("›").dim());
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        println!();
        return Err(Error::InputClosed(label.to_string()));
    }

    Ok(line.trim().to_string())
}
