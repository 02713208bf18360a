//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

const ITEM_TEMPLATE_FALLBACK: &str = "[{bar:40}] {pos}/{len}";

/// Create a spinner for long-running operations.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = format!(
        "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
        message
    );
    let style = ProgressStyle::default_bar()
        .template(&template)
        .or_else(|_| ProgressStyle::default_bar().template(ITEM_TEMPLATE_FALLBACK))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("#>-"));
    bar
}
