use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

#[mockall::automock]
pub trait LoadingIndicator {
    fn start(&self, message: &str);
    fn stop(&self);
}

impl LoadingIndicator for ProgressBar {
    fn start(&self, message: &str) {
        self.set_message(message.to_string());
        self.enable_steady_tick(TICK_INTERVAL);
    }

    fn stop(&self) {
        self.finish_and_clear()
    }
}

/// A spinner drawn on stderr, hidden when stderr is not a terminal.
pub fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner
}

/// Keeps the indicator running until dropped.
pub struct Loading<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> Loading<'a> {
    pub fn start(indicator: &'a dyn LoadingIndicator, message: &str) -> Self {
        indicator.start(message);
        Self { indicator }
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.indicator.stop()
    }
}
