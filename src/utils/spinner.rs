use crate::utils::logger::{LogLevel, Logger};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::Cell;
use std::fmt::Display;
use std::time::Duration;

pub struct Spinner<'a> {
    bar: ProgressBar,
    logger: &'a Logger,
    active: Cell<bool>,
}

impl<'a> Spinner<'a> {
    pub fn new(logger: &'a Logger, message: impl Into<String>) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            logger,
            active: Cell::new(true),
        }
    }

    pub fn succeed(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.logger.log_message(LogLevel::Success, &message.into());
            self.active.set(false);
        }
    }

    pub fn fail(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            // the caller reports the error itself; only verbose runs echo it here
            if self.logger.is_verbose() {
                self.logger.log_message(LogLevel::Debug, &message.into());
            }
            self.active.set(false);
        }
    }
}

impl Drop for Spinner<'_> {
    fn drop(&mut self) {
        if self.active.get() {
            self.bar.abandon();
            self.active.set(false);
        }
    }
}

/// Runs `action` behind a spinner when the logger is verbose, plainly otherwise.
pub fn run_step<T, E, F, S>(
    logger: &Logger,
    start_message: &str,
    on_success: S,
    action: F,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    S: FnOnce(&T) -> String,
    E: Display,
{
    if !logger.is_verbose() {
        return action();
    }

    let spinner = Spinner::new(logger, start_message);
    match action() {
        Ok(value) => {
            spinner.succeed(on_success(&value));
            Ok(value)
        }
        Err(err) => {
            spinner.fail(err.to_string());
            Err(err)
        }
    }
}
