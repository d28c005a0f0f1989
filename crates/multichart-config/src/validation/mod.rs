//! App config validation.
//!
//! Each check pushes a message; the orchestrator joins them into a single
//! `ConfigError` so one pass reports every problem.

mod helpers;
mod panes;

#[cfg(test)]
mod tests;

use crate::schema::AppConfig;
use multichart_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    panes::validate_panes(&mut errors, config);

    if config.logging.filter.trim().is_empty() {
        errors.push("logging.filter must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &AppConfig) {
    validate_range(errors, "window.min_width", config.window.min_width, 100, 10_000);
    validate_range(
        errors,
        "window.min_height",
        config.window.min_height,
        100,
        10_000,
    );
}
