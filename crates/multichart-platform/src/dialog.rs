//! Blocking user-facing dialogs.

use tracing::info;

/// Show a modal error dialog and block until the user dismisses it.
///
/// Must be called on the UI thread.
pub fn show_error(title: &str, description: &str) {
    info!(title, "showing error dialog");
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Body text for a pane whose engine failed to initialize.
pub fn pane_init_failure_message(pane_index: usize, error: &str) -> String {
    format!("Failed to initialize browser pane {}: {error}", pane_index + 1)
}
