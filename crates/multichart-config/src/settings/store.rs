//! Load/save of `<exe>.settings.json`.

use std::path::Path;

use multichart_common::SettingsError;
use tracing::{debug, info, warn};

use super::state::PersistedState;

/// Read and parse the settings file.
///
/// The result is not yet fitted to a pane count; see [`load`].
pub fn read_settings(path: &Path) -> Result<PersistedState, SettingsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| SettingsError::Malformed(e.to_string()))
}

/// Serialize `state` as indented JSON and replace the file at `path`.
pub fn write_settings(path: &Path, state: &PersistedState) -> Result<(), SettingsError> {
    let json =
        serde_json::to_string_pretty(state).map_err(|e| SettingsError::Malformed(e.to_string()))?;

    std::fs::write(path, json).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load persisted state for `pane_count` panes.
///
/// Any failure yields first-run defaults; the caller never sees an error.
pub fn load(path: &Path, pane_count: usize) -> PersistedState {
    match read_settings(path) {
        Ok(state) => {
            let state = state.fit_to(pane_count);
            info!(
                path = %path.display(),
                bounds = ?state.window_bounds,
                "settings loaded"
            );
            state
        }
        Err(SettingsError::NotFound(_)) => {
            debug!(path = %path.display(), "no settings file, first run");
            PersistedState::new(pane_count)
        }
        Err(e) => {
            warn!(error = %e, "settings unreadable, using defaults");
            PersistedState::new(pane_count)
        }
    }
}

/// Persist `state`, replacing any previous content.
///
/// Failures are logged and otherwise ignored so shutdown always completes.
pub fn save(path: &Path, state: &PersistedState) {
    match write_settings(path, state) {
        Ok(()) => debug!(path = %path.display(), "settings saved"),
        Err(e) => warn!(error = %e, "failed to save settings"),
    }
}
