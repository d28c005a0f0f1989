//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for pane readiness while any pane is still pending.
pub(super) const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(16);
