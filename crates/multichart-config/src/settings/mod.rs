//! Persisted session state: window bounds and the last URL of each pane.
//!
//! The store is best-effort. [`load`] never fails (any problem means
//! "first run") and [`save`] never fails (any problem is logged and
//! dropped). The fallible halves, [`read_settings`] and
//! [`write_settings`], are exposed for callers that want the reason.

mod state;
mod store;


pub use state::PersistedState;
pub use store::{load, read_settings, save, write_settings};
