pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, SettingsError};
pub use types::{AppState, PaneId, Rect, WindowBounds};
