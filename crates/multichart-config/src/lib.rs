//! Multichart configuration and persisted session settings.
//!
//! Two files live beside the executable:
//! - `<exe>.toml` — optional app config (window chrome, panes, logging).
//!   Every section has defaults so partial files work.
//! - `<exe>.settings.json` — window bounds and last URL per pane, written
//!   on shutdown and read back on the next start.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use multichart_config::{settings, toml_loader};
//!
//! let path = Path::new("multichart.toml");
//! let config = toml_loader::or_default(path, toml_loader::load_from_path(path));
//! let state = settings::load(Path::new("multichart.settings.json"), config.pane_count());
//! settings::save(Path::new("multichart.settings.json"), &state);
//! ```

pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod validation;

pub use schema::{AppConfig, LoggingConfig, PaneConfig, WindowConfig};
pub use settings::PersistedState;
