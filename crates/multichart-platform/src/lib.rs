pub mod crash_report;
pub mod dialog;
pub mod icon;
pub mod paths;

pub use dialog::show_error;
pub use icon::AppIcon;
pub use paths::InstallPaths;
