//! Per-install file locations.
//!
//! Everything the app writes lives beside the executable and is named after
//! it, so two differently named copies never share state while re-running
//! the same copy always resumes it.

mod resolve;

pub use resolve::InstallPaths;
