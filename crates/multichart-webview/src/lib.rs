//! Browser panes embedded in the main window.
//!
//! Wraps the `wry` crate to provide:
//! - One child WebView per pane, sharing an engine context rooted at the
//!   per-install cache directory
//! - A one-shot readiness signal per pane
//! - Page load tracking so the current address can be captured
//!   on shutdown

pub mod events;
pub mod manager;
pub mod readiness;

pub use events::{PageLoadState, WebViewEvent};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use readiness::{InitOutcome, ReadyReceiver, ReadySender};
