//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the browser panes and the session state
//! that is persisted on close.

mod bounds;
mod core;
mod event_handler;
mod init;
mod panes;
mod placement;
mod session;
mod shutdown;
mod types;

pub use self::core::MultichartApp;
