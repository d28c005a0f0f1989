//! TOML app config loading.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{load_from_path, or_default};
