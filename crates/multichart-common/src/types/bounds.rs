use serde::{Deserialize, Serialize};

/// Window placement in physical pixels: outer position plus client size.
///
/// Field aliases accept the PascalCase names written by older builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    #[serde(alias = "X")]
    pub x: i32,
    #[serde(alias = "Y")]
    pub y: i32,
    #[serde(alias = "Width")]
    pub width: u32,
    #[serde(alias = "Height")]
    pub height: u32,
}

impl WindowBounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-area rectangle is the legacy "unset" sentinel.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
