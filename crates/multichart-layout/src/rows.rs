//! Equal-height row computation.

use multichart_common::types::{PaneId, Rect};

/// Splits a viewport into `rows` equal horizontal bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    rows: u32,
}

impl RowLayout {
    pub fn new(rows: u32) -> Self {
        Self { rows }
    }

    /// Compute one rect per pane, top to bottom.
    ///
    /// The last row absorbs rounding so the rows always end exactly at the
    /// bottom of the viewport.
    pub fn compute(&self, viewport: Rect) -> Vec<(PaneId, Rect)> {
        if self.rows == 0 {
            return Vec::new();
        }

        let row_height = (viewport.height.max(0.0) / self.rows as f64).floor();
        let bottom = viewport.y + viewport.height;

        (0..self.rows)
            .map(|i| {
                let y = viewport.y + row_height * i as f64;
                let height = if i + 1 == self.rows {
                    (bottom - y).max(0.0)
                } else {
                    row_height
                };
                (
                    PaneId(i),
                    Rect {
                        x: viewport.x,
                        y,
                        width: viewport.width.max(0.0),
                        height,
                    },
                )
            })
            .collect()
    }
}
