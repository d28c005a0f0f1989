//! Conversions between winit geometry, persisted bounds and wry rects.

use multichart_common::types::{Rect, WindowBounds};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub(super) fn layout_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// Client area in logical pixels, origin at the top-left of the client area.
pub(super) fn viewport(inner: PhysicalSize<u32>, scale_factor: f64) -> Rect {
    let size: LogicalSize<f64> = inner.to_logical(scale_factor);
    Rect {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    }
}

/// Persistable bounds from an outer position and client size.
pub(super) fn window_bounds(
    position: PhysicalPosition<i32>,
    inner: PhysicalSize<u32>,
) -> WindowBounds {
    WindowBounds::new(position.x, position.y, inner.width, inner.height)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rect_converts_to_wry_rect() {
        let rect = Rect {
            x: 0.0,
            y: 300.0,
            width: 1200.0,
            height: 300.0,
        };
        let wry_rect = layout_rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x).abs() < f64::EPSILON);
                assert!((pos.y - 300.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1200.0).abs() < f64::EPSILON);
                assert!((size.height - 300.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn viewport_scales_to_logical() {
        let vp = viewport(PhysicalSize::new(2400, 1800), 2.0);
        assert!((vp.width - 1200.0).abs() < f64::EPSILON);
        assert!((vp.height - 900.0).abs() < f64::EPSILON);
        assert!((vp.x).abs() < f64::EPSILON);
    }

    #[test]
    fn window_bounds_from_geometry() {
        let b = window_bounds(PhysicalPosition::new(-1200, 40), PhysicalSize::new(1024, 768));
        assert_eq!(b, WindowBounds::new(-1200, 40, 1024, 768));
    }
}
