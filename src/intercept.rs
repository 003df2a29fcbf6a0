//! Ray-to-viewport-boundary intercept.
//!
//! Given a source point and an aim ("touch") point, finds where the ray from
//! the source through the aim point first crosses the boundary of an
//! axis-aligned rectangle. Used to draw trajectory indicators that end at the
//! edge of the visible area.
//!
//! Coordinates are bottom-left-origin with y increasing upward. Callers in a
//! top-left-origin environment (winit included) must flip y before and after
//! calling in.

use thiserror::Error;

use crate::math::{Point2D, Rect};

/// Coordinate pair the historical contract returns when the source and the
/// touch coincide. Only produced by [`find_intercept_compat`].
pub const SENTINEL: Point2D = Point2D {
    x: -99999.0,
    y: -99999.0,
};

#[derive(Debug, Error)]
pub enum InterceptError {
    /// Source and touch coincide, so the ray has no direction.
    #[error("source and touch coincide, ray has no direction")]
    NoDirection,
    #[error("bounds must have positive extent, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
    /// No boundary edge lies forward along the ray. Cannot happen when the
    /// source is inside the bounds.
    #[error("ray does not cross the bounds in its forward direction")]
    NoForwardCrossing,
}

/// Returns the point where the ray from `source` through `touch` first
/// crosses the boundary of `bounds`.
///
/// Neither point is required to lie inside `bounds`. A source inside the
/// rectangle always yields a crossing; a source outside it may aim past the
/// rectangle entirely, which reports [`InterceptError::NoForwardCrossing`].
pub fn find_intercept(
    source: Point2D,
    touch: Point2D,
    bounds: &Rect,
) -> Result<Point2D, InterceptError> {
    let dx = touch.x - source.x;
    let dy = touch.y - source.y;

    if dx == 0.0 && dy == 0.0 {
        return Err(InterceptError::NoDirection);
    }

    // Walk the four boundary lines, solving source + t*d = line for each and
    // keeping the nearest candidate that is strictly forward (t > 0) and
    // lands on the rectangle's edge rather than the line's extension.
    let mut t_min = f64::INFINITY;
    let mut nearest = None;

    if dx != 0.0 {
        for x in [bounds.x_min(), bounds.x_max()] {
            let t = (x - source.x) / dx;
            if t > 0.0 && t < t_min {
                let y = source.y + t * dy;
                if y >= bounds.y_min() && y <= bounds.y_max() {
                    t_min = t;
                    nearest = Some(Point2D::new(x, y));
                }
            }
        }
    }

    if dy != 0.0 {
        for y in [bounds.y_min(), bounds.y_max()] {
            let t = (y - source.y) / dy;
            if t > 0.0 && t < t_min {
                let x = source.x + t * dx;
                if x >= bounds.x_min() && x <= bounds.x_max() {
                    t_min = t;
                    nearest = Some(Point2D::new(x, y));
                }
            }
        }
    }

    nearest.ok_or(InterceptError::NoForwardCrossing)
}

/// [`find_intercept`] under the historical contract: a coincident source and
/// touch yield [`SENTINEL`] instead of an error. New callers should prefer
/// [`find_intercept`]; the sentinel can collide with a legitimate coordinate.
pub fn find_intercept_compat(source: Point2D, touch: Point2D, bounds: &Rect) -> Point2D {
    find_intercept(source, touch, bounds).unwrap_or(SENTINEL)
}
