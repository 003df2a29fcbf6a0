use crate::intercept::InterceptError;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in a bottom-left-origin coordinate system:
/// `origin` is the minimum corner and y increases upward.
#[derive(Clone, Debug)]
pub struct Rect {
    origin: Point2D,
    width: f64,
    height: f64,
}

impl Rect {
    /// Both extents must be strictly positive.
    pub fn new(origin: Point2D, width: f64, height: f64) -> Result<Self, InterceptError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(InterceptError::InvalidBounds { width, height });
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    pub fn from_corners(min: Point2D, max: Point2D) -> Result<Self, InterceptError> {
        Self::new(min, max.x - min.x, max.y - min.y)
    }

    pub fn x_min(&self) -> f64 {
        self.origin.x
    }

    pub fn x_max(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn y_min(&self) -> f64 {
        self.origin.y
    }

    pub fn y_max(&self) -> f64 {
        self.origin.y + self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Closed-range containment, boundary points included.
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x_min()
            && point.x <= self.x_max()
            && point.y >= self.y_min()
            && point.y <= self.y_max()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contains_includes_boundary() {
        let rect = Rect::new(Point2D::new(0.0, 0.0), 100.0, 100.0).unwrap();
        assert!(rect.contains(Point2D::new(50.0, 50.0)));
        assert!(rect.contains(Point2D::new(0.0, 0.0)));
        assert!(rect.contains(Point2D::new(100.0, 100.0)));
        assert!(!rect.contains(Point2D::new(100.1, 50.0)));
        assert!(!rect.contains(Point2D::new(50.0, -0.1)));
    }

    #[test]
    fn test_from_corners_matches_extent() {
        let rect = Rect::from_corners(Point2D::new(10.0, 20.0), Point2D::new(30.0, 25.0)).unwrap();
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 5.0);
        assert_eq!(rect.x_max(), 30.0);
        assert_eq!(rect.y_max(), 25.0);
    }

    #[test]
    fn test_degenerate_extent_is_rejected() {
        let zero = Rect::new(Point2D::new(0.0, 0.0), 0.0, 100.0);
        assert!(matches!(zero, Err(InterceptError::InvalidBounds { .. })));

        let negative = Rect::from_corners(Point2D::new(10.0, 10.0), Point2D::new(5.0, 20.0));
        assert!(matches!(
            negative,
            Err(InterceptError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(Point2D::new(0.0, 0.0), 1024.0, 768.0).unwrap();
        let center = rect.center();
        assert_eq!(center, Point2D::new(512.0, 384.0));
    }
}
