/// 2D point type used for sampled curve points.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 4x4 basis matrix for cubic spline families.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// 4x2 geometry matrix (one row per control point or tangent).
pub type Matrix4x2 = nalgebra::Matrix4x2<f64>;

/// 1x4 parameter power vector.
pub type RowVector4 = nalgebra::RowVector4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// An integer screen-space control point, as delivered by a click event.
///
/// Only the most recently inserted point is ever adjusted (by continuity
/// enforcement); earlier points are never touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPoint {
    pub x: i32,
    pub y: i32,
}

impl ControlPoint {
    /// Creates a new control point.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Lifts the point into floating-point coordinates.
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Returns the vector from `self` to `other`.
    #[must_use]
    pub fn vector_to(self, other: Self) -> Vector2 {
        Vector2::new(f64::from(other.x - self.x), f64::from(other.y - self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_between_points() {
        let a = ControlPoint::new(10, 20);
        let b = ControlPoint::new(13, 16);
        let v = a.vector_to(b);
        assert!((v.x - 3.0).abs() < TOLERANCE);
        assert!((v.y + 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn lift_to_float() {
        let p = ControlPoint::new(-5, 7).to_point2();
        assert!((p.x + 5.0).abs() < TOLERANCE);
        assert!((p.y - 7.0).abs() < TOLERANCE);
    }
}
