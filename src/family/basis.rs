use crate::math::{ControlPoint, Matrix4, Matrix4x2};

use super::{SplineFamily, CONTROL_POINTS_PER_SEGMENT};

/// Returns the fixed basis matrix for `family`, scale factors folded in.
///
/// The MINVO matrix is stored already transposed; the published constants
/// are column-per-basis-function and the evaluator multiplies `T * M * G`.
pub(super) fn matrix_for(family: SplineFamily) -> Matrix4 {
    match family {
        SplineFamily::Hermite => Matrix4::new(
            2.0, -2.0, 1.0, 1.0, //
            -3.0, 3.0, -2.0, -1.0, //
            0.0, 0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, 0.0,
        ),
        SplineFamily::Bezier => Matrix4::new(
            -1.0, 3.0, -3.0, 1.0, //
            3.0, -6.0, 3.0, 0.0, //
            -3.0, 3.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0,
        ),
        SplineFamily::BSpline => {
            Matrix4::new(
                -1.0, 3.0, -3.0, 1.0, //
                3.0, -6.0, 3.0, 0.0, //
                -3.0, 0.0, 3.0, 0.0, //
                1.0, 4.0, 1.0, 0.0,
            ) / 6.0
        }
        SplineFamily::CatmullRom => {
            Matrix4::new(
                -1.0, 3.0, -3.0, 1.0, //
                2.0, -5.0, 4.0, -1.0, //
                -1.0, 0.0, 1.0, 0.0, //
                0.0, 2.0, 0.0, 0.0,
            ) / 2.0
        }
        SplineFamily::Minvo => Matrix4::new(
            -0.4302, 0.8349, -0.8349, 0.4302, //
            0.4568, -0.4568, -0.4568, 0.4568, //
            -0.02698, -0.7921, 0.7921, 0.02698, //
            0.000_410_3, 0.4996, 0.4996, 0.000_410_3,
        ),
    }
}

/// Builds the per-segment geometry matrix from one window of control points.
///
/// Hermite rows are start point, end point, tangent-in, tangent-out: the
/// window is clicked as start, start handle, end, end handle, so the curve
/// interpolates `window[0]` and `window[2]` while `window[1]` and
/// `window[3]` only set the boundary tangents. Every other family takes the
/// four points in insertion order.
pub(super) fn geometry_matrix(
    family: SplineFamily,
    window: &[ControlPoint; CONTROL_POINTS_PER_SEGMENT],
) -> Matrix4x2 {
    match family {
        SplineFamily::Hermite => {
            let start = window[0].to_point2();
            let end = window[2].to_point2();
            let tangent_in = window[0].vector_to(window[1]);
            let tangent_out = window[3].vector_to(window[2]);
            Matrix4x2::new(
                start.x, start.y, //
                end.x, end.y, //
                tangent_in.x, tangent_in.y, //
                tangent_out.x, tangent_out.y,
            )
        }
        _ => {
            let [p0, p1, p2, p3] = window.map(ControlPoint::to_point2);
            Matrix4x2::new(
                p0.x, p0.y, //
                p1.x, p1.y, //
                p2.x, p2.y, //
                p3.x, p3.y,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::math::RowVector4;

    use super::*;

    fn power_vector(t: f64) -> RowVector4 {
        RowVector4::new(t * t * t, t * t, t, 1.0)
    }

    // Basis functions of position-interpolating uniform families sum to 1
    // for every parameter value.
    #[test]
    fn partition_of_unity() {
        for family in [
            SplineFamily::Bezier,
            SplineFamily::BSpline,
            SplineFamily::CatmullRom,
        ] {
            let m = matrix_for(family);
            for i in 0..=10 {
                let t = f64::from(i) / 10.0;
                let weights = power_vector(t) * m;
                assert_relative_eq!(weights.sum(), 1.0, epsilon = 1e-12);
            }
        }
    }

    // The MINVO constants are truncated to four significant digits, so the
    // partition of unity only holds to about 1e-4.
    #[test]
    fn minvo_partition_of_unity_is_approximate() {
        let m = matrix_for(SplineFamily::Minvo);
        for i in 0..=10 {
            let t = -1.0 + f64::from(i) / 5.0;
            let weights = power_vector(t) * m;
            assert_relative_eq!(weights.sum(), 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn bspline_scale_is_one_sixth() {
        let m = matrix_for(SplineFamily::BSpline);
        assert_relative_eq!(m[(3, 1)], 4.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 0)], -1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn catmull_rom_scale_is_one_half() {
        let m = matrix_for(SplineFamily::CatmullRom);
        assert_relative_eq!(m[(3, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 2)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn minvo_is_stored_transposed() {
        // Row 0 of the stored matrix is column 0 of the published constants.
        let m = matrix_for(SplineFamily::Minvo);
        assert_relative_eq!(m[(0, 0)], -0.4302, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 1)], 0.8349, epsilon = 1e-12);
        assert_relative_eq!(m[(3, 0)], 0.000_410_3, epsilon = 1e-12);
    }

    #[test]
    fn hermite_geometry_uses_tangent_rows() {
        let window = [
            ControlPoint::new(0, 0),
            ControlPoint::new(50, 0),
            ControlPoint::new(100, 100),
            ControlPoint::new(50, 100),
        ];
        let g = geometry_matrix(SplineFamily::Hermite, &window);
        // Start and end points.
        assert_relative_eq!(g[(0, 0)], 0.0);
        assert_relative_eq!(g[(1, 0)], 100.0);
        assert_relative_eq!(g[(1, 1)], 100.0);
        // Both boundary tangents are (50, 0).
        assert_relative_eq!(g[(2, 0)], 50.0);
        assert_relative_eq!(g[(2, 1)], 0.0);
        assert_relative_eq!(g[(3, 0)], 50.0);
        assert_relative_eq!(g[(3, 1)], 0.0);
    }

    #[test]
    fn positional_geometry_keeps_insertion_order() {
        let window = [
            ControlPoint::new(1, 2),
            ControlPoint::new(3, 4),
            ControlPoint::new(5, 6),
            ControlPoint::new(7, 8),
        ];
        let g = geometry_matrix(SplineFamily::Bezier, &window);
        assert_relative_eq!(g[(0, 0)], 1.0);
        assert_relative_eq!(g[(1, 1)], 4.0);
        assert_relative_eq!(g[(3, 0)], 7.0);
    }
}
