use crate::error::{EvaluationError, Result};
use crate::family::{SplineFamily, CONTROL_POINTS_PER_SEGMENT};
use crate::math::{ControlPoint, Point2, RowVector4};

/// Parameters controlling how densely a segment is sampled.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Number of uniform parameter steps per segment; the sampled polyline
    /// has `subdivisions + 1` points. Values below 1 are treated as 1.
    pub subdivisions: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { subdivisions: 150 }
    }
}

/// Which derivative of the parametric curve to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeOrder {
    /// Curve position, the mode used for rendering.
    #[default]
    Position,
    /// First derivative with respect to the parameter.
    Velocity,
    /// Second derivative with respect to the parameter.
    Acceleration,
}

/// One evaluated segment: a dense polyline plus the control-point window
/// (simplex) it was built from, kept for the influence-region overlay.
#[derive(Debug, Clone)]
pub struct SampledSegment {
    /// The ordered sampled curve points.
    pub points: Vec<Point2>,
    /// The four control points that produced this segment.
    pub control_polygon: [ControlPoint; CONTROL_POINTS_PER_SEGMENT],
}

/// Samples one segment as `Q(t) = T(t) * M * G` over the family's parameter
/// domain, stepped by integer index so the endpoints are hit exactly and the
/// output always has `subdivisions + 1` points.
///
/// # Errors
///
/// Returns [`EvaluationError::ControlPointCount`] if `window` does not hold
/// exactly `DEGREE + 1` points. The grouper never produces such a window;
/// this is a caller contract breach.
pub fn sample_segment(
    window: &[ControlPoint],
    family: SplineFamily,
    params: SamplingParams,
    derivative: DerivativeOrder,
) -> Result<SampledSegment> {
    let control_polygon: [ControlPoint; CONTROL_POINTS_PER_SEGMENT] =
        window.try_into().map_err(|_| EvaluationError::ControlPointCount {
            expected: CONTROL_POINTS_PER_SEGMENT,
            actual: window.len(),
        })?;

    let basis = family.basis_matrix();
    let geometry = family.geometry_matrix(&control_polygon);
    let domain = family.parameter_domain();
    let steps = params.subdivisions.max(1);

    let mut points = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = domain.t_min + domain.length() * f64::from(i) / f64::from(steps);
        let q = power_vector(t, derivative) * basis * geometry;
        points.push(Point2::new(q[0], q[1]));
    }

    Ok(SampledSegment {
        points,
        control_polygon,
    })
}

/// The cubic parameter vector `[t^3, t^2, t, 1]`, differentiated termwise
/// for the higher derivative modes.
fn power_vector(t: f64, derivative: DerivativeOrder) -> RowVector4 {
    match derivative {
        DerivativeOrder::Position => RowVector4::new(t * t * t, t * t, t, 1.0),
        DerivativeOrder::Velocity => RowVector4::new(3.0 * t * t, 2.0 * t, 1.0, 0.0),
        DerivativeOrder::Acceleration => RowVector4::new(6.0 * t, 2.0, 0.0, 0.0),
    }
}
