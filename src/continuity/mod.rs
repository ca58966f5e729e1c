use crate::family::SplineFamily;
use crate::grouping;
use crate::math::{ControlPoint, TOLERANCE};

/// Requested continuity orders at segment junctions.
///
/// `geometric` is the G order (tangent direction), `parametric` the C order
/// (direction and magnitude). A C¹ request implies a G¹ one, so the
/// geometric order is clamped up to the parametric order at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinuityConfig {
    geometric: u32,
    parametric: u32,
}

impl ContinuityConfig {
    /// Creates a config from raw orders, clamping `geometric` up to
    /// `parametric` rather than rejecting an inconsistent pair.
    #[must_use]
    pub fn new(geometric: u32, parametric: u32) -> Self {
        Self {
            geometric: geometric.max(parametric),
            parametric,
        }
    }

    /// Creates the effective config for a family.
    ///
    /// Uniform-knot families carry C² continuity in the basis itself, so the
    /// requested orders are overridden with (2, 2) and junction enforcement
    /// never runs for them.
    #[must_use]
    pub fn for_family(family: SplineFamily, geometric: u32, parametric: u32) -> Self {
        if family.is_interpolating() {
            Self::new(geometric, parametric)
        } else {
            Self::new(2, 2)
        }
    }

    /// The geometric (G) continuity order.
    #[must_use]
    pub fn geometric(&self) -> u32 {
        self.geometric
    }

    /// The parametric (C) continuity order.
    #[must_use]
    pub fn parametric(&self) -> u32 {
        self.parametric
    }
}

/// Snaps the most recent point onto the previous segment's exit tangent.
///
/// No-op (returns `None`) unless the last point is a junction point of an
/// interpolating family, at least G¹ is requested, and the previous tangent
/// is non-degenerate. Otherwise the last point is replaced in place with
/// `shared + velocity * normalize(prev_dir)`, where the velocity is the
/// clicked point's projection onto the tangent for G¹, or the previous
/// tangent's full magnitude for C¹. Coordinates round to the nearest
/// integer; only the last point is ever touched.
pub fn apply(
    points: &mut [ControlPoint],
    family: SplineFamily,
    config: ContinuityConfig,
) -> Option<ControlPoint> {
    let n = points.len();
    if config.geometric() < 1 || !grouping::is_junction_point(n, family) {
        return None;
    }

    let before = points[n - 3];
    let shared = points[n - 2];
    let clicked = points[n - 1];

    let prev_dir = before.vector_to(shared);
    let prev_len = prev_dir.norm();
    if prev_len < TOLERANCE {
        // Repeated click on the shared point; no tangent to align with.
        return None;
    }
    let unit = prev_dir / prev_len;

    let velocity = if config.parametric() >= 1 {
        prev_len
    } else {
        shared.vector_to(clicked).dot(&unit)
    };

    let adjusted = ControlPoint::new(
        round_coord(f64::from(shared.x) + velocity * unit.x),
        round_coord(f64::from(shared.y) + velocity * unit.y),
    );
    points[n - 1] = adjusted;
    Some(adjusted)
}

#[allow(clippy::cast_possible_truncation)]
fn round_coord(value: f64) -> i32 {
    value.round() as i32
}
