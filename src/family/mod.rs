mod basis;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::math::{ControlPoint, Matrix4, Matrix4x2};

/// Polynomial degree shared by all supported families (cubics).
pub const DEGREE: usize = 3;

/// Number of control points consumed per segment.
pub const CONTROL_POINTS_PER_SEGMENT: usize = DEGREE + 1;

/// Returns the control-point count for a polynomial of the given degree.
#[must_use]
pub const fn control_point_count(degree: usize) -> usize {
    degree + 1
}

/// Parameter domain over which a segment is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl ParameterDomain {
    /// Creates a new parameter domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// How a family consumes control points as they stream in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingRule {
    /// The last point of each segment is reused as the first of the next;
    /// a new segment completes every `DEGREE` points after the first one.
    Interpolating,
    /// Every insertion past the warm-up window completes a new segment
    /// from the trailing `DEGREE + 1` points.
    SlidingWindow,
}

/// One of the five supported cubic spline families.
///
/// The family is chosen once at startup and acts as the strategy object for
/// the rest of the engine: basis matrix, geometry layout, parameter domain,
/// and grouping rule are all exposed here so no other component has to
/// re-match on the family name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineFamily {
    Hermite,
    Bezier,
    BSpline,
    CatmullRom,
    Minvo,
}

impl SplineFamily {
    /// Returns the 4x4 basis matrix for this family.
    #[must_use]
    pub fn basis_matrix(self) -> Matrix4 {
        basis::matrix_for(self)
    }

    /// Builds the 4x2 geometry matrix for one segment window.
    #[must_use]
    pub fn geometry_matrix(self, window: &[ControlPoint; CONTROL_POINTS_PER_SEGMENT]) -> Matrix4x2 {
        basis::geometry_matrix(self, window)
    }

    /// Returns the parameter domain segments of this family are sampled over.
    #[must_use]
    pub fn parameter_domain(self) -> ParameterDomain {
        match self {
            Self::Minvo => ParameterDomain::new(-1.0, 1.0),
            _ => ParameterDomain::new(0.0, 1.0),
        }
    }

    /// Returns how this family groups incoming control points into segments.
    #[must_use]
    pub fn grouping(self) -> GroupingRule {
        match self {
            Self::Hermite | Self::Bezier | Self::Minvo => GroupingRule::Interpolating,
            Self::BSpline | Self::CatmullRom => GroupingRule::SlidingWindow,
        }
    }

    /// Whether this family interpolates its segment boundaries directly.
    ///
    /// Uniform-knot families get first-derivative continuity from the basis
    /// itself, so junction enforcement only applies to interpolating ones.
    #[must_use]
    pub fn is_interpolating(self) -> bool {
        self.grouping() == GroupingRule::Interpolating
    }
}

impl fmt::Display for SplineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hermite => "Hermite",
            Self::Bezier => "Bezier",
            Self::BSpline => "BSpline",
            Self::CatmullRom => "CatmullRom",
            Self::Minvo => "MINVO",
        };
        f.write_str(name)
    }
}

impl FromStr for SplineFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hermite" => Ok(Self::Hermite),
            "Bezier" => Ok(Self::Bezier),
            "BSpline" => Ok(Self::BSpline),
            "CatmullRom" => Ok(Self::CatmullRom),
            "MINVO" => Ok(Self::Minvo),
            other => Err(ConfigError::UnknownFamily {
                name: other.to_string(),
            }),
        }
    }
}
