use crate::continuity::ContinuityConfig;
use crate::evaluate::SamplingParams;
use crate::family::SplineFamily;

/// Immutable startup configuration for a [`CurveSession`](super::CurveSession).
///
/// Values are supplied once by the embedding application before the first
/// input event; nothing here is switchable at runtime. Out-of-range numeric
/// values are clamped rather than rejected — only an unknown family name
/// (caught while parsing [`SplineFamily`]) is a fatal configuration error.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    family: SplineFamily,
    sampling: SamplingParams,
    continuity: ContinuityConfig,
}

impl SessionConfig {
    /// Creates a session config, deriving the effective continuity orders
    /// for the family. The subdivision count is stored as given; the
    /// evaluator owns the below-1 clamp [`SamplingParams`] documents.
    #[must_use]
    pub fn new(
        family: SplineFamily,
        sampling: SamplingParams,
        geometric: u32,
        parametric: u32,
    ) -> Self {
        Self {
            family,
            sampling,
            continuity: ContinuityConfig::for_family(family, geometric, parametric),
        }
    }

    /// Default configuration for a family: 150 subdivisions, no junction
    /// continuity enforcement.
    #[must_use]
    pub fn default_for(family: SplineFamily) -> Self {
        Self::new(family, SamplingParams::default(), 0, 0)
    }

    /// The spline family this session draws.
    #[must_use]
    pub fn family(&self) -> SplineFamily {
        self.family
    }

    /// Sampling density per segment.
    #[must_use]
    pub fn sampling(&self) -> SamplingParams {
        self.sampling
    }

    /// Effective continuity orders.
    #[must_use]
    pub fn continuity(&self) -> ContinuityConfig {
        self.continuity
    }
}
