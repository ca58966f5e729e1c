mod config;

pub use config::SessionConfig;

use log::{debug, info};

use crate::continuity;
use crate::error::{Result, SessionError};
use crate::evaluate::{self, DerivativeOrder, SampledSegment};
use crate::family::{SplineFamily, CONTROL_POINTS_PER_SEGMENT};
use crate::grouping;
use crate::math::ControlPoint;

/// The aggregate over point history and realized segments.
///
/// All three user actions flow through here, in input-event order: insert
/// runs continuity correction before the segment-completion test, undo
/// inverts exactly one insert (popping the segment that insert completed, if
/// any), and reset clears everything. Counts are derived from the owned
/// collections, never tracked separately.
#[derive(Debug)]
pub struct CurveSession {
    config: SessionConfig,
    points: Vec<ControlPoint>,
    segments: Vec<SampledSegment>,
}

impl CurveSession {
    /// Creates an empty session with the given startup configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Accepts one click: appends the point, snaps it onto the previous
    /// segment's exit tangent when it is a junction point, and realizes a
    /// new sampled segment when the trailing window is complete.
    ///
    /// # Errors
    ///
    /// Only on an internal evaluation contract breach; user input itself
    /// cannot fail.
    pub fn insert_point(&mut self, x: i32, y: i32) -> Result<()> {
        self.points.push(ControlPoint::new(x, y));
        let n = self.points.len();
        let family = self.family();
        let continuity = self.config.continuity();
        info!("insert point {n} at ({x}, {y})");

        if let Some(adjusted) = continuity::apply(&mut self.points, family, continuity) {
            info!("adjust point {n} to ({}, {})", adjusted.x, adjusted.y);
        }

        if grouping::is_segment_complete(n, family) {
            let window = &self.points[n - CONTROL_POINTS_PER_SEGMENT..];
            let segment = evaluate::sample_segment(
                window,
                family,
                self.config.sampling(),
                DerivativeOrder::Position,
            )?;
            self.segments.push(segment);
            debug!("segment {} complete", self.segments.len());
        }
        Ok(())
    }

    /// Removes the most recent point, returning it. If that point's
    /// insertion completed a segment, the segment is removed too, keeping
    /// the segment count consistent with the grouping rule.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyHistory`] when there is nothing to undo.
    pub fn undo_last_point(&mut self) -> Result<ControlPoint> {
        let removed = self.points.pop().ok_or(SessionError::EmptyHistory)?;
        let expected = grouping::completed_segment_count(self.points.len(), self.family());
        if self.segments.len() > expected {
            self.segments.truncate(expected);
            debug!("segment {} discarded by undo", expected + 1);
        }
        info!(
            "undo point {} at ({}, {})",
            self.points.len() + 1,
            removed.x,
            removed.y
        );
        Ok(removed)
    }

    /// Clears the point history and all realized segments.
    pub fn reset(&mut self) {
        self.points.clear();
        self.segments.clear();
        info!("session reset");
    }

    /// The spline family fixed for this session.
    #[must_use]
    pub fn family(&self) -> SplineFamily {
        self.config.family()
    }

    /// The startup configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The full point history, for point markers and the control polyline.
    #[must_use]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// All realized segments, each carrying its control polygon.
    #[must_use]
    pub fn segments(&self) -> &[SampledSegment] {
        &self.segments
    }

    /// Number of points inserted so far.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of completed segments (the spline count).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
