//! Segment-completion arithmetic.
//!
//! Decides, from the running point count alone, when a trailing window of
//! control points forms a complete segment. Interpolating families reuse the
//! last point of each segment as the first of the next, so they complete at
//! counts 4, 7, 10, …; sliding-window families complete one segment per
//! insertion once the warm-up window is full.

use crate::family::{GroupingRule, SplineFamily, CONTROL_POINTS_PER_SEGMENT, DEGREE};

/// Returns the zero-based index of the most recent point within its segment,
/// in `[0, DEGREE - 1]`. Index 0 is the shared boundary-point role.
#[must_use]
pub fn point_index_within_segment(total_points: usize, family: SplineFamily) -> usize {
    if total_points == 0 {
        return 0;
    }
    match family.grouping() {
        GroupingRule::Interpolating => (total_points - 1) % DEGREE,
        GroupingRule::SlidingWindow => (total_points - 1).min(DEGREE - 1),
    }
}

/// Whether the insertion that brought the history to `total_points` points
/// just completed a segment.
#[must_use]
pub fn is_segment_complete(total_points: usize, family: SplineFamily) -> bool {
    match family.grouping() {
        GroupingRule::Interpolating => {
            total_points >= CONTROL_POINTS_PER_SEGMENT && (total_points - 1) % DEGREE == 0
        }
        GroupingRule::SlidingWindow => total_points >= CONTROL_POINTS_PER_SEGMENT,
    }
}

/// Closed-form count of segments completed by `total_points` points.
///
/// This is the inverse the undo path relies on: after popping a point the
/// segment list is truncated to this value for the reduced count.
#[must_use]
pub fn completed_segment_count(total_points: usize, family: SplineFamily) -> usize {
    if total_points < CONTROL_POINTS_PER_SEGMENT {
        return 0;
    }
    match family.grouping() {
        GroupingRule::Interpolating => 1 + (total_points - CONTROL_POINTS_PER_SEGMENT) / DEGREE,
        GroupingRule::SlidingWindow => total_points - DEGREE,
    }
}

/// Whether the most recent point sits immediately after a shared segment
/// boundary, with at least one full segment before it.
///
/// This is the trigger for junction continuity enforcement. It only ever
/// holds for interpolating families; uniform-knot families keep first-
/// derivative continuity through their basis instead.
#[must_use]
pub fn is_junction_point(total_points: usize, family: SplineFamily) -> bool {
    family.is_interpolating()
        && total_points > CONTROL_POINTS_PER_SEGMENT
        && (total_points - 1) % DEGREE == 1
}
