//! Greedy one-dimensional sweep over the distance axis.

use qtty::Unit;
use tracing::trace;

use super::CoverageSolver;
use crate::geometry::{approx_le, strictly_lt, Range, Rectangle};

/// Interval-cover check on distance, for candidates that span the full
/// required light range.
///
/// Candidates whose light range does not contain the target's light range
/// are dropped before the sweep and never contribute.  The remaining
/// distance ranges are sorted by `min` and swept left to right, extending a
/// frontier from the target's minimum distance.  The first candidate
/// starting beyond the frontier proves a gap.
///
/// The verdict is only meaningful when the light-containment precondition
/// holds for the instance: a dropped candidate may still have covered part
/// of the target, which the [`ExactSolver`](super::ExactSolver) would count.
///
/// For a target with zero distance width the frontier starts at the goal, so
/// any eligible candidate yields `true`, even one that never reaches the
/// target's distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedSweepSolver;

impl ConstrainedSweepSolver {
    /// Distance ranges of candidates that satisfy the light precondition,
    /// sorted by `min`.
    fn eligible<D: Unit, L: Unit>(
        target: &Rectangle<D, L>,
        candidates: &[Rectangle<D, L>],
    ) -> Vec<Range<D>> {
        let required_light = target.light_range();
        let mut eligible: Vec<Range<D>> = candidates
            .iter()
            .filter(|c| c.light_range().contains_range(&required_light))
            .map(|c| c.distance_range())
            .collect();
        eligible.sort_by(|a, b| a.min().value().total_cmp(&b.min().value()));
        eligible
    }
}

impl<D: Unit, L: Unit> CoverageSolver<D, L> for ConstrainedSweepSolver {
    fn name(&self) -> &'static str {
        "constrained-sweep"
    }

    fn is_covered(&self, target: &Rectangle<D, L>, candidates: &[Rectangle<D, L>]) -> bool {
        let eligible = Self::eligible(target, candidates);
        if eligible.is_empty() {
            return false;
        }

        let goal = target.distance_range().max().value();
        let mut frontier = target.distance_range().min().value();

        for range in &eligible {
            if strictly_lt(frontier, range.min().value()) {
                trace!(frontier, next_min = range.min().value(), "sweep hit a gap");
                return false;
            }
            frontier = frontier.max(range.max().value());
            trace!(frontier, "sweep advanced");
            if approx_le(goal, frontier) {
                return true;
            }
        }

        false
    }
}
