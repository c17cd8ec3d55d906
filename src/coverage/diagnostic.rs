//! Gap-reporting coverage diagnostic.

use qtty::Unit;

use super::{CoverageReport, CoverageSolver};
use crate::geometry::{find_gaps, Range, Rectangle};

/// Reports where the target is uncovered rather than just whether it is.
///
/// Two passes:
///
/// 1. **Axis gaps** - each axis of the target is compared against the merged
///    candidate ranges on that axis alone.
/// 2. **Grid cells** - per axis, candidate ranges are sorted and deduplicated,
///    and the spaces between consecutive ranges (with the target's own bounds
///    at both extremes) form the cell boundaries.  Every valid
///    distance-cell × light-cell rectangle that intersects no single
///    candidate is reported as uncovered.
///
/// # Precision
///
/// The grid pass is approximate and does not agree with
/// [`ExactSolver`](super::ExactSolver) in every case:
///
/// - A cell counts as covered as soon as one candidate merely touches it, so
///   holes that fall inside a cell whose boundary a candidate reaches go
///   unreported.
/// - Cells are bounded by the target only at the extremes; a cell lying
///   between candidates that extend past the target may fall outside the
///   target and be flagged even though the target itself is covered.
///
/// Use the exact solver's verdict as the source of truth for pass/fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapDiagnosticSolver;

impl GapDiagnosticSolver {
    pub fn diagnose<D: Unit, L: Unit>(
        &self,
        target: &Rectangle<D, L>,
        candidates: &[Rectangle<D, L>],
    ) -> CoverageReport<D, L> {
        let distance_gaps = find_gaps(
            &target.distance_range(),
            candidates.iter().map(Rectangle::distance_range),
        );
        let light_gaps = find_gaps(
            &target.light_range(),
            candidates.iter().map(Rectangle::light_range),
        );

        let distance_cells = grid_cells(
            &target.distance_range(),
            candidates.iter().map(Rectangle::distance_range).collect(),
        );
        let light_cells = grid_cells(
            &target.light_range(),
            candidates.iter().map(Rectangle::light_range).collect(),
        );

        let mut uncovered_areas = Vec::new();
        for distance in &distance_cells {
            for light in &light_cells {
                let cell = Rectangle::new(*distance, *light);
                if !candidates.iter().any(|c| cell.intersect(c).is_some()) {
                    uncovered_areas.push(cell);
                }
            }
        }

        CoverageReport::new(distance_gaps, light_gaps, uncovered_areas)
    }
}

impl<D: Unit, L: Unit> CoverageSolver<D, L> for GapDiagnosticSolver {
    fn name(&self) -> &'static str {
        "gap-diagnostic"
    }

    fn is_covered(&self, target: &Rectangle<D, L>, candidates: &[Rectangle<D, L>]) -> bool {
        !candidates.is_empty() && self.diagnose(target, candidates).is_covered()
    }
}

/// Cells between consecutive candidate ranges on one axis.
///
/// Cell `k` spans `[ranges[k-1].max, ranges[k].min]`, with `required.min` and
/// `required.max` standing in at the two ends.  Inverted cells (where the
/// neighbouring ranges overlap) are skipped.
fn grid_cells<U: Unit>(required: &Range<U>, mut ranges: Vec<Range<U>>) -> Vec<Range<U>> {
    ranges.sort_by(|a, b| {
        a.min()
            .value()
            .total_cmp(&b.min().value())
            .then(a.max().value().total_cmp(&b.max().value()))
    });
    ranges.dedup_by(|a, b| a.approx_eq(b));

    let lower = std::iter::once(required.min()).chain(ranges.iter().map(Range::max));
    let upper = ranges
        .iter()
        .map(Range::min)
        .chain(std::iter::once(required.max()));

    lower
        .zip(upper)
        .map(|(min, max)| Range::new_unchecked(min, max))
        .filter(Range::is_valid)
        .collect()
}
