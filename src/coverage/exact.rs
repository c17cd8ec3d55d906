//! Exact coverage by iterative rectangle subtraction.

use qtty::Unit;
use tracing::trace;

use super::CoverageSolver;
use crate::geometry::Rectangle;

/// Subtracts every candidate from a shrinking list of uncovered fragments.
///
/// The working list starts as `[target]`.  Each candidate replaces every
/// fragment with the pieces of that fragment lying outside the candidate.
/// The target is covered once the list is empty.
///
/// Candidate order changes the intermediate fragment count but never the
/// verdict.  Each candidate can split a fragment into up to four pieces, so
/// the list may grow as 4^n in pathological inputs; the solver is meant for
/// tens of candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    /// Returns the fragments of `target` that no candidate covers.
    ///
    /// Stops early once nothing is left.  The returned fragments are pairwise
    /// disjoint and their union is exactly the uncovered part of `target`.
    pub fn uncovered<D: Unit, L: Unit>(
        &self,
        target: &Rectangle<D, L>,
        candidates: &[Rectangle<D, L>],
    ) -> Vec<Rectangle<D, L>> {
        let mut uncovered = vec![*target];

        for (index, candidate) in candidates.iter().enumerate() {
            uncovered = uncovered
                .iter()
                .flat_map(|area| area.subtract(candidate))
                .collect();

            trace!(candidate = index, fragments = uncovered.len(), "subtracted candidate");

            if uncovered.is_empty() {
                break;
            }
        }

        uncovered
    }
}

impl<D: Unit, L: Unit> CoverageSolver<D, L> for ExactSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn is_covered(&self, target: &Rectangle<D, L>, candidates: &[Rectangle<D, L>]) -> bool {
        if candidates.is_empty() {
            return false;
        }
        self.uncovered(target, candidates).is_empty()
    }
}
