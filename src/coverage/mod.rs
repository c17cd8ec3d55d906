//! Coverage verification: does a set of envelopes cover a target rectangle?
//!
//! Three solvers answer the question at different precision/performance
//! points:
//!
//! - [`ExactSolver`] - general boolean check by iterative rectangle
//!   subtraction.  Exact for any candidate shapes; worst case exponential in
//!   the number of candidates.
//! - [`ConstrainedSweepSolver`] - O(n log n) one-dimensional greedy sweep over
//!   distance, valid only when every contributing candidate's light range
//!   contains the target's light range.
//! - [`GapDiagnosticSolver`] - reports per-axis gaps plus a grid of
//!   uncovered cells.  Approximate; see its documentation.
//!
//! [`CoverageEngine`] validates inputs and dispatches to one of them.

mod diagnostic;
mod engine;
mod exact;
mod report;
mod sweep;


pub use diagnostic::GapDiagnosticSolver;
pub use engine::{Assessment, CoverageConfig, CoverageEngine, Strategy};
pub use exact::ExactSolver;
pub use report::CoverageReport;
pub use sweep::ConstrainedSweepSolver;

use crate::geometry::Rectangle;
use qtty::Unit;

/// A boolean coverage check over already-validated rectangles.
///
/// # Type Parameters
///
/// * `D` - Unit of the distance axis (e.g., [`qtty::Meter`])
/// * `L` - Unit of the light axis
pub trait CoverageSolver<D: Unit, L: Unit> {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Returns true if the union of `candidates` covers `target`.
    ///
    /// An empty candidate list never covers a target.
    fn is_covered(&self, target: &Rectangle<D, L>, candidates: &[Rectangle<D, L>]) -> bool;
}
