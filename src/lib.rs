//! envelope_cover - coverage verification for rectangular sensing envelopes
//!
//! Decides whether a set of hardware camera operating windows, each a pair of
//! ranges over distance and light level, covers a required operating window,
//! and reports what is missing when it does not.

pub mod camera;
pub mod coverage;
pub mod error;
pub mod geometry;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{Envelope, HardwareCamera, SoftwareCamera};
pub use coverage::{CoverageConfig, CoverageEngine, CoverageReport, Strategy};
pub use error::CoverageError;
pub use geometry::{Range, Rectangle, EPSILON};

use qtty::Unit;

/// Identifier type used for cameras.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}

/// Returns true if `candidates` jointly cover `target` under `strategy`.
///
/// # Errors
///
/// Returns [`CoverageError::InvalidEnvelope`] if any range of the target or a
/// candidate has `min > max`.
pub fn check_coverage<D, L, T, C>(
    target: &T,
    candidates: &[C],
    strategy: Strategy,
) -> Result<bool, CoverageError>
where
    D: Unit,
    L: Unit,
    T: Envelope<D, L>,
    C: Envelope<D, L>,
{
    CoverageEngine::new(CoverageConfig::default().with_strategy(strategy)).check(target, candidates)
}

/// Per-axis gaps and uncovered grid cells of `target` against `cameras`.
///
/// # Errors
///
/// Returns [`CoverageError::InvalidEnvelope`] if any range of the target or a
/// camera has `min > max`.
pub fn diagnose_coverage<D, L, T>(
    target: &T,
    cameras: &[HardwareCamera<D, L>],
) -> Result<CoverageReport<D, L>, CoverageError>
where
    D: Unit,
    L: Unit,
    T: Envelope<D, L>,
{
    CoverageEngine::default().diagnose(target, cameras)
}
