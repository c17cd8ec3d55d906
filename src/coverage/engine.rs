//! Coverage engine: input validation and strategy dispatch.

use std::fmt::Display;

use qtty::Unit;
use tracing::debug;

use super::{
    ConstrainedSweepSolver, CoverageReport, CoverageSolver, ExactSolver, GapDiagnosticSolver,
};
use crate::camera::Envelope;
use crate::error::CoverageError;
use crate::geometry::Rectangle;

/// Which boolean solver [`CoverageEngine::check`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Rectangle subtraction; correct for any input.
    #[default]
    Exact,
    /// Distance sweep; only correct when contributing candidates contain the
    /// target's light range.
    ConstrainedSweep,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Exact => write!(f, "exact"),
            Strategy::ConstrainedSweep => write!(f, "constrained-sweep"),
        }
    }
}

/// Configuration for a [`CoverageEngine`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverageConfig {
    /// Solver used by [`CoverageEngine::check`].
    pub strategy: Strategy,
    /// Upper bound on the number of candidates accepted per call.
    ///
    /// The exact solver is exponential in the worst case; callers embedding
    /// the engine in latency-sensitive paths should set this.
    pub max_candidates: Option<usize>,
}

impl CoverageConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }
}

/// Exact verdict paired with the gap diagnostic for the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment<D: Unit, L: Unit> {
    /// Verdict of the exact solver.
    pub covered: bool,
    pub report: CoverageReport<D, L>,
}

impl<D: Unit, L: Unit> Assessment<D, L> {
    /// True when the grid diagnostic's verdict differs from the exact one.
    pub fn diagnostic_disagrees(&self) -> bool {
        self.covered != self.report.is_covered()
    }
}

/// Validates inputs up front and runs the configured solver.
///
/// Every range of the target and of each candidate must satisfy
/// `min <= max`; the first violation is returned as
/// [`CoverageError::InvalidEnvelope`] and no solver runs.
///
/// # Example
///
/// ```ignore
/// use envelope_cover::coverage::{CoverageConfig, CoverageEngine, Strategy};
///
/// let engine = CoverageEngine::new(CoverageConfig::default().with_strategy(Strategy::Exact));
/// let covered = engine.check(&software_camera, &hardware_cameras)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoverageEngine {
    config: CoverageConfig,
}

impl CoverageEngine {
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Boolean coverage check using the configured [`Strategy`].
    pub fn check<D, L, T, C>(&self, target: &T, candidates: &[C]) -> Result<bool, CoverageError>
    where
        D: Unit,
        L: Unit,
        T: Envelope<D, L>,
        C: Envelope<D, L>,
    {
        let (target, candidates) = self.prepare(target, candidates)?;
        let covered = match self.config.strategy {
            Strategy::Exact => ExactSolver.is_covered(&target, &candidates),
            Strategy::ConstrainedSweep => ConstrainedSweepSolver.is_covered(&target, &candidates),
        };
        debug!(
            strategy = %self.config.strategy,
            candidates = candidates.len(),
            covered,
            "coverage check complete"
        );
        Ok(covered)
    }

    /// Runs the [`GapDiagnosticSolver`].
    pub fn diagnose<D, L, T, C>(
        &self,
        target: &T,
        candidates: &[C],
    ) -> Result<CoverageReport<D, L>, CoverageError>
    where
        D: Unit,
        L: Unit,
        T: Envelope<D, L>,
        C: Envelope<D, L>,
    {
        let (target, candidates) = self.prepare(target, candidates)?;
        let report = GapDiagnosticSolver.diagnose(&target, &candidates);
        debug!(
            solver = CoverageSolver::<D, L>::name(&GapDiagnosticSolver),
            candidates = candidates.len(),
            covered = report.is_covered(),
            distance_gaps = report.distance_gaps().len(),
            light_gaps = report.light_gaps().len(),
            uncovered_areas = report.uncovered_areas().len(),
            "coverage diagnosis complete"
        );
        Ok(report)
    }

    /// Exact verdict plus the gap diagnostic, independent of the configured
    /// strategy.
    pub fn assess<D, L, T, C>(
        &self,
        target: &T,
        candidates: &[C],
    ) -> Result<Assessment<D, L>, CoverageError>
    where
        D: Unit,
        L: Unit,
        T: Envelope<D, L>,
        C: Envelope<D, L>,
    {
        let (target, candidates) = self.prepare(target, candidates)?;
        let covered = ExactSolver.is_covered(&target, &candidates);
        let report = GapDiagnosticSolver.diagnose(&target, &candidates);
        let assessment = Assessment { covered, report };
        debug!(
            candidates = candidates.len(),
            covered,
            diagnostic_disagrees = assessment.diagnostic_disagrees(),
            "coverage assessment complete"
        );
        Ok(assessment)
    }

    /// Validates every envelope and copies out the bare rectangles.
    fn prepare<D, L, T, C>(
        &self,
        target: &T,
        candidates: &[C],
    ) -> Result<(Rectangle<D, L>, Vec<Rectangle<D, L>>), CoverageError>
    where
        D: Unit,
        L: Unit,
        T: Envelope<D, L>,
        C: Envelope<D, L>,
    {
        if let Some(limit) = self.config.max_candidates {
            if candidates.len() > limit {
                return Err(CoverageError::CandidateLimitExceeded {
                    limit,
                    actual: candidates.len(),
                });
            }
        }

        validate(target, || match target.label() {
            Some(label) => format!("target '{}'", label),
            None => "target".to_string(),
        })?;
        for (index, candidate) in candidates.iter().enumerate() {
            validate(candidate, || match candidate.label() {
                Some(label) => format!("candidate '{}'", label),
                None => format!("candidate #{}", index),
            })?;
        }

        Ok((
            *target.envelope(),
            candidates.iter().map(|c| *c.envelope()).collect(),
        ))
    }
}

fn validate<D, L, E>(envelope: &E, subject: impl FnOnce() -> String) -> Result<(), CoverageError>
where
    D: Unit,
    L: Unit,
    E: Envelope<D, L>,
{
    match envelope.envelope().first_invalid_axis() {
        Some((axis, min, max)) => Err(CoverageError::InvalidEnvelope {
            subject: subject(),
            axis,
            min,
            max,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::SoftwareCamera;
    use crate::geometry::{Axis, Range};
    use crate::test_support::{camera, rect, Distance, Light, TestRect};
    use qtty::Quantity;

    fn inverted_light(d_min: f64, d_max: f64) -> TestRect {
        Rectangle::new(
            Range::from_f64(d_min, d_max).unwrap(),
            Range::new_unchecked(Quantity::new(800.0), Quantity::new(1.0)),
        )
    }

    #[test]
    fn default_config_is_exact_and_unbounded() {
        let cfg = CoverageConfig::default();
        assert_eq!(cfg.strategy, Strategy::Exact);
        assert_eq!(cfg.max_candidates, None);
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = CoverageConfig::default()
            .with_strategy(Strategy::ConstrainedSweep)
            .with_max_candidates(16);
        assert_eq!(cfg.strategy, Strategy::ConstrainedSweep);
        assert_eq!(cfg.max_candidates, Some(16));
        assert_eq!(CoverageEngine::new(cfg.clone()).config(), &cfg);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(Strategy::Exact.to_string(), "exact");
        assert_eq!(Strategy::ConstrainedSweep.to_string(), "constrained-sweep");
    }

    #[test]
    fn check_dispatches_on_strategy() {
        // Jointly covered, but neither candidate spans the full light range.
        let target = rect(0.0, 10.0, 0.0, 10.0);
        let candidates = vec![rect(0.0, 10.0, 0.0, 5.0), rect(0.0, 10.0, 5.0, 10.0)];

        let exact = CoverageEngine::default();
        assert!(exact.check(&target, &candidates).unwrap());

        let sweep =
            CoverageEngine::new(CoverageConfig::default().with_strategy(Strategy::ConstrainedSweep));
        assert!(!sweep.check(&target, &candidates).unwrap());
    }

    #[test]
    fn check_accepts_cameras() {
        let spec = SoftwareCamera::new("inspection", rect(1.0, 5.0, 4.0, 6.0));
        let cameras = vec![
            camera("near", 0.0, 3.0, 0.0, 10.0),
            camera("far", 3.0, 6.0, 0.0, 10.0),
        ];
        let engine = CoverageEngine::default();
        assert!(engine.check(&spec, &cameras).unwrap());
    }

    #[test]
    fn invalid_candidate_is_rejected_with_label() {
        let target = rect(0.0, 10.0, 1.0, 1000.0);
        let cameras = vec![
            camera("ok", 0.0, 10.0, 1.0, 1000.0),
            crate::camera::HardwareCamera::new("broken", inverted_light(0.0, 5.0)),
        ];
        let err = CoverageEngine::default()
            .check(&target, &cameras)
            .unwrap_err();
        assert_eq!(
            err,
            CoverageError::InvalidEnvelope {
                subject: "candidate 'broken'".to_string(),
                axis: Axis::Light,
                min: 800.0,
                max: 1.0,
            }
        );
    }

    #[test]
    fn invalid_unlabelled_candidate_uses_index() {
        let target = rect(0.0, 10.0, 1.0, 1000.0);
        let candidates = vec![rect(0.0, 10.0, 1.0, 1000.0), inverted_light(0.0, 5.0)];
        let err = CoverageEngine::default()
            .diagnose(&target, &candidates)
            .unwrap_err();
        match err {
            CoverageError::InvalidEnvelope { subject, .. } => assert_eq!(subject, "candidate #1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_target_is_rejected_before_solving() {
        let target = inverted_light(0.0, 10.0);
        let err = CoverageEngine::default()
            .check::<Distance, Light, _, TestRect>(&target, &[])
            .unwrap_err();
        assert!(matches!(
            err,
            CoverageError::InvalidEnvelope { ref subject, axis: Axis::Light, .. } if subject == "target"
        ));
    }

    #[test]
    fn candidate_limit_is_enforced() {
        let target = rect(0.0, 10.0, 0.0, 10.0);
        let candidates = vec![rect(0.0, 10.0, 0.0, 10.0); 3];
        let engine = CoverageEngine::new(CoverageConfig::default().with_max_candidates(2));
        assert_eq!(
            engine.check(&target, &candidates),
            Err(CoverageError::CandidateLimitExceeded {
                limit: 2,
                actual: 3
            })
        );
        assert!(engine.check(&target, &candidates[..2]).unwrap());
    }

    #[test]
    fn assess_flags_grid_disagreement() {
        // A hole at [4, 6] × [4, 8] that every grid cell touches a candidate around.
        let target = rect(0.0, 10.0, 0.0, 10.0);
        let candidates = vec![
            rect(0.0, 10.0, 0.0, 4.0),
            rect(0.0, 4.0, 4.0, 10.0),
            rect(6.0, 10.0, 4.0, 10.0),
            rect(4.0, 6.0, 8.0, 10.0),
        ];
        let assessment = CoverageEngine::default()
            .assess(&target, &candidates)
            .unwrap();
        assert!(!assessment.covered);
        assert!(assessment.report.is_covered());
        assert!(assessment.diagnostic_disagrees());
    }

    #[test]
    fn assess_agrees_on_self_cover() {
        let target = rect(0.1, 10.0, 1.0, 1000.0);
        let assessment = CoverageEngine::default().assess(&target, &[target]).unwrap();
        assert!(assessment.covered);
        assert!(!assessment.diagnostic_disagrees());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let cfg = CoverageConfig::default()
            .with_strategy(Strategy::ConstrainedSweep)
            .with_max_candidates(32);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["strategy"], "ConstrainedSweep");
        assert_eq!(json["max_candidates"], 32);

        let back: CoverageConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, cfg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fields_default_when_missing() {
        let cfg: CoverageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CoverageConfig::default());

        let cfg: CoverageConfig = serde_json::from_str(r#"{"max_candidates": 4}"#).unwrap();
        assert_eq!(cfg.strategy, Strategy::Exact);
        assert_eq!(cfg.max_candidates, Some(4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn strategy_uses_variant_names() {
        assert_eq!(serde_json::to_string(&Strategy::Exact).unwrap(), r#""Exact""#);
        let parsed: Strategy = serde_json::from_str(r#""ConstrainedSweep""#).unwrap();
        assert_eq!(parsed, Strategy::ConstrainedSweep);
        assert!(serde_json::from_str::<Strategy>(r#""constrained-sweep""#).is_err());
    }
}
