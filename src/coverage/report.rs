//! Diagnostic result of a coverage check.

use std::fmt::Display;

use qtty::Unit;

use crate::geometry::{Range, Rectangle};

/// Verdict plus the parts of the target found uncovered.
///
/// `covered` holds exactly when all three gap lists are empty.  It is
/// recomputed on deserialization; a serialized `covered` flag is ignored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "", rename_all = "camelCase"))]
pub struct CoverageReport<D: Unit, L: Unit> {
    covered: bool,
    distance_gaps: Vec<Range<D>>,
    light_gaps: Vec<Range<L>>,
    uncovered_areas: Vec<Rectangle<D, L>>,
}

impl<D: Unit, L: Unit> CoverageReport<D, L> {
    pub fn new(
        distance_gaps: Vec<Range<D>>,
        light_gaps: Vec<Range<L>>,
        uncovered_areas: Vec<Rectangle<D, L>>,
    ) -> Self {
        let covered =
            distance_gaps.is_empty() && light_gaps.is_empty() && uncovered_areas.is_empty();
        Self {
            covered,
            distance_gaps,
            light_gaps,
            uncovered_areas,
        }
    }

    pub fn is_covered(&self) -> bool {
        self.covered
    }

    /// Parts of the target distance range no candidate reaches.
    pub fn distance_gaps(&self) -> &[Range<D>] {
        &self.distance_gaps
    }

    /// Parts of the target light range no candidate reaches.
    pub fn light_gaps(&self) -> &[Range<L>] {
        &self.light_gaps
    }

    /// Grid cells that no single candidate touches.
    pub fn uncovered_areas(&self) -> &[Rectangle<D, L>] {
        &self.uncovered_areas
    }
}

impl<D: Unit, L: Unit> Display for CoverageReport<D, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CoverageReport {{")?;
        writeln!(f, "  Covered: {}", self.covered)?;

        if !self.distance_gaps.is_empty() {
            writeln!(f, "  Distance gaps:")?;
            for (i, gap) in self.distance_gaps.iter().enumerate() {
                writeln!(f, "    [{}] {}", i, gap)?;
            }
        }
        if !self.light_gaps.is_empty() {
            writeln!(f, "  Light gaps:")?;
            for (i, gap) in self.light_gaps.iter().enumerate() {
                writeln!(f, "    [{}] {}", i, gap)?;
            }
        }
        if !self.uncovered_areas.is_empty() {
            writeln!(f, "  Uncovered areas:")?;
            for (i, area) in self.uncovered_areas.iter().enumerate() {
                writeln!(f, "    [{}] {}", i, area)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Unit, L: Unit> serde::Deserialize<'de> for CoverageReport<D, L> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound = "", rename_all = "camelCase")]
        struct Raw<D: Unit, L: Unit> {
            distance_gaps: Vec<Range<D>>,
            light_gaps: Vec<Range<L>>,
            uncovered_areas: Vec<Rectangle<D, L>>,
        }

        let raw = Raw::<D, L>::deserialize(deserializer)?;
        Ok(Self::new(raw.distance_gaps, raw.light_gaps, raw.uncovered_areas))
    }
}
