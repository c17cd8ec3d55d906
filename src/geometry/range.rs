//! Closed scalar interval on one axis of the coverage plane.

use std::fmt::Display;

use qtty::{Quantity, Unit};

use super::{approx_eq, approx_le};
use crate::error::CoverageError;

/// Closed range `[min, max]` on a single axis.
///
/// Ranges built through [`Range::new`] or [`Range::from_f64`] are always valid.
/// [`Range::new_unchecked`] accepts raw bounds as supplied by a caller; such
/// ranges are checked with [`Range::is_valid`] before any solver sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<U: Unit> {
    min: Quantity<U>,
    max: Quantity<U>,
}

impl<U: Unit> Range<U> {
    /// Creates range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::InvalidRange`] if `min > max` or either bound is NaN.
    pub fn new(min: Quantity<U>, max: Quantity<U>) -> Result<Self, CoverageError> {
        let range = Self::new_unchecked(min, max);
        if range.is_valid() {
            Ok(range)
        } else {
            Err(CoverageError::InvalidRange {
                min: min.value(),
                max: max.value(),
            })
        }
    }

    pub fn from_f64(min: f64, max: f64) -> Result<Self, CoverageError> {
        Self::new(Quantity::<U>::new(min), Quantity::<U>::new(max))
    }

    /// Creates a range without checking `min <= max`.
    pub const fn new_unchecked(min: Quantity<U>, max: Quantity<U>) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> Quantity<U> {
        self.min
    }

    pub const fn max(&self) -> Quantity<U> {
        self.max
    }

    pub fn span(&self) -> Quantity<U> {
        self.max - self.min
    }

    /// Structural check: `min <= max`, compared exactly.
    pub const fn is_valid(&self) -> bool {
        self.min.value() <= self.max.value()
    }

    /// Returns true if `position` ∈ `[min, max]` within tolerance.
    pub fn contains(&self, position: Quantity<U>) -> bool {
        approx_le(self.min.value(), position.value()) && approx_le(position.value(), self.max.value())
    }

    /// Returns true if `other` lies entirely inside this range within tolerance.
    pub fn contains_range(&self, other: &Range<U>) -> bool {
        approx_le(self.min.value(), other.min.value())
            && approx_le(other.max.value(), self.max.value())
    }

    /// Intersection of two ranges, or `None` when they do not meet.
    ///
    /// Ranges that touch intersect in a single point.  Ranges that miss each
    /// other by less than the tolerance intersect in the midpoint of the gap,
    /// which lies within half the tolerance of both.
    pub fn intersect(&self, other: &Range<U>) -> Option<Range<U>> {
        let min = if self.min.value() > other.min.value() {
            self.min
        } else {
            other.min
        };
        let max = if self.max.value() < other.max.value() {
            self.max
        } else {
            other.max
        };
        if !approx_le(min.value(), max.value()) {
            return None;
        }
        if min.value() > max.value() {
            let mid = Quantity::<U>::new((min.value() + max.value()) / 2.0);
            Some(Range::new_unchecked(mid, mid))
        } else {
            Some(Range::new_unchecked(min, max))
        }
    }

    /// Clamps both bounds into `bounds`.
    pub(crate) fn clamp_into(&self, bounds: &Range<U>) -> Range<U> {
        let clamp = |q: Quantity<U>| {
            if q.value() < bounds.min.value() {
                bounds.min
            } else if q.value() > bounds.max.value() {
                bounds.max
            } else {
                q
            }
        };
        Range::new_unchecked(clamp(self.min), clamp(self.max))
    }

    /// Bound-wise equality within tolerance.
    pub fn approx_eq(&self, other: &Range<U>) -> bool {
        approx_eq(self.min.value(), other.min.value()) && approx_eq(self.max.value(), other.max.value())
    }
}

impl<U: Unit> Display for Range<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min.value(), self.max.value())
    }
}

// =============================================================================
// Range Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Range<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Range", 2)?;
        s.serialize_field("min", &self.min.value())?;
        s.serialize_field("max", &self.max.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Range<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: f64,
            max: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_f64(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}
