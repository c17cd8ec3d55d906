//! A canonical container for merged, sorted ranges.
//!
//! [`RangeSet`] wraps a `Vec<Range<U>>` and keeps it in canonical form:
//! sorted by `min`, with overlapping ranges and ranges that touch within
//! [`EPSILON`](super::EPSILON) coalesced.  Read access goes through
//! `Deref<Target = [Range<U>]>`.

use std::ops::Deref;

use qtty::Unit;

use super::range::Range;
use super::{approx_le, strictly_lt};

/// Sorted, non-overlapping ranges on a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSet<U: Unit>(Vec<Range<U>>);

impl<U: Unit> RangeSet<U> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sorts by `min` and coalesces overlapping / touching ranges in place.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0
            .sort_by(|a, b| a.min().value().total_cmp(&b.min().value()));
        let mut merged: Vec<Range<U>> = Vec::with_capacity(self.0.len());
        for range in self.0.drain(..) {
            if let Some(last) = merged.last_mut() {
                if approx_le(range.min().value(), last.max().value()) {
                    if range.max().value() > last.max().value() {
                        *last = Range::new_unchecked(last.min(), range.max());
                    }
                    continue;
                }
            }
            merged.push(range);
        }
        self.0 = merged;
    }

    /// Inserts a range, re-establishing canonical form.
    pub fn push(&mut self, range: Range<U>) {
        self.0.push(range);
        self.normalize();
    }

    /// Returns the parts of `required` that no range in the set covers.
    ///
    /// Each merged range is clamped to `required` before the walk, so
    /// coverage lying outside `required` never opens or widens a gap.
    pub fn gaps_within(&self, required: &Range<U>) -> Vec<Range<U>> {
        let mut gaps = Vec::new();
        let mut cursor = required.min();

        for covered in self.0.iter().filter_map(|r| r.intersect(required)) {
            if strictly_lt(cursor.value(), covered.min().value()) {
                gaps.push(Range::new_unchecked(cursor, covered.min()));
            }
            if covered.max().value() > cursor.value() {
                cursor = covered.max();
            }
        }

        if strictly_lt(cursor.value(), required.max().value()) {
            gaps.push(Range::new_unchecked(cursor, required.max()));
        }

        gaps
    }

    pub fn into_inner(self) -> Vec<Range<U>> {
        self.0
    }

    pub fn as_slice(&self) -> &[Range<U>] {
        &self.0
    }
}

impl<U: Unit> Default for RangeSet<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> Deref for RangeSet<U> {
    type Target = [Range<U>];

    fn deref(&self) -> &[Range<U>] {
        &self.0
    }
}

impl<U: Unit> From<Vec<Range<U>>> for RangeSet<U> {
    fn from(ranges: Vec<Range<U>>) -> Self {
        let mut set = Self(ranges);
        set.normalize();
        set
    }
}

impl<U: Unit> FromIterator<Range<U>> for RangeSet<U> {
    fn from_iter<I: IntoIterator<Item = Range<U>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Merges ranges into a minimal, sorted, non-overlapping cover.
pub fn merge<U: Unit>(ranges: impl IntoIterator<Item = Range<U>>) -> Vec<Range<U>> {
    ranges.into_iter().collect::<RangeSet<U>>().into_inner()
}

/// Gaps in `required` left uncovered by the union of `covered`.
pub fn find_gaps<U: Unit>(
    required: &Range<U>,
    covered: impl IntoIterator<Item = Range<U>>,
) -> Vec<Range<U>> {
    covered
        .into_iter()
        .collect::<RangeSet<U>>()
        .gaps_within(required)
}
