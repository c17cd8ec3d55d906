//! Range and rectangle algebra over the (distance, light) plane.
//!
//! A [`Range`] is a closed interval on one axis; a [`Rectangle`] pairs a
//! distance range with a light range.  Both are generic over [`qtty::Unit`]
//! so that each axis keeps its own physical dimension.
//!
//! All boundary comparisons go through the tolerance helpers in this module,
//! which share the single [`EPSILON`] constant.

mod range;
mod range_set;
mod rectangle;

use std::fmt::Display;

pub use range::Range;
pub use range_set::{find_gaps, merge, RangeSet};
pub use rectangle::Rectangle;

/// Absolute tolerance for every boundary comparison in the crate.
pub const EPSILON: f64 = 1e-9;

/// `a <= b` within [`EPSILON`].
#[inline]
pub(crate) fn approx_le(a: f64, b: f64) -> bool {
    a <= b + EPSILON
}

/// `a < b` by more than [`EPSILON`].
#[inline]
pub(crate) fn strictly_lt(a: f64, b: f64) -> bool {
    a < b - EPSILON
}

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// One of the two axes of the coverage plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Distance,
    Light,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Distance => write!(f, "distance"),
            Axis::Light => write!(f, "light"),
        }
    }
}
