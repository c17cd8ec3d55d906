//! Axis-aligned box in (distance, light) space.

use std::fmt::Display;

use qtty::Unit;

use super::range::Range;
use super::{strictly_lt, Axis};
use crate::error::CoverageError;

/// Axis-aligned rectangle formed by a distance range and a light range.
///
/// The two axes carry independent units, `D` for distance and `L` for light.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "", rename_all = "camelCase"))]
pub struct Rectangle<D: Unit, L: Unit> {
    distance_range: Range<D>,
    light_range: Range<L>,
}

impl<D: Unit, L: Unit> Rectangle<D, L> {
    pub const fn new(distance_range: Range<D>, light_range: Range<L>) -> Self {
        Self {
            distance_range,
            light_range,
        }
    }

    /// Builds a rectangle from raw bounds, validating both axes.
    pub fn from_f64(
        distance_min: f64,
        distance_max: f64,
        light_min: f64,
        light_max: f64,
    ) -> Result<Self, CoverageError> {
        Ok(Self::new(
            Range::from_f64(distance_min, distance_max)?,
            Range::from_f64(light_min, light_max)?,
        ))
    }

    pub const fn distance_range(&self) -> Range<D> {
        self.distance_range
    }

    pub const fn light_range(&self) -> Range<L> {
        self.light_range
    }

    /// Both axes satisfy `min <= max`.
    pub const fn is_valid(&self) -> bool {
        self.distance_range.is_valid() && self.light_range.is_valid()
    }

    /// First axis whose range is inverted, with its raw bounds.
    pub(crate) fn first_invalid_axis(&self) -> Option<(Axis, f64, f64)> {
        if !self.distance_range.is_valid() {
            return Some((
                Axis::Distance,
                self.distance_range.min().value(),
                self.distance_range.max().value(),
            ));
        }
        if !self.light_range.is_valid() {
            return Some((
                Axis::Light,
                self.light_range.min().value(),
                self.light_range.max().value(),
            ));
        }
        None
    }

    /// Area in `D·L` units.
    pub fn area(&self) -> f64 {
        self.distance_range.span().value() * self.light_range.span().value()
    }

    pub fn contains_rect(&self, other: &Rectangle<D, L>) -> bool {
        self.distance_range.contains_range(&other.distance_range)
            && self.light_range.contains_range(&other.light_range)
    }

    /// Intersection of both axes, or `None` if either axis misses.
    pub fn intersect(&self, other: &Rectangle<D, L>) -> Option<Rectangle<D, L>> {
        let distance = self.distance_range.intersect(&other.distance_range)?;
        let light = self.light_range.intersect(&other.light_range)?;
        Some(Rectangle::new(distance, light))
    }

    /// Decomposes `self` minus `cut` into at most four disjoint rectangles.
    ///
    /// Left and right strips span the full light range of `self`; bottom and
    /// top strips span only the distance range of the intersection.  Strips
    /// thinner than the tolerance are not emitted, and no strip extends past
    /// `self`.  If `cut` misses `self`, the result is `[self]`.
    pub fn subtract(&self, cut: &Rectangle<D, L>) -> Vec<Rectangle<D, L>> {
        let Some(isect) = self.intersect(cut) else {
            return vec![*self];
        };

        let base_d = self.distance_range;
        let base_l = self.light_range;
        // A near-miss intersection may sit just outside `self`.
        let cut_d = isect.distance_range.clamp_into(&base_d);
        let cut_l = isect.light_range.clamp_into(&base_l);

        let mut pieces = Vec::with_capacity(4);

        // Left
        if strictly_lt(base_d.min().value(), cut_d.min().value()) {
            pieces.push(Rectangle::new(
                Range::new_unchecked(base_d.min(), cut_d.min()),
                base_l,
            ));
        }

        // Right
        if strictly_lt(cut_d.max().value(), base_d.max().value()) {
            pieces.push(Rectangle::new(
                Range::new_unchecked(cut_d.max(), base_d.max()),
                base_l,
            ));
        }

        // Bottom
        if strictly_lt(base_l.min().value(), cut_l.min().value()) {
            pieces.push(Rectangle::new(
                cut_d,
                Range::new_unchecked(base_l.min(), cut_l.min()),
            ));
        }

        // Top
        if strictly_lt(cut_l.max().value(), base_l.max().value()) {
            pieces.push(Rectangle::new(
                cut_d,
                Range::new_unchecked(cut_l.max(), base_l.max()),
            ));
        }

        pieces
    }

    /// Axis-wise equality within tolerance.
    pub fn approx_eq(&self, other: &Rectangle<D, L>) -> bool {
        self.distance_range.approx_eq(&other.distance_range)
            && self.light_range.approx_eq(&other.light_range)
    }
}

impl<D: Unit, L: Unit> Display for Rectangle<D, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "distance {} × light {}",
            self.distance_range, self.light_range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{rect, Distance, Light};
    use qtty::Quantity;

    fn total_area(rects: &[Rectangle<Distance, Light>]) -> f64 {
        rects.iter().map(Rectangle::area).sum()
    }

    fn overlap_area(a: &Rectangle<Distance, Light>, b: &Rectangle<Distance, Light>) -> f64 {
        a.intersect(b).map(|r| r.area()).unwrap_or(0.0)
    }

    #[test]
    fn test_from_f64_validates_both_axes() {
        assert!(Rectangle::<Distance, Light>::from_f64(0.0, 1.0, 0.0, 1.0).is_ok());
        assert!(Rectangle::<Distance, Light>::from_f64(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Rectangle::<Distance, Light>::from_f64(0.0, 1.0, 5.0, 4.0).is_err());
    }

    #[test]
    fn test_first_invalid_axis() {
        let bad_light = Rectangle::<Distance, Light>::new(
            Range::from_f64(0.0, 1.0).unwrap(),
            Range::new_unchecked(Quantity::new(9.0), Quantity::new(3.0)),
        );
        assert!(!bad_light.is_valid());
        assert_eq!(bad_light.first_invalid_axis(), Some((Axis::Light, 9.0, 3.0)));
        assert_eq!(rect(0.0, 1.0, 0.0, 1.0).first_invalid_axis(), None);
    }

    #[test]
    fn test_intersect_requires_both_axes() {
        let a = rect(0.0, 10.0, 0.0, 10.0);
        let b = rect(5.0, 15.0, 20.0, 30.0);
        assert!(a.intersect(&b).is_none());

        let c = rect(5.0, 15.0, 5.0, 15.0);
        let i = a.intersect(&c).unwrap();
        assert!(i.approx_eq(&rect(5.0, 10.0, 5.0, 10.0)));
        assert_eq!(c.intersect(&a), Some(i));
    }

    #[test]
    fn test_subtract_disjoint_returns_base() {
        let base = rect(0.0, 10.0, 0.0, 10.0);
        let pieces = base.subtract(&rect(20.0, 30.0, 0.0, 10.0));
        assert_eq!(pieces, vec![base]);
    }

    #[test]
    fn test_subtract_covering_cut_leaves_nothing() {
        let base = rect(1.0, 5.0, 4.0, 6.0);
        assert!(base.subtract(&rect(0.0, 10.0, 0.0, 10.0)).is_empty());
        assert!(base.subtract(&base).is_empty());
    }

    #[test]
    fn test_subtract_centered_cut_gives_four_pieces() {
        let base = rect(0.0, 10.0, 0.0, 10.0);
        let pieces = base.subtract(&rect(4.0, 6.0, 4.0, 6.0));
        assert_eq!(
            pieces,
            vec![
                rect(0.0, 4.0, 0.0, 10.0),
                rect(6.0, 10.0, 0.0, 10.0),
                rect(4.0, 6.0, 0.0, 4.0),
                rect(4.0, 6.0, 6.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_subtract_corner_cut_gives_two_pieces() {
        let base = rect(0.0, 10.0, 0.0, 10.0);
        let pieces = base.subtract(&rect(5.0, 20.0, 5.0, 20.0));
        assert_eq!(
            pieces,
            vec![rect(0.0, 5.0, 0.0, 10.0), rect(5.0, 10.0, 0.0, 5.0)]
        );
    }

    #[test]
    fn test_subtract_edge_strip_gives_one_piece() {
        let base = rect(0.0, 10.0, 0.0, 10.0);
        let pieces = base.subtract(&rect(-1.0, 11.0, 8.0, 11.0));
        assert_eq!(pieces, vec![rect(0.0, 10.0, 0.0, 8.0)]);
    }

    #[test]
    fn test_subtract_touching_cut_removes_nothing() {
        let base = rect(0.0, 5.0, 0.0, 10.0);
        let pieces = base.subtract(&rect(5.0, 10.0, 0.0, 10.0));
        assert_eq!(pieces, vec![base]);
    }

    #[test]
    fn test_subtract_near_miss_stays_inside_base() {
        let eps = crate::geometry::EPSILON;
        let base = rect(0.0, 1.0, 0.0, 1.0);
        let pieces = base.subtract(&rect(1.0 + eps / 2.0, 2.0, 0.0, 1.0));
        assert_eq!(pieces, vec![base]);

        let pieces = base.subtract(&rect(0.0, 1.0, 1.0 + eps / 2.0, 2.0));
        assert_eq!(pieces, vec![base]);
    }

    #[test]
    fn test_subtract_reconstructs_base_area() {
        let base = rect(0.0, 10.0, 0.0, 10.0);
        let cut = rect(2.0, 7.0, 3.0, 12.0);
        let pieces = base.subtract(&cut);
        let isect = base.intersect(&cut).unwrap();

        let reconstructed = total_area(&pieces) + isect.area();
        assert!((reconstructed - base.area()).abs() < 1e-9);

        for (i, a) in pieces.iter().enumerate() {
            assert!(overlap_area(a, &isect) < 1e-9);
            for b in &pieces[i + 1..] {
                assert!(overlap_area(a, b) < 1e-9);
            }
        }
    }

    #[test]
    fn test_contains_rect() {
        let outer = rect(0.0, 10.0, 0.0, 10.0);
        assert!(outer.contains_rect(&rect(1.0, 9.0, 0.0, 10.0)));
        assert!(!outer.contains_rect(&rect(1.0, 11.0, 0.0, 10.0)));
    }

    #[test]
    fn test_display() {
        let r = rect(0.1, 10.0, 1.0, 1000.0);
        assert_eq!(r.to_string(), "distance [0.100, 10.000] × light [1.000, 1000.000]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_camel_case_axes() {
        let r = rect(0.1, 10.0, 1.0, 1000.0);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["distanceRange"]["min"], 0.1);
        assert_eq!(json["lightRange"]["max"], 1000.0);

        let back: Rectangle<Distance, Light> = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_inverted_axis() {
        let json = r#"{
            "distanceRange": {"min": 0.0, "max": 1.0},
            "lightRange": {"min": 9.0, "max": 3.0}
        }"#;
        let result: Result<Rectangle<Distance, Light>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
