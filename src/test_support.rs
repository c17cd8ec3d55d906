//! Shared fixtures for unit tests.

use qtty::{Meter, Second};

use crate::camera::HardwareCamera;
use crate::geometry::{Range, Rectangle};

pub(crate) type Distance = Meter;
// qtty has no photometric unit; the light axis borrows a time unit in tests.
pub(crate) type Light = Second;

pub(crate) type TestRect = Rectangle<Distance, Light>;
pub(crate) type TestCamera = HardwareCamera<Distance, Light>;

pub(crate) fn rect(d_min: f64, d_max: f64, l_min: f64, l_max: f64) -> TestRect {
    Rectangle::from_f64(d_min, d_max, l_min, l_max).unwrap()
}

pub(crate) fn camera(label: &str, d_min: f64, d_max: f64, l_min: f64, l_max: f64) -> TestCamera {
    HardwareCamera::new(label, rect(d_min, d_max, l_min, l_max))
}

pub(crate) fn dr(min: f64, max: f64) -> Range<Distance> {
    Range::from_f64(min, max).unwrap()
}

pub(crate) fn lr(min: f64, max: f64) -> Range<Light> {
    Range::from_f64(min, max).unwrap()
}
