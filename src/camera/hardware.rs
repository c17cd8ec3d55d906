//! Hardware camera: one physical sensing envelope.

use qtty::Unit;

use super::Envelope;
use crate::geometry::Rectangle;
use crate::Id;

/// A physical camera and the (distance, light) window it can operate in.
///
/// Each camera is assigned a unique auto-generated ID upon creation; users
/// identify cameras by their human-readable label, read through
/// [`Envelope::label`] together with the envelope itself.
///
/// # Example
///
/// ```ignore
/// use envelope_cover::camera::{Envelope, HardwareCamera};
/// use envelope_cover::geometry::Rectangle;
///
/// let macro_cam = HardwareCamera::new(
///     "macro-cam",
///     Rectangle::from_f64(0.1, 0.5, 10.0, 1000.0)?,
/// );
/// println!("ID: {}, label: {:?}", macro_cam.id(), macro_cam.label());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct HardwareCamera<D: Unit, L: Unit> {
    #[cfg_attr(feature = "serde", serde(default = "crate::generate_id"))]
    id: Id,
    label: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    envelope: Rectangle<D, L>,
}

impl<D: Unit, L: Unit> HardwareCamera<D, L> {
    /// Creates a camera with the given label and an auto-generated unique ID.
    pub fn new(label: impl Into<String>, envelope: Rectangle<D, L>) -> Self {
        Self {
            id: crate::generate_id(),
            label: label.into(),
            envelope,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<D: Unit, L: Unit> Envelope<D, L> for HardwareCamera<D, L> {
    fn envelope(&self) -> &Rectangle<D, L> {
        &self.envelope
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }
}
