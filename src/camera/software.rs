//! Software camera: the operating envelope a product requires.

use qtty::Unit;

use super::Envelope;
use crate::geometry::Rectangle;

/// Required (distance, light) operating window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct SoftwareCamera<D: Unit, L: Unit> {
    label: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    required: Rectangle<D, L>,
}

impl<D: Unit, L: Unit> SoftwareCamera<D, L> {
    pub fn new(label: impl Into<String>, required: Rectangle<D, L>) -> Self {
        Self {
            label: label.into(),
            required,
        }
    }

    pub const fn required(&self) -> &Rectangle<D, L> {
        &self.required
    }
}

impl<D: Unit, L: Unit> Envelope<D, L> for SoftwareCamera<D, L> {
    fn envelope(&self) -> &Rectangle<D, L> {
        &self.required
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }
}
