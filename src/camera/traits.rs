//! Envelope trait definition.

use qtty::Unit;

use crate::geometry::Rectangle;

/// Anything that occupies an axis-aligned region of the coverage plane.
///
/// Implemented for bare [`Rectangle`]s as well as for the camera types, so
/// the coverage engine can be fed either.
///
/// # Example
///
/// ```ignore
/// use envelope_cover::camera::Envelope;
/// use envelope_cover::geometry::Rectangle;
///
/// #[derive(Debug)]
/// struct Lens {
///     model: String,
///     window: Rectangle<Meter, Lux>,
/// }
///
/// impl Envelope<Meter, Lux> for Lens {
///     fn envelope(&self) -> &Rectangle<Meter, Lux> { &self.window }
///     fn label(&self) -> Option<&str> { Some(&self.model) }
/// }
/// ```
pub trait Envelope<D: Unit, L: Unit> {
    /// The region this envelope spans.
    fn envelope(&self) -> &Rectangle<D, L>;

    /// Human-readable label used in diagnostics and error messages.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl<D: Unit, L: Unit> Envelope<D, L> for Rectangle<D, L> {
    fn envelope(&self) -> &Rectangle<D, L> {
        self
    }
}

impl<D: Unit, L: Unit, T: Envelope<D, L> + ?Sized> Envelope<D, L> for &T {
    fn envelope(&self) -> &Rectangle<D, L> {
        (**self).envelope()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}
