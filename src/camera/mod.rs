//! Sensing envelopes: hardware cameras, the software target, and the
//! [`Envelope`] trait that lets solvers accept either.
//!
//! A hardware camera describes the (distance, light) window a physical sensor
//! can operate in.  A software camera describes the window a product
//! requires.  Both are read-only for the duration of a verification call.

mod hardware;
mod software;
mod traits;

pub use hardware::HardwareCamera;
pub use software::SoftwareCamera;
pub use traits::Envelope;
