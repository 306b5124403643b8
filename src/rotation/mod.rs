//! Whole-file single-bit rotation.
//!
//! This is the domain core: it knows how to rotate the bit string of one
//! byte stream into another in constant memory, and nothing else. Paths,
//! progress reporting, and diagnostics live in the outer layers.
pub mod direction;
pub mod error;
pub mod rotator;

pub use direction::Direction;
pub use error::RotationError;
pub use rotator::{rotate, rotate_left, rotate_right};
