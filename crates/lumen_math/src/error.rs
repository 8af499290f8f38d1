//! Error types for contract violations in the math core.

use thiserror::Error;

/// Errors produced by checked accessors and strict-mode constructors.
///
/// Shape mismatches and unsupported operand types cannot occur at runtime:
/// every vector and matrix carries its dimension in its type, so mixing
/// shapes or operand kinds is rejected by the compiler instead of reported
/// here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Component or element access outside the fixed dimensions.
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// The offending flat index.
        index: usize,
        /// Total number of elements in the receiver.
        len: usize,
    },

    /// Geometrically degenerate input passed to a strict-mode operation
    /// such as [`Vec3::try_normalize`](crate::Vec3::try_normalize) or
    /// [`transform::try_look_at`](crate::transform::try_look_at).
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),
}
