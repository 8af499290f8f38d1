//! # Lumen Math
//!
//! Fixed-dimension vector and matrix types plus the transform builders a
//! 3D renderer needs: translation, scale, axis rotations, axis-angle
//! rotation via Rodrigues' formula, a right-handed look-at view matrix and
//! an OpenGL-convention perspective projection.
//!
//! ## Features
//!
//! - **Value types**: `Vec2`/`Vec3`/`Vec4` and `Mat2`/`Mat3`/`Mat4` are
//!   `Copy` structs over flat `f32` arrays (row-major for matrices)
//! - **Copy and in-place forms**: every arithmetic op has a `*_inp`
//!   variant that mutates the receiver, for allocation-free animation and
//!   controller loops
//! - **Swizzles**: arity-parameterized accessors reading any permutation
//!   (with repetition) of named components as a new vector
//! - **GPU-ready**: `#[repr(C)]` + `bytemuck::Pod`, so matrices can be
//!   uploaded to shader uniforms as raw bytes
//! - **Optional serde**: enable the `serde` feature to derive
//!   `Serialize`/`Deserialize` for all types
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen_math::prelude::*;
//!
//! let eye = Vec3::new(0.0, 2.0, 5.0);
//! let view = transform::look_at(eye, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
//! let proj = transform::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! // what a renderer would upload for its camera uniform
//! let view_proj: [f32; 16] = proj.multiply(&view).to_array();
//! assert_eq!(view_proj.len(), 16);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod error;
pub mod mat;
pub mod scalar;
pub mod transform;
pub mod vec;

pub use error::MathError;
pub use mat::{Mat2, Mat3, Mat4};
pub use vec::{Axis, Vec2, Vec3, Vec4};

/// Common imports for renderer and controller code
pub mod prelude {
    pub use crate::{
        error::MathError,
        mat::{Mat2, Mat3, Mat4},
        scalar,
        transform,
        vec::{Axis, Vec2, Vec3, Vec4},
    };
}
