//! Fixed-dimension square matrix types for 3D rendering.
//!
//! [`Mat2`], [`Mat3`] and [`Mat4`] store their elements as a flat
//! **row-major** `f32` array. Multiplication is split into statically
//! typed operations: [`Mat4::scale`] for scalars, [`Mat4::multiply`] for
//! matrices and [`Mat4::apply`] for vectors, so an unsupported operand is
//! a compile error rather than a runtime failure.

use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use crate::error::MathError;
use crate::vec::{Vec2, Vec3, Vec4};

/// 2x2 matrix, row-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat2 {
    data: [f32; 4],
}

/// 3x3 matrix, row-major. Used for rotation-only transforms before lifting
/// into homogeneous form with [`Mat4::from_mat3`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat3 {
    data: [f32; 9],
}

/// 4x4 homogeneous matrix, row-major.
///
/// [`Self::to_array`] and [`Self::as_slice`] expose the elements exactly as
/// stored, row-major; a renderer whose uniform convention is column-major
/// should upload `transpose()` instead.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat4 {
    data: [f32; 16],
}

// Flat f32 payloads with no padding, safe to upload as raw bytes.
unsafe impl bytemuck::Zeroable for Mat2 {}
unsafe impl bytemuck::Pod for Mat2 {}
unsafe impl bytemuck::Zeroable for Mat3 {}
unsafe impl bytemuck::Pod for Mat3 {}
unsafe impl bytemuck::Zeroable for Mat4 {}
unsafe impl bytemuck::Pod for Mat4 {}

macro_rules! impl_mat {
    ($Mat:ident, $Vec:ident, $n:expr, $nn:expr) => {
        impl $Mat {
            /// Number of rows and columns.
            pub const DIM: usize = $n;

            /// Matrix from a flat row-major array.
            #[must_use]
            pub const fn new(data: [f32; $nn]) -> Self {
                Self { data }
            }

            /// Matrix from nested rows.
            #[must_use]
            pub fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                let mut data = [0.0; $nn];
                for (r, row) in rows.iter().enumerate() {
                    for (c, value) in row.iter().enumerate() {
                        data[r * $n + c] = *value;
                    }
                }
                Self { data }
            }

            /// Scalar-constructor convention: `1.0` yields the identity
            /// matrix, any other value the zero matrix.
            #[must_use]
            pub fn from_scalar(value: f32) -> Self {
                let mut out = Self::new([0.0; $nn]);
                if value == 1.0 {
                    for i in 0..$n {
                        out.data[i * $n + i] = 1.0;
                    }
                }
                out
            }

            /// The zero matrix.
            #[must_use]
            pub fn zeros() -> Self {
                Self::from_scalar(0.0)
            }

            /// The identity matrix.
            #[must_use]
            pub fn identity() -> Self {
                Self::from_scalar(1.0)
            }

            /// Number of rows, same as [`Self::DIM`].
            #[must_use]
            pub const fn rows(&self) -> usize {
                $n
            }

            /// Number of columns, same as [`Self::DIM`].
            #[must_use]
            pub const fn cols(&self) -> usize {
                $n
            }

            /// Element at `(row, col)`.
            ///
            /// # Errors
            /// [`MathError::IndexOutOfRange`] outside the fixed dimensions.
            pub fn get(&self, row: usize, col: usize) -> Result<f32, MathError> {
                if row >= $n || col >= $n {
                    return Err(MathError::IndexOutOfRange {
                        index: row * $n + col,
                        len: $nn,
                    });
                }
                Ok(self.data[row * $n + col])
            }

            /// Overwrites the element at `(row, col)`.
            ///
            /// # Errors
            /// [`MathError::IndexOutOfRange`] outside the fixed dimensions.
            pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
                if row >= $n || col >= $n {
                    return Err(MathError::IndexOutOfRange {
                        index: row * $n + col,
                        len: $nn,
                    });
                }
                self.data[row * $n + col] = value;
                Ok(())
            }

            // Unchecked access for internal loops over known-good indices.
            const fn at(&self, row: usize, col: usize) -> f32 {
                self.data[row * $n + col]
            }

            /// Elements as a flat row-major array.
            #[must_use]
            pub const fn to_array(self) -> [f32; $nn] {
                self.data
            }

            /// Elements as a flat row-major slice.
            #[must_use]
            pub fn as_slice(&self) -> &[f32] {
                &self.data
            }

            /// Element-wise sum.
            #[must_use]
            pub fn add(mut self, other: &Self) -> Self {
                self.add_inp(other);
                self
            }

            /// Element-wise difference.
            #[must_use]
            pub fn sub(mut self, other: &Self) -> Self {
                self.sub_inp(other);
                self
            }

            /// In-place element-wise sum.
            pub fn add_inp(&mut self, other: &Self) -> &mut Self {
                for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
                    *a += *b;
                }
                self
            }

            /// In-place element-wise difference.
            pub fn sub_inp(&mut self, other: &Self) -> &mut Self {
                for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
                    *a -= *b;
                }
                self
            }

            /// Every element multiplied by a scalar.
            #[must_use]
            pub fn scale(mut self, scalar: f32) -> Self {
                for a in &mut self.data {
                    *a *= scalar;
                }
                self
            }

            /// Every element divided by a scalar. IEEE semantics, no zero
            /// guard.
            #[must_use]
            pub fn div(mut self, scalar: f32) -> Self {
                self.div_inp(scalar);
                self
            }

            /// In-place scalar divide.
            pub fn div_inp(&mut self, scalar: f32) -> &mut Self {
                for a in &mut self.data {
                    *a /= scalar;
                }
                self
            }

            /// Transposed copy.
            #[must_use]
            pub fn transpose(mut self) -> Self {
                self.transpose_inp();
                self
            }

            /// In-place transpose.
            pub fn transpose_inp(&mut self) -> &mut Self {
                for r in 0..$n {
                    for c in (r + 1)..$n {
                        self.data.swap(r * $n + c, c * $n + r);
                    }
                }
                self
            }

            /// Matrix product `self * other`.
            #[must_use]
            pub fn multiply(&self, other: &Self) -> Self {
                let mut out = Self::zeros();
                for r in 0..$n {
                    for c in 0..$n {
                        let mut sum = 0.0;
                        for i in 0..$n {
                            sum += self.at(r, i) * other.at(i, c);
                        }
                        out.data[r * $n + c] = sum;
                    }
                }
                out
            }

            /// Matrix-vector product `self * vec`.
            #[must_use]
            pub fn apply(&self, vec: $Vec) -> $Vec {
                let mut out = $Vec::zeros();
                for r in 0..$n {
                    let mut sum = 0.0;
                    for c in 0..$n {
                        sum += self.at(r, c) * vec[c];
                    }
                    out[r] = sum;
                }
                out
            }
        }

        impl From<[f32; $nn]> for $Mat {
            fn from(data: [f32; $nn]) -> Self {
                Self { data }
            }
        }

        impl From<[[f32; $n]; $n]> for $Mat {
            fn from(rows: [[f32; $n]; $n]) -> Self {
                Self::from_rows(rows)
            }
        }

        impl Index<(usize, usize)> for $Mat {
            type Output = f32;

            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                assert!(row < $n && col < $n, "matrix index out of range");
                &self.data[row * $n + col]
            }
        }

        impl IndexMut<(usize, usize)> for $Mat {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                assert!(row < $n && col < $n, "matrix index out of range");
                &mut self.data[row * $n + col]
            }
        }

        impl Add for $Mat {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self.add_inp(&rhs);
                self
            }
        }

        impl Sub for $Mat {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self.sub_inp(&rhs);
                self
            }
        }

        impl Mul for $Mat {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.multiply(&rhs)
            }
        }

        impl Mul<$Vec> for $Mat {
            type Output = $Vec;

            fn mul(self, rhs: $Vec) -> $Vec {
                self.apply(rhs)
            }
        }

        impl Mul<f32> for $Mat {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                self.scale(rhs)
            }
        }

        impl Div<f32> for $Mat {
            type Output = Self;

            fn div(mut self, rhs: f32) -> Self {
                self.div_inp(rhs);
                self
            }
        }

        impl fmt::Display for $Mat {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}[", stringify!($Mat))?;
                for r in 0..$n {
                    if r > 0 {
                        write!(f, "; ")?;
                    }
                    for c in 0..$n {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.at(r, c))?;
                    }
                }
                write!(f, "]")
            }
        }
    };
}

impl_mat!(Mat2, Vec2, 2, 4);
impl_mat!(Mat3, Vec3, 3, 9);
impl_mat!(Mat4, Vec4, 4, 16);

impl Mat4 {
    /// Embeds a 3x3 matrix into the upper-left block of a fresh identity
    /// matrix; the translation row and column stay identity. Used to lift
    /// rotation-only matrices into homogeneous form.
    #[must_use]
    pub fn from_mat3(other: &Mat3) -> Self {
        let mut out = Self::identity();
        for r in 0..3 {
            for c in 0..3 {
                out.data[r * 4 + c] = other.at(r, c);
            }
        }
        out
    }
}
