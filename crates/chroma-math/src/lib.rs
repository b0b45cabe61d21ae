//! # chroma-math
//!
//! Math primitives for colorimetric computations.
//!
//! This crate provides the numeric foundation shared by the rest of the
//! workspace:
//!
//! - [`Mat3`] - 3x3 double-precision matrices for color space transforms
//! - [`Vec3`] - 3-component vectors for RGB/XYZ triplets
//! - Chromatic adaptation transforms (Bradford, CAT02, CAT16, ...)
//!
//! # Design
//!
//! All types are `f64`. Color-management accuracy contracts (adaptation
//! round-trips within 1e-8) rule out single precision. Matrices are stored
//! **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DMat3`/`DVec3`
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix generation
//! - `chroma-color` - colorspace model and transformation engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
