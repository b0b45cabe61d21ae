//! # chroma-color
//!
//! RGB colorspace model, registry, and transformation engine.
//!
//! This crate models what a colorspace *is* (gamut, whitepoint, transfer
//! functions, XYZ matrices), catalogs the known ones behind name/alias
//! lookup, and converts pixel data between them with optional chromatic
//! adaptation.
//!
//! # Entities
//!
//! - [`Whitepoint`], [`ColorspaceGamut`], [`TransferFunctions`] - immutable
//!   components with value equality
//! - [`RgbColorspace`] - the composite entity; "modifications" return new
//!   instances ([`RgbColorspace::as_linear_copy`],
//!   [`RgbColorspace::with_derived_matrices`], ...)
//! - [`Registry`] - name/alias catalog with reversible scoped disabling
//!
//! # Usage
//!
//! ```rust
//! use chroma_color::{Registry, colorspace_to_colorspace};
//! use chroma_math::Vec3;
//!
//! let registry = Registry::builtin();
//! let srgb = registry.get_colorspace("srgb").unwrap();
//! let acescg = registry.get_colorspace("ACEScg").unwrap();
//!
//! let pixels = [Vec3::new(0.5, 0.25, 0.75)];
//! let converted = colorspace_to_colorspace(
//!     &pixels,
//!     &srgb,
//!     &acescg,
//!     Some(Default::default()),
//! )
//! .unwrap();
//! assert_ne!(converted[0], pixels[0]);
//! ```
//!
//! # Concurrency
//!
//! Entities are immutable and all transformation functions are pure, so
//! everything here is safe to call from multiple threads. The one
//! exception is scoped disabling on a shared registry: the
//! snapshot/restore pair is not atomic, so concurrent scope entry/exit
//! must be serialized by the caller.
//!
//! # Dependencies
//!
//! - [`chroma-math`] - matrices, vectors, adaptation algorithm
//! - [`chroma-primaries`] - chromaticity data, normalized primary matrix
//! - [`chroma-transfer`] - encode/decode curves for the builtin dataset
//! - [`thiserror`] - error types
//! - [`serde_json`] - `to_dict()` summaries
//! - [`tracing`] - registry diagnostics
//! - [`regex`] - name simplification

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adaptation;
mod category;
mod colorspace;
mod components;
pub mod dataset;
mod error;
pub mod exr;
mod registry;
mod slug;
mod transform;

pub use adaptation::ChromaticAdaptationTransform;
pub use category::ColorspaceCategory;
pub use colorspace::RgbColorspace;
pub use components::{
    ColorspaceComponent, ColorspaceGamut, CurveFn, TransferFunctions, Whitepoint,
};
pub use error::{Error, Result};
pub use registry::{
    DisabledScope, Registry, disable_colorspaces, get_available_colorspaces,
    get_available_colorspaces_names, get_available_colorspaces_names_aliases,
    get_colorspace,
};
pub use slug::simplify;
pub use transform::{
    colorspace_to_colorspace, colorspace_to_xyz, matrix_chromatic_adaptation_transform,
    matrix_colorspace_to_colorspace, xyz_to_colorspace,
};
