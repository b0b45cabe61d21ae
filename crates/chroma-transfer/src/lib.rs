//! # chroma-transfer
//!
//! Transfer functions (CCTFs) for color encoding and decoding.
//!
//! Transfer functions convert between scene-linear light and the encoded
//! values a colorspace actually stores.
//!
//! # Terminology
//!
//! - **Encoding** (OETF): linear -> encoded, applied when writing values
//! - **Decoding** (EOTF / inverse OETF): encoded -> linear
//! - **Gamma**: the exponent of a power-law transfer function
//!
//! # Supported Curves
//!
//! | Module | Curve | Typical Use |
//! |--------|-------|-------------|
//! | [`srgb`] | sRGB piecewise | Web, consumer displays |
//! | [`rec709`] | BT.709 OETF | HDTV broadcast |
//! | [`rec2020`] | BT.2020 OETF (precise constants) | UHDTV |
//! | [`gamma`] | Pure power (2.6 DCI, Adobe 563/256) | Cinema, legacy |
//! | [`prophoto`] | ROMM piecewise 1.8 | Photography |
//! | [`acescct`] | ACEScct log + toe | ACES grading |
//! | [`log_c`] | ARRI LogC3 EI 800 | ALEXA cameras |
//!
//! # Design
//!
//! Every curve is a plain monomorphic `fn(f64) -> f64`. This keeps the
//! functions usable as *comparable handles*: downstream code stores them as
//! function pointers and treats two curves as equal only when they are the
//! same item.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod acescct;
pub mod gamma;
pub mod log_c;
pub mod prophoto;
pub mod rec2020;
pub mod rec709;
pub mod srgb;
