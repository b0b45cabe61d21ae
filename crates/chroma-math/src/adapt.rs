//! Chromatic adaptation transforms (CAT).
//!
//! Matrices and functions for adapting tristimulus values between
//! different illuminants (whitepoints), simulating how the human visual
//! system normalizes "white" under changing light.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - best overall accuracy, the usual default
//! - [`VON_KRIES`] - classic cone response model (Hunt-Pointer-Estevez)
//! - [`CAT02`] - from the CIECAM02 color appearance model
//! - [`CAT16`] - from the CAM16 color appearance model
//! - [`XYZ_SCALING`] - simple diagonal scaling, least accurate
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{adapt_matrix, xy_to_xyz, BRADFORD};
//!
//! let d65 = xy_to_xyz(0.3127, 0.3290);
//! let d50 = xy_to_xyz(0.3457, 0.3585);
//! let cat = adapt_matrix(BRADFORD, d65, d50);
//!
//! let adapted = cat * d65;
//! assert!((adapted.x - d50.x).abs() < 1e-10);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ whitepoints, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D60 (~6000K), near the ACES whitepoint.
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// ============================================================================
// Cone Response Matrices
// ============================================================================

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space. Generally the best
/// overall method for whitepoint conversion.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix.
///
/// Classic cone response model using the Hunt-Pointer-Estevez
/// transformation. Simpler than Bradford but less accurate for large
/// whitepoint changes.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix, from the CIECAM02 model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// CAT16 chromatic adaptation matrix, from the CAM16 model.
///
/// # Reference
///
/// Li, C. et al. (2017). Comprehensive color solutions: CAM16, CAT16, and
/// CAM16-UCS.
pub const CAT16: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

/// XYZ scaling (diagonal von Kries in XYZ itself).
///
/// The simplest method. Fast but inaccurate for large whitepoint
/// differences.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Converts CIE xy chromaticity to XYZ tristimulus with Y = 1.
///
/// Returns the zero vector for a degenerate chromaticity (y near zero).
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes a Von-Kries-style chromatic adaptation matrix between two
/// whitepoints.
///
/// The resulting matrix transforms XYZ values balanced for `src_white`
/// into values balanced for `dst_white`:
///
/// ```text
/// M_cat = M⁻¹ · diag(dst_cone / src_cone) · M
/// ```
///
/// where `M` is the cone response matrix of the chosen method.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    // Transform whitepoints to cone/adapted space
    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_maps_src_white_to_dst_white() {
        let cat = adapt_matrix(BRADFORD, D65, D50);
        let result = cat * D65;
        assert!((result.x - D50.x).abs() < 1e-10);
        assert!((result.y - D50.y).abs() < 1e-10);
        assert!((result.z - D50.z).abs() < 1e-10);
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
        let d50_to_d65 = adapt_matrix(BRADFORD, D50, D65);
        let roundtrip = d50_to_d65 * d65_to_d50;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 1e-12,
                    "roundtrip[{}][{}] = {}",
                    i,
                    j,
                    roundtrip.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_adapt_identity() {
        // Adapting to the same whitepoint should be identity
        for method in [BRADFORD, VON_KRIES, CAT02, CAT16, XYZ_SCALING] {
            let same = adapt_matrix(method, D65, D65);
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!((same.m[i][j] - expected).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_xy_to_xyz() {
        let d65 = xy_to_xyz(0.3127, 0.3290);
        assert!((d65.x - 0.95047).abs() < 1e-4);
        assert_eq!(d65.y, 1.0);
        assert!((d65.z - 1.08883).abs() < 1e-3);

        assert_eq!(xy_to_xyz(0.3, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_illuminants_have_unit_y() {
        assert_eq!(D65.y, 1.0);
        assert_eq!(D50.y, 1.0);
        assert_eq!(D60.y, 1.0);
        assert_eq!(E.y, 1.0);
    }
}
