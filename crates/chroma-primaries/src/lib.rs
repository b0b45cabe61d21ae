//! # chroma-primaries
//!
//! Color primaries, whitepoints, and RGB-XYZ matrix generation.
//!
//! This crate supplies the colorimetric raw data consumed by the colorspace
//! model: chromaticity coordinates for standard RGB primary sets and their
//! whitepoints, plus the normalized-primary-matrix algorithm that turns
//! primaries + whitepoint into a 3x3 RGB-to-XYZ matrix.
//!
//! # What are Color Primaries?
//!
//! Color primaries define the gamut (range of colors) a colorspace can
//! represent. Each primary is specified as CIE xy chromaticity coordinates.
//!
//! # Usage
//!
//! ```rust
//! use chroma_primaries::{SRGB, rgb_to_xyz_matrix};
//! use chroma_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB).expect("sRGB primaries are well formed");
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - matrix operations
//!
//! # Used By
//!
//! - `chroma-color` - colorspace model and registry dataset

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_math::{Mat3, Vec3, xy_to_xyz};

/// RGB colorspace primaries definition.
///
/// Defines a gamut by its three primary colors (R, G, B) and whitepoint,
/// all specified as CIE xy chromaticity coordinates. The whitepoint also
/// carries the conventional illuminant name ("D65", "ACES", ...) so
/// consumers can label it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// Whitepoint (x, y) chromaticity
    pub w: (f64, f64),
    /// Gamut name
    pub name: &'static str,
    /// Illuminant name of the whitepoint
    pub whitepoint_name: &'static str,
}

impl Primaries {
    /// Whitepoint as XYZ (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }

    /// Primaries as a 3x2 array of xy rows (R, G, B).
    #[inline]
    pub const fn to_array(&self) -> [[f64; 2]; 3] {
        [
            [self.r.0, self.r.1],
            [self.g.0, self.g.1],
            [self.b.0, self.b.1],
        ]
    }

    /// Whitepoint as an xy pair.
    #[inline]
    pub const fn whitepoint_array(&self) -> [f64; 2] {
        [self.w.0, self.w.1]
    }
}

// ============================================================================
// Standard Whitepoints
// ============================================================================

/// D65 whitepoint chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.3127, 0.3290);

/// D50 whitepoint chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.3457, 0.3585);

/// ACES whitepoint chromaticity (~D60).
pub const ACES_XY: (f64, f64) = (0.32168, 0.33767);

/// DCI whitepoint chromaticity (theatrical projection).
pub const DCI_XY: (f64, f64) = (0.314, 0.351);

// ============================================================================
// Standard Colorspace Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 whitepoint).
pub const SRGB: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.300, 0.600),
    b: (0.150, 0.060),
    w: D65_XY,
    name: "sRGB",
    whitepoint_name: "D65",
};

/// Rec.709 primaries (identical chromaticities to sRGB).
pub const REC709: Primaries = SRGB;

/// Rec.2020 primaries (D65 whitepoint).
///
/// Ultra HD TV colorspace with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: (0.708, 0.292),
    g: (0.170, 0.797),
    b: (0.131, 0.046),
    w: D65_XY,
    name: "Rec.2020",
    whitepoint_name: "D65",
};

/// DCI-P3 primaries (DCI whitepoint).
pub const DCI_P3: Primaries = Primaries {
    r: (0.680, 0.320),
    g: (0.265, 0.690),
    b: (0.150, 0.060),
    w: DCI_XY,
    name: "DCI-P3",
    whitepoint_name: "DCI-P3",
};

/// Display P3 primaries (D65 whitepoint).
///
/// DCI-P3 primaries with a D65 whitepoint, used by wide-gamut consumer
/// displays.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.680, 0.320),
    g: (0.265, 0.690),
    b: (0.150, 0.060),
    w: D65_XY,
    name: "Display P3",
    whitepoint_name: "D65",
};

/// ACES AP0 primaries (ACES whitepoint).
///
/// Encompasses the entire human visual gamut and more; the archival
/// interchange gamut of ACES 2065-1.
pub const ACES_AP0: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0000, 1.0000),
    b: (0.0001, -0.0770),
    w: ACES_XY,
    name: "ACES AP0",
    whitepoint_name: "ACES",
};

/// ACES AP1 primaries (ACES whitepoint).
///
/// Working gamut for ACEScg, ACEScct, ACEScc.
pub const ACES_AP1: Primaries = Primaries {
    r: (0.713, 0.293),
    g: (0.165, 0.830),
    b: (0.128, 0.044),
    w: ACES_XY,
    name: "ACES AP1",
    whitepoint_name: "ACES",
};

/// Adobe RGB (1998) primaries (D65 whitepoint).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.210, 0.710),
    b: (0.150, 0.060),
    w: D65_XY,
    name: "Adobe RGB (1998)",
    whitepoint_name: "D65",
};

/// ProPhoto RGB (ROMM) primaries (D50 whitepoint).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: D50_XY,
    name: "ProPhoto RGB",
    whitepoint_name: "D50",
};

/// ARRI Wide Gamut 3 primaries (D65 whitepoint).
pub const ARRI_WIDE_GAMUT_3: Primaries = Primaries {
    r: (0.6840, 0.3130),
    g: (0.2210, 0.8480),
    b: (0.0861, -0.1020),
    w: D65_XY,
    name: "ARRI Wide Gamut 3",
    whitepoint_name: "D65",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the normalized primary matrix for raw chromaticity data.
///
/// This is the standard method for deriving the 3x3 matrix converting RGB
/// values to CIE XYZ, given the chromaticity coordinates of the primaries
/// (rows R, G, B) and whitepoint:
///
/// 1. Convert xy chromaticities to XYZ (with Y = 1)
/// 2. Solve for per-primary scaling so white (1, 1, 1) maps to the
///    whitepoint XYZ
/// 3. Scale the primary columns by those factors
///
/// Returns `None` when the primaries are degenerate (collinear
/// chromaticities make the primary matrix singular).
pub fn normalized_primary_matrix(
    primaries: &[[f64; 2]; 3],
    whitepoint: &[f64; 2],
) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries[0][0], primaries[0][1]);
    let g_xyz = xy_to_xyz(primaries[1][0], primaries[1][1]);
    let b_xyz = xy_to_xyz(primaries[2][0], primaries[2][1]);
    let w_xyz = xy_to_xyz(whitepoint[0], whitepoint[1]);

    // Primaries as columns; solve M * S = W for the scaling factors
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * w_xyz;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Returns `None` for degenerate primaries.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    normalized_primary_matrix(&primaries.to_array(), &primaries.whitepoint_array())
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// The inverse of [`rgb_to_xyz_matrix`]; `None` for degenerate primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB).unwrap();

        // Check against the published sRGB D65 matrix
        assert!((m.m[0][0] - 0.4123908).abs() < 1e-4);
        assert!((m.m[1][0] - 0.2126390).abs() < 1e-4);
        assert!((m.m[2][2] - 0.9530566).abs() < 1e-4);
    }

    #[test]
    fn test_white_maps_to_whitepoint() {
        let spaces = [
            SRGB,
            REC2020,
            DCI_P3,
            DISPLAY_P3,
            ACES_AP0,
            ACES_AP1,
            ADOBE_RGB,
            PROPHOTO_RGB,
            ARRI_WIDE_GAMUT_3,
        ];
        for space in spaces {
            let m = rgb_to_xyz_matrix(&space).unwrap();
            let white = m * Vec3::ONE;
            let expected = space.white_xyz();
            assert!(
                (white.x - expected.x).abs() < 1e-12
                    && (white.y - expected.y).abs() < 1e-12
                    && (white.z - expected.z).abs() < 1e-12,
                "{} white mismatch: {:?} vs {:?}",
                space.name,
                white,
                expected
            );
        }
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&SRGB).unwrap();

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);

        assert!((rgb.x - back.x).abs() < 1e-12);
        assert!((rgb.y - back.y).abs() < 1e-12);
        assert!((rgb.z - back.z).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_primaries() {
        // All three primaries on the same chromaticity: singular
        let primaries = [[0.3, 0.3], [0.3, 0.3], [0.3, 0.3]];
        assert!(normalized_primary_matrix(&primaries, &[0.3127, 0.3290]).is_none());
    }

    #[test]
    fn test_display_p3_shares_dci_primaries() {
        assert_eq!(DISPLAY_P3.r, DCI_P3.r);
        assert_eq!(DISPLAY_P3.g, DCI_P3.g);
        assert_eq!(DISPLAY_P3.b, DCI_P3.b);
        assert_ne!(DISPLAY_P3.w, DCI_P3.w);
    }
}
