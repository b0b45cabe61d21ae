//! OpenEXR `chromaticities` attribute interop.
//!
//! The attribute is an 8-tuple `(R.x, R.y, G.x, G.y, B.x, B.y, W.x, W.y)`
//! of CIE xy coordinates. It pins down a gamut and whitepoint but says
//! nothing about transfer functions, so mapping it back to registered
//! colorspaces can produce several candidates.
//!
//! # Reference
//!
//! <https://openexr.readthedocs.io/en/latest/TechnicalIntroduction.html#rgb-color>

use std::sync::Arc;

use crate::colorspace::RgbColorspace;
use crate::registry::Registry;

/// OpenEXR `chromaticities` attribute value:
/// `(R.x, R.y, G.x, G.y, B.x, B.y, whitepoint.x, whitepoint.y)`.
pub type ExrChromaticities = [f64; 8];

/// The special chromaticities value marking CIE XYZ pixel data.
pub const EXR_CHROMATICITIES_XYZ: ExrChromaticities =
    [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0 / 3.0, 1.0 / 3.0];

// numpy.allclose defaults
fn allclose(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

/// Finds the registered colorspaces matching an OpenEXR `chromaticities`
/// attribute.
///
/// Multiple matches are possible since the attribute does not constrain
/// transfer functions. With `ensure_linear_cctf` every non-linear match is
/// replaced by its linear copy, which is what the OpenEXR spec implies for
/// stored pixel data. XYZ chromaticities are not supported and return no
/// matches.
pub fn exr_chromaticities_to_colorspace(
    exr_chromaticities: ExrChromaticities,
    registry: &Registry,
    ensure_linear_cctf: bool,
) -> Vec<Arc<RgbColorspace>> {
    let mut matches = Vec::new();

    if exr_chromaticities == EXR_CHROMATICITIES_XYZ {
        return matches;
    }

    let exr_primaries = &exr_chromaticities[..6];
    let exr_whitepoint = &exr_chromaticities[6..];

    for colorspace in registry.get_available_colorspaces() {
        let (Some(gamut), Some(whitepoint)) = (colorspace.gamut(), colorspace.whitepoint())
        else {
            continue;
        };

        let coordinates = whitepoint.coordinates();
        if !allclose(exr_whitepoint[0], coordinates[0])
            || !allclose(exr_whitepoint[1], coordinates[1])
        {
            continue;
        }

        let primaries = gamut.primaries();
        let flat = [
            primaries[0][0],
            primaries[0][1],
            primaries[1][0],
            primaries[1][1],
            primaries[2][0],
            primaries[2][1],
        ];
        if !(0..6).all(|i| allclose(exr_primaries[i], flat[i])) {
            continue;
        }

        let is_linear = colorspace
            .transfer_functions()
            .is_none_or(|tf| tf.are_linear());
        if ensure_linear_cctf && !is_linear {
            matches.push(Arc::new(colorspace.as_linear_copy()));
        } else {
            matches.push(colorspace);
        }
    }

    matches
}

/// Converts a colorspace to an OpenEXR `chromaticities` attribute value.
///
/// Returns `None` when the colorspace does not define both a gamut and a
/// whitepoint.
pub fn colorspace_to_exr_chromaticities(
    colorspace: &RgbColorspace,
) -> Option<ExrChromaticities> {
    let gamut = colorspace.gamut()?;
    let whitepoint = colorspace.whitepoint()?;

    let primaries = gamut.primaries();
    let coordinates = whitepoint.coordinates();
    Some([
        primaries[0][0],
        primaries[0][1],
        primaries[1][0],
        primaries[1][1],
        primaries[2][0],
        primaries[2][1],
        coordinates[0],
        coordinates[1],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ColorspaceComponent;

    #[test]
    fn test_xyz_chromaticities_unsupported() {
        let registry = Registry::builtin();
        let matches =
            exr_chromaticities_to_colorspace(EXR_CHROMATICITIES_XYZ, &registry, true);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_roundtrip_through_attribute() {
        let registry = Registry::builtin();
        let acescg = registry.get_colorspace("ACEScg").unwrap();

        let chromaticities = colorspace_to_exr_chromaticities(&acescg).unwrap();
        let matches =
            exr_chromaticities_to_colorspace(chromaticities, &registry, false);
        assert!(matches.iter().any(|cs| cs.name() == "ACEScg"));
    }

    #[test]
    fn test_srgb_chromaticities_match_multiple() {
        let registry = Registry::builtin();
        let srgb = registry.get_colorspace("sRGB").unwrap();
        let chromaticities = colorspace_to_exr_chromaticities(&srgb).unwrap();

        // sRGB and Rec.709 share primaries and whitepoint
        let matches = exr_chromaticities_to_colorspace(chromaticities, &registry, false);
        assert!(matches.len() >= 2, "got {}", matches.len());
    }

    #[test]
    fn test_ensure_linear_cctf() {
        let registry = Registry::builtin();
        let srgb = registry.get_colorspace("sRGB").unwrap();
        let chromaticities = colorspace_to_exr_chromaticities(&srgb).unwrap();

        let matches = exr_chromaticities_to_colorspace(chromaticities, &registry, true);
        assert!(!matches.is_empty());
        for colorspace in matches {
            assert!(
                colorspace
                    .transfer_functions()
                    .is_none_or(|tf| tf.are_linear()),
                "{} is not linear",
                colorspace.name()
            );
        }
    }

    #[test]
    fn test_no_gamut_no_attribute() {
        let registry = Registry::builtin();
        let passthrough = registry.get_colorspace("raw").unwrap();
        assert!(colorspace_to_exr_chromaticities(&passthrough).is_none());
    }
}
