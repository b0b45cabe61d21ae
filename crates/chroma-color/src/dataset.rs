//! Builtin colorspace dataset.
//!
//! The registry is populated from raw [`ColorspaceRecord`]s: the flat,
//! dataset-shaped view of a colorspace (chromaticities, whitepoint, curve
//! pair, matrices-or-derive flag, documentation). Any dataset conforming to
//! this shape is pluggable; the entity and component types only touch it
//! through their `from_record` adapters.
//!
//! Primaries and whitepoints come from `chroma-primaries`, curves from
//! `chroma-transfer`. Note that the sRGB entry is deliberately named
//! "sRGB Piecewise" to make the transfer encoding explicit, with "sRGB"
//! kept as an alias.

use chroma_primaries as primaries;
use chroma_transfer::{acescct, gamma, log_c, prophoto, rec2020, rec709, srgb};

use crate::category::ColorspaceCategory;
use crate::components::CurveFn;

/// Name of the Pointer's Gamut registry entry, which needs special
/// handling (it is not a true colorspace).
pub const POINTER_GAMUT_NAME: &str = "Pointer's Gamut";

/// Raw dataset record for one colorspace.
///
/// This is the exchange shape between an external colorimetric dataset and
/// the colorspace model.
#[derive(Debug, Clone, Copy)]
pub struct ColorspaceRecord {
    /// Canonical colorspace name.
    pub name: &'static str,
    /// Documentation string for the colorspace.
    pub description: &'static str,
    /// CIE xy chromaticities of the R, G, B primaries (one row each).
    pub primaries: [[f64; 2]; 3],
    /// Illuminant name of the whitepoint.
    pub whitepoint_name: &'static str,
    /// CIE xy chromaticity of the whitepoint.
    pub whitepoint: [f64; 2],
    /// Encoding curve (linear to encoded), `None` when linear.
    pub encoding: Option<CurveFn>,
    /// Decoding curve (encoded to linear), `None` when linear.
    pub decoding: Option<CurveFn>,
    /// Precomputed RGB to XYZ matrix, row-major.
    pub matrix_to_xyz: Option<[[f64; 3]; 3]>,
    /// Precomputed XYZ to RGB matrix, row-major.
    pub matrix_from_xyz: Option<[[f64; 3]; 3]>,
    /// When true, ignore the precomputed matrices and derive the pair from
    /// primaries + whitepoint instead.
    pub use_derived_matrices: bool,
}

/// One registry entry: the record plus its registration metadata.
#[derive(Debug, Clone, Copy)]
pub struct DatasetEntry {
    /// The raw colorspace data.
    pub record: ColorspaceRecord,
    /// Category tags for interfaces.
    pub categories: &'static [ColorspaceCategory],
    /// Extra lookup keys beyond the name and its simplified form.
    pub aliases: &'static [&'static str],
}

fn record(
    name: &'static str,
    description: &'static str,
    chromaticities: &primaries::Primaries,
    encoding: Option<CurveFn>,
    decoding: Option<CurveFn>,
) -> ColorspaceRecord {
    ColorspaceRecord {
        name,
        description,
        primaries: chromaticities.to_array(),
        whitepoint_name: chromaticities.whitepoint_name,
        whitepoint: chromaticities.whitepoint_array(),
        encoding,
        decoding,
        matrix_to_xyz: None,
        matrix_from_xyz: None,
        use_derived_matrices: true,
    }
}

/// The builtin dataset entries, in registration order.
pub fn builtin_entries() -> Vec<DatasetEntry> {
    use ColorspaceCategory::*;

    vec![
        DatasetEntry {
            record: record(
                "ACES2065-1",
                "ACES archival and interchange colorspace: AP0 primaries, \
                 ACES whitepoint, scene-linear.",
                &primaries::ACES_AP0,
                None,
                None,
            ),
            categories: &[Aces],
            aliases: &["aces", "ap0"],
        },
        DatasetEntry {
            record: record(
                "ACEScg",
                "ACES working colorspace for rendering and compositing: \
                 AP1 primaries, scene-linear.",
                &primaries::ACES_AP1,
                None,
                None,
            ),
            categories: &[Aces, WorkingSpace],
            aliases: &["ap1"],
        },
        DatasetEntry {
            record: record(
                "ACEScct",
                "ACES colorspace for color grading: AP1 primaries with a \
                 log encoding that has a toe near black.",
                &primaries::ACES_AP1,
                Some(acescct::encode),
                Some(acescct::decode),
            ),
            categories: &[Aces],
            aliases: &[],
        },
        DatasetEntry {
            record: record(
                "sRGB Piecewise",
                "The sRGB colorspace with its standard piecewise transfer \
                 function (IEC 61966-2-1).",
                &primaries::SRGB,
                Some(srgb::oetf),
                Some(srgb::eotf),
            ),
            categories: &[WorkingSpace, Common],
            aliases: &["srgb", "sRGB"],
        },
        DatasetEntry {
            record: record(
                "Display P3",
                "Wide-gamut display colorspace: DCI-P3 primaries with a D65 \
                 whitepoint and the sRGB transfer function.",
                &primaries::DISPLAY_P3,
                Some(srgb::oetf),
                Some(srgb::eotf),
            ),
            categories: &[P3],
            aliases: &[],
        },
        DatasetEntry {
            record: record(
                "DCI-P3",
                "Digital cinema projection colorspace: P3 primaries, DCI \
                 whitepoint, pure 2.6 gamma.",
                &primaries::DCI_P3,
                Some(gamma::dci_oetf),
                Some(gamma::dci_eotf),
            ),
            categories: &[P3],
            aliases: &[],
        },
        DatasetEntry {
            record: record(
                "Rec.709",
                "HDTV broadcast colorspace (ITU-R BT.709) with the BT.709 \
                 OETF.",
                &primaries::REC709,
                Some(rec709::oetf),
                Some(rec709::eotf),
            ),
            categories: &[Common],
            aliases: &["rec709", "bt709"],
        },
        DatasetEntry {
            record: record(
                "Rec.2020",
                "UHDTV colorspace (ITU-R BT.2020) with the BT.2020 OETF.",
                &primaries::REC2020,
                Some(rec2020::oetf),
                Some(rec2020::eotf),
            ),
            categories: &[WorkingSpace],
            aliases: &["rec2020", "bt2020"],
        },
        DatasetEntry {
            record: record(
                "Adobe RGB (1998)",
                "Adobe RGB (1998) colorspace: wider greens than sRGB, pure \
                 563/256 gamma.",
                &primaries::ADOBE_RGB,
                Some(gamma::adobe_rgb_oetf),
                Some(gamma::adobe_rgb_eotf),
            ),
            categories: &[Common],
            aliases: &[],
        },
        DatasetEntry {
            record: record(
                "ProPhoto RGB",
                "ROMM RGB photographic colorspace: very wide gamut, D50 \
                 whitepoint, piecewise 1.8 gamma.",
                &primaries::PROPHOTO_RGB,
                Some(prophoto::encode),
                Some(prophoto::decode),
            ),
            categories: &[],
            aliases: &["prophoto"],
        },
        DatasetEntry {
            record: record(
                "ARRI Wide Gamut 3",
                "ARRI camera-native colorspace: Wide Gamut 3 primaries with \
                 the LogC3 (EI 800) encoding.",
                &primaries::ARRI_WIDE_GAMUT_3,
                Some(log_c::encode),
                Some(log_c::decode),
            ),
            categories: &[Camera],
            aliases: &[],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries_unique_names() {
        let entries = builtin_entries();
        let mut names: Vec<_> = entries.iter().map(|e| e.record.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_builtin_entries_all_derived() {
        for entry in builtin_entries() {
            assert!(entry.record.use_derived_matrices, "{}", entry.record.name);
        }
    }

    #[test]
    fn test_linear_entries_have_no_curves() {
        let entries = builtin_entries();
        let aces = entries
            .iter()
            .find(|e| e.record.name == "ACES2065-1")
            .unwrap();
        assert!(aces.record.encoding.is_none());
        assert!(aces.record.decoding.is_none());
    }
}
