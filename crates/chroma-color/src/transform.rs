//! Pixel array conversion between colorspaces and CIE XYZ.
//!
//! All functions are pure: they read immutable colorspace entities and
//! return freshly allocated arrays, never mutating their inputs. Pixel
//! data is a slice of [`Vec3`] triplets (a single pixel goes through
//! `std::slice::from_ref`). Values are conventionally in [0, 1] but no
//! clamping or rounding happens at any stage; out-of-range and negative
//! values are valid intermediate and final results.
//!
//! The full conversion pipeline is decode -> matrix -> (adapt) -> encode;
//! every stage is skipped when the colorspace does not define it.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use chroma_math::{Mat3, Vec3, adapt_matrix, xy_to_xyz};

use crate::adaptation::ChromaticAdaptationTransform;
use crate::components::{ColorspaceComponent, CurveFn, Whitepoint};
use crate::colorspace::RgbColorspace;
use crate::error::{Error, Result};

type CatCacheKey = (Whitepoint, Whitepoint, ChromaticAdaptationTransform);

/// Adaptation matrices keyed by (source, target, transform).
///
/// Whitepoints are immutable and hashable, so the cache never invalidates.
static CAT_MATRIX_CACHE: LazyLock<RwLock<HashMap<CatCacheKey, Mat3>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the 3x3 matrix converting tristimulus values balanced for
/// `source_whitepoint` to values balanced for `target_whitepoint`, using
/// the given chromatic adaptation transform.
///
/// Results are cached per (source, target, transform).
pub fn matrix_chromatic_adaptation_transform(
    source_whitepoint: &Whitepoint,
    target_whitepoint: &Whitepoint,
    transform: ChromaticAdaptationTransform,
) -> Mat3 {
    let key = (
        source_whitepoint.clone(),
        target_whitepoint.clone(),
        transform,
    );

    // Fast path: read lock only
    if let Some(matrix) = CAT_MATRIX_CACHE.read().unwrap().get(&key) {
        return *matrix;
    }

    let [sx, sy] = source_whitepoint.coordinates();
    let [tx, ty] = target_whitepoint.coordinates();
    let matrix = adapt_matrix(
        transform.cone_response_matrix(),
        xy_to_xyz(sx, sy),
        xy_to_xyz(tx, ty),
    );

    CAT_MATRIX_CACHE.write().unwrap().insert(key, matrix);
    matrix
}

/// Computes the matrix converting from `source_colorspace` to
/// `target_colorspace`, with optional chromatic adaptation between their
/// whitepoints.
///
/// Returns the identity matrix when either colorspace is a no-op or lacks
/// a gamut.
///
/// # Errors
///
/// - [`Error::MissingWhitepoint`] when adaptation is requested and either
///   colorspace has no whitepoint. Without adaptation, whitepoints are not
///   consulted at all.
/// - [`Error::MissingMatrix`] when a gamut-bearing colorspace lacks the
///   needed XYZ matrix.
pub fn matrix_colorspace_to_colorspace(
    source_colorspace: &RgbColorspace,
    target_colorspace: &RgbColorspace,
    chromatic_adaptation_transform: Option<ChromaticAdaptationTransform>,
) -> Result<Mat3> {
    if source_colorspace.is_no_op()
        || target_colorspace.is_no_op()
        || source_colorspace.gamut().is_none()
        || target_colorspace.gamut().is_none()
    {
        return Ok(Mat3::IDENTITY);
    }

    let mut matrix = matrix_to_xyz_of(source_colorspace)?;

    if let Some(transform) = chromatic_adaptation_transform {
        let (source_whitepoint, target_whitepoint) = both_whitepoints(
            source_colorspace.whitepoint(),
            target_colorspace.whitepoint(),
        )?;
        let adaptation = matrix_chromatic_adaptation_transform(
            source_whitepoint,
            target_whitepoint,
            transform,
        );
        matrix = adaptation * matrix;
    }

    Ok(matrix_from_xyz_of(target_colorspace)? * matrix)
}

/// Converts an RGB pixel array to CIE XYZ tristimulus values.
///
/// Returns an independent copy of `array` unchanged when
/// `source_colorspace` is a no-op or has no gamut.
///
/// When `chromatic_adaptation_transform` is given the XYZ output is
/// additionally adapted from the source whitepoint to `whitepoint_xyz`;
/// both must then be present.
pub fn colorspace_to_xyz(
    array: &[Vec3],
    source_colorspace: &RgbColorspace,
    whitepoint_xyz: Option<&Whitepoint>,
    chromatic_adaptation_transform: Option<ChromaticAdaptationTransform>,
) -> Result<Vec<Vec3>> {
    if source_colorspace.is_no_op() || source_colorspace.gamut().is_none() {
        return Ok(array.to_vec());
    }

    let mut pixels = array.to_vec();

    if let Some(decoding) = source_colorspace
        .transfer_functions()
        .and_then(|tf| tf.decoding())
    {
        apply_curve(&mut pixels, decoding);
    }

    apply_matrix(&mut pixels, &matrix_to_xyz_of(source_colorspace)?);

    if let Some(transform) = chromatic_adaptation_transform {
        let (source_whitepoint, target_whitepoint) =
            both_whitepoints(source_colorspace.whitepoint(), whitepoint_xyz)?;
        let adaptation = matrix_chromatic_adaptation_transform(
            source_whitepoint,
            target_whitepoint,
            transform,
        );
        apply_matrix(&mut pixels, &adaptation);
    }

    Ok(pixels)
}

/// Converts a CIE XYZ pixel array to the given RGB colorspace.
///
/// Symmetric inverse of [`colorspace_to_xyz`]: optional adaptation from
/// `whitepoint_xyz` to the target whitepoint, then the from-XYZ matrix,
/// then the target encoding curve.
pub fn xyz_to_colorspace(
    array: &[Vec3],
    target_colorspace: &RgbColorspace,
    whitepoint_xyz: Option<&Whitepoint>,
    chromatic_adaptation_transform: Option<ChromaticAdaptationTransform>,
) -> Result<Vec<Vec3>> {
    if target_colorspace.is_no_op() || target_colorspace.gamut().is_none() {
        return Ok(array.to_vec());
    }

    let mut pixels = array.to_vec();

    if let Some(transform) = chromatic_adaptation_transform {
        let (source_whitepoint, target_whitepoint) =
            both_whitepoints(whitepoint_xyz, target_colorspace.whitepoint())?;
        let adaptation = matrix_chromatic_adaptation_transform(
            source_whitepoint,
            target_whitepoint,
            transform,
        );
        apply_matrix(&mut pixels, &adaptation);
    }

    apply_matrix(&mut pixels, &matrix_from_xyz_of(target_colorspace)?);

    if let Some(encoding) = target_colorspace
        .transfer_functions()
        .and_then(|tf| tf.encoding())
    {
        apply_curve(&mut pixels, encoding);
    }

    Ok(pixels)
}

/// Converts a pixel array from one RGB colorspace to another.
///
/// Returns an independent copy of `array` unchanged when either
/// colorspace is a no-op or when the two colorspaces are value-equal.
/// Otherwise decodes with the source curve, applies the single combined
/// conversion matrix from [`matrix_colorspace_to_colorspace`], and encodes
/// with the target curve — numerically equivalent to going through XYZ in
/// two steps, at half the matrix work.
pub fn colorspace_to_colorspace(
    array: &[Vec3],
    source_colorspace: &RgbColorspace,
    target_colorspace: &RgbColorspace,
    chromatic_adaptation_transform: Option<ChromaticAdaptationTransform>,
) -> Result<Vec<Vec3>> {
    if source_colorspace.is_no_op() || target_colorspace.is_no_op() {
        return Ok(array.to_vec());
    }
    if source_colorspace == target_colorspace {
        return Ok(array.to_vec());
    }

    let mut pixels = array.to_vec();

    if let Some(decoding) = source_colorspace
        .transfer_functions()
        .and_then(|tf| tf.decoding())
    {
        apply_curve(&mut pixels, decoding);
    }

    let matrix = matrix_colorspace_to_colorspace(
        source_colorspace,
        target_colorspace,
        chromatic_adaptation_transform,
    )?;
    apply_matrix(&mut pixels, &matrix);

    if let Some(encoding) = target_colorspace
        .transfer_functions()
        .and_then(|tf| tf.encoding())
    {
        apply_curve(&mut pixels, encoding);
    }

    Ok(pixels)
}

// ----------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------

fn apply_curve(pixels: &mut [Vec3], curve: CurveFn) {
    for pixel in pixels.iter_mut() {
        *pixel = pixel.map(curve);
    }
}

fn apply_matrix(pixels: &mut [Vec3], matrix: &Mat3) {
    for pixel in pixels.iter_mut() {
        *pixel = matrix.transform(*pixel);
    }
}

fn matrix_to_xyz_of(colorspace: &RgbColorspace) -> Result<Mat3> {
    colorspace.matrix_to_xyz().ok_or_else(|| Error::MissingMatrix {
        colorspace: colorspace.name().to_string(),
        direction: "to XYZ",
    })
}

fn matrix_from_xyz_of(colorspace: &RgbColorspace) -> Result<Mat3> {
    colorspace
        .matrix_from_xyz()
        .ok_or_else(|| Error::MissingMatrix {
            colorspace: colorspace.name().to_string(),
            direction: "from XYZ",
        })
}

fn both_whitepoints<'a>(
    source: Option<&'a Whitepoint>,
    target: Option<&'a Whitepoint>,
) -> Result<(&'a Whitepoint, &'a Whitepoint)> {
    match (source, target) {
        (Some(source), Some(target)) => Ok((source, target)),
        _ => Err(Error::MissingWhitepoint {
            source_name: source.map(|w| w.name().to_string()),
            target: target.map(|w| w.name().to_string()),
        }),
    }
}
