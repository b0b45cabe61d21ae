//! The RGB colorspace entity.
//!
//! [`RgbColorspace`] bundles a gamut, whitepoint, transfer functions,
//! descriptive metadata and the to/from CIE XYZ matrices. Instances are
//! immutable: every "modification" operation returns a new instance and
//! never touches the original.
//!
//! By color-science convention a colorspace defines a gamut, a whitepoint
//! and transfer functions. The 3x3 XYZ matrices needed for conversion can
//! be derived automatically from gamut + whitepoint when not supplied by
//! the dataset.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chroma_math::Mat3;
use chroma_primaries::normalized_primary_matrix;
use serde_json::{Value, json};

use crate::category::ColorspaceCategory;
use crate::components::{
    ColorspaceComponent, ColorspaceGamut, TransferFunctions, Whitepoint,
};
use crate::dataset::ColorspaceRecord;
use crate::error::{Error, Result};
use crate::slug::simplify;

/// Top-level entity specifying how a colorspace is defined.
///
/// All optional parts may be absent independently; a colorspace with
/// nothing defined is a "no-op" and performs an identity transform at
/// every stage (see [`RgbColorspace::is_no_op`]).
///
/// Equality and hashing cover name, components, categories (as a set),
/// description and the exact bit patterns of both matrices; provenance
/// fields (linear source, derivation flags) are excluded.
#[derive(Debug, Clone)]
pub struct RgbColorspace {
    name: String,
    name_simplified: String,
    gamut: Option<ColorspaceGamut>,
    whitepoint: Option<Whitepoint>,
    transfer_functions: Option<TransferFunctions>,
    categories: Vec<ColorspaceCategory>,
    description: String,
    matrix_to_xyz: Option<Mat3>,
    matrix_from_xyz: Option<Mat3>,
    // Colorspace this instance was derived from when linearized.
    linear_source: Option<Arc<RgbColorspace>>,
    matrix_to_xyz_derived: bool,
    matrix_from_xyz_derived: bool,
}

impl RgbColorspace {
    /// Creates a colorspace from its parts.
    ///
    /// `name`, `description` and `categories` are always required; the
    /// remaining parts are independently optional.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        gamut: Option<ColorspaceGamut>,
        whitepoint: Option<Whitepoint>,
        transfer_functions: Option<TransferFunctions>,
        categories: Vec<ColorspaceCategory>,
        description: impl Into<String>,
        matrix_to_xyz: Option<Mat3>,
        matrix_from_xyz: Option<Mat3>,
    ) -> Self {
        let name = name.into();
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            gamut,
            whitepoint,
            transfer_functions,
            categories,
            description: description.into(),
            matrix_to_xyz,
            matrix_from_xyz,
            linear_source: None,
            matrix_to_xyz_derived: false,
            matrix_from_xyz_derived: false,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The gamut, if defined.
    #[inline]
    pub fn gamut(&self) -> Option<&ColorspaceGamut> {
        self.gamut.as_ref()
    }

    /// The whitepoint, if defined.
    #[inline]
    pub fn whitepoint(&self) -> Option<&Whitepoint> {
        self.whitepoint.as_ref()
    }

    /// The transfer functions, if defined.
    #[inline]
    pub fn transfer_functions(&self) -> Option<&TransferFunctions> {
        self.transfer_functions.as_ref()
    }

    /// Category tags, in insertion order.
    #[inline]
    pub fn categories(&self) -> &[ColorspaceCategory] {
        &self.categories
    }

    /// Free-form description of what/why for this colorspace.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The RGB to CIE XYZ matrix, if defined.
    #[inline]
    pub fn matrix_to_xyz(&self) -> Option<Mat3> {
        self.matrix_to_xyz
    }

    /// The CIE XYZ to RGB matrix, if defined.
    #[inline]
    pub fn matrix_from_xyz(&self) -> Option<Mat3> {
        self.matrix_from_xyz
    }

    /// True when the to-XYZ matrix was derived from gamut + whitepoint
    /// rather than supplied.
    #[inline]
    pub fn is_matrix_to_xyz_derived(&self) -> bool {
        self.matrix_to_xyz_derived
    }

    /// True when the from-XYZ matrix was derived from gamut + whitepoint
    /// rather than supplied.
    #[inline]
    pub fn is_matrix_from_xyz_derived(&self) -> bool {
        self.matrix_from_xyz_derived
    }

    /// True if this colorspace defines no transform for any component and
    /// can be skipped entirely during processing.
    ///
    /// That is: no gamut, no non-identity matrix in either direction, no
    /// whitepoint, and transfer functions absent or linear both ways.
    pub fn is_no_op(&self) -> bool {
        let has_gamut = self.gamut.is_some()
            || self
                .matrix_from_xyz
                .is_some_and(|m| m != Mat3::IDENTITY)
            || self
                .matrix_to_xyz
                .is_some_and(|m| m != Mat3::IDENTITY);

        let has_whitepoint = self.whitepoint.is_some();

        let has_transfer_functions = self
            .transfer_functions
            .as_ref()
            .is_some_and(|tf| !tf.are_linear());

        !has_gamut && !has_whitepoint && !has_transfer_functions
    }

    /// True if this colorspace was generated by [`RgbColorspace::as_linear_copy`].
    #[inline]
    pub fn is_linear_copy(&self) -> bool {
        self.linear_source.is_some()
    }

    // ------------------------------------------------------------------
    // Derived copies
    // ------------------------------------------------------------------

    /// Returns an independent copy of this instance.
    ///
    /// Matrices and coordinates are stored inline, so the copy shares no
    /// mutable state with the original.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a copy of this colorspace with all transfer functions
    /// linear.
    ///
    /// If the transfer functions are absent or already linear this is just
    /// a regular copy (same name). Otherwise the copy is renamed with a
    /// " Linear" suffix and keeps a back-reference to this instance,
    /// retrievable through [`RgbColorspace::retrieve_linear_source`].
    pub fn as_linear_copy(&self) -> Self {
        let already_linear = self
            .transfer_functions
            .as_ref()
            .is_none_or(|tf| tf.are_linear());
        if already_linear {
            return self.clone();
        }

        let name = format!("{} Linear", self.name);
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            transfer_functions: Some(TransferFunctions::linear()),
            linear_source: Some(Arc::new(self.clone())),
            ..self.clone()
        }
    }

    /// The non-linear colorspace this linear instance was derived from,
    /// or `None` when [`RgbColorspace::is_linear_copy`] is false.
    #[inline]
    pub fn retrieve_linear_source(&self) -> Option<&Arc<RgbColorspace>> {
        self.linear_source.as_ref()
    }

    /// Returns a copy with the XYZ conversion matrices derived from the
    /// gamut and whitepoint.
    ///
    /// When either gamut or whitepoint is undefined the matrices cannot be
    /// derived and the copy has both cleared instead.
    pub fn with_derived_matrices(&self) -> Result<Self> {
        let (Some(gamut), Some(whitepoint)) = (&self.gamut, &self.whitepoint) else {
            return Ok(self.with_gamut(self.gamut.clone(), None, None));
        };

        let matrix_to_xyz = Self::compute_matrix_to_xyz_from(gamut, whitepoint)?;
        let matrix_from_xyz = Self::compute_matrix_from_xyz_from(gamut, whitepoint)?;

        Ok(Self {
            matrix_to_xyz: Some(matrix_to_xyz),
            matrix_from_xyz: Some(matrix_from_xyz),
            matrix_to_xyz_derived: true,
            matrix_from_xyz_derived: true,
            ..self.clone()
        })
    }

    /// Returns a copy with the given "descriptive" attributes replaced.
    ///
    /// `None` keeps the current value. Note that an empty category list is
    /// a valid replacement; only `None` means "keep".
    pub fn with_descriptives(
        &self,
        new_name: Option<&str>,
        new_description: Option<&str>,
        new_categories: Option<Vec<ColorspaceCategory>>,
    ) -> Self {
        let name = new_name.unwrap_or(&self.name).to_string();
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            description: new_description.unwrap_or(&self.description).to_string(),
            categories: new_categories.unwrap_or_else(|| self.categories.clone()),
            ..self.clone()
        }
    }

    /// Returns a copy with the given gamut set.
    ///
    /// Changing the gamut invalidates the matrices, so they must be
    /// provided again. Tip: pass `None` for both and call
    /// [`RgbColorspace::with_derived_matrices`] after.
    pub fn with_gamut(
        &self,
        new_gamut: Option<ColorspaceGamut>,
        matrix_to_xyz: Option<Mat3>,
        matrix_from_xyz: Option<Mat3>,
    ) -> Self {
        Self {
            gamut: new_gamut,
            matrix_to_xyz,
            matrix_from_xyz,
            matrix_to_xyz_derived: false,
            matrix_from_xyz_derived: false,
            ..self.clone()
        }
    }

    /// Returns a copy with the given whitepoint set.
    ///
    /// Like [`RgbColorspace::with_gamut`], the matrices depend on the
    /// whitepoint and must be provided again.
    pub fn with_whitepoint(
        &self,
        new_whitepoint: Option<Whitepoint>,
        matrix_to_xyz: Option<Mat3>,
        matrix_from_xyz: Option<Mat3>,
    ) -> Self {
        Self {
            whitepoint: new_whitepoint,
            matrix_to_xyz,
            matrix_from_xyz,
            matrix_to_xyz_derived: false,
            matrix_from_xyz_derived: false,
            ..self.clone()
        }
    }

    /// Returns a copy with the given transfer functions set.
    pub fn with_transfer_functions(
        &self,
        new_transfer_functions: Option<TransferFunctions>,
    ) -> Self {
        Self {
            transfer_functions: new_transfer_functions,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Matrix computation
    // ------------------------------------------------------------------

    /// Computes the normalized primary matrix to XYZ for the given gamut
    /// and whitepoint.
    pub fn compute_matrix_to_xyz_from(
        gamut: &ColorspaceGamut,
        whitepoint: &Whitepoint,
    ) -> Result<Mat3> {
        normalized_primary_matrix(&gamut.primaries(), &whitepoint.coordinates()).ok_or_else(
            || Error::SingularMatrix {
                gamut: gamut.name().to_string(),
                whitepoint: whitepoint.name().to_string(),
            },
        )
    }

    /// Computes the normalized primary matrix from XYZ for the given gamut
    /// and whitepoint (inverse of [`RgbColorspace::compute_matrix_to_xyz_from`]).
    pub fn compute_matrix_from_xyz_from(
        gamut: &ColorspaceGamut,
        whitepoint: &Whitepoint,
    ) -> Result<Mat3> {
        Self::compute_matrix_to_xyz_from(gamut, whitepoint)?
            .inverse()
            .ok_or_else(|| Error::SingularMatrix {
                gamut: gamut.name().to_string(),
                whitepoint: whitepoint.name().to_string(),
            })
    }

    // ------------------------------------------------------------------
    // Dataset adapter
    // ------------------------------------------------------------------

    /// Builds a colorspace from a raw dataset record.
    ///
    /// When the record asks for derived matrices they are computed from its
    /// primaries and whitepoint; otherwise the record's precomputed pair is
    /// used as-is.
    pub fn from_record(
        record: &ColorspaceRecord,
        categories: Vec<ColorspaceCategory>,
    ) -> Result<Self> {
        let gamut = ColorspaceGamut::from_record(record);
        let whitepoint = Whitepoint::from_record(record);
        let transfer_functions = TransferFunctions::from_record(record);

        let (matrix_to_xyz, matrix_from_xyz, derived) = if record.use_derived_matrices {
            let to_xyz = Self::compute_matrix_to_xyz_from(&gamut, &whitepoint)?;
            let from_xyz = Self::compute_matrix_from_xyz_from(&gamut, &whitepoint)?;
            (Some(to_xyz), Some(from_xyz), true)
        } else {
            (
                record.matrix_to_xyz.map(Mat3::from_rows),
                record.matrix_from_xyz.map(Mat3::from_rows),
                false,
            )
        };

        let mut colorspace = Self::new(
            record.name,
            Some(gamut),
            Some(whitepoint),
            Some(transfer_functions),
            categories,
            record.description,
            matrix_to_xyz,
            matrix_from_xyz,
        );
        colorspace.matrix_to_xyz_derived = derived;
        colorspace.matrix_from_xyz_derived = derived;
        Ok(colorspace)
    }

    // ------------------------------------------------------------------
    // Equality helpers
    // ------------------------------------------------------------------

    fn categories_sorted(&self) -> Vec<ColorspaceCategory> {
        let mut categories = self.categories.clone();
        categories.sort();
        categories
    }

    fn matrix_bits(matrix: Option<Mat3>) -> Option<[u64; 9]> {
        matrix.map(|m| m.to_bits())
    }
}

impl PartialEq for RgbColorspace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.gamut == other.gamut
            && self.whitepoint == other.whitepoint
            && self.transfer_functions == other.transfer_functions
            && self.categories_sorted() == other.categories_sorted()
            && self.description == other.description
            && Self::matrix_bits(self.matrix_to_xyz) == Self::matrix_bits(other.matrix_to_xyz)
            && Self::matrix_bits(self.matrix_from_xyz)
                == Self::matrix_bits(other.matrix_from_xyz)
    }
}

impl Eq for RgbColorspace {}

impl Hash for RgbColorspace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.gamut.hash(state);
        self.whitepoint.hash(state);
        self.transfer_functions.hash(state);
        self.categories_sorted().hash(state);
        self.description.hash(state);
        Self::matrix_bits(self.matrix_to_xyz).hash(state);
        Self::matrix_bits(self.matrix_from_xyz).hash(state);
    }
}

impl ColorspaceComponent for RgbColorspace {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_simplified(&self) -> &str {
        &self.name_simplified
    }

    fn to_dict(&self) -> Value {
        json!({
            "name": self.name,
            "gamut": self.gamut.as_ref().map(ColorspaceComponent::to_dict),
            "whitepoint": self.whitepoint.as_ref().map(ColorspaceComponent::to_dict),
            "transfer_functions": self
                .transfer_functions
                .as_ref()
                .map(ColorspaceComponent::to_dict),
            "matrices": {
                "toXYZ": self.matrix_to_xyz.map(|m| format!("{:?}", m.m)),
                "fromXYZ": self.matrix_from_xyz.map(|m| format!("{:?}", m.m)),
            },
        })
    }
}

impl fmt::Display for RgbColorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RgbColorspace<{}>", self.name)
    }
}
