//! Colorspace building blocks: whitepoint, gamut, transfer functions.
//!
//! Each component is an immutable value type with equality and hashing
//! derived from a canonical representation, a JSON-safe `to_dict()`
//! summary, and an adapter from the raw dataset record shape.
//!
//! # Float identity
//!
//! Equality and hashing treat float arrays by **bit pattern**: two
//! components are equal exactly when their stored numbers are bitwise
//! identical (`0.0` and `-0.0` differ, NaN equals itself). This keeps
//! `Eq`/`Hash` coherent so components can key caches and maps.
//!
//! # Curve identity
//!
//! Transfer curves are plain function pointers ([`CurveFn`]) and compare by
//! pointer identity, never by behavior: two curves are equal only when they
//! are literally the same function item.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::{Value, json};

use crate::dataset::ColorspaceRecord;
use crate::slug::simplify;

/// A scalar transfer curve, applied per component of a color triplet.
pub type CurveFn = fn(f64) -> f64;

/// Capability contract shared by every colorspace component and the
/// colorspace entity itself.
pub trait ColorspaceComponent {
    /// Human-readable proper name identifying the object.
    fn name(&self) -> &str;

    /// The name in a simplified syntax for easier typing.
    fn name_simplified(&self) -> &str;

    /// Subjective JSON representation of the object, display-oriented
    /// (arrays rendered as single-line strings).
    fn to_dict(&self) -> Value;
}

// ============================================================================
// Whitepoint
// ============================================================================

/// Whitepoint of a colorspace: named CIE xy chromaticity coordinates of
/// reference white.
#[derive(Debug, Clone)]
pub struct Whitepoint {
    name: String,
    name_simplified: String,
    coordinates: [f64; 2],
}

impl Whitepoint {
    /// Creates a whitepoint from a name and CIE xy coordinates.
    pub fn new(name: impl Into<String>, coordinates: [f64; 2]) -> Self {
        let name = name.into();
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            coordinates,
        }
    }

    /// CIE xy coordinates.
    #[inline]
    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }

    /// Extracts the whitepoint of a raw dataset record.
    pub fn from_record(record: &ColorspaceRecord) -> Self {
        Self::new(record.whitepoint_name, record.whitepoint)
    }

    fn bits(&self) -> [u64; 2] {
        [self.coordinates[0].to_bits(), self.coordinates[1].to_bits()]
    }
}

impl PartialEq for Whitepoint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.bits() == other.bits()
    }
}

impl Eq for Whitepoint {}

impl Hash for Whitepoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.bits().hash(state);
    }
}

impl ColorspaceComponent for Whitepoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_simplified(&self) -> &str {
        &self.name_simplified
    }

    fn to_dict(&self) -> Value {
        json!({
            "name": self.name,
            "coordinates": format!("{:?}", self.coordinates),
        })
    }
}

impl fmt::Display for Whitepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Whitepoint<{}>", self.name)
    }
}

// ============================================================================
// ColorspaceGamut
// ============================================================================

/// Gamut/primaries part of a colorspace: named CIE xy chromaticities of
/// the R, G, B primaries (one row each).
#[derive(Debug, Clone)]
pub struct ColorspaceGamut {
    name: String,
    name_simplified: String,
    primaries: [[f64; 2]; 3],
}

impl ColorspaceGamut {
    /// Creates a gamut from a name and a 3x2 primaries array.
    pub fn new(name: impl Into<String>, primaries: [[f64; 2]; 3]) -> Self {
        let name = name.into();
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            primaries,
        }
    }

    /// Primaries as a 3x2 array of xy rows (R, G, B).
    #[inline]
    pub fn primaries(&self) -> [[f64; 2]; 3] {
        self.primaries
    }

    /// Extracts the gamut of a raw dataset record.
    pub fn from_record(record: &ColorspaceRecord) -> Self {
        Self::new(format!("Gamut {}", record.name), record.primaries)
    }

    fn bits(&self) -> [u64; 6] {
        let p = &self.primaries;
        [
            p[0][0].to_bits(),
            p[0][1].to_bits(),
            p[1][0].to_bits(),
            p[1][1].to_bits(),
            p[2][0].to_bits(),
            p[2][1].to_bits(),
        ]
    }
}

impl PartialEq for ColorspaceGamut {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.bits() == other.bits()
    }
}

impl Eq for ColorspaceGamut {}

impl Hash for ColorspaceGamut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.bits().hash(state);
    }
}

impl ColorspaceComponent for ColorspaceGamut {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_simplified(&self) -> &str {
        &self.name_simplified
    }

    fn to_dict(&self) -> Value {
        json!({
            "name": self.name,
            "primaries": format!("{:?}", self.primaries),
        })
    }
}

impl fmt::Display for ColorspaceGamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorspaceGamut<{}>", self.name)
    }
}

// ============================================================================
// TransferFunctions
// ============================================================================

/// Transfer functions of a colorspace, as an encoding and a decoding
/// direction.
///
/// `None` in either direction means that direction is linear (identity).
#[derive(Debug, Clone)]
pub struct TransferFunctions {
    name: String,
    name_simplified: String,
    encoding: Option<CurveFn>,
    decoding: Option<CurveFn>,
}

impl TransferFunctions {
    /// Creates a transfer-function pair.
    pub fn new(
        name: impl Into<String>,
        encoding: Option<CurveFn>,
        decoding: Option<CurveFn>,
    ) -> Self {
        let name = name.into();
        let name_simplified = simplify(&name);
        Self {
            name,
            name_simplified,
            encoding,
            decoding,
        }
    }

    /// The canonical linear transfer functions (identity both ways).
    pub fn linear() -> Self {
        Self::new("CCTF Linear", None, None)
    }

    /// The encoding curve (linear to encoded), if not linear.
    #[inline]
    pub fn encoding(&self) -> Option<CurveFn> {
        self.encoding
    }

    /// The decoding curve (encoded to linear), if not linear.
    #[inline]
    pub fn decoding(&self) -> Option<CurveFn> {
        self.decoding
    }

    /// True when the encoding direction is the identity.
    #[inline]
    pub fn is_encoding_linear(&self) -> bool {
        self.encoding.is_none()
    }

    /// True when the decoding direction is the identity.
    #[inline]
    pub fn is_decoding_linear(&self) -> bool {
        self.decoding.is_none()
    }

    /// True when both directions are linear transfer functions.
    #[inline]
    pub fn are_linear(&self) -> bool {
        self.is_encoding_linear() && self.is_decoding_linear()
    }

    /// Extracts the transfer functions of a raw dataset record.
    pub fn from_record(record: &ColorspaceRecord) -> Self {
        Self::new(
            format!("CCTF {}", record.name),
            record.encoding,
            record.decoding,
        )
    }

    fn curve_addr(curve: Option<CurveFn>) -> usize {
        curve.map_or(0, |f| f as usize)
    }
}

impl PartialEq for TransferFunctions {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && Self::curve_addr(self.encoding) == Self::curve_addr(other.encoding)
            && Self::curve_addr(self.decoding) == Self::curve_addr(other.decoding)
    }
}

impl Eq for TransferFunctions {}

impl Hash for TransferFunctions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        Self::curve_addr(self.encoding).hash(state);
        Self::curve_addr(self.decoding).hash(state);
        self.is_encoding_linear().hash(state);
        self.is_decoding_linear().hash(state);
    }
}

impl ColorspaceComponent for TransferFunctions {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_simplified(&self) -> &str {
        &self.name_simplified
    }

    fn to_dict(&self) -> Value {
        json!({
            "name": self.name,
            "is_encoding_linear": self.is_encoding_linear(),
            "is_decoding_linear": self.is_decoding_linear(),
        })
    }
}

impl fmt::Display for TransferFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransferFunctions<{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(v: f64) -> f64 {
        v * 2.0
    }

    fn halve(v: f64) -> f64 {
        v * 0.5
    }

    #[test]
    fn test_whitepoint_equality() {
        let d65 = [0.3127, 0.3290];
        let a = Whitepoint::new("test d65", d65);
        let b = Whitepoint::new("test d65", d65);
        let c = Whitepoint::new("test d65", [0.6254, 0.6580]);
        let d = Whitepoint::new("test d60", d65);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: std::collections::HashSet<_> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_whitepoint_signed_zero_distinct() {
        let a = Whitepoint::new("w", [0.0, 0.3]);
        let b = Whitepoint::new("w", [-0.0, 0.3]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_gamut_simplified_name() {
        let gamut = ColorspaceGamut::new(
            "Gamut sRGB Piecewise",
            [[0.64, 0.33], [0.3, 0.6], [0.15, 0.06]],
        );
        assert_eq!(gamut.name_simplified(), "gamut-srgb-piecewise");
    }

    #[test]
    fn test_transfer_functions_linearity_flags() {
        let both = TransferFunctions::new("CCTF test", Some(double), Some(halve));
        assert!(!both.are_linear());
        assert!(!both.is_encoding_linear());
        assert!(!both.is_decoding_linear());

        let encoding_only = TransferFunctions::new("CCTF test", Some(double), None);
        assert!(!encoding_only.are_linear());
        assert!(!encoding_only.is_encoding_linear());
        assert!(encoding_only.is_decoding_linear());

        let linear = TransferFunctions::new("CCTF test", None, None);
        assert!(linear.are_linear());
    }

    #[test]
    fn test_transfer_functions_identity_equality() {
        // Same function items: equal
        let a = TransferFunctions::new("CCTF test", Some(double), Some(halve));
        let b = TransferFunctions::new("CCTF test", Some(double), Some(halve));
        assert_eq!(a, b);

        // One side linear: not equal
        let c = TransferFunctions::new("CCTF test", None, Some(halve));
        assert_ne!(a, c);

        // Different curve item: not equal, even if behavior matched
        let d = TransferFunctions::new("CCTF test", Some(halve), Some(halve));
        assert_ne!(a, d);
    }

    #[test]
    fn test_linear_singleton() {
        let linear = TransferFunctions::linear();
        assert_eq!(linear.name(), "CCTF Linear");
        assert!(linear.are_linear());
        assert_eq!(linear, TransferFunctions::linear());
    }

    #[test]
    fn test_to_dict_shapes() {
        let wp = Whitepoint::new("D65", [0.3127, 0.3290]);
        let dict = wp.to_dict();
        assert_eq!(dict["name"], "D65");
        assert!(dict["coordinates"].as_str().unwrap().starts_with('['));

        let tf = TransferFunctions::new("CCTF test", Some(double), None);
        let dict = tf.to_dict();
        assert_eq!(dict["is_encoding_linear"], false);
        assert_eq!(dict["is_decoding_linear"], true);
    }
}
