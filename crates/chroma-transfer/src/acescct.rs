//! ACEScct transfer function.
//!
//! ACEScct is a logarithmic encoding designed for color grading in ACES.
//! It has a "toe" (linear segment near black) for better behavior in
//! shadows compared to ACEScc.
//!
//! # Range
//!
//! - Linear input: scene-referred, typically [0, 65504]
//! - Encoded output: approximately [-0.36, 1.47]
//!
//! # Reference
//!
//! AMPAS S-2016-001 - ACEScct specification

// ACEScct constants
const X_BRK: f64 = 0.0078125; // 2^-7
const Y_BRK: f64 = 0.155251141552511; // evaluated at X_BRK
const A: f64 = 10.5402377416545;
const B: f64 = 0.0729055341958355;

/// ACEScct encode: converts ACES linear to ACEScct.
///
/// # Formula
///
/// ```text
/// if linear <= 0.0078125:
///     ACEScct = A * linear + B
/// else:
///     ACEScct = (log2(linear) + 9.72) / 17.52
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    if linear <= X_BRK {
        A * linear + B
    } else {
        (linear.log2() + 9.72) / 17.52
    }
}

/// ACEScct decode: converts ACEScct to ACES linear.
#[inline]
pub fn decode(cct: f64) -> f64 {
    if cct <= Y_BRK {
        (cct - B) / A
    } else {
        2.0_f64.powf(cct * 17.52 - 9.72)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_18_gray() {
        let cct = encode(0.18);
        assert!((cct - 0.4135884).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let l = i as f64 / 50.0;
            let back = decode(encode(l));
            assert!((l - back).abs() < 1e-10, "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_segment_break() {
        assert!((encode(X_BRK) - Y_BRK).abs() < 1e-12);
    }
}
