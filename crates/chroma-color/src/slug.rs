//! Identifier-safe name simplification.
//!
//! [`simplify`] turns human-readable colorspace names into slugs suitable
//! for lookup keys and URLs. The registry uses it to generate the
//! simplified alias of every entry, and the component types expose it as
//! their `name_simplified` accessor.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s\\/'"]+"#).expect("separator pattern is valid")
});
static BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[()\[\]{}]").expect("bracket pattern is valid")
});
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-{2,}").expect("hyphen pattern is valid")
});

/// Generates a simplified slug from the given name.
///
/// Rules, applied in order:
/// - non-ASCII characters are dropped
/// - lowercased
/// - runs of whitespace, slashes, backslashes and quotes become one hyphen
/// - brackets (`()[]{}`) are stripped
/// - runs of two or more hyphens collapse to exactly two
///
/// # Example
///
/// ```rust
/// use chroma_color::simplify;
///
/// assert_eq!(simplify("Adobe RGB (1998)"), "adobe-rgb-1998");
/// assert_eq!(simplify("sRGB Piecewise"), "srgb-piecewise");
/// ```
pub fn simplify(name: &str) -> String {
    let ascii: String = name.chars().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let separated = SEPARATORS.replace_all(&lowered, "-");
    let stripped = BRACKETS.replace_all(&separated, "");
    HYPHEN_RUNS.replace_all(&stripped, "--").into_owned()
}
