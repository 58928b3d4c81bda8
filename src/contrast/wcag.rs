//! WCAG 2.1 luminance, contrast ratio and compliance evaluation.
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5:1       | 3:1        |
//! | AAA   | 7:1         | 4.5:1      |

use serde::Serialize;

use crate::color::{ColorParseError, Rgb};

/// Minimum ratio for AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Compliance of a foreground/background pair.
///
/// `ratio` is rounded to two decimals for display; the flags are computed
/// from the unrounded ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    #[serde(rename = "passesAALarge")]
    pub passes_aa_large: bool,
    #[serde(rename = "passesAAALarge")]
    pub passes_aaa_large: bool,
}

impl ContrastResult {
    /// Builds the result for a raw (unrounded) contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            passes_aa: ratio >= AA_NORMAL,
            passes_aaa: ratio >= AAA_NORMAL,
            passes_aa_large: ratio >= AA_LARGE,
            passes_aaa_large: ratio >= AAA_LARGE,
        }
    }

    /// Short label for the highest normal-text level reached.
    pub fn level(&self) -> &'static str {
        if self.passes_aaa {
            "AAA"
        } else if self.passes_aa {
            "AA"
        } else {
            "below AA"
        }
    }
}

/// Relative luminance of a hex color; unparseable input counts as black.
pub fn relative_luminance(color: &str) -> f64 {
    Rgb::from_hex_lossy(color).relative_luminance()
}

/// Contrast ratio between two colors, in `[1, 21]`, unrounded.
///
/// See <https://www.w3.org/WAI/GL/wiki/Contrast_ratio>.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::contrast_ratio;
///
/// assert_eq!(contrast_ratio("#000000", "#ffffff"), 21.0);
/// assert_eq!(contrast_ratio("#2563eb", "#2563eb"), 1.0);
/// ```
pub fn contrast_ratio(color1: &str, color2: &str) -> f64 {
    rgb_contrast_ratio(Rgb::from_hex_lossy(color1), Rgb::from_hex_lossy(color2))
}

/// Contrast ratio between two already-parsed colors.
pub fn rgb_contrast_ratio(color1: Rgb, color2: Rgb) -> f64 {
    let lum1 = color1.relative_luminance();
    let lum2 = color2.relative_luminance();

    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);

    (lighter + 0.05) / (darker + 0.05)
}

/// Evaluates `foreground` on `background` against the WCAG thresholds.
pub fn evaluate_contrast(foreground: &str, background: &str) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(foreground, background))
}

/// Like [`contrast_ratio`] but rejects malformed colors.
pub fn try_contrast_ratio(color1: &str, color2: &str) -> Result<f64, ColorParseError> {
    Ok(rgb_contrast_ratio(Rgb::parse(color1)?, Rgb::parse(color2)?))
}

/// Like [`evaluate_contrast`] but rejects malformed colors.
pub fn try_evaluate_contrast(
    foreground: &str,
    background: &str,
) -> Result<ContrastResult, ColorParseError> {
    try_contrast_ratio(foreground, background).map(ContrastResult::from_ratio)
}
