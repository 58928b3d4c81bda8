//! Text color selection for arbitrary backgrounds.
//!
//! Two independent policies live here and serve different call sites:
//!
//! - [`ensure_aaa_text_color`] chooses between pure black and pure white,
//!   keeping a caller-supplied color when it already reaches AAA.
//! - [`suggest_text_color_for_background`] chooses among the named text
//!   colors of a palette (primary, secondary, inverse).
//!
//! They must not be merged: the second one never falls back to black or
//! white and branches on background luminance first.

use serde::Serialize;

use super::wcag::{contrast_ratio, evaluate_contrast, relative_luminance, ContrastResult};
use crate::tokens::TextColorTokens;

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

/// Backgrounds brighter than this are treated as light.
const LIGHT_BACKGROUND_LUMINANCE: f64 = 0.5;

/// Returns black or white, whichever contrasts more with `background`.
///
/// Only a strictly higher black ratio picks black, so exact ties go to white.
pub fn best_text_color(background: &str) -> &'static str {
    let with_black = contrast_ratio(BLACK, background);
    let with_white = contrast_ratio(WHITE, background);

    if with_black > with_white {
        BLACK
    } else {
        WHITE
    }
}

/// Black for light backgrounds, white for dark ones, by luminance alone.
pub fn adjust_color_for_contrast(background: &str) -> &'static str {
    if relative_luminance(background) > LIGHT_BACKGROUND_LUMINANCE {
        BLACK
    } else {
        WHITE
    }
}

/// A chosen text color together with its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColorChoice {
    pub color: String,
    pub contrast: ContrastResult,
}

impl TextColorChoice {
    fn new(color: &str, contrast: ContrastResult) -> Self {
        Self {
            color: color.to_string(),
            contrast,
        }
    }
}

/// Picks a text color for `background` that reaches AAA when possible.
///
/// Priority:
///
/// 1. `current`, if given, non-empty and already AAA, is returned as is
/// 2. black or white, whichever passes AAA (higher ratio if both do)
/// 3. otherwise the better of black and white, even though it fails AAA;
///    check `contrast.passes_aaa` to detect this case
///
/// Comparisons between black and white use the rounded ratios, ties go to white.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::ensure_aaa_text_color;
///
/// let choice = ensure_aaa_text_color("#ffffff", None);
/// assert_eq!(choice.color, "#000000");
/// assert!(choice.contrast.passes_aaa);
///
/// // A compliant custom color is kept
/// let kept = ensure_aaa_text_color("#ffffff", Some("#1a1a1a"));
/// assert_eq!(kept.color, "#1a1a1a");
/// ```
pub fn ensure_aaa_text_color(background: &str, current: Option<&str>) -> TextColorChoice {
    let black = evaluate_contrast(BLACK, background);
    let white = evaluate_contrast(WHITE, background);

    if let Some(current) = current.filter(|c| !c.is_empty()) {
        let contrast = evaluate_contrast(current, background);
        if contrast.passes_aaa {
            return TextColorChoice::new(current, contrast);
        }
    }

    let better = || {
        if black.ratio > white.ratio {
            TextColorChoice::new(BLACK, black)
        } else {
            TextColorChoice::new(WHITE, white)
        }
    };

    match (black.passes_aaa, white.passes_aaa) {
        (true, true) => better(),
        (true, false) => TextColorChoice::new(BLACK, black),
        (false, true) => TextColorChoice::new(WHITE, white),
        (false, false) => {
            log::debug!(
                "neither black nor white reaches AAA on {}; using best effort",
                background
            );
            better()
        }
    }
}

/// The three palette text colors a suggestion can pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPalette {
    pub primary: String,
    pub secondary: String,
    pub inverse: String,
}

impl TextPalette {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        inverse: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            inverse: inverse.into(),
        }
    }

    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("text-primary", self.primary.as_str()),
            ("text-secondary", self.secondary.as_str()),
            ("text-inverse", self.inverse.as_str()),
        ]
    }
}

impl From<&TextColorTokens> for TextPalette {
    fn from(text: &TextColorTokens) -> Self {
        Self::new(&text.primary, &text.secondary, &text.inverse)
    }
}

/// A palette text color recommended for a background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColorSuggestion {
    /// Token variable name: `text-primary`, `text-secondary` or `text-inverse`
    pub variable: &'static str,
    pub color: String,
    pub reason: String,
    pub contrast: ContrastResult,
}

/// Suggests which palette text color to use on `background`.
///
/// Light backgrounds (luminance above 0.5) try primary, secondary, then
/// inverse; dark backgrounds try inverse. The first candidate reaching AAA
/// wins. If none does, the entry with the highest contrast is returned and
/// `reason` states the level it actually reaches.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::{suggest_text_color_for_background, TextPalette};
///
/// let palette = TextPalette::new("#1a1a1a", "#4a5568", "#ffffff");
/// let suggestion = suggest_text_color_for_background("#0a0a0a", &palette);
/// assert_eq!(suggestion.variable, "text-inverse");
/// ```
pub fn suggest_text_color_for_background(
    background: &str,
    palette: &TextPalette,
) -> TextColorSuggestion {
    let entries = palette.entries();
    let [primary, secondary, inverse] = entries;
    let is_light = relative_luminance(background) > LIGHT_BACKGROUND_LUMINANCE;

    // Light backgrounds try every entry in order, dark ones only inverse
    let preferred = if is_light { &entries[..] } else { &entries[2..] };
    let tone = if is_light { "light" } else { "dark" };

    for &(variable, color) in preferred {
        let contrast = evaluate_contrast(color, background);
        if contrast.passes_aaa {
            return TextColorSuggestion {
                variable,
                color: color.to_string(),
                reason: format!("{} meets AAA on a {} background", variable, tone),
                contrast,
            };
        }
    }

    let mut best = primary;
    let mut best_ratio = contrast_ratio(primary.1, background);
    for candidate in [secondary, inverse] {
        let ratio = contrast_ratio(candidate.1, background);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }

    let (variable, color) = best;
    let contrast = evaluate_contrast(color, background);
    TextColorSuggestion {
        variable,
        color: color.to_string(),
        reason: format!(
            "highest available contrast on a {} background ({})",
            tone,
            contrast.level()
        ),
        contrast,
    }
}
