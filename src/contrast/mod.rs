//! WCAG 2.1 contrast engine.
//!
//! This module provides:
//!
//! - [`contrast_ratio`] and [`evaluate_contrast`]: raw ratio and compliance flags
//! - [`best_text_color`] and [`ensure_aaa_text_color`]: black-or-white selection
//! - [`suggest_text_color_for_background`]: selection among named palette colors
//!
//! All functions operate on `#RRGGBB` strings and are total: a string that
//! does not parse is treated as black. The `try_*` variants report parse
//! failures instead.

mod pick;
mod wcag;

pub use pick::{
    adjust_color_for_contrast, best_text_color, ensure_aaa_text_color,
    suggest_text_color_for_background, TextColorChoice, TextColorSuggestion, TextPalette, BLACK,
    WHITE,
};
pub use wcag::{
    contrast_ratio, evaluate_contrast, relative_luminance, rgb_contrast_ratio,
    try_contrast_ratio, try_evaluate_contrast, ContrastResult, AAA_LARGE, AAA_NORMAL, AA_LARGE,
    AA_NORMAL,
};
