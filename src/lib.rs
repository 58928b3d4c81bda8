//! # Tempo Tokens - design tokens and WCAG contrast checks
//!
//! `tempo-tokens` holds the design tokens of the Tempo UI component library
//! (colors, typography, spacing, component sizes) and the contrast engine
//! that keeps text readable against any background.
//!
//! ## Token store
//!
//! [`TokenStore`] holds one live [`DesignTokens`] value. Overrides are
//! [`PartialDesignTokens`] documents merged group by group, so changing one
//! color never resets another:
//!
//! ```rust
//! use tempo_tokens::{PartialColorTokens, PartialDesignTokens, TokenStore};
//!
//! let store = TokenStore::new();
//! store.set(PartialDesignTokens {
//!     colors: Some(PartialColorTokens {
//!         primary: Some("#111111".into()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! });
//!
//! let tokens = store.get();
//! assert_eq!(tokens.colors.primary, "#111111");
//! assert_eq!(tokens.colors.accent, "#f59e0b");
//! ```
//!
//! [`get_tokens`], [`set_tokens`] and [`reset_tokens`] operate on a
//! process-wide store. Overrides can also be loaded from JSON or YAML
//! files, see [`TokenOverrides`].
//!
//! ## Contrast engine
//!
//! ```rust
//! use tempo_tokens::{ensure_aaa_text_color, evaluate_contrast, best_text_color};
//!
//! let result = evaluate_contrast("#1a1a1a", "#ffffff");
//! assert!(result.passes_aaa);
//!
//! assert_eq!(best_text_color("#2563eb"), "#ffffff");
//!
//! let choice = ensure_aaa_text_color("#f59e0b", None);
//! assert_eq!(choice.color, "#000000");
//! ```
//!
//! Every contrast function accepts any string: colors that are not
//! `#RRGGBB` count as black. Use [`Rgb::parse`] or the `try_*` functions
//! to reject them instead.
//!
//! ## Reports
//!
//! [`render_contrast_report`] renders a [`ContrastReport`] for the terminal
//! (styled with `console`, adapting to a light or dark OS theme) or as JSON.

pub mod color;
pub mod config;
pub mod contrast;
pub mod render;
pub mod store;
pub mod tokens;

pub use color::{ColorParseError, Rgb};
pub use config::{ConfigError, TokenOverrides};
pub use contrast::{
    adjust_color_for_contrast, best_text_color, contrast_ratio, ensure_aaa_text_color,
    evaluate_contrast, relative_luminance, suggest_text_color_for_background, try_contrast_ratio,
    try_evaluate_contrast, ContrastResult, TextColorChoice, TextColorSuggestion, TextPalette,
};
pub use render::{
    force_color_mode, render_contrast_report, AdaptiveTheme, ColorMode, ContrastReport,
    OutputMode, ReportRenderer, Theme, ThemeChoice,
};
pub use store::{get_tokens, global_store, reset_tokens, set_tokens, TokenStore};
pub use tokens::{
    color_variations, default_tokens, ColorScale, ColorTokens, DesignTokens, FontFamily,
    FontSizeScale, FontWeights, GoogleFont, LineHeights, PartialColorTokens, PartialDesignTokens,
    PartialFontFamily, PartialFontSizeScale, PartialFontWeights, PartialLineHeights,
    PartialSizeTokens, PartialSpacingTokens, PartialTextColorTokens, PartialTypographyTokens,
    SizeTokens, SpacingTokens, TextColorTokens, TypographyTokens, GOOGLE_FONTS,
};
