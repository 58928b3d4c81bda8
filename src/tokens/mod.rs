//! Design tokens: the named values every component reads at render time.
//!
//! This module provides:
//!
//! - [`DesignTokens`]: the full token set (colors, typography, spacing, sizes)
//! - [`PartialDesignTokens`]: an override document merged onto a token set
//! - [`color_variations`]: `50`..`900` shade scales for a base color
//! - [`GOOGLE_FONTS`]: the web fonts offered for `fontFamily`
//!
//! Field names serialize the way the web components expect them
//! (`fontSize`, `onPrimary`, `2xl`), so JSON or YAML token documents can be
//! shared between both sides.

mod colors;
mod spacing;
mod typography;
mod variations;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use colors::{ColorTokens, PartialColorTokens, PartialTextColorTokens, TextColorTokens};
pub use spacing::{PartialSizeTokens, PartialSpacingTokens, SizeTokens, SpacingTokens};
pub use typography::{
    FontFamily, FontSizeScale, FontWeights, GoogleFont, LineHeights, PartialFontFamily,
    PartialFontSizeScale, PartialFontWeights, PartialLineHeights, PartialTypographyTokens,
    TypographyTokens, GOOGLE_FONTS,
};
pub use variations::{color_variations, ColorScale};

/// The complete set of design tokens.
///
/// Every field has a default; [`DesignTokens::default`] is the built-in
/// token set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub sizes: SizeTokens,
}

static DEFAULT_TOKENS: Lazy<DesignTokens> = Lazy::new(DesignTokens::default);

/// The immutable built-in token set.
pub fn default_tokens() -> &'static DesignTokens {
    &DEFAULT_TOKENS
}

impl DesignTokens {
    /// Merges `partial` onto this token set.
    ///
    /// Each top-level group merges on its own, and nested groups
    /// (`colors.text`, `typography.fontSize`, ...) merge leaf by leaf.
    /// Fields absent from `partial` keep their current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tempo_tokens::{DesignTokens, PartialColorTokens, PartialDesignTokens};
    ///
    /// let mut tokens = DesignTokens::default();
    /// tokens.merge(PartialDesignTokens {
    ///     colors: Some(PartialColorTokens {
    ///         primary: Some("#111111".into()),
    ///         ..Default::default()
    ///     }),
    ///     ..Default::default()
    /// });
    ///
    /// assert_eq!(tokens.colors.primary, "#111111");
    /// assert_eq!(tokens.colors.secondary, "#64748b");
    /// ```
    pub fn merge(&mut self, partial: PartialDesignTokens) {
        if let Some(colors) = partial.colors {
            self.colors.merge(colors);
        }
        if let Some(typography) = partial.typography {
            self.typography.merge(typography);
        }
        if let Some(spacing) = partial.spacing {
            self.spacing.merge(spacing);
        }
        if let Some(sizes) = partial.sizes {
            self.sizes.merge(sizes);
        }
    }

    /// Returns a copy with `partial` merged on top.
    pub fn merged(&self, partial: PartialDesignTokens) -> Self {
        let mut tokens = self.clone();
        tokens.merge(partial);
        tokens
    }
}

/// Overrides for a [`DesignTokens`] value.
///
/// Deserialization is permissive: unknown keys are ignored and missing keys
/// simply do not override anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialDesignTokens {
    pub colors: Option<PartialColorTokens>,
    pub typography: Option<PartialTypographyTokens>,
    pub spacing: Option<PartialSpacingTokens>,
    pub sizes: Option<PartialSizeTokens>,
}

impl PartialDesignTokens {
    /// True when applying this would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_match_builtin() {
        assert_eq!(default_tokens(), &DesignTokens::default());
        assert_eq!(default_tokens().colors.primary, "#2563eb");
        assert_eq!(default_tokens().sizes.md, "2.5rem");
    }

    #[test]
    fn test_merge_groups_independently() {
        let tokens = DesignTokens::default().merged(PartialDesignTokens {
            spacing: Some(PartialSpacingTokens {
                md: Some("1.25rem".into()),
                ..Default::default()
            }),
            sizes: Some(PartialSizeTokens {
                xs: Some("1.75rem".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(tokens.spacing.md, "1.25rem");
        assert_eq!(tokens.spacing.lg, "1.5rem");
        assert_eq!(tokens.sizes.xs, "1.75rem");
        assert_eq!(tokens.colors, ColorTokens::default());
        assert_eq!(tokens.typography, TypographyTokens::default());
    }

    #[test]
    fn test_empty_partial_changes_nothing() {
        let partial = PartialDesignTokens::default();
        assert!(partial.is_empty());
        assert_eq!(DesignTokens::default().merged(partial), DesignTokens::default());
    }

    #[test]
    fn test_partial_ignores_unknown_keys() {
        let partial: PartialDesignTokens = serde_json::from_str(
            r##"{"colors": {"accent": "#10b981", "tertiary": "#000000"}, "shadows": {}}"##,
        )
        .unwrap();

        assert_eq!(
            partial.colors.unwrap().accent.as_deref(),
            Some("#10b981")
        );
    }

    #[test]
    fn test_full_tokens_round_trip_through_json() {
        let json = serde_json::to_string(&DesignTokens::default()).unwrap();
        assert!(json.contains(r#""fontWeight""#));
        let back: DesignTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DesignTokens::default());
    }
}
