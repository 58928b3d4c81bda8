//! Typography tokens: font families, size scale, weights and line heights.

use serde::{Deserialize, Serialize};

use super::assign;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl Default for FontFamily {
    fn default() -> Self {
        Self {
            primary: r#"Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#
                .into(),
            secondary: None,
        }
    }
}

/// Font sizes from `xs` (12px) to `4xl` (36px), as rem strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizeScale {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    #[serde(rename = "4xl")]
    pub xl4: String,
}

impl Default for FontSizeScale {
    fn default() -> Self {
        Self {
            xs: "0.75rem".into(),
            sm: "0.875rem".into(),
            base: "1rem".into(),
            lg: "1.125rem".into(),
            xl: "1.25rem".into(),
            xl2: "1.5rem".into(),
            xl3: "1.875rem".into(),
            xl4: "2.25rem".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            light: 300,
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

impl Default for LineHeights {
    fn default() -> Self {
        Self {
            tight: 1.25,
            normal: 1.5,
            relaxed: 1.75,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: FontFamily,
    pub font_size: FontSizeScale,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

impl TypographyTokens {
    /// Overrides the leaves present in `partial`, sub-group by sub-group.
    pub fn merge(&mut self, partial: PartialTypographyTokens) {
        if let Some(family) = partial.font_family {
            self.font_family.merge(family);
        }
        if let Some(size) = partial.font_size {
            self.font_size.merge(size);
        }
        if let Some(weight) = partial.font_weight {
            self.font_weight.merge(weight);
        }
        if let Some(line_height) = partial.line_height {
            self.line_height.merge(line_height);
        }
    }
}

impl FontFamily {
    pub fn merge(&mut self, partial: PartialFontFamily) {
        assign(&mut self.primary, partial.primary);
        if partial.secondary.is_some() {
            self.secondary = partial.secondary;
        }
    }
}

impl FontSizeScale {
    pub fn merge(&mut self, partial: PartialFontSizeScale) {
        assign(&mut self.xs, partial.xs);
        assign(&mut self.sm, partial.sm);
        assign(&mut self.base, partial.base);
        assign(&mut self.lg, partial.lg);
        assign(&mut self.xl, partial.xl);
        assign(&mut self.xl2, partial.xl2);
        assign(&mut self.xl3, partial.xl3);
        assign(&mut self.xl4, partial.xl4);
    }
}

impl FontWeights {
    pub fn merge(&mut self, partial: PartialFontWeights) {
        assign(&mut self.light, partial.light);
        assign(&mut self.normal, partial.normal);
        assign(&mut self.medium, partial.medium);
        assign(&mut self.semibold, partial.semibold);
        assign(&mut self.bold, partial.bold);
    }
}

impl LineHeights {
    pub fn merge(&mut self, partial: PartialLineHeights) {
        assign(&mut self.tight, partial.tight);
        assign(&mut self.normal, partial.normal);
        assign(&mut self.relaxed, partial.relaxed);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTypographyTokens {
    pub font_family: Option<PartialFontFamily>,
    pub font_size: Option<PartialFontSizeScale>,
    pub font_weight: Option<PartialFontWeights>,
    pub line_height: Option<PartialLineHeights>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFontFamily {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl PartialFontFamily {
    /// Sets the primary family, e.g. from a [`GoogleFont`] value.
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            primary: Some(value.into()),
            secondary: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFontSizeScale {
    pub xs: Option<String>,
    pub sm: Option<String>,
    pub base: Option<String>,
    pub lg: Option<String>,
    pub xl: Option<String>,
    #[serde(rename = "2xl")]
    pub xl2: Option<String>,
    #[serde(rename = "3xl")]
    pub xl3: Option<String>,
    #[serde(rename = "4xl")]
    pub xl4: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFontWeights {
    pub light: Option<u16>,
    pub normal: Option<u16>,
    pub medium: Option<u16>,
    pub semibold: Option<u16>,
    pub bold: Option<u16>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialLineHeights {
    pub tight: Option<f32>,
    pub normal: Option<f32>,
    pub relaxed: Option<f32>,
}

/// A web font offered by the token customizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoogleFont {
    pub name: &'static str,
    /// CSS `font-family` value
    pub value: &'static str,
}

pub const GOOGLE_FONTS: &[GoogleFont] = &[
    GoogleFont {
        name: "Inter",
        value: "Inter, sans-serif",
    },
    GoogleFont {
        name: "Montserrat",
        value: r#""Montserrat", sans-serif"#,
    },
    GoogleFont {
        name: "Open Sans",
        value: r#""Open Sans", sans-serif"#,
    },
    GoogleFont {
        name: "Lato",
        value: r#""Lato", sans-serif"#,
    },
    GoogleFont {
        name: "Roboto",
        value: r#""Roboto", sans-serif"#,
    },
    GoogleFont {
        name: "Poppins",
        value: r#""Poppins", sans-serif"#,
    },
    GoogleFont {
        name: "Raleway",
        value: r#""Raleway", sans-serif"#,
    },
];

impl GoogleFont {
    /// Looks up a font by display name, ignoring case.
    pub fn find(name: &str) -> Option<&'static GoogleFont> {
        GOOGLE_FONTS
            .iter()
            .find(|font| font.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_uses_numeric_keys() {
        let json = serde_json::to_value(FontSizeScale::default()).unwrap();
        assert_eq!(json["2xl"], "1.5rem");
        assert_eq!(json["4xl"], "2.25rem");
    }

    #[test]
    fn test_secondary_family_is_optional() {
        let family: FontFamily = serde_json::from_str(r#"{"primary": "Lato"}"#).unwrap();
        assert_eq!(family.secondary, None);
        let json = serde_json::to_value(&family).unwrap();
        assert!(json.get("secondary").is_none());
    }

    #[test]
    fn test_merge_single_font_size() {
        let mut typography = TypographyTokens::default();
        typography.merge(PartialTypographyTokens {
            font_size: Some(PartialFontSizeScale {
                base: Some("1.125rem".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(typography.font_size.base, "1.125rem");
        assert_eq!(typography.font_size.xs, "0.75rem");
        assert_eq!(typography.font_size.xl4, "2.25rem");
        assert_eq!(typography.font_family, FontFamily::default());
    }

    #[test]
    fn test_merge_secondary_family_keeps_primary() {
        let mut typography = TypographyTokens::default();
        typography.merge(PartialTypographyTokens {
            font_family: Some(PartialFontFamily {
                secondary: Some("Georgia, serif".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(typography.font_family.primary, FontFamily::default().primary);
        assert_eq!(
            typography.font_family.secondary.as_deref(),
            Some("Georgia, serif")
        );
    }

    #[test]
    fn test_merge_weights_and_line_heights_by_leaf() {
        let mut typography = TypographyTokens::default();
        typography.merge(PartialTypographyTokens {
            font_weight: Some(PartialFontWeights {
                bold: Some(800),
                ..Default::default()
            }),
            line_height: Some(PartialLineHeights {
                relaxed: Some(1.8),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(typography.font_weight.bold, 800);
        assert_eq!(typography.font_weight.light, 300);
        assert_eq!(typography.line_height.relaxed, 1.8);
        assert_eq!(typography.line_height.tight, 1.25);
    }

    #[test]
    fn test_partial_typography_accepts_single_leaves() {
        let partial: PartialTypographyTokens =
            serde_json::from_str(r#"{"fontSize": {"2xl": "1.75rem"}, "fontWeight": {"normal": 450}}"#)
                .unwrap();
        assert_eq!(partial.font_size.unwrap().xl2.as_deref(), Some("1.75rem"));
        assert_eq!(partial.font_weight.unwrap().normal, Some(450));
    }

    #[test]
    fn test_find_google_font() {
        let font = GoogleFont::find("open sans").unwrap();
        assert_eq!(font.value, r#""Open Sans", sans-serif"#);
        assert!(GoogleFont::find("Comic Sans").is_none());
    }
}
