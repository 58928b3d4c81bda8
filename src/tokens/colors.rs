//! Color tokens: brand colors and the text colors used on top of them.

use serde::{Deserialize, Serialize};

use super::assign;

/// Text colors, each chosen to reach AAA on the surface it is meant for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColorTokens {
    /// Dark text for light backgrounds
    pub primary: String,
    pub secondary: String,
    /// Light text for dark backgrounds
    pub inverse: String,
    pub on_primary: String,
    pub on_secondary: String,
    pub on_accent: String,
}

impl Default for TextColorTokens {
    fn default() -> Self {
        Self {
            primary: "#1a1a1a".into(),
            secondary: "#4a5568".into(),
            inverse: "#ffffff".into(),
            on_primary: "#ffffff".into(),
            on_secondary: "#ffffff".into(),
            on_accent: "#1a1a1a".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: TextColorTokens,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#2563eb".into(),
            secondary: "#64748b".into(),
            accent: "#f59e0b".into(),
            text: TextColorTokens::default(),
        }
    }
}

impl ColorTokens {
    /// Overrides the fields present in `partial`; `text` merges field by field.
    pub fn merge(&mut self, partial: PartialColorTokens) {
        assign(&mut self.primary, partial.primary);
        assign(&mut self.secondary, partial.secondary);
        assign(&mut self.accent, partial.accent);
        if let Some(text) = partial.text {
            self.text.merge(text);
        }
    }
}

impl TextColorTokens {
    pub fn merge(&mut self, partial: PartialTextColorTokens) {
        assign(&mut self.primary, partial.primary);
        assign(&mut self.secondary, partial.secondary);
        assign(&mut self.inverse, partial.inverse);
        assign(&mut self.on_primary, partial.on_primary);
        assign(&mut self.on_secondary, partial.on_secondary);
        assign(&mut self.on_accent, partial.on_accent);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTextColorTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub inverse: Option<String>,
    pub on_primary: Option<String>,
    pub on_secondary: Option<String>,
    pub on_accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialColorTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<PartialTextColorTokens>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let mut colors = ColorTokens::default();
        colors.merge(PartialColorTokens {
            accent: Some("#10b981".into()),
            ..Default::default()
        });

        assert_eq!(colors.accent, "#10b981");
        assert_eq!(colors.primary, "#2563eb");
        assert_eq!(colors.text, TextColorTokens::default());
    }

    #[test]
    fn test_merge_text_independently() {
        let mut colors = ColorTokens::default();
        colors.merge(PartialColorTokens {
            text: Some(PartialTextColorTokens {
                on_accent: Some("#000000".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(colors.text.on_accent, "#000000");
        assert_eq!(colors.text.primary, "#1a1a1a");
        assert_eq!(colors.text.inverse, "#ffffff");
    }

    #[test]
    fn test_text_tokens_use_camel_case() {
        let json = serde_json::to_value(TextColorTokens::default()).unwrap();
        assert_eq!(json["onPrimary"], "#ffffff");
        assert_eq!(json["onAccent"], "#1a1a1a");
    }
}
