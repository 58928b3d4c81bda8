//! Spacing scale and component heights.

use serde::{Deserialize, Serialize};

use super::assign;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xl2: String,
    #[serde(rename = "3xl")]
    pub xl3: String,
    #[serde(rename = "4xl")]
    pub xl4: String,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: "0.25rem".into(),
            sm: "0.5rem".into(),
            md: "1rem".into(),
            lg: "1.5rem".into(),
            xl: "2rem".into(),
            xl2: "3rem".into(),
            xl3: "4rem".into(),
            xl4: "6rem".into(),
        }
    }
}

impl SpacingTokens {
    pub fn merge(&mut self, partial: PartialSpacingTokens) {
        assign(&mut self.xs, partial.xs);
        assign(&mut self.sm, partial.sm);
        assign(&mut self.md, partial.md);
        assign(&mut self.lg, partial.lg);
        assign(&mut self.xl, partial.xl);
        assign(&mut self.xl2, partial.xl2);
        assign(&mut self.xl3, partial.xl3);
        assign(&mut self.xl4, partial.xl4);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSpacingTokens {
    pub xs: Option<String>,
    pub sm: Option<String>,
    pub md: Option<String>,
    pub lg: Option<String>,
    pub xl: Option<String>,
    #[serde(rename = "2xl")]
    pub xl2: Option<String>,
    #[serde(rename = "3xl")]
    pub xl3: Option<String>,
    #[serde(rename = "4xl")]
    pub xl4: Option<String>,
}

/// Heights for interactive components (buttons, inputs, selects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTokens {
    /// 24px
    pub xs: String,
    /// 32px
    pub sm: String,
    /// 40px
    pub md: String,
    /// 48px
    pub lg: String,
    /// 56px
    pub xl: String,
}

impl Default for SizeTokens {
    fn default() -> Self {
        Self {
            xs: "1.5rem".into(),
            sm: "2rem".into(),
            md: "2.5rem".into(),
            lg: "3rem".into(),
            xl: "3.5rem".into(),
        }
    }
}

impl SizeTokens {
    pub fn merge(&mut self, partial: PartialSizeTokens) {
        assign(&mut self.xs, partial.xs);
        assign(&mut self.sm, partial.sm);
        assign(&mut self.md, partial.md);
        assign(&mut self.lg, partial.lg);
        assign(&mut self.xl, partial.xl);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSizeTokens {
    pub xs: Option<String>,
    pub sm: Option<String>,
    pub md: Option<String>,
    pub lg: Option<String>,
    pub xl: Option<String>,
}
