//! Token overrides loaded from JSON or YAML documents.
//!
//! An override document has the same shape as the token set, with every
//! field optional:
//!
//! ```yaml
//! colors:
//!   primary: "#7c3aed"
//!   text:
//!     onPrimary: "#ffffff"
//! spacing:
//!   2xl: 2.5rem
//! ```
//!
//! Unknown keys are ignored so documents written for a newer token set
//! still load.

mod error;

use std::path::Path;

pub use error::ConfigError;

use crate::tokens::PartialDesignTokens;

/// A parsed override document, ready to merge into a token store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenOverrides {
    partial: PartialDesignTokens,
}

impl TokenOverrides {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let partial = serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: "JSON",
            message: e.to_string(),
        })?;
        Ok(Self { partial })
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes to unit, not to a map
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let partial = serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "YAML",
            message: e.to_string(),
        })?;
        Ok(Self { partial })
    }

    /// Reads a document, choosing the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        log::debug!("loading token overrides from {}", path.display());
        parse(&source)
    }

    pub fn partial(&self) -> &PartialDesignTokens {
        &self.partial
    }

    pub fn into_partial(self) -> PartialDesignTokens {
        self.partial
    }
}

impl From<PartialDesignTokens> for TokenOverrides {
    fn from(partial: PartialDesignTokens) -> Self {
        Self { partial }
    }
}
