//! Token configuration errors.

use std::path::PathBuf;

/// Error returned when a token override document cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read
    Io { path: PathBuf, message: String },
    /// The document is not valid JSON or YAML
    Parse {
        format: &'static str,
        message: String,
    },
    /// The file extension is not `.json`, `.yaml` or `.yml`
    UnsupportedFormat { path: PathBuf },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path.display(), message)
            }
            ConfigError::Parse { format, message } => {
                write!(f, "invalid {} token overrides: {}", format, message)
            }
            ConfigError::UnsupportedFormat { path } => write!(
                f,
                "unsupported token file '{}' (expected .json, .yaml or .yml)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::Io {
            path: PathBuf::from("tokens.json"),
            message: "No such file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tokens.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("tokens.toml"),
        };
        assert!(err.to_string().contains(".yml"));
    }
}
