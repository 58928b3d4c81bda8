//! Color parsing errors.

/// Error returned when a string is not a valid `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input does not have six hex digits (after an optional `#`)
    InvalidLength { input: String },
    /// The input contains a character that is not a hex digit
    InvalidDigit { input: String },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::InvalidLength { input } => {
                write!(f, "color '{}' must have exactly six hex digits", input)
            }
            ColorParseError::InvalidDigit { input } => {
                write!(f, "color '{}' contains a non-hex character", input)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
