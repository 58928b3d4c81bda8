//! Output mode selection.

/// How a report is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style when the terminal supports color
    #[default]
    Auto,
    /// Always emit ANSI styling
    Term,
    /// Plain text, no styling
    Text,
    /// The report data as pretty-printed JSON
    Json,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!(
                "unknown output mode '{}' (expected auto, term, text or json)",
                other
            )),
        }
    }
}
