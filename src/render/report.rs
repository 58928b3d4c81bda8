//! Contrast report rendering.

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use super::filters::register_filters;
use super::output::OutputMode;
use super::theme::ThemeChoice;
use crate::contrast::{
    best_text_color, ensure_aaa_text_color, evaluate_contrast, suggest_text_color_for_background,
    ContrastResult, TextColorChoice, TextColorSuggestion, TextPalette,
};

const CONTRAST_TEMPLATE: &str = r#"{{ "Contrast check" | style("title") }}
{{ "Foreground" | pad(18) | style("label") }}{{ foreground | swatch }}{{ foreground | style("value") }}
{{ "Background" | pad(18) | style("label") }}{{ background | swatch }}{{ background | style("value") }}
{{ "Contrast Ratio" | pad(18) | style("label") }}{{ contrast.ratio | ratio }}:1
{{ "AA Compliance" | pad(18) | style("label") }}{{ contrast.passesAA | verdict }}
{{ "AAA Compliance" | pad(18) | style("label") }}{{ contrast.passesAAA | verdict }}
{{ "AA Large Text" | pad(18) | style("label") }}{{ contrast.passesAALarge | verdict }}
{{ "AAA Large Text" | pad(18) | style("label") }}{{ contrast.passesAAALarge | verdict }}
{{ "Recommended (AAA)" | pad(18) | style("label") }}{{ recommended.color | swatch }}{{ recommended.color | style("value") }} ({{ recommended.contrast.ratio | ratio }}:1)
{%- if not recommended.contrast.passesAAA %}
{{ "" | pad(18) }}{{ "no black or white text reaches AAA here" | style("fail") }}
{%- endif %}
{%- if suggestion %}
{{ "Palette text" | pad(18) | style("label") }}{{ suggestion.color | swatch }}{{ suggestion.variable | style("value") }} {{ suggestion.color }}
{{ "" | pad(18) }}{{ suggestion.reason | style("note") }}
{%- endif %}
"#;

/// Everything known about one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub contrast: ContrastResult,
    /// Black or white, whichever contrasts more
    pub best_text_color: &'static str,
    pub recommended: TextColorChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<TextColorSuggestion>,
}

impl ContrastReport {
    /// Evaluates `foreground` on `background`; the AAA recommendation keeps
    /// `foreground` when it already qualifies.
    pub fn build(foreground: &str, background: &str) -> Self {
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            contrast: evaluate_contrast(foreground, background),
            best_text_color: best_text_color(background),
            recommended: ensure_aaa_text_color(background, Some(foreground)),
            suggestion: None,
        }
    }

    /// Adds the palette suggestion for the background.
    pub fn with_palette(mut self, palette: &TextPalette) -> Self {
        self.suggestion = Some(suggest_text_color_for_background(
            &self.background,
            palette,
        ));
        self
    }
}

/// A renderer with the report templates pre-compiled.
pub struct ReportRenderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl ReportRenderer {
    pub fn new<'a>(theme: impl Into<ThemeChoice<'a>>, mode: OutputMode) -> Result<Self, Error> {
        let theme = theme.into().resolve();
        let mut env = Environment::new();
        register_filters(&mut env, theme, mode.should_use_color());
        env.add_template("contrast", CONTRAST_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    /// Renders a report as text, or as JSON in [`OutputMode::Json`].
    pub fn render(&self, report: &ContrastReport) -> Result<String, Error> {
        if self.mode.is_structured() {
            return to_json(report);
        }
        self.env.get_template("contrast")?.render(report)
    }
}

/// Renders a single report.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::{render_contrast_report, ContrastReport, OutputMode, Theme};
///
/// let report = ContrastReport::build("#1a1a1a", "#ffffff");
/// let text = render_contrast_report(&report, &Theme::light(), OutputMode::Text).unwrap();
/// assert!(text.contains("Contrast Ratio"));
/// assert!(text.contains("17.4:1"));
/// ```
pub fn render_contrast_report<'a>(
    report: &ContrastReport,
    theme: impl Into<ThemeChoice<'a>>,
    mode: OutputMode,
) -> Result<String, Error> {
    ReportRenderer::new(theme, mode)?.render(report)
}

/// Serializes any report data as pretty JSON, reported as a render error on failure.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(data)
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Theme;

    #[test]
    fn test_build_keeps_compliant_foreground() {
        let report = ContrastReport::build("#1a1a1a", "#ffffff");
        assert_eq!(report.recommended.color, "#1a1a1a");
        assert_eq!(report.best_text_color, "#000000");
        assert!(report.suggestion.is_none());
    }

    #[test]
    fn test_build_recommends_replacement() {
        let report = ContrastReport::build("#64748b", "#ffffff");
        assert!(!report.contrast.passes_aaa);
        assert_eq!(report.recommended.color, "#000000");
    }

    #[test]
    fn test_render_text_report() {
        let report = ContrastReport::build("#000000", "#ffffff");
        let out = render_contrast_report(&report, &Theme::light(), OutputMode::Text).unwrap();

        assert!(out.starts_with("Contrast check\n"));
        assert!(out.contains("Contrast Ratio    21:1"));
        assert!(out.contains("AAA Compliance    \u{2713} Pass"));
        assert!(out.contains("Recommended (AAA) #000000 (21:1)"));
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_render_failing_pair() {
        let report = ContrastReport::build("#777777", "#777777");
        let out = render_contrast_report(&report, &Theme::light(), OutputMode::Text).unwrap();
        assert!(out.contains("AA Compliance     \u{2717} Fail"));
        assert!(out.contains("no black or white text reaches AAA here"));
    }

    #[test]
    fn test_render_with_palette_suggestion() {
        let palette = TextPalette::new("#1a1a1a", "#4a5568", "#ffffff");
        let report = ContrastReport::build("#ffffff", "#0a0a0a").with_palette(&palette);
        let out = render_contrast_report(&report, &Theme::light(), OutputMode::Text).unwrap();
        assert!(out.contains("Palette text      text-inverse #ffffff"));
    }

    #[test]
    fn test_render_term_is_styled() {
        let report = ContrastReport::build("#000000", "#ffffff");
        let out = render_contrast_report(&report, &Theme::light(), OutputMode::Term).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("38;5;16"));
    }

    #[test]
    fn test_render_json() {
        let palette = TextPalette::new("#1a1a1a", "#4a5568", "#ffffff");
        let report = ContrastReport::build("#000000", "#ffffff").with_palette(&palette);
        let out = render_contrast_report(&report, &Theme::light(), OutputMode::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["contrast"]["ratio"], 21.0);
        assert_eq!(json["bestTextColor"], "#000000");
        assert_eq!(json["recommended"]["color"], "#000000");
        assert_eq!(json["suggestion"]["variable"], "text-primary");
    }

    #[test]
    fn test_renderer_reuses_compiled_template() {
        let renderer = ReportRenderer::new(&Theme::dark(), OutputMode::Text).unwrap();
        let a = renderer.render(&ContrastReport::build("#000000", "#ffffff")).unwrap();
        let b = renderer.render(&ContrastReport::build("#ffffff", "#000000")).unwrap();
        assert!(a.contains("Foreground        #000000"));
        assert!(b.contains("Foreground        #ffffff"));
    }
}
