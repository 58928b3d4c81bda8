//! Terminal rendering of contrast reports.
//!
//! This module provides:
//!
//! - [`ContrastReport`]: evaluation, recommendation and suggestion for one pair
//! - [`ReportRenderer`] / [`render_contrast_report`]: minijinja-based rendering
//! - [`Theme`], [`AdaptiveTheme`], [`ThemeChoice`]: named `console` styles,
//!   optionally switching with the OS light/dark preference
//! - [`OutputMode`]: styled, plain or JSON output
//!
//! Templates use four filters besides `style`: `pad` (display-width
//! padding), `ratio` (`21` rather than `21.0`), `verdict` (pass/fail
//! marks) and `swatch` (a colored block, only when styling).

mod filters;
mod output;
mod report;
mod theme;

pub use output::OutputMode;
pub use report::{render_contrast_report, to_json, ContrastReport, ReportRenderer};
pub use theme::{force_color_mode, AdaptiveTheme, ColorMode, Theme, ThemeChoice};
