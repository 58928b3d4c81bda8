//! Report styles and light/dark theme selection.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use console::Style;

use crate::color::Rgb;

/// A named collection of styles used when rendering reports.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("pass", Style::new().green())
///     .add("fail", Style::new().red().bold());
/// assert!(theme.has("pass"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text` with the named style; unknown names leave it unstyled.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    /// Styles for light terminal backgrounds.
    pub fn light() -> Self {
        Self::new()
            .add("title", Style::new().bold().underlined())
            .add("label", Style::new().black().dim())
            .add("value", Style::new().bold())
            .add("pass", Style::new().green())
            .add("fail", Style::new().red().bold())
            .add("note", Style::new().blue().italic())
    }

    /// Styles for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self::new()
            .add("title", Style::new().bold().underlined())
            .add("label", Style::new().white().dim())
            .add("value", Style::new().bold())
            .add("pass", Style::new().green().bright())
            .add("fail", Style::new().red().bright().bold())
            .add("note", Style::new().cyan().italic())
    }
}

/// Renders a two-cell color block for `color` in the closest of the 240
/// non-system 256-color palette entries.
pub(crate) fn swatch(color: Rgb) -> String {
    Style::new()
        .color256(palette_index(color))
        .force_styling(true)
        .apply_to("\u{2588}\u{2588}")
        .to_string()
}

/// Channel values of the 6x6x6 cube at indices 16..=231.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Picks whichever of the cube color or the gray ramp (232..=255, values
/// 8..=238 in steps of 10) lies closer to `color`. Ties go to the cube.
fn palette_index(color: Rgb) -> u8 {
    let cube = [color.r, color.g, color.b].map(nearest_cube_level);
    let cube_color = Rgb::new(
        CUBE_LEVELS[cube[0]],
        CUBE_LEVELS[cube[1]],
        CUBE_LEVELS[cube[2]],
    );

    let mean = (color.r as u32 + color.g as u32 + color.b as u32) / 3;
    let step = ((mean.saturating_sub(8) + 5) / 10).min(23);
    let gray = (8 + 10 * step) as u8;

    if distance(color, Rgb::new(gray, gray, gray)) < distance(color, cube_color) {
        232 + step as u8
    } else {
        16 + (36 * cube[0] + 6 * cube[1] + cube[2]) as u8
    }
}

fn nearest_cube_level(channel: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (**level as i32 - channel as i32).abs())
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn distance(a: Rgb, b: Rgb) -> i32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2);
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
}

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A light/dark pair of themes, resolved against the OS color mode.
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub(crate) fn resolve(&self) -> Theme {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }
}

/// Either a fixed theme or one that follows the OS color mode.
#[derive(Debug)]
pub enum ThemeChoice<'a> {
    Theme(&'a Theme),
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    pub(crate) fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => (*theme).clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

static FORCED_MODE: RwLock<Option<ColorMode>> = RwLock::new(None);

/// Pins every [`AdaptiveTheme`] to `mode`; `None` goes back to asking the OS.
pub fn force_color_mode(mode: Option<ColorMode>) {
    *FORCED_MODE.write().unwrap_or_else(PoisonError::into_inner) = mode;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let forced = *FORCED_MODE.read().unwrap_or_else(PoisonError::into_inner);
    forced.unwrap_or_else(|| match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    })
}
