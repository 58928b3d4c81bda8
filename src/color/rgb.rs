//! sRGB color values parsed from hex strings.

use std::fmt;
use std::str::FromStr;

use super::error::ColorParseError;

/// An 8-bit-per-channel sRGB color.
///
/// The only textual representation accepted is six hex digits with an
/// optional leading `#`, case-insensitive (`#2563EB`, `2563eb`).
///
/// # Example
///
/// ```rust
/// use tempo_tokens::Rgb;
///
/// let blue: Rgb = "#2563eb".parse().unwrap();
/// assert_eq!(blue, Rgb::new(0x25, 0x63, 0xeb));
/// assert_eq!(blue.to_hex(), "#2563eb");
///
/// // The permissive path never fails
/// assert_eq!(Rgb::from_hex_lossy("not a color"), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string, reporting why it is invalid.
    pub fn parse(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength {
                input: hex.to_string(),
            });
        }
        // from_str_radix tolerates a leading sign, so check digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::InvalidDigit {
                input: hex.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parses a `#RRGGBB` string, treating anything unparseable as black.
    ///
    /// Every contrast operation goes through this path so that they are
    /// defined for all inputs. Malformed input silently skews results; use
    /// [`Rgb::parse`] when the caller needs to know.
    pub fn from_hex_lossy(hex: &str) -> Self {
        match Self::parse(hex) {
            Ok(rgb) => rgb,
            Err(err) => {
                log::warn!("{}; treating it as black", err);
                Self::BLACK
            }
        }
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`.
    ///
    /// See <https://www.w3.org/WAI/GL/wiki/Relative_luminance>.
    pub fn relative_luminance(&self) -> f64 {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Returns the color with `delta` added to every channel, clamped to `[0, 255]`.
    pub(crate) fn shifted(&self, delta: i32) -> Self {
        let shift = |c: u8| (c as i32 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

fn linearize(channel: u8) -> f64 {
    let value = channel as f64 / 255.0;
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
