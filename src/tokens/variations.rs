//! Tint and shade scales derived from a single base color.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Rgb;

/// Brightness offsets per shade, as a fraction of 255. `500` is the base.
const SHADE_STEPS: &[(u16, f64)] = &[
    (50, 0.95),
    (100, 0.9),
    (200, 0.8),
    (300, 0.7),
    (400, 0.5),
    (600, -0.1),
    (700, -0.2),
    (800, -0.3),
    (900, -0.4),
];

/// Shades `50` (lightest) to `900` (darkest) of a base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorScale {
    shades: BTreeMap<u16, String>,
}

impl ColorScale {
    pub fn get(&self, shade: u16) -> Option<&str> {
        self.shades.get(&shade).map(String::as_str)
    }

    /// Shades in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.shades.iter().map(|(shade, color)| (*shade, color.as_str()))
    }
}

/// Builds the `50`..`900` scale for `base`.
///
/// Shade `500` is `base` exactly as given; the others are lowercase hex.
///
/// `base` is read as one hexadecimal number, not as channel pairs: the
/// first `#` is dropped and the longest run of hex digits is used, so
/// `#fff` is `0x000fff` and a base with no leading digits is black.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::color_variations;
///
/// let scale = color_variations("#2563eb");
/// assert_eq!(scale.get(500), Some("#2563eb"));
/// assert_eq!(scale.get(600), Some("#0c4ad2"));
/// assert_eq!(scale.get(50), Some("#ffffff"));
/// ```
pub fn color_variations(base: &str) -> ColorScale {
    let rgb = packed_rgb(base);
    let mut shades: BTreeMap<u16, String> = SHADE_STEPS
        .iter()
        .map(|&(shade, amount)| (shade, adjust_brightness(rgb, amount).to_hex()))
        .collect();
    shades.insert(500, base.to_string());

    ColorScale { shades }
}

/// Reads `base` as a packed `0xRRGGBB` number, keeping the low 32 bits.
fn packed_rgb(base: &str) -> Rgb {
    let stripped = base.replacen('#', "", 1);
    let mut rest = stripped.trim_start();

    let negative = rest.starts_with('-');
    rest = rest.strip_prefix(['-', '+']).unwrap_or(rest);
    rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);

    let mut value = rest
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| acc.wrapping_mul(16).wrapping_add(digit));
    if negative {
        value = value.wrapping_neg();
    }
    if Rgb::parse(base).is_err() {
        log::debug!("shade base '{}' read as packed value {:#08x}", base, value & 0xff_ffff);
    }

    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

fn adjust_brightness(rgb: Rgb, amount: f64) -> Rgb {
    // Half-way cases round toward positive infinity: -25.5 becomes -25
    let delta = (255.0 * amount + 0.5).floor() as i32;
    rgb.shifted(delta)
}
