//! Hex color parsing.
//!
//! - [`Rgb`]: an sRGB color with strict and permissive hex parsing
//! - [`ColorParseError`]: why a string is not a `#RRGGBB` color

mod error;
mod rgb;

pub use error::ColorParseError;
pub use rgb::Rgb;
