//! CSS color classification for resolved design-token values.
//!
//! Supported syntaxes are `#rgb`, `#rrggbb`, `rgb()`, `rgba()` and the comma
//! form of `hsl()`. Other `hsl` variants and `oklch()` are recognized as
//! colors but not parsed, so a consumer can tell "looked like a color but
//! could not be parsed" apart from plain text.
//!
//! ```
//! use themescope_color::classify_and_parse;
//! use themescope_core::{ColorClassification, NormalizedColor};
//!
//! assert_eq!(
//!     classify_and_parse("#ff0000"),
//!     ColorClassification::Parsed(NormalizedColor::rgb(255, 0, 0)),
//! );
//! assert_eq!(classify_and_parse("10px"), ColorClassification::NotAColor);
//! ```

mod grammar;

pub use grammar::{classify_and_parse, hsl_to_rgb};

use themescope_core::{ColorClassification, NormalizedColor};

/// Whether a value looks like a color, whether or not it can be parsed.
pub fn is_color(value: &str) -> bool {
    classify_and_parse(value).is_color()
}

/// Parse a value into a color, if it is in a supported syntax.
pub fn parse_color(value: &str) -> Option<NormalizedColor> {
    match classify_and_parse(value) {
        ColorClassification::Parsed(color) => Some(color),
        _ => None,
    }
}
