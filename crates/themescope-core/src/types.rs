//! Core value types for color classification.

/// A color normalized to 8-bit channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f32,
}

impl NormalizedColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color, clamping alpha into `0.0..=1.0`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: clamp_unit(a) }
    }

    /// Alpha scaled to an 8-bit channel.
    pub fn alpha8(&self) -> u8 {
        (clamp_unit(self.a) * 255.0).round() as u8
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.alpha8())
    }

    /// Convert to hex string (e.g., "#ff5733", or "#ff573380" when translucent).
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Convert to a CSS `rgba()` function.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

impl Default for NormalizedColor {
    fn default() -> Self {
        Self::BLACK
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The outcome of classifying a literal string as a color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorClassification {
    /// Plain text (lengths, keywords, font stacks...).
    NotAColor,
    /// Looks like a color, but no parser exists for the syntax or the payload was malformed.
    RecognizedUnsupported,
    /// A color that was parsed successfully.
    Parsed(NormalizedColor),
}

impl ColorClassification {
    /// Whether the value looked like a color, parsed or not.
    pub fn is_color(&self) -> bool {
        !matches!(self, ColorClassification::NotAColor)
    }

    /// Try to get the parsed color.
    pub fn color(&self) -> Option<NormalizedColor> {
        match self {
            ColorClassification::Parsed(c) => Some(*c),
            _ => None,
        }
    }
}
