//! Grammar rules for CSS color literals.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    number::complete::double,
    sequence::{delimited, pair, preceded},
    IResult,
};

use themescope_core::{ColorClassification, NormalizedColor};

/// Classify a resolved value and parse it when the syntax is supported.
///
/// The input is trimmed and lower-cased first. This function is total: every
/// input maps to a classification and nothing panics.
pub fn classify_and_parse(value: &str) -> ColorClassification {
    let value = value.trim().to_lowercase();

    if let Ok((_, digits)) = hex_digits(&value) {
        return match parse_hex(digits) {
            Some(color) => ColorClassification::Parsed(color),
            None => ColorClassification::NotAColor,
        };
    }

    if let Some(inner) = function_body(&value, "rgb") {
        return payload(parse_rgb(inner));
    }

    if let Some(inner) = function_body(&value, "rgba") {
        return payload(parse_rgba(inner));
    }

    if let Some(inner) = function_body(&value, "hsl") {
        return payload(parse_hsl(inner));
    }

    // hsla(), space-separated hsl, oklch(): colors we know but do not convert
    if value.starts_with("hsl") || value.starts_with("oklch") {
        return ColorClassification::RecognizedUnsupported;
    }

    ColorClassification::NotAColor
}

fn payload(color: Option<NormalizedColor>) -> ColorClassification {
    match color {
        Some(color) => ColorClassification::Parsed(color),
        None => ColorClassification::RecognizedUnsupported,
    }
}

/// Match `#` followed only by hex digits.
fn hex_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit())))(input)
}

/// Expand `rgb` or `rrggbb` digits. Any other length is not a color.
fn parse_hex(digits: &str) -> Option<NormalizedColor> {
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => Some(NormalizedColor::rgb(
            nibble(0)? * 0x11,
            nibble(1)? * 0x11,
            nibble(2)? * 0x11,
        )),
        6 => Some(NormalizedColor::rgb(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// The text between `name(` and a trailing `)`.
fn function_body<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split on commas when there are any, otherwise on whitespace.
fn split_components(inner: &str) -> Vec<&str> {
    if inner.contains(',') {
        inner.split(',').collect()
    } else {
        inner.split_whitespace().collect()
    }
}

/// Parse a finite number surrounded by optional whitespace.
fn number(input: &str) -> Option<f64> {
    let parsed: IResult<&str, f64> =
        all_consuming(delimited(multispace0, double, multispace0))(input);
    let (_, value) = parsed.ok()?;
    value.is_finite().then_some(value)
}

/// Parse a finite number with an optional trailing `%`.
fn number_or_percent(input: &str) -> Option<(f64, bool)> {
    let parsed: IResult<&str, (f64, Option<char>)> =
        all_consuming(delimited(multispace0, pair(double, opt(char('%'))), multispace0))(input);
    let (_, (value, percent)) = parsed.ok()?;
    value.is_finite().then_some((value, percent.is_some()))
}

/// An RGB channel, clamped to `0..=255` and rounded.
fn channel(input: &str) -> Option<u8> {
    number(input).map(|v| v.clamp(0.0, 255.0).round() as u8)
}

/// An alpha value: `N%` is a percentage of 100, otherwise a unit real. Clamped.
fn alpha(input: &str) -> Option<f32> {
    let (value, percent) = number_or_percent(input)?;
    let value = if percent { value / 100.0 } else { value };
    Some(value.clamp(0.0, 1.0) as f32)
}

fn parse_rgb(inner: &str) -> Option<NormalizedColor> {
    let parts = split_components(inner);
    let [r, g, b] = parts.as_slice() else {
        return None;
    };
    Some(NormalizedColor::rgb(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_rgba(inner: &str) -> Option<NormalizedColor> {
    // Slash syntax: "51 110 173 / 4%"
    if let Some((rgb, a)) = inner.split_once('/') {
        let parts: Vec<&str> = rgb.split_whitespace().collect();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        return Some(NormalizedColor::rgba(channel(r)?, channel(g)?, channel(b)?, alpha(a)?));
    }

    // Comma syntax: "255, 0, 0, 0.5"; alpha is a bare real
    let parts: Vec<&str> = inner.split(',').collect();
    let [r, g, b, a] = parts.as_slice() else {
        return None;
    };
    let a = number(a)?.clamp(0.0, 1.0) as f32;
    Some(NormalizedColor::rgba(channel(r)?, channel(g)?, channel(b)?, a))
}

fn parse_hsl(inner: &str) -> Option<NormalizedColor> {
    let parts: Vec<&str> = inner.split(',').collect();
    let [h, s, l] = parts.as_slice() else {
        return None;
    };

    let h = number(h)? / 360.0;
    let (s, _) = number_or_percent(s)?;
    let (l, _) = number_or_percent(l)?;

    let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
    Some(NormalizedColor::rgb(r, g, b))
}

/// Convert HSL to 8-bit RGB.
///
/// `h` is in turns (wrapped into `0.0..1.0`); `s` and `l` are clamped to `0.0..=1.0`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
