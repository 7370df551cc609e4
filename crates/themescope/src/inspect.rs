//! Per-property resolution and classification for presentation layers.

use themescope_color::classify_and_parse;
use themescope_core::{ColorClassification, NormalizedColor, PropertyTable, Theme};
use themescope_resolver::{resolve_traced, Resolution};

/// How a presentation layer should show a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    /// Draw a color swatch.
    Swatch(NormalizedColor),
    /// Show a generic "color, but unknown" marker: the value looked like a
    /// color but could not be parsed, or its reference chain did not resolve.
    Indicator,
    /// Not a color; leave it out of color views.
    Skip,
}

/// A property with its resolved value and color classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyView {
    /// Name without the `--` prefix.
    pub name: String,
    /// Declared value.
    pub raw: String,
    pub resolution: Resolution,
    pub color: ColorClassification,
    pub presentation: Presentation,
}

impl PropertyView {
    /// The final value after reference resolution.
    pub fn resolved(&self) -> &str {
        &self.resolution.value
    }

    /// The `var(--name)` token that refers to this property.
    pub fn reference(&self) -> String {
        format!("var(--{})", self.name)
    }
}

/// Resolve and classify a value that belongs to `table`.
pub fn inspect_value(name: &str, raw: &str, table: &PropertyTable) -> PropertyView {
    let resolution = resolve_traced(raw, table);
    let color = classify_and_parse(&resolution.value);

    let presentation = match color {
        ColorClassification::Parsed(c) => Presentation::Swatch(c),
        ColorClassification::RecognizedUnsupported => Presentation::Indicator,
        ColorClassification::NotAColor if resolution.is_unresolved() => Presentation::Indicator,
        ColorClassification::NotAColor => Presentation::Skip,
    };

    PropertyView {
        name: name.to_string(),
        raw: raw.to_string(),
        resolution,
        color,
        presentation,
    }
}

/// Inspect one property of a table by name.
pub fn inspect_property(name: &str, table: &PropertyTable) -> Option<PropertyView> {
    table.get(name).map(|raw| inspect_value(name, raw, table))
}

/// Inspect every property of a table, in declaration order.
pub fn inspect_table(table: &PropertyTable) -> Vec<PropertyView> {
    table
        .iter()
        .map(|(name, raw)| inspect_value(name, raw, table))
        .collect()
}

/// Properties worth showing in a color view: swatches and indicators.
pub fn inspect_colors(table: &PropertyTable) -> impl Iterator<Item = PropertyView> + '_ {
    table
        .iter()
        .map(|(name, raw)| inspect_value(name, raw, table))
        .filter(|view| view.presentation != Presentation::Skip)
}

/// Color views over a theme's primary table (see [`Theme::primary_table`]).
///
/// Themes without a `variables.css` or `styles.css` have nothing to show.
pub fn inspect_theme(theme: &Theme) -> Option<Vec<PropertyView>> {
    theme.primary_table().map(|table| inspect_colors(table).collect())
}
