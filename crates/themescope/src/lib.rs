//! Design-token extraction, resolution and color classification for stylesheet themes.
//!
//! The pipeline has two halves:
//!
//! 1. [`load_themes`] walks a theme directory, extracts the custom properties
//!    of every `:root` block and returns a serializable [`ThemeResponse`].
//! 2. A presentation layer then calls [`inspect_property`] (or
//!    [`inspect_table`]) per displayed property, which resolves `var()`
//!    references within the property's own table and classifies the result
//!    as a color. [`inspect_theme`] does this for a theme's primary table.
//!
//! ## Example
//!
//! ```
//! use themescope::{extract, inspect_property, Presentation, NormalizedColor};
//!
//! let table = extract(":root { --blue: #336ead; --link: var(--blue); --gap: 4px; }");
//!
//! let link = inspect_property("link", &table).unwrap();
//! assert_eq!(link.resolved(), "#336ead");
//! assert_eq!(link.presentation, Presentation::Swatch(NormalizedColor::rgb(0x33, 0x6e, 0xad)));
//! assert_eq!(link.reference(), "var(--link)");
//!
//! let gap = inspect_property("gap", &table).unwrap();
//! assert_eq!(gap.presentation, Presentation::Skip);
//! ```

pub mod inspect;
pub mod response;

pub use inspect::{
    inspect_colors, inspect_property, inspect_table, inspect_theme, inspect_value, Presentation,
    PropertyView,
};
pub use response::{load_themes, ThemeResponse};

pub use themescope_color::{classify_and_parse, is_color, parse_color};
pub use themescope_core::{
    AggregateError, ColorClassification, NormalizedColor, PropertyTable, ReadError, Theme,
    ThemeCollection, PRIMARY_STYLESHEETS,
};
pub use themescope_io::{aggregate, AggregateOptions, Aggregation, SkippedFile};
pub use themescope_parser::{extract, extract_properties};
pub use themescope_resolver::{
    is_reference, reference_name, resolve, resolve_traced, Resolution, ResolutionStatus,
    MAX_REFERENCE_DEPTH,
};
