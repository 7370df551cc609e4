//! Custom-property extraction for stylesheets.
//!
//! Only declarations inside top-level `:root` blocks are collected. This is
//! not a general CSS parser: there is no selector matching, cascade or
//! nested-rule support.

mod extract;
mod lexer;

pub use extract::{declarations, extract, extract_blocks};

use themescope_core::PropertyTable;

/// Extract the custom properties of a stylesheet.
///
/// # Example
///
/// ```
/// use themescope_parser::extract_properties;
///
/// let css = r#"
/// :root {
///   --primary: #3b82f6;
///   --accent: var(--primary);
/// }
/// "#;
///
/// let table = extract_properties(css);
/// assert_eq!(table.get("primary"), Some("#3b82f6"));
/// assert_eq!(table.get("accent"), Some("var(--primary)"));
/// ```
pub fn extract_properties(source: &str) -> PropertyTable {
    extract(source)
}
