//! Aggregation options.

use serde::{Deserialize, Serialize};

/// Options for aggregating a theme directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateOptions {
    /// Keep files without custom properties and themes without files.
    pub keep_empty: bool,
    /// Follow symbolic links inside theme directories.
    pub follow_links: bool,
    /// Maximum recursion depth inside a theme directory (1 = direct children only).
    pub max_depth: Option<usize>,
    /// Stylesheet file extension, without the dot.
    pub extension: String,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            keep_empty: false,
            follow_links: true,
            max_depth: None,
            extension: "css".to_string(),
        }
    }
}

impl AggregateOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep empty files and themes in the collection.
    pub fn with_keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Limit recursion inside theme directories.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The name of a stylesheet without its extension, if `file_name` is one.
    ///
    /// Matching is case-sensitive. A bare `.css` has no stem and is not a stylesheet.
    pub fn stylesheet_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let stem = file_name
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        (!stem.is_empty()).then_some(stem)
    }
}
