//! Property tables and the theme structures built from them.

use indexmap::IndexMap;

/// Custom properties declared in one stylesheet, keyed by name without the `--` prefix.
///
/// Insertion order is preserved. Inserting an existing name replaces its value
/// in place, so the last declaration wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PropertyTable {
    properties: IndexMap<String, String>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any earlier declaration of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Get a raw value by property name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Check if a property exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Iterate over all properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties in the table.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = PropertyTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

/// File names tried, in order, by [`Theme::primary_table`].
pub const PRIMARY_STYLESHEETS: [&str; 2] = ["variables.css", "styles.css"];

/// The stylesheets of one theme, keyed by path relative to the theme.
///
/// A single-file theme has exactly one entry keyed by its own file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Theme {
    files: IndexMap<String, PropertyTable>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-file theme.
    pub fn single(file_name: impl Into<String>, table: PropertyTable) -> Self {
        let mut theme = Self::new();
        theme.insert(file_name, table);
        theme
    }

    pub fn insert(&mut self, path: impl Into<String>, table: PropertyTable) {
        self.files.insert(path.into(), table);
    }

    /// Get the table of one file by relative path.
    pub fn get(&self, path: &str) -> Option<&PropertyTable> {
        self.files.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyTable)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The table a viewer shows for this theme: `variables.css`, falling back
    /// to `styles.css`. Other themes have no primary table.
    pub fn primary_table(&self) -> Option<&PropertyTable> {
        PRIMARY_STYLESHEETS.iter().find_map(|name| self.get(name))
    }

    /// Relative file paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Total number of properties across all files.
    pub fn property_count(&self) -> usize {
        self.files.values().map(PropertyTable::len).sum()
    }

    /// Number of files in the theme.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// All themes found under a theme root, keyed by theme name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThemeCollection {
    themes: IndexMap<String, Theme>,
}

impl ThemeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a theme, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) -> Option<Theme> {
        self.themes.insert(name.into(), theme)
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Theme names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
