//! Theme directory aggregation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use themescope_core::{AggregateError, PropertyTable, ReadError, Theme, ThemeCollection};
use themescope_parser::extract;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::options::AggregateOptions;

/// A stylesheet that could not be read and was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path of the file, converted lossily to UTF-8.
    pub path: String,
    pub reason: String,
}

/// The result of aggregating a theme root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub themes: ThemeCollection,
    /// Stylesheets read successfully, including those without custom properties.
    pub files_processed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl Aggregation {
    fn record_skip(&mut self, path: &Path, err: ReadError) {
        warn!(path = %path.display(), error = %err, "Skipping stylesheet");
        self.skipped.push(SkippedFile {
            path: path.to_string_lossy().into_owned(),
            reason: err.to_string(),
        });
    }

    /// Read one stylesheet, recording a failure instead of returning it.
    fn read(&mut self, path: &Path) -> Option<PropertyTable> {
        match read_table(path) {
            Ok(table) => {
                self.files_processed += 1;
                Some(table)
            }
            Err(err) => {
                self.record_skip(path, err);
                None
            }
        }
    }
}

/// Read a stylesheet and extract its custom properties.
pub fn read_table(path: &Path) -> Result<PropertyTable, ReadError> {
    let text = fs::read_to_string(path).map_err(ReadError::from_read)?;
    let table = extract(&text);
    debug!(path = %path.display(), properties = table.len(), "Extracted custom properties");
    Ok(table)
}

/// Aggregate every theme under `root`.
///
/// Stylesheets directly in `root` are single-file themes; each directory is a
/// theme made of every stylesheet found under it. Only problems with `root`
/// itself are errors: unreadable files are recorded in
/// [`Aggregation::skipped`] and the walk continues.
pub fn aggregate(root: &Path, options: &AggregateOptions) -> Result<Aggregation, AggregateError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %root.display(), "Themes directory does not exist");
            return Err(AggregateError::RootNotFound { path: root.to_path_buf() });
        }
        Err(source) => {
            return Err(AggregateError::Io { path: root.to_path_buf(), source });
        }
    };

    if !metadata.is_dir() {
        return Err(AggregateError::NotADirectory { path: root.to_path_buf() });
    }

    let mut entries = fs::read_dir(root)
        .and_then(|dir| dir.map(|entry| entry.map(|e| e.path())).collect::<Result<Vec<_>, _>>())
        .map_err(|source| AggregateError::Io { path: root.to_path_buf(), source })?;
    entries.sort();

    let mut aggregation = Aggregation::default();

    // Root-level stylesheets (dark.css, light.css, ...)
    for path in entries.iter().filter(|p| p.is_file()) {
        let name = file_name(path);
        let Some(theme_name) = options.stylesheet_stem(&name) else {
            continue;
        };
        let theme_name = theme_name.to_string();

        let Some(table) = aggregation.read(path) else {
            continue;
        };
        if table.is_empty() && !options.keep_empty {
            continue;
        }

        aggregation.themes.insert(theme_name, Theme::single(name, table));
    }

    // Theme directories (dark/, light/, ...)
    for dir in entries.iter().filter(|p| p.is_dir()) {
        let theme_name = file_name(dir);
        let theme = aggregate_theme_dir(dir, options, &mut aggregation);
        debug!(
            theme = %theme_name,
            files = theme.len(),
            properties = theme.property_count(),
            "Collected theme directory"
        );

        if theme.is_empty() && !options.keep_empty {
            continue;
        }

        if aggregation.themes.insert(theme_name.clone(), theme).is_some() {
            warn!(theme = %theme_name, "Theme directory replaces stylesheet of the same name");
        }
    }

    info!(
        root = %root.display(),
        themes = aggregation.themes.len(),
        files = aggregation.files_processed,
        skipped = aggregation.skipped.len(),
        "Aggregated themes"
    );

    Ok(aggregation)
}

/// Collect every stylesheet under a theme directory, keyed by relative path.
fn aggregate_theme_dir(dir: &Path, options: &AggregateOptions, aggregation: &mut Aggregation) -> Theme {
    let mut theme = Theme::new();

    let mut walker = WalkDir::new(dir)
        .follow_links(options.follow_links)
        .min_depth(1)
        .sort_by_file_name();
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                aggregation.record_skip(&path, ReadError::Walk(err.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if options.stylesheet_stem(&entry.file_name().to_string_lossy()).is_none() {
            continue;
        }

        let Some(table) = aggregation.read(entry.path()) else {
            continue;
        };
        if table.is_empty() && !options.keep_empty {
            continue;
        }

        theme.insert(relative_key(dir, entry.path()), table);
    }

    theme
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `/`-joined path of `path` relative to `base`.
fn relative_key(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
