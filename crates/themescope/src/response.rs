//! The serializable result of a theme extraction request.

use std::path::Path;

use serde::{Deserialize, Serialize};
use themescope_core::{AggregateError, ThemeCollection};
use themescope_io::{aggregate, AggregateOptions, Aggregation, SkippedFile};
use tracing::error;

/// Result of one extraction request, shaped for the wire.
///
/// Success serializes as `{"success": true, "themes": {...}, "filesProcessed": n}`
/// (plus `"skipped"` when any file was skipped); failure as
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<ThemeCollection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_processed: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ThemeResponse {
    pub fn success(aggregation: Aggregation) -> Self {
        Self {
            success: true,
            themes: Some(aggregation.themes),
            files_processed: Some(aggregation.files_processed),
            skipped: aggregation.skipped,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            themes: None,
            files_processed: None,
            skipped: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn from_result(result: Result<Aggregation, AggregateError>) -> Self {
        match result {
            Ok(aggregation) => Self::success(aggregation),
            Err(err) => Self::failure(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Serialize to a compact JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to an indented JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Aggregate a theme root into a response. Never fails: root-level errors
/// become a failure response with no themes.
pub fn load_themes(root: &Path, options: &AggregateOptions) -> ThemeResponse {
    let result = aggregate(root, options);
    if let Err(err) = &result {
        error!(root = %root.display(), error = %err, "Theme extraction failed");
    }
    ThemeResponse::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use themescope_core::{PropertyTable, Theme};

    fn aggregation() -> Aggregation {
        let table: PropertyTable = [("bg", "#000")].into_iter().collect();
        let mut themes = ThemeCollection::new();
        themes.insert("dark", Theme::single("dark.css", table));
        Aggregation {
            themes,
            files_processed: 1,
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_success_json_shape() {
        let response = ThemeResponse::success(aggregation());
        let value: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "themes": { "dark": { "dark.css": { "bg": "#000" } } },
                "filesProcessed": 1
            })
        );
    }

    #[test]
    fn test_failure_json_shape() {
        let response = ThemeResponse::failure("Themes directory not found");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "Themes directory not found" }));
        assert!(!response.is_success());
    }

    #[test]
    fn test_skipped_files_serialized() {
        let mut aggregation = aggregation();
        aggregation.skipped.push(SkippedFile {
            path: "light/broken.css".into(),
            reason: "File is not valid UTF-8".to_string(),
        });
        let value = serde_json::to_value(ThemeResponse::success(aggregation)).unwrap();
        assert_eq!(
            value["skipped"],
            json!([{ "path": "light/broken.css", "reason": "File is not valid UTF-8" }])
        );
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let mut table = PropertyTable::new();
        table.insert("z", "1");
        table.insert("a", "2");
        let mut themes = ThemeCollection::new();
        themes.insert("t", Theme::single("t.css", table));
        let response = ThemeResponse::success(Aggregation { themes, files_processed: 1, skipped: vec![] });

        let parsed: ThemeResponse = serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, response);
        let names: Vec<_> = parsed.themes.unwrap().get("t").unwrap().get("t.css").unwrap().names().map(String::from).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
