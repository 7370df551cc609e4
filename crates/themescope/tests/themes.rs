//! End-to-end tests: theme directory to rendered property views.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;
use themescope::{
    inspect_colors, inspect_theme, load_themes, AggregateOptions, NormalizedColor, Presentation, ThemeResponse,
};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn themes_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "dark.css",
        ":root {\n  --neutral-10: #1c1c1c;\n}\n",
    );
    write(
        dir.path(),
        "light/variables.css",
        r#"
/* Light theme tokens */
:root {
  --neutral-10: #ffffff;
  --neutral-90: #222;
  --text: var(--neutral-90);
  --info: rgba(51 110 173 / 4%);
  --callout: hsl(210, 50%, 40%);
  --border: 1px solid var(--neutral-90);
  --font: "Noto Sans", sans-serif;
}

.card { background: var(--neutral-10); }
"#,
    );
    write(
        dir.path(),
        "light/extra.css",
        ":root { --focus: oklch(0.6 0.1 200); --shadow-color: var(--missing); }",
    );
    dir
}

#[test]
fn test_load_themes_json_document() {
    let dir = themes_dir();
    let response = load_themes(dir.path(), &AggregateOptions::default());
    assert!(response.is_success());

    let json: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["filesProcessed"], 3);
    assert!(json.get("error").is_none());
    assert!(json.get("skipped").is_none());

    let themes = json["themes"].as_object().unwrap();
    assert_eq!(themes.len(), 2);
    assert_eq!(themes["dark"].as_object().unwrap().len(), 1);
    assert_eq!(json["themes"]["dark"]["dark.css"]["neutral-10"], "#1c1c1c");

    let light = themes["light"].as_object().unwrap();
    assert_eq!(light.len(), 2);
    assert!(light.contains_key("variables.css"));
    assert!(light.contains_key("extra.css"));
}

#[test]
fn test_missing_root_response() {
    let dir = TempDir::new().unwrap();
    let response = load_themes(&dir.path().join("themes"), &AggregateOptions::default());

    assert!(!response.is_success());
    assert!(response.themes.is_none());
    assert!(response.files_processed.is_none());
    assert!(response.error.as_deref().unwrap().starts_with("Themes directory not found"));

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], Value::Bool(false));
    assert!(json.get("themes").is_none());
}

#[test]
fn test_views_over_loaded_theme() {
    let dir = themes_dir();
    let response = load_themes(dir.path(), &AggregateOptions::default());
    let themes = response.themes.unwrap();
    let table = themes.get("light").unwrap().get("variables.css").unwrap();

    let views: Vec<_> = inspect_colors(table).collect();
    let by_name = |name: &str| views.iter().find(|v| v.name == name).map(|v| v.presentation);

    assert_eq!(by_name("neutral-10"), Some(Presentation::Swatch(NormalizedColor::WHITE)));
    assert_eq!(by_name("text"), Some(Presentation::Swatch(NormalizedColor::rgb(0x22, 0x22, 0x22))));
    assert!(matches!(by_name("info"), Some(Presentation::Swatch(c)) if (c.a - 0.04).abs() < 1e-6));
    assert!(matches!(by_name("callout"), Some(Presentation::Swatch(_))));
    assert_eq!(by_name("border"), None);
    assert_eq!(by_name("font"), None);
}

#[test]
fn test_references_do_not_cross_files() {
    let dir = themes_dir();
    let response = load_themes(dir.path(), &AggregateOptions::default());
    let themes = response.themes.unwrap();
    let extra = themes.get("light").unwrap().get("extra.css").unwrap();

    let views: Vec<_> = inspect_colors(extra).collect();
    assert_eq!(views.len(), 2);
    assert!(views.iter().all(|v| v.presentation == Presentation::Indicator));
}

#[test]
fn test_response_round_trip() {
    let dir = themes_dir();
    let response = load_themes(dir.path(), &AggregateOptions::default());
    let parsed: ThemeResponse = serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn test_primary_table_per_theme() {
    let dir = themes_dir();
    let themes = load_themes(dir.path(), &AggregateOptions::default()).themes.unwrap();

    assert!(inspect_theme(themes.get("dark").unwrap()).is_none());

    let light = inspect_theme(themes.get("light").unwrap()).unwrap();
    assert!(light.iter().any(|v| v.name == "neutral-90"));
    assert!(light.iter().all(|v| v.name != "focus"));
}
