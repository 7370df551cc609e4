//! `var()` reference resolution.

use themescope_core::PropertyTable;

/// Maximum number of substitutions before a value is returned as-is.
///
/// Cycles such as `a -> b -> a` stop here instead of being reported.
pub const MAX_REFERENCE_DEPTH: usize = 10;

/// How a resolution ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// The value was not a reference.
    Literal,
    /// One or more references were followed to a literal.
    Resolved,
    /// A reference named a property missing from the table; the value is empty.
    Dangling { name: String },
    /// The depth bound was reached while the value was still a reference.
    DepthExceeded,
}

/// The result of resolving a value, with the path it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The final value.
    pub value: String,
    /// Number of substitutions made.
    pub steps: usize,
    pub status: ResolutionStatus,
}

impl Resolution {
    /// Whether the value ended on something other than a literal reached normally.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self.status,
            ResolutionStatus::Dangling { .. } | ResolutionStatus::DepthExceeded
        )
    }
}

/// The referenced property name, if the whole value is `var(<name>)`.
///
/// The name is trimmed and its `--` prefix stripped. Values that only embed a
/// reference, such as `1px solid var(--border)`, are not references; neither
/// are values whose inner text has parentheses, like `var(--a) + var(--b)`.
pub fn reference_name(raw: &str) -> Option<&str> {
    let inner = raw.trim().strip_prefix("var(")?.strip_suffix(')')?;
    if inner.contains(['(', ')']) {
        return None;
    }
    let inner = inner.trim();
    Some(inner.strip_prefix("--").unwrap_or(inner))
}

/// Check if a value is a single `var()` reference.
pub fn is_reference(raw: &str) -> bool {
    reference_name(raw).is_some()
}

/// Resolve a raw value against its table, starting at `depth`.
///
/// Non-references are returned unchanged. A missing name resolves to the empty
/// string. Once `depth` reaches [`MAX_REFERENCE_DEPTH`] the current value is
/// returned even if it is still a reference.
pub fn resolve(raw: &str, table: &PropertyTable, depth: usize) -> String {
    if depth >= MAX_REFERENCE_DEPTH {
        return raw.to_string();
    }

    match reference_name(raw) {
        Some(name) => resolve(table.get(name).unwrap_or(""), table, depth + 1),
        None => raw.to_string(),
    }
}

/// Resolve a raw value from depth 0, reporting how resolution ended.
///
/// The value always equals `resolve(raw, table, 0)`.
pub fn resolve_traced(raw: &str, table: &PropertyTable) -> Resolution {
    let mut current = raw;
    let mut steps = 0;
    let mut dangling = None;

    while let Some(name) = reference_name(current) {
        if steps >= MAX_REFERENCE_DEPTH {
            return Resolution {
                value: current.to_string(),
                steps,
                status: ResolutionStatus::DepthExceeded,
            };
        }

        current = match table.get(name) {
            Some(value) => value,
            None => {
                dangling = Some(name.to_string());
                ""
            }
        };
        steps += 1;
    }

    let status = match dangling {
        Some(name) => ResolutionStatus::Dangling { name },
        None if steps == 0 => ResolutionStatus::Literal,
        None => ResolutionStatus::Resolved,
    };

    Resolution {
        value: current.to_string(),
        steps,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(entries: &[(&str, &str)]) -> PropertyTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_literal_is_unchanged() {
        let tokens = table(&[("x", "#000")]);
        assert_eq!(resolve("#fff", &tokens, 0), "#fff");
        assert_eq!(resolve("#fff", &PropertyTable::new(), 0), "#fff");
        assert_eq!(resolve("  10px ", &tokens, 0), "  10px ");
    }

    #[test]
    fn test_direct_reference() {
        let tokens = table(&[("x", "#fff"), ("y", "var(--x)")]);
        let raw = tokens.get("y").unwrap();
        assert_eq!(resolve(raw, &tokens, 0), "#fff");
    }

    #[test]
    fn test_reference_chain() {
        let tokens = table(&[
            ("base", "rgb(1, 2, 3)"),
            ("mid", "var(--base)"),
            ("top", " var( --mid ) "),
        ]);
        assert_eq!(resolve("var(--top)", &tokens, 0), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_dangling_reference_is_empty() {
        assert_eq!(resolve("var(--missing)", &PropertyTable::new(), 0), "");
    }

    #[test]
    fn test_cycle_terminates() {
        let tokens = table(&[("a", "var(--b)"), ("b", "var(--a)")]);
        let a = resolve("var(--a)", &tokens, 0);
        let b = resolve("var(--b)", &tokens, 0);
        assert!(is_reference(&a));
        assert!(is_reference(&b));
    }

    #[test]
    fn test_self_reference_terminates() {
        let tokens = table(&[("a", "var(--a)")]);
        assert_eq!(resolve("var(--a)", &tokens, 0), "var(--a)");
    }

    #[test]
    fn test_depth_bound_returns_current_value() {
        let tokens = table(&[("a", "var(--b)"), ("b", "#123")]);
        assert_eq!(resolve("var(--a)", &tokens, MAX_REFERENCE_DEPTH), "var(--a)");
        assert_eq!(resolve("var(--a)", &tokens, MAX_REFERENCE_DEPTH - 1), "var(--b)");
        assert_eq!(resolve("var(--a)", &tokens, MAX_REFERENCE_DEPTH - 2), "#123");
    }

    #[test]
    fn test_chain_of_max_depth_resolves() {
        let mut tokens = PropertyTable::new();
        tokens.insert("t0", "#abc");
        for i in 1..=MAX_REFERENCE_DEPTH {
            tokens.insert(format!("t{i}"), format!("var(--t{})", i - 1));
        }
        let top = format!("var(--t{})", MAX_REFERENCE_DEPTH - 1);
        assert_eq!(resolve(&top, &tokens, 0), "#abc");
    }

    #[test]
    fn test_embedded_reference_not_detected() {
        let tokens = table(&[("border", "#ccc"), ("a", "1"), ("b", "2")]);
        assert_eq!(resolve("1px solid var(--border)", &tokens, 0), "1px solid var(--border)");
        assert_eq!(resolve("var(--a) + var(--b)", &tokens, 0), "var(--a) + var(--b)");
        assert_eq!(resolve("var(--border, #000)", &tokens, 0), "");
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(reference_name("var(--primary)"), Some("primary"));
        assert_eq!(reference_name("  var( --primary )  "), Some("primary"));
        assert_eq!(reference_name("var(primary)"), Some("primary"));
        assert_eq!(reference_name("VAR(--primary)"), None);
        assert_eq!(reference_name("var(--primary"), None);
        assert_eq!(reference_name("#fff"), None);
    }

    #[test]
    fn test_traced_statuses() {
        let tokens = table(&[("x", "#fff"), ("y", "var(--x)"), ("z", "var(--gone)")]);

        let literal = resolve_traced("#fff", &tokens);
        assert_eq!(literal.status, ResolutionStatus::Literal);
        assert_eq!(literal.steps, 0);

        let resolved = resolve_traced("var(--y)", &tokens);
        assert_eq!(resolved.value, "#fff");
        assert_eq!(resolved.steps, 2);
        assert_eq!(resolved.status, ResolutionStatus::Resolved);
        assert!(!resolved.is_unresolved());

        let dangling = resolve_traced("var(--z)", &tokens);
        assert_eq!(dangling.value, "");
        assert_eq!(dangling.status, ResolutionStatus::Dangling { name: "gone".to_string() });
        assert!(dangling.is_unresolved());
    }

    #[test]
    fn test_traced_cycle() {
        let tokens = table(&[("a", "var(--b)"), ("b", "var(--a)")]);
        let resolution = resolve_traced("var(--a)", &tokens);
        assert_eq!(resolution.status, ResolutionStatus::DepthExceeded);
        assert_eq!(resolution.steps, MAX_REFERENCE_DEPTH);
        assert_eq!(resolution.value, resolve("var(--a)", &tokens, 0));
    }

    fn arb_table() -> impl Strategy<Value = PropertyTable> {
        proptest::collection::vec(
            ("[a-e]", prop_oneof!["var\\(--[a-f]\\)", "#[0-9a-f]{3}", "[a-z]{0,4}"]),
            0..8,
        )
        .prop_map(|entries| entries.into_iter().collect())
    }

    proptest! {
        #[test]
        fn traced_agrees_with_resolve(tokens in arb_table(), start in "var\\(--[a-f]\\)|[a-z#0-9]{0,5}") {
            let traced = resolve_traced(&start, &tokens);
            prop_assert_eq!(traced.value, resolve(&start, &tokens, 0));
            prop_assert!(traced.steps <= MAX_REFERENCE_DEPTH);
        }

        #[test]
        fn resolve_is_total(tokens in arb_table(), raw in "\\PC*", depth in 0usize..20) {
            let _ = resolve(&raw, &tokens, depth);
        }
    }
}
