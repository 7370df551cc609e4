//! Extraction of custom properties from top-level `:root` blocks.

use themescope_core::PropertyTable;

use crate::lexer::{declaration, root_body, scan_prelude, skip_block, Terminator};

/// The only selector whose declarations are collected.
const ROOT_SELECTOR: &str = ":root";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Extract every custom property declared in a top-level `:root` block.
///
/// Multiple `:root` blocks are merged, later declarations overwriting earlier
/// ones. Text without a `:root` block yields an empty table. A leading byte
/// order mark is ignored.
pub fn extract(text: &str) -> PropertyTable {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut table = PropertyTable::new();

    for body in extract_blocks(text) {
        for (name, value) in declarations(body) {
            table.insert(name, value);
        }
    }

    table
}

/// Find the bodies of all top-level blocks whose selector is exactly `:root`.
///
/// A body ends at its first `}`. Blocks with any other selector, including
/// `:root` blocks nested in at-rules, are skipped whole.
pub fn extract_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = text;

    loop {
        let (prelude, after) = scan_prelude(rest);

        match prelude.terminator {
            Terminator::Eof => break,
            Terminator::Semicolon | Terminator::Close => rest = after,
            Terminator::Open if prelude.text.trim() == ROOT_SELECTOR => match root_body(after) {
                Ok((remaining, body)) => {
                    blocks.push(body);
                    rest = remaining;
                }
                // Unterminated block
                Err(_) => break,
            },
            Terminator::Open => rest = skip_block(after),
        }
    }

    blocks
}

/// Scan a block body for `--name: value;` declarations, in order.
///
/// Names and values are trimmed; the `--` prefix is not part of the name.
pub fn declarations(body: &str) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = body[pos..].find("--") {
        let start = pos + offset;
        match declaration(&body[start..]) {
            Ok((rest, (name, value))) => {
                found.push((name.trim(), value.trim()));
                pos = body.len() - rest.len();
            }
            Err(_) => pos = start + 1,
        }
    }

    found
}
