//! Table sub-parser
//!
//! Converts a buffered run of pipe-delimited lines into a `table` node. The
//! first non-separator row becomes the header row. Column counts are not
//! reconciled, so ragged input produces ragged rows.

use std::sync::LazyLock;

use regex::Regex;

use crate::adf::{Block, Inline, TableCell, TableRow};
use crate::inline::tokenize;

/// Header/body divider such as `| --- | :-: |`
static SEPARATOR_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|[\s\-:|]+\|\s*$").expect("separator row pattern is valid")
});

/// Returns true when `line` is a Markdown table separator row.
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line)
}

/// Split a table line into trimmed cell texts.
///
/// The segments before the first pipe and after the last pipe are dropped.
pub fn split_cells(line: &str) -> Vec<&str> {
    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 0 && *idx != last)
        .map(|(_, cell)| cell)
        .collect()
}

/// Parse buffered table lines into a `table` block.
///
/// Returns `None` when fewer than two lines were buffered, when nothing but
/// separator rows remain, or when the header row has no cells.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<Block> {
    if lines.len() < 2 {
        return None;
    }

    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    let rows: Vec<Vec<&str>> = lines
        .into_iter()
        .filter(|line| !is_separator_row(line))
        .map(split_cells)
        .collect();

    let (header, body) = rows.split_first()?;
    if header.is_empty() {
        return None;
    }

    let mut content = Vec::with_capacity(rows.len());
    content.push(build_row(header, TableCell::header));
    content.extend(body.iter().map(|row| build_row(row, TableCell::cell)));

    Some(Block::table(content))
}

fn build_row(cells: &[&str], make: fn(Vec<Inline>) -> TableCell) -> TableRow {
    TableRow {
        content: cells.iter().map(|text| make(tokenize(text))).collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
