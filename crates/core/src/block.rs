//! Block segmenter
//!
//! Line-oriented state machine that classifies each input line and emits
//! block nodes. Multi-line constructs (open code fence, buffered table run,
//! pending bullet list) live in [`Segmenter`], which is advanced one line at a
//! time with [`Segmenter::step`] and closed with [`Segmenter::finish`].
//!
//! Classification order, first match wins:
//!
//! 1. table line (trimmed line starts with `|`)
//! 2. end of a buffered table (the line is then classified from 3 onward)
//! 3. code fence toggle
//! 4. line inside a code fence
//! 5. heading `#` through `####`
//! 6. rule `---`
//! 7. list item `- `
//! 8. blank line
//! 9. paragraph

use crate::adf::{Block, ListItem};
use crate::inline::tokenize;
use crate::table::parse_table;

const FENCE: &str = "```";
const DEFAULT_CODE_LANGUAGE: &str = "text";
const HEADING_MARKERS: [&str; 4] = ["# ", "## ", "### ", "#### "];
const RULE: &str = "---";
const LIST_MARKER: &str = "- ";

/// Code fence that has been opened but not yet closed
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenFence {
    language: String,
    lines: Vec<String>,
}

/// Parser state threaded across lines.
#[derive(Debug, Default)]
pub struct Segmenter {
    list: Option<Vec<ListItem>>,
    fence: Option<OpenFence>,
    table: Option<Vec<String>>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_code_block(&self) -> bool {
        self.fence.is_some()
    }

    pub fn in_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn has_open_list(&self) -> bool {
        self.list.is_some()
    }

    /// Consume one line and return the blocks it completes, in output order.
    pub fn step(&mut self, line: &str) -> Vec<Block> {
        let mut emitted = Vec::new();

        if is_table_line(line) {
            if self.table.is_none() {
                self.flush_list(&mut emitted);
            }
            self.table.get_or_insert_with(Vec::new).push(line.to_string());
            return emitted;
        }

        if let Some(lines) = self.table.take() {
            emitted.extend(parse_table(&lines));
        }

        if line.starts_with(FENCE) {
            self.toggle_fence(line, &mut emitted);
            return emitted;
        }

        if let Some(fence) = self.fence.as_mut() {
            fence.lines.push(line.to_string());
            return emitted;
        }

        if let Some((level, text)) = heading(line) {
            self.flush_list(&mut emitted);
            emitted.push(Block::heading(level, tokenize(text)));
            return emitted;
        }

        if line.trim() == RULE {
            self.flush_list(&mut emitted);
            emitted.push(Block::Rule);
            return emitted;
        }

        if let Some(text) = line.strip_prefix(LIST_MARKER) {
            self.list
                .get_or_insert_with(Vec::new)
                .push(ListItem::new(tokenize(text)));
            return emitted;
        }

        self.flush_list(&mut emitted);

        if line.trim().is_empty() {
            return emitted;
        }

        let content = tokenize(line);
        if !content.is_empty() {
            emitted.push(Block::paragraph(content));
        }

        emitted
    }

    /// Flush whatever is still pending at end of input.
    ///
    /// An open list and a buffered table are emitted. An unclosed code fence
    /// is discarded along with its body.
    pub fn finish(mut self) -> Vec<Block> {
        let mut emitted = Vec::new();

        self.flush_list(&mut emitted);
        if let Some(lines) = self.table.take() {
            emitted.extend(parse_table(&lines));
        }

        emitted
    }

    fn flush_list(&mut self, emitted: &mut Vec<Block>) {
        if let Some(items) = self.list.take() {
            emitted.push(Block::BulletList { content: items });
        }
    }

    fn toggle_fence(&mut self, line: &str, emitted: &mut Vec<Block>) {
        match self.fence.take() {
            Some(fence) => {
                emitted.push(Block::code_block(fence.language, fence.lines.join("\n")));
            }
            None => {
                let language = line[FENCE.len()..].trim();
                self.fence = Some(OpenFence {
                    language: if language.is_empty() {
                        DEFAULT_CODE_LANGUAGE.to_string()
                    } else {
                        language.to_string()
                    },
                    lines: Vec::new(),
                });
            }
        }
    }
}

fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Match a heading marker, returning the level and the text after it.
fn heading(line: &str) -> Option<(u8, &str)> {
    HEADING_MARKERS
        .iter()
        .zip(1u8..)
        .find_map(|(marker, level)| line.strip_prefix(marker).map(|text| (level, text)))
}

// ============================================================================
// Tests
// ============================================================================
