//! Core library for md2adf
//!
//! This crate implements the **Functional Core** of the md2adf application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`md2adf_core`** (this crate): Markdown to ADF conversion with zero I/O
//! - **`md2adf`**: file handling, logging and argument parsing (the Imperative Shell)
//!
//! The conversion is one synchronous pass over the input lines. It is total:
//! any string converts, and malformed constructs degrade to omission rather
//! than failure.
//!
//! # Module Organization
//!
//! - [`adf`]: ADF node types and their JSON shape
//! - [`block`]: line classifier and multi-line state (lists, code fences, tables)
//! - [`inline`]: text, `**strong**`, `` `code` `` and `<br>` tokenizer
//! - [`table`]: pipe-delimited table parser
//! - [`envelope`]: `atlas_doc_format` upload body
//!
//! # Example Usage
//!
//! ```rust
//! use md2adf_core::markdown_to_adf;
//!
//! let doc = markdown_to_adf("# Title\n\n- one\n- two\n");
//!
//! assert_eq!(doc.content.len(), 2);
//! ```

pub mod adf;
pub mod block;
pub mod envelope;
pub mod error;
pub mod inline;
pub mod table;

pub use adf::{Block, Document, Inline, ListItem, Mark, TableCell, TableRow};
pub use block::Segmenter;
pub use envelope::AtlasDocFormatBody;
pub use error::Error;

/// Convert Markdown text into an ADF document.
///
/// Lines are fed to a [`Segmenter`] in order and every completed block is
/// appended to the document; pending state is flushed at end of input.
pub fn markdown_to_adf(markdown: &str) -> Document {
    let mut segmenter = Segmenter::new();
    let mut content = Vec::new();

    for line in markdown.lines() {
        content.extend(segmenter.step(line));
    }
    content.extend(segmenter.finish());

    Document::new(content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_input_is_an_empty_document() {
        for input in ["", "\n\n\n", "  \n\t\n"] {
            let doc = markdown_to_adf(input);

            assert_eq!(
                serde_json::to_value(&doc).unwrap(),
                json!({"version": 1, "type": "doc", "content": []})
            );
        }
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let lf = markdown_to_adf("# T\n- a\n- b\n```sh\nls\n```\n");
        let crlf = markdown_to_adf("# T\r\n- a\r\n- b\r\n```sh\r\nls\r\n```\r\n");

        assert_eq!(lf, crlf);
    }

    #[test]
    fn test_unterminated_fence_drops_body() {
        let doc = markdown_to_adf("intro\n```js\nabc\n");

        assert_eq!(doc.content, vec![Block::paragraph(vec![Inline::text("intro")])]);
    }

    #[test]
    fn test_full_document() {
        // Arrange
        let markdown = "\
# Release notes

Shipped **three** fixes:
- parser `panic` on empty input
- slow table rendering
---
| Area | Owner |
| :--- | ----: |
| Core | Ana |
Done.<br/>Thanks
";

        // Act
        let doc = markdown_to_adf(markdown);

        // Assert
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "version": 1,
                "type": "doc",
                "content": [
                    {
                        "type": "heading",
                        "attrs": {"level": 1},
                        "content": [{"type": "text", "text": "Release notes"}]
                    },
                    {
                        "type": "paragraph",
                        "content": [
                            {"type": "text", "text": "Shipped "},
                            {"type": "text", "text": "three", "marks": [{"type": "strong"}]},
                            {"type": "text", "text": " fixes:"}
                        ]
                    },
                    {
                        "type": "bulletList",
                        "content": [
                            {
                                "type": "listItem",
                                "content": [{
                                    "type": "paragraph",
                                    "content": [
                                        {"type": "text", "text": "parser "},
                                        {"type": "text", "text": "panic", "marks": [{"type": "code"}]},
                                        {"type": "text", "text": " on empty input"}
                                    ]
                                }]
                            },
                            {
                                "type": "listItem",
                                "content": [{
                                    "type": "paragraph",
                                    "content": [{"type": "text", "text": "slow table rendering"}]
                                }]
                            }
                        ]
                    },
                    {"type": "rule"},
                    {
                        "type": "table",
                        "attrs": {"isNumberColumnEnabled": false, "layout": "default"},
                        "content": [
                            {
                                "type": "tableRow",
                                "content": [
                                    {
                                        "type": "tableHeader",
                                        "attrs": {},
                                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Area"}]}]
                                    },
                                    {
                                        "type": "tableHeader",
                                        "attrs": {},
                                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Owner"}]}]
                                    }
                                ]
                            },
                            {
                                "type": "tableRow",
                                "content": [
                                    {
                                        "type": "tableCell",
                                        "attrs": {},
                                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Core"}]}]
                                    },
                                    {
                                        "type": "tableCell",
                                        "attrs": {},
                                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Ana"}]}]
                                    }
                                ]
                            }
                        ]
                    },
                    {
                        "type": "paragraph",
                        "content": [
                            {"type": "text", "text": "Done."},
                            {"type": "hardBreak"},
                            {"type": "text", "text": "Thanks"}
                        ]
                    }
                ]
            })
        );
    }
}
