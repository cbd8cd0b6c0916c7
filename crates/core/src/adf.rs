//! Atlassian Document Format (ADF) node model
//!
//! Closed sum types for every node the transpiler can emit. Serialization uses
//! serde's internally tagged representation, so each node carries its ADF
//! `"type"` discriminator and the JSON matches what Jira and Confluence accept
//! as `atlas_doc_format` content.

use serde::Serialize;

use crate::error::Error;

/// ADF schema version emitted on every document.
pub const ADF_VERSION: u32 = 1;

// ============================================================================
// Document
// ============================================================================

/// Root `doc` node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Document {
    pub version: u32,
    pub content: Vec<Block>,
}

impl Document {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            version: ADF_VERSION,
            content,
        }
    }

    /// Wrap plain text in a single-paragraph document without interpreting
    /// any Markdown.
    ///
    /// This is the shape issue descriptions and comments are sent with. Empty
    /// text produces a document with no blocks.
    pub fn from_plain_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new(Vec::new());
        }

        Self::new(vec![Block::paragraph(vec![Inline::text(text)])])
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Serialize the document, 2-space indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, Error> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(json)
    }
}

// ============================================================================
// Block nodes
// ============================================================================

/// Top-level structural node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Inline>,
    },
    Paragraph {
        content: Vec<Inline>,
    },
    BulletList {
        content: Vec<ListItem>,
    },
    CodeBlock {
        attrs: CodeBlockAttrs,
        content: Vec<Inline>,
    },
    Rule,
    Table {
        attrs: TableAttrs,
        content: Vec<TableRow>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
    pub is_number_column_enabled: bool,
    pub layout: String,
}

impl Default for TableAttrs {
    fn default() -> Self {
        Self {
            is_number_column_enabled: false,
            layout: "default".to_string(),
        }
    }
}

impl Block {
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Code block holding `body` as one unmarked text node.
    pub fn code_block(language: impl Into<String>, body: impl Into<String>) -> Self {
        Block::CodeBlock {
            attrs: CodeBlockAttrs {
                language: language.into(),
            },
            content: vec![Inline::text(body)],
        }
    }

    pub fn table(content: Vec<TableRow>) -> Self {
        Block::Table {
            attrs: TableAttrs::default(),
            content,
        }
    }

    /// ADF type name of the node
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList { .. } => "bulletList",
            Block::CodeBlock { .. } => "codeBlock",
            Block::Rule => "rule",
            Block::Table { .. } => "table",
        }
    }
}

/// Entry of a `bulletList`; always wraps exactly one paragraph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content: vec![Block::paragraph(content)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "tableRow")]
pub struct TableRow {
    pub content: Vec<TableCell>,
}

/// Empty attribute object carried by header and body cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellAttrs {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableCell {
    TableHeader {
        attrs: CellAttrs,
        content: Vec<Block>,
    },
    TableCell {
        attrs: CellAttrs,
        content: Vec<Block>,
    },
}

impl TableCell {
    pub fn header(content: Vec<Inline>) -> Self {
        TableCell::TableHeader {
            attrs: CellAttrs::default(),
            content: vec![Block::paragraph(content)],
        }
    }

    pub fn cell(content: Vec<Inline>) -> Self {
        TableCell::TableCell {
            attrs: CellAttrs::default(),
            content: vec![Block::paragraph(content)],
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, TableCell::TableHeader { .. })
    }

    pub fn content(&self) -> &[Block] {
        match self {
            TableCell::TableHeader { content, .. } | TableCell::TableCell { content, .. } => {
                content
            }
        }
    }
}

// ============================================================================
// Inline nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    HardBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    Strong,
    Code,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::marked(text, Mark::Strong)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::marked(text, Mark::Code)
    }

    fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Inline::Text {
            text: text.into(),
            marks: vec![mark],
        }
    }

    /// Text carried by the node, without marks (`None` for hard breaks)
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Inline::Text { text, .. } => Some(text),
            Inline::HardBreak => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
