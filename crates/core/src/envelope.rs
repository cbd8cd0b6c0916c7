//! Upload envelopes for ADF documents
//!
//! Confluence page bodies carry the document as a JSON *string* under the
//! `atlas_doc_format` representation rather than as a nested object.

use serde::Serialize;

use crate::adf::Document;
use crate::error::Error;

pub const ATLAS_DOC_FORMAT: &str = "atlas_doc_format";

/// Page body as accepted by the Confluence v2 pages API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtlasDocFormatBody {
    pub representation: String,
    pub value: String,
}

impl AtlasDocFormatBody {
    /// Build the envelope around the compact JSON form of `document`.
    pub fn from_document(document: &Document) -> Result<Self, Error> {
        Ok(Self {
            representation: ATLAS_DOC_FORMAT.to_string(),
            value: document.to_json(false)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{Block, Inline};
    use serde_json::json;

    #[test]
    fn test_body_embeds_document_as_string() {
        // Arrange
        let doc = Document::new(vec![Block::paragraph(vec![Inline::text("hi")])]);

        // Act
        let body = AtlasDocFormatBody::from_document(&doc).unwrap();

        // Assert
        assert_eq!(body.representation, "atlas_doc_format");
        let embedded: serde_json::Value = serde_json::from_str(&body.value).unwrap();
        assert_eq!(embedded, serde_json::to_value(&doc).unwrap());
    }

    #[test]
    fn test_body_serializes_with_both_fields() {
        let body = AtlasDocFormatBody::from_document(&Document::new(vec![])).unwrap();

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "representation": "atlas_doc_format",
                "value": "{\"type\":\"doc\",\"version\":1,\"content\":[]}"
            })
        );
    }
}
