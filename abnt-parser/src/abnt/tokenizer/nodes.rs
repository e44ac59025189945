//! Content nodes produced by the marker tokenizer.
//!
//! Downstream code only sees these variants; raw marker strings never leave the
//! tokenizer.

use serde::{Deserialize, Serialize};

/// Sequence of nodes produced from one text field.
pub type ContentNodes = Vec<ContentNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    /// Running text; accumulated lines joined by single spaces.
    Paragraph { text: String },
    /// Numbered heading found inside free text (`2.1 Título`).
    Subheading { text: String },
    /// Formula span, rendered centered in a monospace face.
    Formula { expression: String },
    /// Placeholder for a figure, carrying only its caption.
    ImagePlaceholder { caption: String },
    /// Long quotation, rendered indented in a smaller face.
    LongQuotation { text: String },
}

impl ContentNode {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph { text: text.into() }
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        ContentNode::Subheading { text: text.into() }
    }

    pub fn formula(expression: impl Into<String>) -> Self {
        ContentNode::Formula {
            expression: expression.into(),
        }
    }

    pub fn image(caption: impl Into<String>) -> Self {
        ContentNode::ImagePlaceholder {
            caption: caption.into(),
        }
    }

    pub fn long_quotation(text: impl Into<String>) -> Self {
        ContentNode::LongQuotation { text: text.into() }
    }

    /// The textual payload of the node, whatever its variant.
    pub fn text(&self) -> &str {
        match self {
            ContentNode::Paragraph { text }
            | ContentNode::Subheading { text }
            | ContentNode::LongQuotation { text } => text,
            ContentNode::Formula { expression } => expression,
            ContentNode::ImagePlaceholder { caption } => caption,
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentNode::Paragraph { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentNode::Paragraph { .. } => "paragraph",
            ContentNode::Subheading { .. } => "subheading",
            ContentNode::Formula { .. } => "formula",
            ContentNode::ImagePlaceholder { .. } => "image",
            ContentNode::LongQuotation { .. } => "long_quotation",
        }
    }
}
