//! Marker tokenizer
//!
//! Turns one free-text field of a document into an ordered list of
//! [`ContentNode`]s. The pass is line oriented and never backtracks: plain lines
//! collect in a paragraph accumulator that is flushed by blank lines, by any
//! marker or heading line, and at end of input.
//!
//! ```text
//! 2.1 Metodologia Aplicada. Foi usada abordagem X.   -> Subheading + (accumulate)
//!                                                    -> Paragraph (flushed by blank)
//! Resultados simples.                                -> Paragraph (flushed at end)
//! ```
//!
//! Malformed markers are never an error; they simply read as text.

pub mod line_classification;
pub mod markers;
pub mod nodes;

pub use line_classification::{classify_line, is_numbered_heading, LineType};
pub use markers::{find_span, strip_sub_markers, MarkerKind, MarkerSpan};
pub use nodes::{ContentNode, ContentNodes};

/// Tokenize one text field.
pub fn tokenize(text: &str) -> ContentNodes {
    let cleaned = strip_sub_markers(text);
    let mut tokenizer = Tokenizer::new();
    for line in cleaned.split('\n') {
        tokenizer.process_line(line);
    }
    let nodes = tokenizer.finish();
    tracing::trace!(nodes = nodes.len(), "tokenized text field");
    nodes
}

/// Stateful line consumer behind [`tokenize`].
///
/// Exposed so callers can feed lines incrementally; a fresh instance holds no
/// state from earlier inputs.
#[derive(Debug, Default)]
pub struct Tokenizer {
    paragraph: Vec<String>,
    nodes: ContentNodes,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line (without its trailing newline).
    pub fn process_line(&mut self, line: &str) {
        match classify_line(line) {
            LineType::Blank => self.flush_paragraph(),
            LineType::Formula {
                expression,
                remainder,
            } => {
                self.flush_paragraph();
                self.nodes.push(ContentNode::formula(expression));
                if !remainder.is_empty() {
                    self.paragraph.push(remainder);
                }
            }
            LineType::Image { caption } => {
                self.flush_paragraph();
                self.nodes.push(ContentNode::image(caption));
            }
            LineType::Quotation { text } => {
                self.flush_paragraph();
                self.nodes.push(ContentNode::long_quotation(text));
            }
            LineType::Heading { heading, remainder } => {
                self.flush_paragraph();
                self.nodes.push(ContentNode::subheading(heading));
                if let Some(rest) = remainder {
                    self.paragraph.push(rest.to_string());
                }
            }
            LineType::Text(text) => self.paragraph.push(text.to_string()),
        }
    }

    /// Flush whatever is still accumulated and return the nodes.
    pub fn finish(mut self) -> ContentNodes {
        self.flush_paragraph();
        self.nodes
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.nodes.push(ContentNode::paragraph(text));
    }
}
