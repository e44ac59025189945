//! Line Classification
//!
//! Decides what a single trimmed line of annotated text is. Delimited spans are
//! checked before the numbered-heading pattern, so a heading line carrying a
//! formula is a formula line.

use super::markers::{find_span, MarkerKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// `2 Título`, `2.1 Título`, `2.1. Título`, `2.2.1 Título`. ASCII digits, and the
/// first letter must be an ASCII capital: `2.1 Ética` stays running text.
static NUMBERED_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)*\.?\s+[A-Z]").unwrap());

/// Heading fragment up to the first sentence boundary, then the rest of the line.
static HEADING_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*\.?\s+[^.]+\.)\s+(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType<'a> {
    Blank,
    /// Formula span; `remainder` is the rest of the line, kept for the paragraph.
    Formula {
        expression: &'a str,
        remainder: String,
    },
    Image {
        caption: &'a str,
    },
    Quotation {
        text: &'a str,
    },
    /// Numbered heading, optionally followed by sentence text on the same line.
    Heading {
        heading: &'a str,
        remainder: Option<&'a str>,
    },
    Text(&'a str),
}

/// Classify one line. The line is trimmed first.
pub fn classify_line(line: &str) -> LineType<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineType::Blank;
    }
    if let Some(span) = find_span(line) {
        return match span.kind {
            MarkerKind::Formula => LineType::Formula {
                expression: span.content,
                remainder: span.remainder(),
            },
            MarkerKind::Image => LineType::Image {
                caption: span.content,
            },
            MarkerKind::Quotation => LineType::Quotation { text: span.content },
        };
    }
    if is_numbered_heading(line) {
        return split_heading(line);
    }
    LineType::Text(line)
}

pub fn is_numbered_heading(line: &str) -> bool {
    NUMBERED_HEADING_REGEX.is_match(line)
}

fn split_heading(line: &str) -> LineType<'_> {
    match HEADING_SPLIT_REGEX.captures(line) {
        Some(captures) => match (captures.get(1), captures.get(2)) {
            (Some(heading), Some(rest)) => LineType::Heading {
                heading: heading.as_str().trim(),
                remainder: Some(rest.as_str().trim()),
            },
            _ => LineType::Heading {
                heading: line,
                remainder: None,
            },
        },
        None => LineType::Heading {
            heading: line,
            remainder: None,
        },
    }
}
