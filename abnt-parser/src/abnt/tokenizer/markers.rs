//! Marker vocabulary
//!
//! The upstream extraction step tags spans of free text with fixed delimiter
//! pairs. A span only counts when both delimiters are present on the same line
//! with at least one character between them; anything else is plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Flag placed in front of detected subtitles. Stripped, carries no payload.
pub const SUB_MARKER: &str = "##SUB##";

pub const FORMULA_OPEN: &str = "###FORMULA###";
pub const FORMULA_CLOSE: &str = "###/FORMULA###";
pub const IMAGE_OPEN: &str = "###IMG###";
pub const IMAGE_CLOSE: &str = "###/IMG###";
pub const QUOTATION_OPEN: &str = "###CIT###";
pub const QUOTATION_CLOSE: &str = "###/CIT###";

static SUB_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{}\s*", regex::escape(SUB_MARKER))).unwrap());

static FORMULA_REGEX: Lazy<Regex> = Lazy::new(|| span_regex(FORMULA_OPEN, FORMULA_CLOSE));
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| span_regex(IMAGE_OPEN, IMAGE_CLOSE));
static QUOTATION_REGEX: Lazy<Regex> = Lazy::new(|| span_regex(QUOTATION_OPEN, QUOTATION_CLOSE));

fn span_regex(open: &str, close: &str) -> Regex {
    Regex::new(&format!(
        "{}(.+?){}",
        regex::escape(open),
        regex::escape(close)
    ))
    .unwrap()
}

/// Delimited span kinds, in the order a line is checked against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Formula,
    Image,
    Quotation,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Formula, MarkerKind::Image, MarkerKind::Quotation];

    pub fn open(self) -> &'static str {
        match self {
            MarkerKind::Formula => FORMULA_OPEN,
            MarkerKind::Image => IMAGE_OPEN,
            MarkerKind::Quotation => QUOTATION_OPEN,
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            MarkerKind::Formula => FORMULA_CLOSE,
            MarkerKind::Image => IMAGE_CLOSE,
            MarkerKind::Quotation => QUOTATION_CLOSE,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            MarkerKind::Formula => &*FORMULA_REGEX,
            MarkerKind::Image => &*IMAGE_REGEX,
            MarkerKind::Quotation => &*QUOTATION_REGEX,
        }
    }

    /// Wrap `content` in this kind's delimiters.
    pub fn wrap(self, content: &str) -> String {
        format!("{}{}{}", self.open(), content, self.close())
    }
}

/// A complete delimited span found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan<'a> {
    pub kind: MarkerKind,
    /// Enclosed text, trimmed.
    pub content: &'a str,
    /// Text before the opening delimiter.
    pub before: &'a str,
    /// Text after the closing delimiter.
    pub after: &'a str,
}

impl MarkerSpan<'_> {
    /// The line with the span cut out, trimmed. Empty when nothing surrounds the span.
    pub fn remainder(&self) -> String {
        let before = self.before.trim();
        let after = self.after.trim();
        match (before.is_empty(), after.is_empty()) {
            (true, true) => String::new(),
            (false, true) => before.to_string(),
            (true, false) => after.to_string(),
            (false, false) => format!("{} {}", before, after),
        }
    }
}

/// Find the first complete span of the first kind (formula, image, quotation) present on `line`.
pub fn find_span(line: &str) -> Option<MarkerSpan<'_>> {
    MarkerKind::ALL.iter().find_map(|&kind| {
        let captures = kind.regex().captures(line)?;
        let whole = captures.get(0)?;
        let inner = captures.get(1)?;
        Some(MarkerSpan {
            kind,
            content: inner.as_str().trim(),
            before: &line[..whole.start()],
            after: &line[whole.end()..],
        })
    })
}

/// Remove every sub-heading flag together with the whitespace that follows it.
pub fn strip_sub_markers(text: &str) -> Cow<'_, str> {
    SUB_MARKER_REGEX.replace_all(text, "")
}
