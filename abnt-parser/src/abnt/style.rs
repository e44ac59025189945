//! Heading style per ABNT level
//!
//! Level 1 headings are bold and uppercase with a larger top margin, level 2
//! is bold in its own casing, deeper levels are plain. Structural headings
//! (introduction, conclusion, references, abstracts) always use the level 1
//! treatment.

use serde::Serialize;

/// Body text and headings share one font size.
pub const FONT_SIZE_PT: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingStyle {
    pub font_size_pt: u8,
    pub margin_top_pt: u8,
    pub margin_bottom_pt: u8,
    pub bold: bool,
    pub uppercase: bool,
}

impl HeadingStyle {
    pub fn for_level(level: u8) -> Self {
        HeadingStyle {
            font_size_pt: FONT_SIZE_PT,
            margin_top_pt: if level <= 1 { 36 } else { 24 },
            margin_bottom_pt: 12,
            bold: level <= 2,
            uppercase: level <= 1,
        }
    }

    pub fn structural() -> Self {
        Self::for_level(1)
    }

    /// Apply the casing rule to a heading text.
    pub fn apply(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}
