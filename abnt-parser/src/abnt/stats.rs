//! Document statistics: word and character counts, estimated page count and
//! reading time over every text field of a record.

use super::document::{is_present, DocumentRecord};
use super::validation::word_count;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORDS_PER_PAGE: usize = 250;
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSettings {
    pub words_per_page: usize,
    pub words_per_minute: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        StatsSettings {
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub words: usize,
    pub characters: usize,
    pub estimated_pages: usize,
    pub reading_minutes: usize,
}

impl DocumentStats {
    pub fn compute(doc: &DocumentRecord, settings: &StatsSettings) -> Self {
        let fields = [
            doc.abstract_pt.text.as_str(),
            doc.abstract_en.text.as_str(),
            doc.introduction.as_str(),
            doc.conclusion.as_str(),
        ]
        .into_iter()
        .chain(doc.body.iter().map(|section| section.content.as_str()))
        .filter(|text| is_present(text));

        let mut stats = DocumentStats::default();
        for text in fields {
            stats.words += word_count(text);
            stats.characters += text.chars().count();
        }
        stats.estimated_pages = div_ceil(stats.words, settings.words_per_page);
        stats.reading_minutes = div_ceil(stats.words, settings.words_per_minute);
        stats
    }
}

/// A zero divisor yields zero rather than panicking on a bad configuration.
fn div_ceil(value: usize, divisor: usize) -> usize {
    if divisor == 0 {
        0
    } else {
        value.div_ceil(divisor)
    }
}
