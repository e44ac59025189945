//! Table of contents (sumário)
//!
//! A flat outline over the same page entries the assembler renders. The cover
//! is left out; abstracts appear unnumbered; structural entries sit at indent 0
//! in uppercase; body sections keep their title verbatim and are indented by
//! their level.

use super::assembler::{page_level, page_title};
use super::document::DocumentRecord;
use super::pagination::{paginate, PageEntry, PageKind};
use super::style::HeadingStyle;
use serde::Serialize;

pub const TOC_TITLE: &str = "SUMÁRIO";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub title: String,
    pub page_number: Option<u32>,
    pub indent_level: u8,
    pub is_uppercase: bool,
    pub kind: PageKind,
}

/// Project the outline of `doc`.
pub fn project(doc: &DocumentRecord) -> Vec<TocEntry> {
    project_entries(&paginate(doc), doc)
}

/// Project an outline from page entries computed elsewhere.
pub fn project_entries(entries: &[PageEntry], doc: &DocumentRecord) -> Vec<TocEntry> {
    entries
        .iter()
        .filter(|entry| entry.kind != PageKind::Cover)
        .map(|entry| {
            let (indent_level, is_uppercase) = match entry.kind {
                PageKind::BodySection => {
                    let level = page_level(entry, doc);
                    (level, HeadingStyle::for_level(level).uppercase)
                }
                _ => (0, true),
            };
            TocEntry {
                title: page_title(entry, doc),
                page_number: entry.page_number,
                indent_level,
                is_uppercase,
                kind: entry.kind,
            }
        })
        .collect()
}
