//! Page numbering
//!
//! One logical page per top-level unit. This is the only place page numbers
//! are computed; the assembler and the table of contents both consume
//! [`paginate`], so the two views cannot drift apart.
//!
//! Numbering rule:
//!
//! - cover and abstracts (pre-textual matter) never get a number and do not
//!   touch the counter;
//! - introduction, each body section, and conclusion advance the counter and
//!   take the new value;
//! - references take the counter's current value without advancing it, so they
//!   share the number of the page before them. A document whose only numbered
//!   unit is the reference list numbers it 1.

use super::document::DocumentRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Cover,
    AbstractPt,
    AbstractEn,
    Introduction,
    BodySection,
    Conclusion,
    References,
}

impl PageKind {
    /// Cover and abstracts.
    pub fn is_pre_textual(self) -> bool {
        matches!(
            self,
            PageKind::Cover | PageKind::AbstractPt | PageKind::AbstractEn
        )
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Cover => "cover",
            PageKind::AbstractPt => "abstract-pt",
            PageKind::AbstractEn => "abstract-en",
            PageKind::Introduction => "introduction",
            PageKind::BodySection => "body-section",
            PageKind::Conclusion => "conclusion",
            PageKind::References => "references",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub kind: PageKind,
    pub page_number: Option<u32>,
    /// Index into `DocumentRecord::body`; set for body sections only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_index: Option<usize>,
}

impl PageEntry {
    fn unnumbered(kind: PageKind) -> Self {
        PageEntry {
            kind,
            page_number: None,
            source_index: None,
        }
    }

    fn numbered(kind: PageKind, page_number: u32) -> Self {
        PageEntry {
            kind,
            page_number: Some(page_number),
            source_index: None,
        }
    }
}

/// Running counter shared by every numbered unit of one pagination pass.
#[derive(Debug, Default)]
struct PageCounter {
    current: u32,
}

impl PageCounter {
    fn advance(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// The value the reference list is stamped with.
    fn shared(&self) -> u32 {
        self.current.max(1)
    }
}

/// Compute the ordered page entries of `doc`.
pub fn paginate(doc: &DocumentRecord) -> Vec<PageEntry> {
    let mut entries = Vec::with_capacity(doc.body.len() + 6);
    let mut counter = PageCounter::default();

    if doc.has_cover() {
        entries.push(PageEntry::unnumbered(PageKind::Cover));
    }
    if doc.abstract_pt.is_present() {
        entries.push(PageEntry::unnumbered(PageKind::AbstractPt));
    }
    if doc.abstract_en.is_present() {
        entries.push(PageEntry::unnumbered(PageKind::AbstractEn));
    }
    if doc.has_introduction() {
        entries.push(PageEntry::numbered(
            PageKind::Introduction,
            counter.advance(),
        ));
    }
    for index in 0..doc.body.len() {
        entries.push(PageEntry {
            kind: PageKind::BodySection,
            page_number: Some(counter.advance()),
            source_index: Some(index),
        });
    }
    if doc.has_conclusion() {
        entries.push(PageEntry::numbered(PageKind::Conclusion, counter.advance()));
    }
    if doc.has_references() {
        entries.push(PageEntry::numbered(PageKind::References, counter.shared()));
    }

    tracing::debug!(
        pages = entries.len(),
        last_number = counter.current,
        "paginated document"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnt::document::{Abstract, Cover, Section};

    fn numbers(entries: &[PageEntry]) -> Vec<(PageKind, Option<u32>)> {
        entries.iter().map(|e| (e.kind, e.page_number)).collect()
    }

    #[test]
    fn references_share_the_last_section_number() {
        let doc = DocumentRecord {
            introduction: "Intro".into(),
            body: vec![Section::new("A", 1, "a"), Section::new("B", 2, "b")],
            references: vec!["R1".into(), "R2".into()],
            ..Default::default()
        };
        assert_eq!(
            numbers(&paginate(&doc)),
            vec![
                (PageKind::Introduction, Some(1)),
                (PageKind::BodySection, Some(2)),
                (PageKind::BodySection, Some(3)),
                (PageKind::References, Some(3)),
            ]
        );
    }

    #[test]
    fn pre_textual_matter_is_unnumbered() {
        let doc = DocumentRecord {
            cover: Cover {
                title: "Título".into(),
                ..Default::default()
            },
            abstract_pt: Abstract {
                text: "Resumo".into(),
                keywords: vec![],
            },
            abstract_en: Abstract {
                text: "Abstract".into(),
                keywords: vec![],
            },
            conclusion: "Fim".into(),
            ..Default::default()
        };
        assert_eq!(
            numbers(&paginate(&doc)),
            vec![
                (PageKind::Cover, None),
                (PageKind::AbstractPt, None),
                (PageKind::AbstractEn, None),
                (PageKind::Conclusion, Some(1)),
            ]
        );
    }

    #[test]
    fn references_only_document_starts_at_one() {
        let doc = DocumentRecord {
            references: vec!["", "SILVA, A. Obra. 2020."]
                .into_iter()
                .map(String::from)
                .collect(),
            ..Default::default()
        };
        assert_eq!(
            numbers(&paginate(&doc)),
            vec![(PageKind::References, Some(1))]
        );
    }

    #[test]
    fn body_entries_point_back_to_their_section() {
        let doc = DocumentRecord {
            body: vec![Section::default(), Section::default()],
            ..Default::default()
        };
        let indices: Vec<_> = paginate(&doc).iter().map(|e| e.source_index).collect();
        assert_eq!(indices, vec![Some(0), Some(1)]);
    }

    #[test]
    fn empty_document_has_no_pages() {
        assert!(paginate(&DocumentRecord::default()).is_empty());
    }
}
