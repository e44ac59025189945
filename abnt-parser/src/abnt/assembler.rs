//! Section assembler
//!
//! Walks a [`DocumentRecord`] in rendering order and attaches to every page
//! entry from [`paginate`] the content a renderer needs: cover fields, abstract
//! text and keywords, tokenized text, or the ordered reference list.

use super::document::{Cover, DocumentRecord, Section};
use super::pagination::{paginate, PageEntry, PageKind};
use super::references::order_references;
use super::style::HeadingStyle;
use super::tokenizer::{tokenize, ContentNodes};
use serde::Serialize;

pub const ABSTRACT_PT_TITLE: &str = "RESUMO";
pub const ABSTRACT_EN_TITLE: &str = "ABSTRACT";
pub const INTRODUCTION_TITLE: &str = "1 INTRODUÇÃO";
pub const CONCLUSION_TITLE: &str = "CONCLUSÃO";
pub const REFERENCES_TITLE: &str = "REFERÊNCIAS";

pub const KEYWORDS_PT_LABEL: &str = "Palavras-chave";
pub const KEYWORDS_EN_LABEL: &str = "Keywords";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledDocument {
    pub pages: Vec<Page>,
}

impl AssembledDocument {
    pub fn entries(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter().map(|page| &page.entry)
    }

    /// Number of the last numbered page, if any.
    pub fn last_page_number(&self) -> Option<u32> {
        self.entries().filter_map(|entry| entry.page_number).max()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub entry: PageEntry,
    pub title: String,
    pub heading_style: HeadingStyle,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageBody {
    Cover {
        cover: Cover,
        document_label: &'static str,
    },
    Abstract {
        text: String,
        keywords_label: &'static str,
        keywords: Vec<String>,
    },
    Text {
        nodes: ContentNodes,
    },
    References {
        entries: Vec<String>,
    },
}

/// Assemble every page of `doc`.
pub fn assemble(doc: &DocumentRecord) -> AssembledDocument {
    let pages: Vec<Page> = paginate(doc)
        .into_iter()
        .map(|entry| Page {
            title: page_title(&entry, doc),
            heading_style: heading_style(&entry, doc),
            body: page_body(&entry, doc),
            entry,
        })
        .collect();
    tracing::debug!(pages = pages.len(), "assembled document");
    AssembledDocument { pages }
}

/// Display title of a page. Shared with the table of contents.
pub fn page_title(entry: &PageEntry, doc: &DocumentRecord) -> String {
    match entry.kind {
        PageKind::Cover => doc.cover.title.clone(),
        PageKind::AbstractPt => ABSTRACT_PT_TITLE.to_string(),
        PageKind::AbstractEn => ABSTRACT_EN_TITLE.to_string(),
        PageKind::Introduction => INTRODUCTION_TITLE.to_string(),
        PageKind::BodySection => section(entry, doc)
            .map(|section| section.title.clone())
            .unwrap_or_default(),
        PageKind::Conclusion => CONCLUSION_TITLE.to_string(),
        PageKind::References => REFERENCES_TITLE.to_string(),
    }
}

/// Section level of a page; structural pages count as level 1.
pub fn page_level(entry: &PageEntry, doc: &DocumentRecord) -> u8 {
    match entry.kind {
        PageKind::BodySection => section(entry, doc).map_or(1, |section| section.level),
        _ => 1,
    }
}

fn heading_style(entry: &PageEntry, doc: &DocumentRecord) -> HeadingStyle {
    match entry.kind {
        PageKind::BodySection => HeadingStyle::for_level(page_level(entry, doc)),
        _ => HeadingStyle::structural(),
    }
}

fn section<'a>(entry: &PageEntry, doc: &'a DocumentRecord) -> Option<&'a Section> {
    entry.source_index.and_then(|index| doc.body.get(index))
}

fn page_body(entry: &PageEntry, doc: &DocumentRecord) -> PageBody {
    match entry.kind {
        PageKind::Cover => PageBody::Cover {
            cover: doc.cover.clone(),
            document_label: doc.document_type.label(),
        },
        PageKind::AbstractPt => PageBody::Abstract {
            text: doc.abstract_pt.text.trim().to_string(),
            keywords_label: KEYWORDS_PT_LABEL,
            keywords: doc.abstract_pt.present_keywords().map(str::to_string).collect(),
        },
        PageKind::AbstractEn => PageBody::Abstract {
            text: doc.abstract_en.text.trim().to_string(),
            keywords_label: KEYWORDS_EN_LABEL,
            keywords: doc.abstract_en.present_keywords().map(str::to_string).collect(),
        },
        PageKind::Introduction => PageBody::Text {
            nodes: tokenize(&doc.introduction),
        },
        PageKind::BodySection => PageBody::Text {
            nodes: section(entry, doc)
                .map(|section| tokenize(&section.content))
                .unwrap_or_default(),
        },
        PageKind::Conclusion => PageBody::Text {
            nodes: tokenize(&doc.conclusion),
        },
        PageKind::References => PageBody::References {
            entries: order_references(&doc.references),
        },
    }
}
