//! Plain-text rendering
//!
//! A terminal preview of the ABNT layout. Each logical page starts with a rule
//! line; numbered pages carry their number right-aligned on the first line.
//! Headings follow [`HeadingStyle`](crate::abnt::style::HeadingStyle) casing,
//! paragraphs get a first-line indent, long quotations a deep left indent.
//!
//! Token listings use one line per node with an icon:
//!
//!     ¶ Paragraph   § Subheading   √ Formula   ▣ Image   ❝ Long quotation

use crate::abnt::assembler::{AssembledDocument, Page, PageBody};
use crate::abnt::stats::DocumentStats;
use crate::abnt::toc::{TocEntry, TOC_TITLE};
use crate::abnt::tokenizer::ContentNode;
use crate::abnt::validation::{Severity, ValidationReport};

pub const DEFAULT_WIDTH: usize = 72;

const PARAGRAPH_INDENT: &str = "    ";
const QUOTATION_INDENT: &str = "                ";
const IMAGE_SOURCE: &str = "Fonte: O autor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    pub width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            width: DEFAULT_WIDTH,
        }
    }
}

pub fn render_document(document: &AssembledDocument, options: &TextOptions) -> String {
    document
        .pages
        .iter()
        .map(|page| render_page(page, options))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_page(page: &Page, options: &TextOptions) -> String {
    let width = options.width;
    let mut out = String::new();
    out.push_str(&"=".repeat(width));
    out.push('\n');
    if let Some(number) = page.entry.page_number {
        out.push_str(&format!("{:>width$}\n", number, width = width));
    }

    match &page.body {
        PageBody::Cover {
            cover,
            document_label,
        } => {
            let mut lines = vec![cover.institution.to_uppercase(), cover.course.clone()];
            lines.push(String::new());
            lines.push(cover.author.to_uppercase());
            lines.push(String::new());
            lines.push(cover.title.to_uppercase());
            if let Some(subtitle) = &cover.subtitle {
                lines.push(subtitle.clone());
            }
            lines.push(document_label.to_string());
            lines.push(String::new());
            lines.push(cover.city.clone());
            lines.push(cover.year.clone());
            for line in lines {
                push_centered(&mut out, &line, width);
            }
        }
        PageBody::Abstract {
            text,
            keywords_label,
            keywords,
        } => {
            push_centered(&mut out, &page.title, width);
            out.push('\n');
            out.push_str(text);
            out.push('\n');
            if !keywords.is_empty() {
                out.push('\n');
                out.push_str(&format!("{}: {}.\n", keywords_label, keywords.join(". ")));
            }
        }
        PageBody::Text { nodes } => {
            out.push_str(&page.heading_style.apply(&page.title));
            out.push_str("\n\n");
            for node in nodes {
                push_node(&mut out, node, width);
            }
        }
        PageBody::References { entries } => {
            push_centered(&mut out, &page.title, width);
            for entry in entries {
                out.push('\n');
                out.push_str(entry);
                out.push('\n');
            }
        }
    }
    out
}

fn push_node(out: &mut String, node: &ContentNode, width: usize) {
    match node {
        ContentNode::Paragraph { text } => {
            out.push_str(PARAGRAPH_INDENT);
            out.push_str(text);
            out.push('\n');
        }
        ContentNode::Subheading { text } => {
            out.push_str(text);
            out.push('\n');
        }
        ContentNode::Formula { expression } => push_centered(out, expression, width),
        ContentNode::ImagePlaceholder { caption } => {
            push_centered(out, &format!("[{}]", caption), width);
            push_centered(out, IMAGE_SOURCE, width);
        }
        ContentNode::LongQuotation { text } => {
            out.push_str(QUOTATION_INDENT);
            out.push_str(text);
            out.push('\n');
        }
    }
    out.push('\n');
}

fn push_centered(out: &mut String, text: &str, width: usize) {
    let formatted = format!("{:^width$}", text, width = width);
    out.push_str(formatted.trim_end());
    out.push('\n');
}

/// `SUMÁRIO` with dot leaders between titles and page numbers.
pub fn render_toc(entries: &[TocEntry], options: &TextOptions) -> String {
    let width = options.width;
    let mut out = String::new();
    push_centered(&mut out, TOC_TITLE, width);
    out.push('\n');
    for entry in entries {
        let indent = "  ".repeat(entry.indent_level as usize);
        let title = if entry.is_uppercase {
            entry.title.to_uppercase()
        } else {
            entry.title.clone()
        };
        let label = format!("{}{}", indent, title);
        match entry.page_number {
            Some(number) => {
                let number = number.to_string();
                let used = label.chars().count() + number.len() + 2;
                let dots = width.saturating_sub(used).max(3);
                out.push_str(&format!("{} {} {}\n", label, ".".repeat(dots), number));
            }
            None => {
                out.push_str(&label);
                out.push('\n');
            }
        }
    }
    out
}

pub fn render_references(references: &[String]) -> String {
    references
        .iter()
        .map(|reference| format!("{}\n", reference))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Findings by group, skipping empty groups.
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    for severity in Severity::ALL {
        let group = report.group(severity);
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{} ({})\n", severity.heading(), group.len()));
        let icon = match severity {
            Severity::Blocking => "✗",
            Severity::Advisory => "!",
            Severity::Confirmed => "✓",
        };
        for finding in group {
            out.push_str(&format!("  {} {}\n", icon, finding.message));
        }
    }
    out
}

pub fn render_stats(stats: &DocumentStats) -> String {
    format!(
        "Palavras: {}\nCaracteres: {}\nPáginas estimadas: {}\nTempo de leitura: {} min\n",
        group_thousands(stats.words),
        group_thousands(stats.characters),
        stats.estimated_pages,
        stats.reading_minutes
    )
}

pub fn render_nodes(nodes: &[ContentNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let icon = match node {
                ContentNode::Paragraph { .. } => "¶",
                ContentNode::Subheading { .. } => "§",
                ContentNode::Formula { .. } => "√",
                ContentNode::ImagePlaceholder { .. } => "▣",
                ContentNode::LongQuotation { .. } => "❝",
            };
            format!("{} {}\n", icon, node.text())
        })
        .collect()
}

/// `1234567` → `1.234.567`, the pt-BR digit grouping.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
