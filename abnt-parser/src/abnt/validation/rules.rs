//! The ABNT rule battery
//!
//! Each [`Rule`] reads one aspect of the record and yields at most one finding.
//! Thresholds are fixed by the standard and are not configurable.

use super::{Finding, Severity};
use crate::abnt::document::{is_present, DocumentRecord};
use serde::Serialize;
use std::fmt;

pub const ABSTRACT_MIN_WORDS: usize = 150;
pub const ABSTRACT_MAX_WORDS: usize = 500;
pub const MIN_KEYWORDS: usize = 3;
pub const MIN_REFERENCES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    CoverInstitution,
    CoverAuthor,
    CoverTitle,
    CoverCity,
    CoverYear,
    AbstractLength,
    AbstractKeywords,
    Introduction,
    Body,
    Conclusion,
    References,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 11] = [
        Rule::CoverInstitution,
        Rule::CoverAuthor,
        Rule::CoverTitle,
        Rule::CoverCity,
        Rule::CoverYear,
        Rule::AbstractLength,
        Rule::AbstractKeywords,
        Rule::Introduction,
        Rule::Body,
        Rule::Conclusion,
        Rule::References,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::CoverInstitution => "cover-institution",
            Rule::CoverAuthor => "cover-author",
            Rule::CoverTitle => "cover-title",
            Rule::CoverCity => "cover-city",
            Rule::CoverYear => "cover-year",
            Rule::AbstractLength => "abstract-length",
            Rule::AbstractKeywords => "abstract-keywords",
            Rule::Introduction => "introduction",
            Rule::Body => "body",
            Rule::Conclusion => "conclusion",
            Rule::References => "references",
        }
    }

    pub fn evaluate(self, doc: &DocumentRecord) -> Option<Finding> {
        let cover = &doc.cover;
        match self {
            Rule::CoverInstitution => self.require(
                &cover.institution,
                Severity::Blocking,
                "Instituição não preenchida na capa",
            ),
            Rule::CoverAuthor => self.require(
                &cover.author,
                Severity::Blocking,
                "Autor não preenchido na capa",
            ),
            Rule::CoverTitle => self.require(
                &cover.title,
                Severity::Blocking,
                "Título não preenchido na capa",
            ),
            Rule::CoverCity => self.require(
                &cover.city,
                Severity::Advisory,
                "Cidade não preenchida na capa",
            ),
            Rule::CoverYear => Some(if is_present(&cover.year) {
                self.finding(Severity::Confirmed, "Capa completa")
            } else {
                self.finding(Severity::Advisory, "Ano não preenchido na capa")
            }),
            Rule::AbstractLength => Some(self.abstract_length(&doc.abstract_pt.text)),
            Rule::AbstractKeywords => {
                Some(if doc.abstract_pt.present_keywords().count() < MIN_KEYWORDS {
                    self.finding(Severity::Advisory, "Mínimo de 3 palavras-chave recomendado")
                } else {
                    self.finding(Severity::Confirmed, "Palavras-chave adequadas")
                })
            }
            Rule::Introduction => Some(if doc.has_introduction() {
                self.finding(Severity::Confirmed, "Introdução presente")
            } else {
                self.finding(Severity::Blocking, "Introdução não preenchida")
            }),
            Rule::Body => Some(if doc.body.is_empty() {
                self.finding(Severity::Blocking, "Desenvolvimento não possui seções")
            } else {
                self.finding(
                    Severity::Confirmed,
                    format!("{} seções no desenvolvimento", doc.body.len()),
                )
            }),
            Rule::Conclusion => Some(if doc.has_conclusion() {
                self.finding(Severity::Confirmed, "Conclusão presente")
            } else {
                self.finding(Severity::Blocking, "Conclusão não preenchida")
            }),
            Rule::References => Some(match doc.present_references().count() {
                0 => self.finding(Severity::Blocking, "Nenhuma referência adicionada"),
                count if count < MIN_REFERENCES => self.finding(
                    Severity::Advisory,
                    "Poucas referências (mínimo 5 recomendado para TCC)",
                ),
                count => self.finding(
                    Severity::Confirmed,
                    format!("{} referências cadastradas", count),
                ),
            }),
        }
    }

    /// Finding only when `field` is absent.
    fn require(self, field: &str, severity: Severity, message: &str) -> Option<Finding> {
        (!is_present(field)).then(|| self.finding(severity, message))
    }

    fn abstract_length(self, text: &str) -> Finding {
        if !is_present(text) {
            return self.finding(Severity::Blocking, "Resumo não preenchido");
        }
        match word_count(text) {
            words if words < ABSTRACT_MIN_WORDS => self.finding(
                Severity::Advisory,
                "Resumo muito curto (mínimo 150 palavras recomendado)",
            ),
            words if words > ABSTRACT_MAX_WORDS => self.finding(
                Severity::Advisory,
                "Resumo muito longo (máximo 500 palavras recomendado)",
            ),
            _ => self.finding(Severity::Confirmed, "Resumo com tamanho adequado"),
        }
    }

    fn finding(self, severity: Severity, message: impl Into<String>) -> Finding {
        Finding {
            rule: self,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Words separated by Unicode whitespace.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
