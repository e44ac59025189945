//! Document record
//!
//! The root entity handed to the core by the editing layer. Field names on the
//! wire follow the editor's serialized form (`capa`, `resumo`, `desenvolvimento`, ...)
//! while the Rust side uses English names. Every field is optional on input and
//! degrades to empty. `null` is accepted for any string, list or section level;
//! `null` entries inside reference and keyword lists are dropped.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lowest section level accepted by the loader.
pub const MIN_SECTION_LEVEL: u8 = 1;
/// Highest section level accepted by the loader.
pub const MAX_SECTION_LEVEL: u8 = 5;

/// A text field counts as present when it holds at least one non-whitespace character.
pub fn is_present(text: &str) -> bool {
    !text.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRecord {
    #[serde(rename = "tipo")]
    pub document_type: DocumentType,
    #[serde(rename = "capa")]
    pub cover: Cover,
    #[serde(rename = "resumo")]
    pub abstract_pt: Abstract,
    #[serde(rename = "abstract")]
    pub abstract_en: Abstract,
    #[serde(rename = "introducao", deserialize_with = "nullable_string")]
    pub introduction: String,
    #[serde(rename = "desenvolvimento", deserialize_with = "nullable_vec")]
    pub body: Vec<Section>,
    #[serde(rename = "conclusao", deserialize_with = "nullable_string")]
    pub conclusion: String,
    #[serde(rename = "referencias", deserialize_with = "nullable_strings")]
    pub references: Vec<String>,
}

impl DocumentRecord {
    pub fn has_cover(&self) -> bool {
        self.cover.is_present()
    }

    pub fn has_introduction(&self) -> bool {
        is_present(&self.introduction)
    }

    pub fn has_conclusion(&self) -> bool {
        is_present(&self.conclusion)
    }

    /// References that are not blank, in input order.
    pub fn present_references(&self) -> impl Iterator<Item = &str> {
        self.references
            .iter()
            .map(String::as_str)
            .filter(|reference| is_present(reference))
    }

    pub fn has_references(&self) -> bool {
        self.present_references().next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cover {
    #[serde(rename = "instituicao", deserialize_with = "nullable_string")]
    pub institution: String,
    #[serde(rename = "curso", deserialize_with = "nullable_string")]
    pub course: String,
    #[serde(rename = "autor", deserialize_with = "nullable_string")]
    pub author: String,
    #[serde(rename = "titulo", deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(
        rename = "subtitulo",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub subtitle: Option<String>,
    #[serde(rename = "cidade", deserialize_with = "nullable_string")]
    pub city: String,
    #[serde(rename = "ano", deserialize_with = "year_string")]
    pub year: String,
}

impl Cover {
    pub fn is_present(&self) -> bool {
        [
            &self.institution,
            &self.course,
            &self.author,
            &self.title,
            &self.city,
            &self.year,
        ]
        .iter()
        .any(|field| is_present(field))
            || self.subtitle.as_deref().is_some_and(is_present)
    }
}

/// Abstract in either language. Keywords are serialized as `palavras_chave`;
/// the English abstract's `keywords` key is accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abstract {
    #[serde(rename = "texto", deserialize_with = "nullable_string")]
    pub text: String,
    #[serde(
        rename = "palavras_chave",
        alias = "keywords",
        deserialize_with = "nullable_strings"
    )]
    pub keywords: Vec<String>,
}

impl Abstract {
    pub fn is_present(&self) -> bool {
        is_present(&self.text)
    }

    pub fn present_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(|keyword| is_present(keyword))
    }
}

/// One body section. `level` drives casing, weight and indentation; nesting
/// is not required to be monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    #[serde(rename = "titulo", deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(rename = "nivel", deserialize_with = "section_level")]
    pub level: u8,
    #[serde(rename = "conteudo", deserialize_with = "nullable_string")]
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, level: u8, content: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            level,
            content: content.into(),
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section {
            title: String::new(),
            level: MIN_SECTION_LEVEL,
            content: String::new(),
        }
    }
}

/// Kind of academic work; only affects the label printed on the cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Tcc,
    Artigo,
    Monografia,
    Dissertacao,
    Tese,
    #[serde(other)]
    Outro,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Tcc => "TRABALHO DE CONCLUSÃO DE CURSO",
            DocumentType::Artigo => "ARTIGO CIENTÍFICO",
            DocumentType::Monografia => "MONOGRAFIA",
            DocumentType::Dissertacao => "DISSERTAÇÃO DE MESTRADO",
            DocumentType::Tese => "TESE DE DOUTORADO",
            DocumentType::Outro => "TRABALHO ACADÊMICO",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

/// A missing level reads as a top-level section.
fn section_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or(MIN_SECTION_LEVEL))
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| is_present(text)))
}

/// The editor stores the year either as text or as a number.
fn year_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Text(text)) => text,
        Some(Year::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
