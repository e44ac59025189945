//! Document loading utilities
//!
//! This module provides `DocumentLoader` - the boundary where serialized
//! document records (JSON from the editor, or YAML written by hand) enter the
//! core. It is the only fallible entry point: once a record has passed the
//! loader, every stage downstream is total.
//!
//! # Example
//!
//! ```rust
//! use abnt_parser::abnt::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_path("tcc.json")?;
//! let report = loader.validate();
//! let pages = loader.assemble();
//! ```

use super::assembler::{assemble, AssembledDocument};
use super::document::{DocumentRecord, MAX_SECTION_LEVEL, MIN_SECTION_LEVEL};
use super::references::order_references;
use super::stats::{DocumentStats, StatsSettings};
use super::toc::{project, TocEntry};
use super::validation::{validate, ValidationReport};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported document extension '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedExtension(String),
    #[error(
        "section {index} has level {level}; levels must be between {min} and {max}",
        min = MIN_SECTION_LEVEL,
        max = MAX_SECTION_LEVEL
    )]
    InvalidSectionLevel { index: usize, level: u8 },
}

/// Serialized forms the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            _ => Err(LoaderError::UnsupportedExtension(extension)),
        }
    }
}

/// Document loader with pipeline shortcuts
pub struct DocumentLoader {
    document: DocumentRecord,
}

impl DocumentLoader {
    /// Load from a file path; the extension picks the format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading document");
        Self::from_str_with(&source, format)
    }

    pub fn from_json_str(source: &str) -> Result<Self, LoaderError> {
        Self::from_str_with(source, SourceFormat::Json)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, LoaderError> {
        Self::from_str_with(source, SourceFormat::Yaml)
    }

    pub fn from_str_with(source: &str, format: SourceFormat) -> Result<Self, LoaderError> {
        let document: DocumentRecord = match format {
            SourceFormat::Json => serde_json::from_str(source)?,
            SourceFormat::Yaml => serde_yaml::from_str(source)?,
        };
        Self::from_document(document)
    }

    /// Wrap an in-memory record after checking its shape.
    pub fn from_document(document: DocumentRecord) -> Result<Self, LoaderError> {
        check_shape(&document)?;
        Ok(DocumentLoader { document })
    }

    pub fn document(&self) -> &DocumentRecord {
        &self.document
    }

    pub fn into_document(self) -> DocumentRecord {
        self.document
    }

    pub fn assemble(&self) -> AssembledDocument {
        assemble(&self.document)
    }

    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        project(&self.document)
    }

    pub fn references(&self) -> Vec<String> {
        order_references(&self.document.references)
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.document)
    }

    pub fn stats(&self, settings: &StatsSettings) -> DocumentStats {
        DocumentStats::compute(&self.document, settings)
    }
}

fn check_shape(document: &DocumentRecord) -> Result<(), LoaderError> {
    let levels = MIN_SECTION_LEVEL..=MAX_SECTION_LEVEL;
    match document
        .body
        .iter()
        .enumerate()
        .find(|(_, section)| !levels.contains(&section.level))
    {
        Some((index, section)) => Err(LoaderError::InvalidSectionLevel {
            index,
            level: section.level,
        }),
        None => Ok(()),
    }
}
