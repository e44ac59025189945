//! CLI commands
//!
//! Every subcommand loads one document, runs one stage of the core over it and
//! writes the result in the configured output format.

use abnt_config::AbntConfig;
use abnt_parser::abnt::formats::{text, to_json, OutputFormat, UnknownFormat};
use abnt_parser::abnt::loader::{DocumentLoader, LoaderError};
use abnt_parser::abnt::tokenizer::tokenize;
use serde_json::Error as JsonError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit status of `check` when a blocking finding exists.
pub const BLOCKING_EXIT_CODE: i32 = 2;

/// Subcommand names with their help text.
pub const COMMANDS: &[(&str, &str)] = &[
    ("pages", "Assembled pages in rendering order"),
    ("toc", "Table of contents (sumário)"),
    ("references", "References in alphabetical order"),
    ("check", "ABNT validation report"),
    ("stats", "Word count, estimated pages and reading time"),
    ("tokenize", "Content nodes of a raw annotated text file"),
];

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] JsonError),
    #[error(transparent)]
    Format(#[from] UnknownFormat),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// What a command printed and the status it exits with.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub status: i32,
}

impl Outcome {
    fn success(output: String) -> Self {
        Outcome { output, status: 0 }
    }
}

pub fn execute(command: &str, path: &Path, config: &AbntConfig) -> Result<Outcome, CliError> {
    let format = config.output.format;
    let options = config.output.text_options();
    tracing::debug!(command, path = %path.display(), %format, "executing command");

    if command == "tokenize" {
        let source = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let nodes = tokenize(&source);
        return Ok(Outcome::success(match format {
            OutputFormat::Text => text::render_nodes(&nodes),
            OutputFormat::Json => to_json(&nodes)?,
        }));
    }

    let loader = DocumentLoader::from_path(path)?;
    match command {
        "pages" => {
            let assembled = loader.assemble();
            Ok(Outcome::success(match format {
                OutputFormat::Text => text::render_document(&assembled, &options),
                OutputFormat::Json => to_json(&assembled)?,
            }))
        }
        "toc" => {
            let entries = loader.table_of_contents();
            Ok(Outcome::success(match format {
                OutputFormat::Text => text::render_toc(&entries, &options),
                OutputFormat::Json => to_json(&entries)?,
            }))
        }
        "references" => {
            let references = loader.references();
            Ok(Outcome::success(match format {
                OutputFormat::Text => text::render_references(&references),
                OutputFormat::Json => to_json(&references)?,
            }))
        }
        "check" => {
            let report = loader.validate();
            let output = match format {
                OutputFormat::Text => text::render_report(&report),
                OutputFormat::Json => to_json(&report)?,
            };
            let status = if report.is_blocking() {
                BLOCKING_EXIT_CODE
            } else {
                0
            };
            Ok(Outcome { output, status })
        }
        "stats" => {
            let stats = loader.stats(&config.stats);
            Ok(Outcome::success(match format {
                OutputFormat::Text => text::render_stats(&stats),
                OutputFormat::Json => to_json(&stats)?,
            }))
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}
