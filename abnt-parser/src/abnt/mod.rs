//! Main module for abnt library functionality

pub mod assembler;
pub mod document;
pub mod formats;
pub mod loader;
pub mod pagination;
pub mod references;
pub mod stats;
pub mod style;
pub mod toc;
pub mod tokenizer;
pub mod validation;
