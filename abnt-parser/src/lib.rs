//! # abnt-parser
//!
//! Core engine for academic documents annotated with inline structural markers.
//!
//! The pipeline is one way:
//!
//!     DocumentRecord ─┬─> tokenizer (per text field) ─> assembler ─> formats
//!                     ├─> pagination ─> toc
//!                     ├─> references
//!                     ├─> validation
//!                     └─> stats
//!
//! Every stage is a pure function over an in-memory [`abnt::document::DocumentRecord`].
//! The only fallible entry point is [`abnt::loader::DocumentLoader`], which checks the
//! shape of serialized records at the boundary.

pub mod abnt;
