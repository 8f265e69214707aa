//! JSEL I/O - Document I/O and the end-to-end selection pipeline
//!
//! This crate provides the file I/O layer and high-level API for JSEL:
//!
//! - Input document loading
//! - Result writing
//! - The request/summary API tying both to the selection core

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod loader;
pub mod writer;

// Re-export commonly used types
pub use jsel_core::{IndexSpec, Result, SelectError, ValueKind};
pub use loader::{read_document, read_document_path, InputDoc};
pub use writer::{write_result, write_result_path};

use jsel_core::select;
use std::path::PathBuf;

/// A selection request: where to read the document and where to write the result
#[derive(Debug, Clone)]
pub struct SelectRequest {
    /// Input document path
    pub input: PathBuf,
    /// Output file path
    pub output: PathBuf,
}

/// Summary of a completed selection run
#[derive(Debug, Clone, Copy)]
pub struct SelectSummary {
    /// Length of the source list
    pub list_len: usize,
    /// Number of values written
    pub values_selected: usize,
}

/// Run one selection end to end: read, validate, select, write.
///
/// Steps run strictly in order. A failure in any step stops the run and
/// leaves the output file untouched; in particular the output is never
/// created or truncated when selection fails.
pub fn execute_select(request: SelectRequest) -> Result<SelectSummary> {
    let doc = loader::read_document_path(&request.input)?;
    let spec = doc.index_spec()?;
    let selected = select(&doc.list, &spec)?;
    writer::write_result_path(&request.output, &selected)?;

    Ok(SelectSummary {
        list_len: doc.list.len(),
        values_selected: selected.len(),
    })
}
