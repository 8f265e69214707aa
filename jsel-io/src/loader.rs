//! Input document loading

use jsel_core::{IndexSpec, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parsed input document
#[derive(Debug, Clone, Deserialize)]
pub struct InputDoc {
    /// Source list to select from
    pub list: Vec<Value>,
    /// Raw index specification, validated separately by [`InputDoc::index_spec`]
    pub indices: Value,
}

impl InputDoc {
    /// Validate the raw `indices` field into a typed specification.
    pub fn index_spec(&self) -> Result<IndexSpec> {
        IndexSpec::from_value(&self.indices)
    }
}

/// Parse an input document from a reader.
pub fn read_document<R: Read>(reader: R) -> Result<InputDoc> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Open and parse the input document at `path`.
pub fn read_document_path(path: &Path) -> Result<InputDoc> {
    read_document(File::open(path)?)
}
