//! Result writing

use jsel_core::Result;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the selected values as a compact JSON array.
pub fn write_result<W: Write>(writer: W, values: &[Value]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, values)?;
    writer.flush()?;
    Ok(())
}

/// Write the selected values to `path`, replacing any existing content.
pub fn write_result_path(path: &Path, values: &[Value]) -> Result<()> {
    write_result(File::create(path)?, values)
}
