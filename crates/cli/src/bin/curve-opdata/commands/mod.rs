pub mod build;
pub mod compare;
pub mod curves;
pub mod encode;
pub mod validate;

use anyhow::{Context, Result};
use curve_opdata_core::ByteBuffer;
use std::fs;
use std::path::Path;

/// Hex from the command line or the trimmed contents of a file
pub(crate) fn read_hex(value: Option<&str>, file: Option<&Path>) -> Result<ByteBuffer> {
    match (value, file) {
        (Some(value), None) => ByteBuffer::from_hex(value).context("Invalid hex argument"),
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read hex file: {:?}", path))?;
            ByteBuffer::from_hex(&content)
                .with_context(|| format!("Invalid hex in file: {:?}", path))
        }
        (Some(_), Some(_)) => anyhow::bail!("Give either a hex argument or --file, not both"),
        (None, None) => anyhow::bail!("Missing input: give a hex argument or --file"),
    }
}
