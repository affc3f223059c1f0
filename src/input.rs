// ABOUTME: JSON input and output helpers for command-line and batch callers
// ABOUTME: Reads typed records from a file path or stdin and writes pretty JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Path spelling that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// Read a JSON document from `path`, or from stdin when `path` is `None` or `-`
///
/// # Errors
///
/// Returns an error if the source cannot be read or does not hold valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => read_json_file(path),
        _ => read_json_from(io::stdin().lock(), "stdin"),
    }
}

/// Read a JSON document from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not hold valid JSON for `T`
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| anyhow!("Failed to open {}: {e}", path.display()))?;
    read_json_from(BufReader::new(file), &path.display().to_string())
}

/// Read a JSON document from any reader; `source` names it in error messages
///
/// # Errors
///
/// Returns an error if the reader does not hold valid JSON for `T`
pub fn read_json_from<T: DeserializeOwned, R: Read>(reader: R, source: &str) -> Result<T> {
    serde_json::from_reader(reader).map_err(|e| anyhow!("Invalid JSON in {source}: {e}"))
}

/// Write a value as pretty JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_json<T: Serialize, W: Write>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
