//! Tolerant file reads
//!
//! Every read opens its own handle and drops it before returning, whatever the
//! outcome. Failures become a [`ReadFailure`], which the public helpers log as a
//! warning and replace with an empty string.

use crate::error::ReadFailure;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Whole file content, trimmed. Absent files yield `""` without a warning.
pub fn read_trimmed(path: &Path) -> String {
    if !path.exists() {
        return String::new();
    }
    or_empty(try_read_trimmed(path))
}

/// First line of the file, trimmed. Later lines are never read.
pub fn read_first_line(path: &Path) -> String {
    or_empty(try_read_first_line(path))
}

pub fn try_read_trimmed(path: &Path) -> Result<String, ReadFailure> {
    let content = std::fs::read_to_string(path).map_err(|source| ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.trim().to_string())
}

pub fn try_read_first_line(path: &Path) -> Result<String, ReadFailure> {
    let failure = |source| ReadFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(failure)?);
    let mut line = Vec::new();
    loop {
        let buf = reader.fill_buf().map_err(failure)?;
        if buf.is_empty() {
            break;
        }
        // `\n`, `\r\n` and a lone `\r` all end the line
        match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                line.extend_from_slice(&buf[..end]);
                break;
            }
            None => {
                let len = buf.len();
                line.extend_from_slice(buf);
                reader.consume(len);
            }
        }
    }

    let line = String::from_utf8(line).map_err(|e| {
        failure(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    Ok(line.trim().to_string())
}

fn or_empty(result: Result<String, ReadFailure>) -> String {
    match result {
        Ok(content) => content,
        Err(failure) => {
            warn!(
                path = %failure.path.display(),
                error = %failure.source,
                "Could not read file, using empty content"
            );
            String::new()
        }
    }
}
