//! Reading detector responses from files and readers.

use std::io::Read;
use std::path::Path;

use crate::error::{InputError, InputResult};
use crate::types::DetectorResponse;

/// Loads detector responses.
pub struct ResponseReader;

impl ResponseReader {
    /// Read and parse a detector response file.
    pub fn read_file(path: &Path) -> InputResult<DetectorResponse> {
        if !path.exists() {
            return Err(InputError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| InputError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Read and parse a detector response from any reader (e.g., stdin).
    ///
    /// `label` names the source in error messages.
    pub fn read_from<R: Read>(mut reader: R, label: &Path) -> InputResult<DetectorResponse> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| InputError::Read {
                path: label.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::parse(&content, label)
    }

    /// Parse response JSON, attributing failures to `path`.
    pub fn parse(content: &str, path: &Path) -> InputResult<DetectorResponse> {
        DetectorResponse::from_json(content).map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
