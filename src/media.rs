//! File helpers shared by the document and image senders.

use std::path::Path;

use tracing::debug;

use crate::error::WaSenderError;

/// Base64-encode raw file bytes (standard alphabet, padded).
pub fn base64_encode(data: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Read the whole file into memory and return its base64 text.
///
/// The file handle is closed before this returns, so callers never hold it
/// across a network call.
pub fn read_and_encode(path: &Path) -> Result<String, WaSenderError> {
    let data = std::fs::read(path).map_err(|source| WaSenderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(base64_encode(&data))
}
