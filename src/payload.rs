//! JSON bodies accepted by the WaSender API.
//!
//! Every payload is a flat object; binary content travels as standard base64.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WaSenderError;
use crate::media::read_and_encode;

/// Body for `/senddoc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub to: String,
    pub caption: String,
    pub filename: String,
    pub document: String,
}

impl DocumentPayload {
    pub fn new(to: &str, caption: &str, filename: &str, document: String) -> Self {
        DocumentPayload {
            to: to.to_string(),
            caption: caption.to_string(),
            filename: filename.to_string(),
            document,
        }
    }

    /// Read and encode `path`, failing before any payload exists if it cannot be read.
    pub fn from_file(
        path: &Path,
        to: &str,
        caption: &str,
        filename: &str,
    ) -> Result<Self, WaSenderError> {
        let document = read_and_encode(path)?;
        Ok(Self::new(to, caption, filename, document))
    }
}

/// Body for `/sendimg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub to: String,
    pub caption: String,
    pub image: String,
}

impl ImagePayload {
    pub fn new(to: &str, caption: &str, image: String) -> Self {
        ImagePayload {
            to: to.to_string(),
            caption: caption.to_string(),
            image,
        }
    }

    pub fn from_file(path: &Path, to: &str, caption: &str) -> Result<Self, WaSenderError> {
        let image = read_and_encode(path)?;
        Ok(Self::new(to, caption, image))
    }
}

/// Body for `/sendtext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPayload {
    pub to: String,
    pub text: String,
}

impl TextPayload {
    pub fn new(to: &str, text: &str) -> Self {
        TextPayload {
            to: to.to_string(),
            text: text.to_string(),
        }
    }
}
