//! Blocking HTTP client for the WaSender API.
//!
//! Each call is one synchronous POST. The response body is returned as-is
//! whatever the status code; only transport failures are errors.

use std::path::Path;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::WaSenderError;
use crate::payload::{DocumentPayload, ImagePayload, TextPayload};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SendDocument,
    SendImage,
    SendText,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SendDocument => "/senddoc",
            Endpoint::SendImage => "/sendimg",
            Endpoint::SendText => "/sendtext",
        }
    }

    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Raw server reply. `body` is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct WaSenderClient {
    http: reqwest::blocking::Client,
    config: Config,
}

impl WaSenderClient {
    pub fn new(config: Config) -> Result<Self, WaSenderError> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .user_agent(format!("wasender-client/{VERSION}"))
            .build()?;
        Ok(WaSenderClient { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a local file as a document. The file is read before any request is made.
    pub fn send_document(
        &self,
        path: &Path,
        caption: &str,
        filename: &str,
    ) -> Result<ApiResponse, WaSenderError> {
        let payload = DocumentPayload::from_file(path, &self.config.recipient, caption, filename)?;
        self.post(Endpoint::SendDocument, &payload)
    }

    pub fn send_image(&self, path: &Path, caption: &str) -> Result<ApiResponse, WaSenderError> {
        let payload = ImagePayload::from_file(path, &self.config.recipient, caption)?;
        self.post(Endpoint::SendImage, &payload)
    }

    pub fn send_text(&self, text: &str) -> Result<ApiResponse, WaSenderError> {
        let payload = TextPayload::new(&self.config.recipient, text);
        self.post(Endpoint::SendText, &payload)
    }

    pub fn post<P: Serialize>(
        &self,
        endpoint: Endpoint,
        payload: &P,
    ) -> Result<ApiResponse, WaSenderError> {
        let url = endpoint.url(&self.config.base_url);
        let body = serde_json::to_vec(payload)?;
        debug!("POST {url} ({} byte body)", body.len());

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.config.authorization_header())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        let response = ApiResponse { status, body };

        if response.is_success() {
            info!("{} answered HTTP {status}", endpoint.path());
        } else {
            warn!("{} answered HTTP {status}", endpoint.path());
        }
        Ok(response)
    }
}
