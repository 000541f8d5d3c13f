use crate::error::WaSenderError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_BEARER_TOKEN: &str = "your_secret_token";
pub const DEFAULT_RECIPIENT: &str = "yournumber";

pub const DOCUMENT_PATH: &str = "test.docx";
pub const DOCUMENT_FILENAME: &str = "document.docx";
pub const DOCUMENT_CAPTION: &str = "Test document";

pub const IMAGE_PATH: &str = "res.png";
pub const IMAGE_CAPTION: &str = "Test document";

pub const TEXT_MESSAGE: &str = "Test message";

const ENV_BASE_URL: &str = "WASENDER_BASE_URL";
const ENV_TOKEN: &str = "WASENDER_TOKEN";
const ENV_RECIPIENT: &str = "WASENDER_TO";

/// Where to send and as whom. Defaults to the local API with the placeholder credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub bearer_token: String,
    pub recipient: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.into(),
            bearer_token: DEFAULT_BEARER_TOKEN.into(),
            recipient: DEFAULT_RECIPIENT.into(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `WASENDER_BASE_URL`, `WASENDER_TOKEN` and `WASENDER_TO`.
    pub fn from_env() -> Result<Self, WaSenderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable variable source.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WaSenderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Config::default();
        let config = Config {
            base_url: get(ENV_BASE_URL).unwrap_or(defaults.base_url),
            bearer_token: get(ENV_TOKEN).unwrap_or(defaults.bearer_token),
            recipient: get(ENV_RECIPIENT).unwrap_or(defaults.recipient),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WaSenderError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(WaSenderError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.bearer_token.is_empty() {
            return Err(WaSenderError::Config("bearer token must not be empty".into()));
        }
        if self.recipient.is_empty() {
            return Err(WaSenderError::Config("recipient must not be empty".into()));
        }
        Ok(())
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}
