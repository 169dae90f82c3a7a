pub mod client;
pub mod endpoint;

use crate::error::ConfigError;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;
use url::Url;

pub const API_HOST: &str = "twitter-x-api.p.rapidapi.com";
pub const KEY_HEADER: &str = "x-rapidapi-key";
pub const HOST_HEADER: &str = "x-rapidapi-host";

/// Contents of an auth file, e.g. `{"rapidapi_key": "..."}`
#[derive(Deserialize)]
pub struct Authentication {
    pub rapidapi_key: String,
}

impl Authentication {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let auth = fs::read_to_string(path)
            .await
            .context("Unable to read auth file")?;
        serde_json::from_str(&auth).context("Unable to deserialize auth file")
    }
}

/// How to get a key for the RapidAPI Twitter API:
/// <https://rapidapi.com/Lundehund/api/twitter-x-api>
pub fn api_key_tutorial() -> &'static str {
    "To obtain the API key for accessing the RapidAPI Twitter API, follow these steps:

1. Go to the RapidAPI website: https://rapidapi.com
2. Sign up for a free account or log in if you already have one.
3. Navigate to the Twitter API page: https://rapidapi.com/Lundehund/api/twitter-x-api
4. Subscribe to the API by selecting a pricing plan that suits your needs.
5. After subscribing, your API key is shown in the \"Endpoints\" tab or in the \"API Key\" section of your RapidAPI dashboard.
6. Copy the API key and pass it to the client.

Note: Keep your API key secure and do not share it publicly."
}

/// Everything a request needs besides its path and parameters. Never changes after
/// construction.
#[derive(Clone)]
pub struct ClientConfig {
    key: String,
    base_url: String,
}

impl ClientConfig {
    /// Only an empty key is refused here. A key that can't travel in a header is
    /// reported by each request instead.
    pub fn new(key: &str) -> Result<Self, ConfigError> {
        if key.is_empty() {
            log::error!("{}", api_key_tutorial());
            return Err(ConfigError::MissingKey);
        }
        Ok(Self {
            key: key.to_string(),
            base_url: format!("https://{API_HOST}/api"),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn host(&self) -> &str {
        API_HOST
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `x-rapidapi-key` and `x-rapidapi-host`, as sent with every request.
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&self.key)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(KEY_HEADER), value);
        headers.insert(
            HeaderName::from_static(HOST_HEADER),
            HeaderValue::from_static(API_HOST),
        );
        Ok(headers)
    }

    /// `path` is appended verbatim, so it should start with `/`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}{}", self.base_url, path))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(ClientConfig::new(""), Err(ConfigError::MissingKey)));
    }

    #[test]
    fn key_that_cannot_be_a_header_is_accepted() {
        let config = ClientConfig::new("abc\ndef").unwrap();
        assert_eq!(config.key(), "abc\ndef");
        assert!(config.headers().is_err());
    }

    #[test]
    fn headers_carry_key_and_host() {
        let config = ClientConfig::new("secret-key").unwrap();
        let headers = config.headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[KEY_HEADER], "secret-key");
        assert_eq!(headers[HOST_HEADER], API_HOST);
        assert!(headers[KEY_HEADER].is_sensitive());
        assert_eq!(config.key(), "secret-key");
    }

    #[test]
    fn fixed_host_and_base() {
        let config = ClientConfig::new("k").unwrap();
        assert_eq!(config.host(), "twitter-x-api.p.rapidapi.com");
        assert_eq!(config.base_url(), "https://twitter-x-api.p.rapidapi.com/api");
    }

    #[test]
    fn endpoint_url_appends_path() {
        let config = ClientConfig::new("k").unwrap();
        assert_eq!(
            config.endpoint_url("/user/followers/blue-verified").unwrap().as_str(),
            "https://twitter-x-api.p.rapidapi.com/api/user/followers/blue-verified"
        );
    }

    #[test]
    fn debug_hides_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn auth_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rapidapi_key": "from-file"}}"#).unwrap();
        let auth = Authentication::load(file.path()).await.unwrap();
        assert_eq!(auth.rapidapi_key, "from-file");
    }

    #[tokio::test]
    async fn malformed_auth_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Authentication::load(file.path()).await.err().unwrap();
        assert_eq!(err.to_string(), "Unable to deserialize auth file");
    }
}
