//! The HTTP seam between the client and the network.

use crate::error::{ConfigError, RequestError};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Status and body of an upstream reply, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET request.
///
/// Implementations must not retry; a failed exchange is reported once as
/// [`RequestError::Transport`]. Non-2xx replies are *not* errors at this
/// level, they come back as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse, RequestError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse, RequestError> {
        (**self).get(url, query, headers).await
    }
}

/// [`Transport`] backed by a pooled [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::builder().build().map_err(ConfigError::Client)?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        headers: &HeaderMap,
    ) -> Result<RawResponse, RequestError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .headers(headers.clone())
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
