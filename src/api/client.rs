// HTTP transport backed by reqwest.
// Builds request URLs from the configured base and converts error statuses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{PostieError, Result};

use super::transport::{ApiRequest, ApiResponse, Transport};

/// Transport that talks to the real API over HTTP.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given base URL.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("postie-tui"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PostieError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a transport from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(PostieError::NotFound(response.url().to_string())),
            status => Err(PostieError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.resource);
        tracing::debug!(method = %request.method, %url, "sending request");

        let response = self
            .client
            .request(request.method.clone(), &url)
            .query(&request.params)
            .send()
            .await
            .map_err(PostieError::Http)?;

        let response = Self::check_response(response).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(PostieError::Http)?;

        Ok(ApiResponse { status, body })
    }
}
