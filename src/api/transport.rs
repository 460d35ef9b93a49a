// Transport abstraction.
// One request in, one raw response out; lets the service run against a stub.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;

/// A single outbound request against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Resource path relative to the base URL (e.g. `posts`).
    pub resource: String,
    pub method: Method,
    /// Query parameters, sent in order.
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a GET request for a resource.
    pub fn get(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            method: Method::GET,
            params: Vec::new(),
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }
}

#[cfg(test)]
impl ApiRequest {
    /// Look up a query parameter by name.
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response to a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
impl ApiResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Performs one HTTP exchange per call.
///
/// Implementations turn non-success statuses into errors, so an `Ok` response
/// always carries a body worth parsing.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
