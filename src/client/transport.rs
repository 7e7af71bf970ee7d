//! The transport seam and its HTTP implementation.
//!
//! The resource client never talks to the network directly; it hands fully
//! constructed requests to a [`Transport`]. Tests substitute a scripted
//! transport, production uses [`HttpTransport`] (blocking reqwest with a
//! bearer token).

use std::time::Duration;

use tracing::debug;

use super::error::ClientError;

/// HTTP method subset used by the resource client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully constructed request, ready for execution.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status code and raw body of an executed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Success covers the 2xx and 3xx ranges.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// Executes requests against the remote API.
pub trait Transport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Blocking HTTP transport. Adds the bearer token and JSON accept header to
/// every request; times out after 30 seconds.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    access_token: String,
}

impl HttpTransport {
    pub fn new(access_token: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            access_token: access_token.into(),
        })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        debug!(method = request.method.as_str(), url = %request.url, "executing request");

        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let mut builder = self
            .http
            .request(method, &request.url)
            .header("Accept", "application/json")
            .bearer_auth(&self.access_token);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .to_vec();

        debug!(status, bytes = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_2xx_and_3xx() {
        for status in [200, 204, 301, 399] {
            assert!(ApiResponse { status, body: vec![] }.is_success());
        }
        for status in [199, 400, 404, 500] {
            assert!(!ApiResponse { status, body: vec![] }.is_success());
        }
    }

    #[test]
    fn request_builder_collects_headers_and_body() {
        let req = ApiRequest::new(Method::Post, "https://api.test/accounts")
            .header("Content-Type", "application/json")
            .body(b"{}".to_vec());
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.body.as_deref(), Some(b"{}".as_slice()));
    }
}
