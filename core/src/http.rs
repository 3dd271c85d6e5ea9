//! HTTP requests and responses as plain data.
//!
//! # Design
//! [`crate::AccountsApi`] builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network. The async client
//! executes them with `reqwest`; tests can feed canned responses directly.

use bytes::Bytes;
use url::Url;

/// Media type used for request and response bodies.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request built by `AccountsApi::build_*`, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response handed back to `AccountsApi::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Content negotiation headers sent with every request, body or not.
pub(crate) fn negotiation_headers() -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), MEDIA_TYPE.to_string()),
        ("Accept".to_string(), MEDIA_TYPE.to_string()),
    ]
}
