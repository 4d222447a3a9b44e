use std::sync::Arc;

use serde_json::Value;

use crate::{ClientError, Result};

/// Production WhatConverts endpoint, including the version prefix.
pub const BASE_ENDPOINT: &str = "https://app.whatconverts.com/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    DELETE,
}

/// One HTTP request, described as plain data so transports can be swapped.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Full URL without the query string.
    pub url: String,
    /// Query parameters for GET, form-encoded body fields for POST.
    /// DELETE requests carry none.
    pub params: Vec<(String, String)>,
    /// Basic Auth pair `(api_token, api_secret)`, attached to every request.
    pub auth: (String, String),
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP round-trip. Implementations must surface application
/// error bodies rather than failing on 4xx/5xx statuses, so that
/// `error_message` payloads can be inspected uniformly.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a blocking reqwest client. reqwest does not
/// turn non-2xx statuses into errors on its own, which is exactly the
/// behavior the error-detection layer needs.
pub struct ReqwestTransport {
    inner: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let (token, secret) = request.auth;
        let builder = match request.method {
            HttpMethod::GET => self.inner.get(&request.url).query(&request.params),
            HttpMethod::POST => self.inner.post(&request.url).form(&request.params),
            HttpMethod::DELETE => self.inner.delete(&request.url),
        };
        let response = builder.basic_auth(token, Some(secret)).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

pub struct Client {
    base_url: String,
    api_token: String,
    api_secret: String,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Create a client against the production endpoint, authenticating every
    /// request with HTTP Basic Auth using the given token/secret pair.
    pub fn new(api_token: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            base_url: BASE_ENDPOINT.to_string(),
            api_token: api_token.into(),
            api_secret: api_secret.into(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub(crate) fn get(&self, path: &str, params: Vec<(String, String)>) -> Result<Value> {
        self.execute(HttpMethod::GET, path, params)
    }

    pub(crate) fn post(&self, path: &str, params: Vec<(String, String)>) -> Result<Value> {
        self.execute(HttpMethod::POST, path, params)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Value> {
        self.execute(HttpMethod::DELETE, path, Vec::new())
    }

    fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<Value> {
        let request = HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, path),
            params,
            auth: (self.api_token.clone(), self.api_secret.clone()),
        };
        let response = self.transport.execute(request)?;
        normalize(response)
    }
}

/// Decode a response body and check it for a WhatConverts application error.
///
/// The server reports failures through a top-level `error_message` field and
/// may do so under any HTTP status, including 200, so the status code is
/// never consulted for success/failure here. It is only carried into the
/// error for diagnostics.
pub(crate) fn normalize(response: HttpResponse) -> Result<Value> {
    let body: Value = serde_json::from_str(&response.body)?;
    if let Some(message) = body.get("error_message").and_then(Value::as_str) {
        if !message.is_empty() {
            return Err(ClientError::Api {
                message: message.to_string(),
                status: response.status,
            });
        }
    }
    Ok(body)
}

/// Unwrap the first element of the pluralized array the server wraps
/// single-item lookups in (`GET accounts/{id}` answers with an `accounts`
/// array of one).
pub(crate) fn first_item(mut body: Value, items_field: &str) -> Result<Value> {
    let items = body
        .get_mut(items_field)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| ClientError::UnexpectedBody(format!("missing `{items_field}` array")))?;
    if items.is_empty() {
        return Err(ClientError::UnexpectedBody(format!(
            "empty `{items_field}` array"
        )));
    }
    Ok(items.remove(0))
}

/// Copy caller options into owned request parameters, verbatim.
pub(crate) fn to_params(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
