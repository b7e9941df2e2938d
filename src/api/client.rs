//! Shared HTTP client for the LocaBriques REST API.
//!
//! One [`ApiClient`] is built at startup and injected into every tool route.
//! Tool handlers describe their call as an [`ApiRequest`] (method, path,
//! query, body) and go through the single [`ApiClient::send`] choke point,
//! which normalizes every failure into an [`ApiError`].

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, multipart::Form};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::core::config::{self, ApiConfig};
use crate::core::error::{Error, Result};

/// Query string under construction.
///
/// Unset optional parameters are omitted entirely, never sent as null or
/// empty strings. Values serialize through `ToString`, so booleans become
/// `true`/`false` and enums their wire string via `Display`.
#[derive(Debug, Default, Clone)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Append an optional parameter, omitting it when unset.
    pub fn push<T: ToString>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(v) => self.set(key, v.to_string()),
            None => self,
        }
    }

    /// Append an optional array parameter as a repeated key.
    pub fn push_each<T: ToString>(mut self, key: &str, values: &Option<Vec<T>>) -> Self {
        if let Some(values) = values {
            for v in values {
                self.0.push((key.to_string(), v.to_string()));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Body of an outgoing request.
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Description of one outgoing API request.
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Query,
    body: RequestBody,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach query parameters.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attach a multipart form body.
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

/// Shared client for the LocaBriques REST API.
///
/// Bound to a fixed base origin; every request carries the LocaBriques
/// user-agent, a JSON content-type default, and - when a token was
/// configured - a `Token <value>` authorization header.
pub struct ApiClient {
    http: reqwest::Client,
    /// Plain client for fetching user-supplied image URLs. Carries none of
    /// the API default headers, so the token never leaves our origin.
    media: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build the client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Token {token}"))
                .map_err(|_| Error::config("LOCABRIQUES_API_TOKEN contains invalid characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            media: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client for fetching remote images referenced in tool arguments.
    pub fn media(&self) -> &reqwest::Client {
        &self.media
    }

    /// Execute one request and normalize the outcome.
    ///
    /// 2xx bodies parse as JSON (empty body becomes JSON null, a non-JSON
    /// body is kept as a string). Everything else becomes an [`ApiError`].
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method, &url);

        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }

        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => builder = builder.json(&body),
            RequestBody::Multipart(form) => builder = builder.multipart(form),
        }

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::transport)?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        } else {
            let data = serde_json::from_str(&text).ok();
            Err(ApiError::http(status, data))
        }
    }
}
