// ============================================================================
// API CLIENT - gateway for every backend call (stateless)
// ============================================================================
// Builds the URL, attaches the bearer token, sends JSON and maps failures.
// Response bodies are normalised here once; services only see typed values.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::CONFIG;
use crate::stores::session_store::stored_token;
use crate::utils::BrowserStorage;

/// Non-2xx with a JSON body that carries neither `detail` nor `message`
pub const GENERIC_FAILURE: &str = "Request failed";
/// Non-2xx whose body is not JSON at all
pub const UNREADABLE_FAILURE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Auth {
    /// Token from the session store, if any
    #[default]
    Stored,
    Explicit(String),
    Anonymous,
}

/// Logical request: path, method, optional JSON body, query params and token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiRequest {
    path: String,
    method: Method,
    body: Option<Value>,
    params: Vec<(String, String)>,
    auth: Auth,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            path: path.to_string(),
            method,
            ..Self::default()
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Explicit token; `None` keeps the fallback to the stored session token.
    pub fn token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.auth = Auth::Explicit(token.to_string());
        }
        self
    }

    /// Never send a bearer header (login, register)
    pub fn anonymous(mut self) -> Self {
        self.auth = Auth::Anonymous;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A request ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

type TokenSource = Rc<dyn Fn() -> Option<String>>;

/// Cliente API: sin estado propio, el token sale de `token_source`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    token_source: TokenSource,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Browser client: configured base URL, `fetch`, token from localStorage
    pub fn new() -> Self {
        Self::with_transport(&CONFIG.api_base_url, Rc::new(GlooTransport))
            .with_token_source(|| stored_token(&BrowserStorage))
    }

    pub fn with_transport(base_url: &str, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            token_source: Rc::new(|| None),
        }
    }

    pub fn with_token_source(mut self, source: impl Fn() -> Option<String> + 'static) -> Self {
        self.token_source = Rc::new(source);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url + path`, plus a form-encoded query string when there are params
    pub fn build_url(&self, path: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    pub fn prepare(&self, request: ApiRequest) -> PreparedRequest {
        let url = self.build_url(&request.path, &request.params);

        let token = match request.auth {
            Auth::Explicit(token) => Some(token),
            Auth::Stored => (self.token_source)(),
            Auth::Anonymous => None,
        };

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        PreparedRequest {
            method: request.method,
            url,
            headers,
            body: request.body.map(|body| body.to_string()),
        }
    }

    /// Sends the request; any non-2xx status becomes `ApiError::Http`.
    pub async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let prepared = self.prepare(request);

        log::debug!("🌐 {} {}", method.as_str(), path);

        let response = self.transport.send(prepared).await.map_err(|e| {
            log::error!("❌ {} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if !response.ok() {
            let message = error_message(&response.body);
            log::warn!("⚠️ {} {} -> HTTP {}: {}", method.as_str(), path, response.status, message);
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        decode_body(&response.body)
    }
}

/// `detail`, then `message`, then a generic fallback. FastAPI validation errors
/// (`detail: [{msg, ...}]`) yield the first `msg`.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return UNREADABLE_FAILURE.to_string();
    };

    field_text(value.get("detail"))
        .or_else(|| field_text(value.get("message")))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

fn field_text(field: Option<&Value>) -> Option<String> {
    match field? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        Value::Object(_) | Value::Number(_) => field.map(Value::to_string),
        _ => None,
    }
}

/// Decodes a success body into `T`.
///
/// Some endpoints answer with a JSON string that itself contains JSON; that
/// wrapping is removed here. Bodies that are not JSON are treated as plain text.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_value(normalize_body(body)).map_err(|e| ApiError::Decode(e.to_string()))
}

fn normalize_body(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(nested @ (Value::Object(_) | Value::Array(_))) => nested,
            _ => Value::String(inner),
        },
        Ok(value) => value,
        Err(_) => Value::String(body.to_string()),
    }
}
