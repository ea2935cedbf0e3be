// File: src/request_context.rs
// Purpose: Request context with path params, query, form values and session

use crate::error::ControllerError;
use crate::session::{SessionData, SessionStore, SESSION_COOKIE};
use axum::extract::{FromRef, FromRequest, FromRequestParts, Path, Request};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use kanban_validation::FormValues;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::warn;

/// Largest request body accepted by the extractor
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request context handed to controllers
#[derive(Clone)]
pub struct RequestContext {
    /// HTTP method (GET, POST, ...)
    pub method: Method,

    /// Request path
    pub path: String,

    /// Route parameters (`:project_id`, `:category_id`)
    pub params: HashMap<String, String>,

    /// Query parameters from URL (?key=value)
    pub query: QueryParams,

    /// Submitted form values, before the anti-forgery check
    pub form: FormValues,

    /// Id of the session loaded for this request
    pub session_id: String,

    /// No live session came with the request
    pub session_is_new: bool,

    /// Session data; written back after the controller runs
    pub session: SessionData,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params)
            .finish()
    }
}

impl RequestContext {
    /// Create a new request context with a fresh session
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let session = SessionData::new();

        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
            query: QueryParams::default(),
            form: FormValues::new(),
            session_id: uuid::Uuid::new_v4().to_string(),
            session_is_new: true,
            session,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.params.insert(key.into(), value.into());
        self
    }

    pub fn with_form(mut self, form: FormValues) -> Self {
        self.form = form;
        self
    }

    /// Attach an existing session
    pub fn with_session(mut self, session: SessionData) -> Self {
        self.session = session;
        self.session_is_new = false;
        self
    }

    /// Integer route or query parameter; 0 when missing or not a number
    pub fn get_integer_param(&self, name: &str) -> i64 {
        self.params
            .get(name)
            .or_else(|| self.query.get(name))
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Form values with the anti-forgery token checked and removed.
    ///
    /// A missing or wrong token yields an empty set, which then fails the
    /// Required rules of whatever validator runs next.
    pub fn get_values(&self) -> FormValues {
        let mut values = self.form.clone();
        let token = values.remove("csrf_token").unwrap_or_default();

        if self.session.check_csrf_token(&token) {
            values
        } else {
            if !self.form.is_empty() {
                warn!(path = %self.path, "form submitted with an invalid anti-forgery token");
            }
            FormValues::new()
        }
    }

    /// Verify the `csrf_token` query parameter against the session
    pub fn check_csrf_param(&self) -> Result<(), ControllerError> {
        let token = self.query.get("csrf_token").map(String::as_str).unwrap_or("");

        if self.session.check_csrf_token(token) {
            Ok(())
        } else {
            warn!(path = %self.path, "rejected request with an invalid anti-forgery token");
            Err(ControllerError::Forbidden)
        }
    }
}

/// Query parameters from URL
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }
}

// ============================================================================
// Parsing helpers
// ============================================================================

/// Parse cookies from the Cookie header
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    if let Some(cookie_header) = headers.get("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                if let Some((key, value)) = cookie.trim().split_once('=') {
                    cookies.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    cookies
}

/// Decode an `application/x-www-form-urlencoded` string
pub fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    let decode = |s: &str| {
        let spaced = s.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|d| d.into_owned())
            .unwrap_or(spaced)
    };

    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Build form values from a request body according to its content type
pub fn parse_body(method: &Method, headers: &HeaderMap, body: &[u8]) -> FormValues {
    if *method != Method::POST && *method != Method::PUT {
        return FormValues::new();
    }

    let content_type = headers
        .get("content-type")
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("");

    if content_type.contains("application/json") {
        serde_json::from_slice::<JsonValue>(body)
            .map(|json| FormValues::from_json(&json))
            .unwrap_or_default()
    } else if content_type.contains("application/x-www-form-urlencoded") {
        FormValues::from_fields(parse_urlencoded(&String::from_utf8_lossy(body)))
    } else {
        FormValues::new()
    }
}

// ============================================================================
// Extractor
// ============================================================================

#[axum::async_trait]
impl<S> FromRequest<S> for RequestContext
where
    S: Send + Sync,
    SessionStore: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()).into_response())?;

        let form = parse_body(&parts.method, &parts.headers, &bytes);
        let query = QueryParams::new(parts.uri.query().map(parse_urlencoded).unwrap_or_default());
        let cookies = parse_cookies(&parts.headers);

        let session = SessionStore::from_ref(state)
            .load(cookies.get(SESSION_COOKIE).map(String::as_str))
            .await;

        Ok(Self {
            method: parts.method,
            path: parts.uri.path().to_string(),
            params,
            query,
            form,
            session_id: session.id,
            session_is_new: session.is_new,
            session: session.data,
        })
    }
}
