// File: src/response.rs
// Purpose: Controller replies (rendered page or redirect) and their HTTP form

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

// ============================================================================
// IntoHtml: Maud Markup, String and &str into a body
// ============================================================================

pub trait IntoHtml {
    fn into_html(self) -> String;
}

impl IntoHtml for maud::Markup {
    fn into_html(self) -> String { self.into_string() }
}

impl IntoHtml for String {
    fn into_html(self) -> String { self }
}

impl IntoHtml for &str {
    fn into_html(self) -> String { self.to_string() }
}

// ============================================================================
// Reply
// ============================================================================

/// What a controller action produces.
///
/// ```ignore
/// Reply::html(views::category::index(...))
/// Reply::redirect(urls::category_index(project.id))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Rendered page
    Html { content: String, status: StatusCode },
    /// See-other redirect, also sent as `HX-Redirect` for HTMX clients
    Redirect { location: String },
}

impl Reply {
    /// 200 page. Accepts Maud Markup, String, or &str.
    pub fn html(content: impl IntoHtml) -> Self {
        Reply::Html {
            content: content.into_html(),
            status: StatusCode::OK,
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Reply::Redirect {
            location: location.into(),
        }
    }

    /// Override the status of a page reply; redirects are unchanged
    pub fn status(self, status: StatusCode) -> Self {
        match self {
            Reply::Html { content, .. } => Reply::Html { content, status },
            redirect => redirect,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Reply::Redirect { .. })
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Reply::Redirect { location } => Some(location),
            Reply::Html { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Reply::Html { content, .. } => Some(content),
            Reply::Redirect { .. } => None,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Html { content, status } => (status, Html(content)).into_response(),
            Reply::Redirect { location } => {
                let mut headers = HeaderMap::new();
                if let Result::Ok(value) = HeaderValue::from_str(&location) {
                    headers.insert(header::LOCATION, value.clone());
                    headers.insert("HX-Redirect", value);
                }
                (StatusCode::SEE_OTHER, headers).into_response()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
