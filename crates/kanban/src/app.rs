// File: src/app.rs
// Purpose: Application state and the axum router

use crate::controllers::CategoryController;
use crate::date_parser::DateParser;
use crate::error::ControllerResult;
use crate::repository::{CategoryRepository, ProjectRepository};
use crate::request_context::RequestContext;
use crate::response::Reply;
use crate::session::{SessionStore, SESSION_COOKIE};
use crate::translator::Translator;
use crate::validators::{TaskOperation, TaskValidator};
use crate::views::{self, FormContext};
use axum::extract::{FromRef, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryController,
    pub tasks: TaskValidator,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        categories: Arc<dyn CategoryRepository>,
        translator: Arc<dyn Translator>,
        date_parser: DateParser,
    ) -> Self {
        Self {
            categories: CategoryController::new(projects, categories, translator.clone()),
            tasks: TaskValidator::new(translator, date_parser),
            sessions: SessionStore::new(),
        }
    }

    pub fn with_sessions(mut self, sessions: SessionStore) -> Self {
        self.sessions = sessions;
        self
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/project/:project_id/categories",
            get(category_index).post(category_save),
        )
        .route(
            "/project/:project_id/category/:category_id/edit",
            get(category_edit).post(category_update),
        )
        .route(
            "/project/:project_id/category/:category_id/remove",
            get(category_confirm).post(category_remove),
        )
        .route("/api/tasks/validate/:operation", post(validate_task))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A session is worth keeping when the visitor already had one, a notice
/// waits for the next page, or the page just rendered carries its token.
fn keeps_session(ctx: &RequestContext, result: &ControllerResult) -> bool {
    !ctx.session_is_new
        || ctx.session.flash().is_some()
        || matches!(result, Ok(Reply::Html { status, .. }) if *status == StatusCode::OK)
}

/// Store the session and turn the controller outcome into a response
async fn finish(state: &AppState, ctx: RequestContext, result: ControllerResult) -> Response {
    let keep = keeps_session(&ctx, &result);
    if keep {
        state.sessions.save(&ctx.session_id, ctx.session).await;
    }

    let mut response = match result {
        Ok(reply) => reply.into_response(),
        Err(e) => e.into_response(),
    };

    if keep {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, ctx.session_id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }

    response
}

// ============================================================================
// Category handlers
// ============================================================================

async fn category_index(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.index(&mut ctx, FormContext::empty()).await;
    finish(&state, ctx, result).await
}

async fn category_save(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.save(&mut ctx).await;
    finish(&state, ctx, result).await
}

async fn category_edit(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.edit(&mut ctx, FormContext::empty()).await;
    finish(&state, ctx, result).await
}

async fn category_update(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.update(&mut ctx).await;
    finish(&state, ctx, result).await
}

async fn category_confirm(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.confirm(&mut ctx).await;
    finish(&state, ctx, result).await
}

async fn category_remove(State(state): State<AppState>, mut ctx: RequestContext) -> Response {
    let result = state.categories.remove(&mut ctx).await;
    finish(&state, ctx, result).await
}

// ============================================================================
// API
// ============================================================================

/// Run a task rule set against the submitted body and return the result
async fn validate_task(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    ctx: RequestContext,
) -> Response {
    let operation = match operation.parse::<TaskOperation>() {
        Ok(operation) => operation,
        Err(message) => {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response();
        }
    };

    let result = state.tasks.validate(operation, &ctx.form);
    debug!(operation = operation.as_str(), valid = result.is_valid, "task values validated");

    Json(result).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> Response {
    Reply::html(views::errors::not_found())
        .status(StatusCode::NOT_FOUND)
        .into_response()
}
