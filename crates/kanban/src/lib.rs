// Kanban - task validation and project category management
// Axum handlers, Maud views and SQLx persistence around the kanban-validation rule engine

pub mod config;
pub mod translator;
pub mod date_parser;
pub mod validators;

// Web layer
pub mod session;
pub mod request_context;
pub mod response;
pub mod error;
pub mod urls;
pub mod views;
pub mod controllers;
pub mod app;

// Storage
pub mod repository;
pub mod database;

// Re-export the rule engine
pub use kanban_validation::{execute, FormValues, Rule, RuleKind, RuleSet, ValidationResult};

pub use app::{router, AppState};
pub use config::Config;
pub use controllers::CategoryController;
pub use date_parser::DateParser;
pub use error::{ControllerError, ControllerResult};
pub use repository::{Category, CategoryRepository, Project, ProjectRepository};
pub use request_context::{QueryParams, RequestContext};
pub use response::{IntoHtml, Reply};
pub use session::{Flash, FlashLevel, SessionData, SessionStore};
pub use translator::{Catalog, Translator, Untranslated};
pub use validators::{CategoryValidator, TaskOperation, TaskValidator};
