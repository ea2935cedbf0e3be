// File: src/main.rs
// Purpose: Load configuration, open the database and serve the kanban router

use anyhow::{Context, Result};
use kanban::database::{self, SqlCategoryRepository, SqlProjectRepository};
use kanban::{router, AppState, Catalog, Config, DateParser, ProjectRepository, Translator, Untranslated};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Name of the project created on an empty database
const FIRST_PROJECT: &str = "My first project";

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::load_default()?.with_env_overrides()?;
    info!(app = %config.app.name, "starting");

    let translator: Arc<dyn Translator> = match &config.locale.path {
        Some(path) => Arc::new(Catalog::load(path)?),
        None => Arc::new(Untranslated),
    };

    let pool = database::init_db(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;
    let db_type = database::detect_database_type(&config.database.url);

    let projects = SqlProjectRepository::new(pool.clone(), db_type);
    if projects.get_by_id(1).await?.is_none() {
        let id = database::create_project(&pool, db_type, FIRST_PROJECT).await?;
        info!(project_id = id, "empty database, created a first project");
    }

    let state = AppState::new(
        Arc::new(projects),
        Arc::new(SqlCategoryRepository::new(pool, db_type)),
        translator,
        DateParser::from_config(&config.dates),
    );
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
