// File: src/repository.rs
// Purpose: Project and category models, repository traits and in-memory stores

use async_trait::async_trait;
use kanban_validation::FormValues;
use serde::Serialize;
use sqlx::FromRow;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Label of the placeholder entry added by `get_list(.., true)`
pub const NO_CATEGORY: &str = "No category";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    pub description: Option<String>,
}

impl Category {
    /// Form values pre-filled from a stored category
    pub fn to_values(&self) -> FormValues {
        let values = FormValues::new()
            .with("id", self.id.to_string())
            .with("name", self.name.as_str())
            .with("project_id", self.project_id.to_string());

        match &self.description {
            Some(description) => values.with("description", description.as_str()),
            None => values,
        }
    }
}

/// Fields written by `create` and `update`, read out of validated values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub id: Option<i64>,
    pub name: String,
    pub project_id: i64,
    pub description: Option<String>,
}

impl CategoryInput {
    /// None when `name` or `project_id` is missing
    pub fn from_values(values: &FormValues) -> Option<Self> {
        Some(Self {
            id: values.get_as("id"),
            name: values.get("name")?.to_string(),
            project_id: values.get_as("project_id")?,
            description: values
                .get("description")
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        })
    }
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Project>, sqlx::Error>;
}

/// Storage of the categories of a project.
///
/// Reads propagate database errors; mutations report success as a bool
/// and log the cause of a failure themselves.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;

    /// Categories of a project ordered by name, optionally preceded by a
    /// "No category" placeholder with id 0
    async fn get_list(
        &self,
        project_id: i64,
        prepend_none: bool,
    ) -> Result<Vec<Category>, sqlx::Error>;

    async fn create(&self, values: &FormValues) -> bool;

    async fn update(&self, values: &FormValues) -> bool;

    async fn remove(&self, id: i64) -> bool;
}

pub(crate) fn placeholder(project_id: i64) -> Category {
    Category {
        id: 0,
        name: NO_CATEGORY.to_string(),
        project_id,
        description: None,
    }
}

// ============================================================================
// In-memory implementations
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, id: i64, name: impl Into<String>) -> Self {
        if let Ok(mut projects) = self.projects.try_write() {
            projects.push(Project {
                id,
                name: name.into(),
            });
        }
        self
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Project>, sqlx::Error> {
        Ok(self.projects.read().await.iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Default)]
struct CategoryTable {
    rows: Vec<Category>,
    next_id: i64,
}

/// Category store backed by a vector; `read_only()` makes every mutation
/// fail so the failure paths of the controller can be exercised.
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    table: Arc<RwLock<CategoryTable>>,
    read_only: bool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_category(self, project_id: i64, name: impl Into<String>) -> Self {
        if let Ok(mut table) = self.table.try_write() {
            table.next_id += 1;
            let id = table.next_id;
            table.rows.push(Category {
                id,
                name: name.into(),
                project_id,
                description: None,
            });
        }
        self
    }

    pub async fn all(&self) -> Vec<Category> {
        self.table.read().await.rows.clone()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.table.read().await.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn get_list(
        &self,
        project_id: i64,
        prepend_none: bool,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let mut list: Vec<Category> = self
            .table
            .read()
            .await
            .rows
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        if prepend_none {
            list.insert(0, placeholder(project_id));
        }

        Ok(list)
    }

    async fn create(&self, values: &FormValues) -> bool {
        let Some(input) = CategoryInput::from_values(values) else {
            return false;
        };
        if self.read_only {
            return false;
        }

        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(Category {
            id,
            name: input.name,
            project_id: input.project_id,
            description: input.description,
        });
        true
    }

    async fn update(&self, values: &FormValues) -> bool {
        let Some(input) = CategoryInput::from_values(values) else {
            return false;
        };
        if self.read_only {
            return false;
        }

        let mut table = self.table.write().await;
        match table.rows.iter_mut().find(|c| Some(c.id) == input.id) {
            Some(category) => {
                category.name = input.name;
                category.description = input.description;
                true
            }
            None => false,
        }
    }

    async fn remove(&self, id: i64) -> bool {
        if self.read_only {
            return false;
        }

        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        table.rows.len() < before
    }
}
