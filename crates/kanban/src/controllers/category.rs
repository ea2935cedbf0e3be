// File: src/controllers/category.rs
// Purpose: Category management for a project (list, create, edit, remove)

use crate::error::{ControllerError, ControllerResult};
use crate::repository::{Category, CategoryRepository, Project, ProjectRepository};
use crate::request_context::RequestContext;
use crate::response::Reply;
use crate::translator::Translator;
use crate::urls;
use crate::validators::CategoryValidator;
use crate::views::{self, FormContext, Slots};
use maud::Markup;
use std::sync::Arc;
use tracing::{debug, warn};

/// Category actions. Every action resolves the project from the
/// `project_id` route parameter and, where needed, the category from
/// `category_id`; a category of another project counts as missing.
#[derive(Clone)]
pub struct CategoryController {
    projects: Arc<dyn ProjectRepository>,
    categories: Arc<dyn CategoryRepository>,
    validator: CategoryValidator,
    translator: Arc<dyn Translator>,
}

impl CategoryController {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        categories: Arc<dyn CategoryRepository>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            projects,
            categories,
            validator: CategoryValidator::new(translator.clone()),
            translator,
        }
    }

    async fn get_project(&self, ctx: &RequestContext) -> Result<Project, ControllerError> {
        let project_id = ctx.get_integer_param("project_id");

        self.projects.get_by_id(project_id).await?.ok_or_else(|| {
            debug!(project_id, "project not found");
            ControllerError::NotFound
        })
    }

    async fn get_category(
        &self,
        ctx: &RequestContext,
        project: &Project,
    ) -> Result<Category, ControllerError> {
        let category_id = ctx.get_integer_param("category_id");

        self.categories
            .get_by_id(category_id)
            .await?
            .filter(|category| category.project_id == project.id)
            .ok_or_else(|| {
                debug!(category_id, project_id = project.id, "category not found");
                ControllerError::NotFound
            })
    }

    /// Wrap content in the project layout, consuming the pending flash
    fn render(&self, ctx: &mut RequestContext, project: &Project, title: &str, content: Markup) -> Reply {
        let slots = Slots::new(self.translator.t(title)).flash(ctx.session.take_flash());
        Reply::html(views::layout::project(project, content, slots))
    }

    /// List of categories with the creation form
    pub async fn index(&self, ctx: &mut RequestContext, form: FormContext) -> ControllerResult {
        let project = self.get_project(ctx).await?;
        let categories = self.categories.get_list(project.id, false).await?;
        let form = form.with_default("project_id", project.id.to_string());

        let content = views::category::index(
            self.translator.as_ref(),
            &project,
            &categories,
            &form,
            ctx.session.csrf_token(),
        );

        Ok(self.render(ctx, &project, "Categories", content))
    }

    /// Validate and save a new category
    pub async fn save(&self, ctx: &mut RequestContext) -> ControllerResult {
        let project = self.get_project(ctx).await?;

        let mut values = ctx.get_values();
        values.insert("project_id", project.id.to_string());

        let result = self.validator.validate_creation(&values);

        if result.is_valid {
            if self.categories.create(&values).await {
                ctx.session
                    .success(self.translator.t("Your category have been created successfully."));
                return Ok(Reply::redirect(urls::category_index(project.id)));
            }

            ctx.session.failure(self.translator.t("Unable to create your category."));
        } else {
            warn!(project_id = project.id, errors = ?result.errors, "category creation rejected");
        }

        self.index(ctx, FormContext::from_result(values, result)).await
    }

    /// Edit form, pre-filled with the stored category unless values were
    /// re-submitted
    pub async fn edit(&self, ctx: &mut RequestContext, form: FormContext) -> ControllerResult {
        let project = self.get_project(ctx).await?;
        let category = self.get_category(ctx, &project).await?;

        let form = if form.values.is_empty() {
            FormContext::with_values(category.to_values())
        } else {
            form
        };

        let content = views::category::edit(
            self.translator.as_ref(),
            &project,
            category.id,
            &form,
            ctx.session.csrf_token(),
        );

        Ok(self.render(ctx, &project, "Categories", content))
    }

    /// Validate the edit form and update the category
    pub async fn update(&self, ctx: &mut RequestContext) -> ControllerResult {
        let project = self.get_project(ctx).await?;
        let category = self.get_category(ctx, &project).await?;

        let mut values = ctx.get_values();
        values.insert("id", category.id.to_string());
        values.insert("project_id", project.id.to_string());

        let result = self.validator.validate_modification(&values);

        if result.is_valid {
            if self.categories.update(&values).await {
                ctx.session
                    .success(self.translator.t("Your category have been updated successfully."));
                return Ok(Reply::redirect(urls::category_index(project.id)));
            }

            ctx.session.failure(self.translator.t("Unable to update your category."));
        } else {
            warn!(category_id = category.id, errors = ?result.errors, "category update rejected");
        }

        self.edit(ctx, FormContext::from_result(values, result)).await
    }

    /// Confirmation page before removing a category
    pub async fn confirm(&self, ctx: &mut RequestContext) -> ControllerResult {
        let project = self.get_project(ctx).await?;
        let category = self.get_category(ctx, &project).await?;

        let content = views::category::remove(
            self.translator.as_ref(),
            &project,
            &category,
            ctx.session.csrf_token(),
        );

        Ok(self.render(ctx, &project, "Remove a category", content))
    }

    /// Remove a category; the anti-forgery token is checked before anything
    /// is looked up
    pub async fn remove(&self, ctx: &mut RequestContext) -> ControllerResult {
        ctx.check_csrf_param()?;

        let project = self.get_project(ctx).await?;
        let category = self.get_category(ctx, &project).await?;

        if self.categories.remove(category.id).await {
            ctx.session.success(self.translator.t("Category removed successfully."));
        } else {
            ctx.session.failure(self.translator.t("Unable to remove this category."));
        }

        Ok(Reply::redirect(urls::category_index(project.id)))
    }
}
