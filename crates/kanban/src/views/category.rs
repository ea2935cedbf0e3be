// File: src/views/category.rs
// Purpose: Category list, edit form and removal confirmation

use super::form::{self, FormContext};
use crate::repository::{Category, Project};
use crate::translator::Translator;
use crate::urls;
use maud::{html, Markup};

/// Length limit shown on the name input; the validator enforces it
const NAME_MAX_LENGTH: usize = 50;

/// List of the project's categories followed by the creation form
pub fn index(
    t: &dyn Translator,
    project: &Project,
    categories: &[Category],
    values: &FormContext,
    csrf_token: &str,
) -> Markup {
    html! {
        @if !categories.is_empty() {
            div class="page-header" { h2 { (t.t("Categories")) } }
            table class="table-striped" {
                tr {
                    th { (t.t("Category Name")) }
                    th { (t.t("Actions")) }
                }
                @for category in categories {
                    tr {
                        td { (category.name) }
                        td {
                            ul {
                                li { a href=(urls::category_edit(project.id, category.id)) { (t.t("Edit")) } }
                                li { a href=(urls::category_remove(project.id, category.id)) { (t.t("Remove")) } }
                            }
                        }
                    }
                }
            }
        }

        div class="page-header" { h2 { (t.t("Add a new category")) } }
        form method="post" action=(urls::category_index(project.id)) autocomplete="off" {
            (form::csrf(csrf_token))
            (form::hidden(values, "project_id"))
            (form::text(values, "name", &t.t("Category Name"), Some(NAME_MAX_LENGTH)))
            (form::errors(values, "project_id"))
            div class="form-actions" {
                button type="submit" class="btn btn-blue" { (t.t("Save")) }
            }
        }
    }
}

pub fn edit(t: &dyn Translator, project: &Project, category_id: i64, values: &FormContext, csrf_token: &str) -> Markup {
    html! {
        div class="page-header" { h2 { (t.translate("Category modification for the project \"%s\"", &[&project.name])) } }
        form method="post" action=(urls::category_edit(project.id, category_id)) autocomplete="off" {
            (form::csrf(csrf_token))
            (form::hidden(values, "id"))
            (form::hidden(values, "project_id"))
            (form::errors(values, "id"))
            (form::text(values, "name", &t.t("Category Name"), Some(NAME_MAX_LENGTH)))
            (form::textarea(values, "description", &t.t("Description")))
            div class="form-actions" {
                button type="submit" class="btn btn-blue" { (t.t("Save")) }
                " " (t.t("or")) " "
                a href=(urls::category_index(project.id)) { (t.t("cancel")) }
            }
        }
    }
}

pub fn remove(t: &dyn Translator, project: &Project, category: &Category, csrf_token: &str) -> Markup {
    html! {
        div class="page-header" { h2 { (t.t("Remove a category")) } }
        div class="confirm" {
            p class="alert alert-info" {
                (t.translate("Do you really want to remove this category: \"%s\"?", &[&category.name]))
            }
            form method="post" action=(urls::category_remove_with_token(project.id, category.id, csrf_token)) {
                div class="form-actions" {
                    button type="submit" class="btn btn-red" { (t.t("Yes")) }
                    " " (t.t("or")) " "
                    a href=(urls::category_index(project.id)) { (t.t("cancel")) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::Untranslated;
    use kanban_validation::FormValues;

    fn project() -> Project {
        Project {
            id: 1,
            name: "Website".to_string(),
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            project_id: 1,
            description: None,
        }
    }

    #[test]
    fn test_index_lists_categories_and_form() {
        let form = FormContext::with_values(FormValues::new().with("project_id", "1"));
        let out = index(&Untranslated, &project(), &[category(2, "Backend")], &form, "tok")
            .into_string();

        assert!(out.contains("<td>Backend</td>"));
        assert!(out.contains("/project/1/category/2/edit"));
        assert!(out.contains(r#"name="csrf_token" value="tok""#));
        assert!(out.contains(r#"name="project_id" value="1""#));
    }

    #[test]
    fn test_index_without_categories_shows_only_form() {
        let out = index(&Untranslated, &project(), &[], &FormContext::empty(), "tok").into_string();

        assert!(!out.contains("<table"));
        assert!(out.contains("Add a new category"));
    }

    #[test]
    fn test_edit_prefills_values() {
        let form = FormContext::with_values(category(2, "Backend").to_values());
        let out = edit(&Untranslated, &project(), 2, &form, "tok").into_string();

        assert!(out.contains(r#"value="Backend""#));
        assert!(out.contains("Category modification for the project &quot;Website&quot;"));
    }

    #[test]
    fn test_remove_posts_with_token() {
        let out = remove(&Untranslated, &project(), &category(2, "Backend"), "tok").into_string();

        assert!(out.contains("/project/1/category/2/remove?csrf_token=tok"));
        assert!(out.contains("Backend"));
    }
}
