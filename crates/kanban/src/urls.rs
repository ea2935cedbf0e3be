// File: src/urls.rs
// Purpose: Paths of the application's pages

pub fn category_index(project_id: i64) -> String {
    format!("/project/{}/categories", project_id)
}

pub fn category_edit(project_id: i64, category_id: i64) -> String {
    format!("/project/{}/category/{}/edit", project_id, category_id)
}

/// Removal confirmation page (GET) and removal target (POST)
pub fn category_remove(project_id: i64, category_id: i64) -> String {
    format!("/project/{}/category/{}/remove", project_id, category_id)
}

/// Removal target carrying the anti-forgery token in the query string
pub fn category_remove_with_token(project_id: i64, category_id: i64, csrf_token: &str) -> String {
    format!(
        "{}?csrf_token={}",
        category_remove(project_id, category_id),
        urlencoding::encode(csrf_token)
    )
}

/// A page of a user's profile; an empty action is the summary page
pub fn user(user_id: i64, action: &str) -> String {
    if action.is_empty() {
        format!("/user/{}", user_id)
    } else {
        format!("/user/{}/{}", user_id, action)
    }
}

pub fn user_dashboard(user_id: i64) -> String {
    format!("/dashboard/{}", user_id)
}
