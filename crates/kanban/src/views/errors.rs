// File: src/views/errors.rs
// Purpose: Error pages

use super::layout::{page, Slots};
use maud::{html, Markup};

fn error_page(status: u16, title: &str, message: &str) -> Markup {
    page(
        html! {
            div class="error-page" {
                h1 { (status) " - " (title) }
                p { (message) }
                a href="/" { "Go to Home" }
            }
        },
        Slots::new(title),
    )
}

pub fn not_found() -> Markup {
    error_page(404, "Page not found", "The page you are looking for does not exist.")
}

pub fn forbidden() -> Markup {
    error_page(403, "Access Forbidden", "The request could not be verified.")
}

pub fn server_error() -> Markup {
    error_page(500, "Internal Error", "Something went wrong on our side.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_pages() {
        assert!(not_found().into_string().contains("404 - Page not found"));
        assert!(forbidden().into_string().contains("403"));
        assert!(server_error().into_string().contains("500"));
    }
}
