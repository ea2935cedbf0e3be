// File: src/views/layout.rs
// Purpose: Page shell with flash notice and optional sidebar

use crate::repository::Project;
use crate::session::{Flash, FlashLevel};
use crate::urls;
use maud::{html, Markup, DOCTYPE};

/// Slots for the page layout
#[derive(Clone)]
pub struct Slots {
    /// Page title (required)
    pub title: String,

    /// Notice left by the previous action
    pub flash: Option<Flash>,

    /// Sidebar content (optional)
    pub sidebar: Option<Markup>,
}

impl Slots {
    /// Create slots with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            flash: None,
            sidebar: None,
        }
    }

    pub fn flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }

    pub fn sidebar(mut self, sidebar: Markup) -> Self {
        self.sidebar = Some(sidebar);
        self
    }
}

pub fn flash_notice(flash: &Flash) -> Markup {
    let class = match flash.level {
        FlashLevel::Success => "alert alert-success",
        FlashLevel::Failure => "alert alert-error",
    };

    html! {
        div class=(class) role="alert" { (flash.message) }
    }
}

pub fn page(content: Markup, slots: Slots) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (slots.title) }
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body {
                @if let Some(flash) = &slots.flash {
                    (flash_notice(flash))
                }
                div class="page-layout" {
                    @if let Some(sidebar) = &slots.sidebar {
                        (sidebar)
                    }
                    main class="page-content" { (content) }
                }
            }
        }
    }
}

/// Layout of the project settings pages
pub fn project(project: &Project, content: Markup, slots: Slots) -> Markup {
    let content = html! {
        div class="page-header" {
            h1 { (project.name) }
            ul class="project-nav" {
                li { a href=(urls::category_index(project.id)) { "Categories" } }
            }
        }
        (content)
    };

    page(content, slots)
}
