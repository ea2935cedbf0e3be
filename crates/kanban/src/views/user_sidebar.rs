// File: src/views/user_sidebar.rs
// Purpose: Sidebar of the user profile pages (information and actions menus)

use crate::translator::Translator;
use crate::urls;
use crate::views::layout::{self, Slots};
use maud::{html, Markup};

/// Rights of the person viewing a profile
pub trait AccessChecker {
    /// Whether the viewer may run `action` of `controller`
    fn has_access(&self, controller: &str, action: &str) -> bool;

    fn is_admin(&self) -> bool;

    /// Whether the viewer is the user with this id
    fn is_current_user(&self, user_id: i64) -> bool;
}

/// The profile being viewed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarUser {
    pub id: i64,
    pub is_ldap_user: bool,
    pub twofactor_activated: bool,
}

/// Page currently displayed, used to highlight its menu entry.
/// An entry without an action matches every action of its controller.
#[derive(Debug, Clone, Default)]
pub struct MenuSelection {
    pub controller: String,
    pub action: String,
    pub information: Vec<Markup>,
    pub actions: Vec<Markup>,
}

impl MenuSelection {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    /// Extra entry appended to the information menu
    pub fn information(mut self, item: Markup) -> Self {
        self.information.push(item);
        self
    }

    /// Extra entry appended to the actions menu
    pub fn action(mut self, item: Markup) -> Self {
        self.actions.push(item);
        self
    }

    fn is_selected(&self, controller: &str, action: Option<&str>) -> bool {
        self.controller.eq_ignore_ascii_case(controller)
            && action.map_or(true, |a| self.action.eq_ignore_ascii_case(a))
    }
}

fn item(selection: &MenuSelection, controller: &str, action: Option<&str>, href: String, label: String) -> Markup {
    html! {
        li class=[selection.is_selected(controller, action).then_some("active")] {
            a href=(href) { (label) }
        }
    }
}

pub fn sidebar(t: &dyn Translator, access: &dyn AccessChecker, user: &SidebarUser, selection: &MenuSelection) -> Markup {
    let id = user.id;
    let owner_or_admin = access.is_admin() || access.is_current_user(id);

    html! {
        div class="sidebar" {
            h2 { (t.t("Information")) }
            ul {
                @if access.has_access("UserViewController", "show") {
                    (item(selection, "UserViewController", Some("show"), urls::user(id, ""), t.t("Summary")))
                }
                @if access.is_admin() {
                    li { a href=(urls::user_dashboard(id)) { (t.t("User dashboard")) } }
                }
                @if owner_or_admin {
                    (item(selection, "UserViewController", Some("timesheet"), urls::user(id, "timesheet"), t.t("Time tracking")))
                    (item(selection, "UserViewController", Some("lastLogin"), urls::user(id, "last-logins"), t.t("Last logins")))
                    (item(selection, "UserViewController", Some("sessions"), urls::user(id, "sessions"), t.t("Persistent connections")))
                    (item(selection, "UserViewController", Some("passwordReset"), urls::user(id, "password-resets"), t.t("Password reset history")))
                }
                @for extra in &selection.information {
                    (extra)
                }
            }

            h2 { (t.t("Actions")) }
            ul {
                @if owner_or_admin {
                    @if access.has_access("UserModificationController", "show") {
                        (item(selection, "UserModificationController", Some("show"), urls::user(id, "edit"), t.t("Edit profile")))
                        (item(selection, "AvatarFile", None, urls::user(id, "avatar"), t.t("Avatar")))
                    }
                    @if !user.is_ldap_user {
                        (item(selection, "UserCredentialController", Some("changePassword"), urls::user(id, "password"), t.t("Change password")))
                    }
                    @if access.is_current_user(id) {
                        (item(selection, "twofactor", Some("index"), urls::user(id, "twofactor"), t.t("Two factor authentication")))
                    } @else if access.has_access("twofactor", "disable") && user.twofactor_activated {
                        (item(selection, "twofactor", Some("disable"), urls::user(id, "twofactor/disable"), t.t("Two factor authentication")))
                    }
                    (item(selection, "UserViewController", Some("share"), urls::user(id, "share"), t.t("Public access")))
                    (item(selection, "UserViewController", Some("notifications"), urls::user(id, "notifications"), t.t("Notifications")))
                    (item(selection, "UserViewController", Some("external"), urls::user(id, "external"), t.t("External accounts")))
                    (item(selection, "UserViewController", Some("integrations"), urls::user(id, "integrations"), t.t("Integrations")))
                }
                @if access.has_access("UserCredentialController", "changeAuthentication") {
                    (item(selection, "UserCredentialController", Some("changeAuthentication"), urls::user(id, "authentication"), t.t("Edit Authentication")))
                }
                @for extra in &selection.actions {
                    (extra)
                }
            }
        }
    }
}

/// Profile page shell with the sidebar next to its content
pub fn user_page(
    t: &dyn Translator,
    access: &dyn AccessChecker,
    user: &SidebarUser,
    selection: &MenuSelection,
    title: impl Into<String>,
    content: Markup,
) -> Markup {
    let slots = Slots::new(title).sidebar(sidebar(t, access, user, selection));
    layout::page(content, slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::Untranslated;
    use rstest::rstest;

    /// Viewer with a fixed set of rights
    struct Viewer {
        admin: bool,
        user_id: i64,
        allowed: Vec<(&'static str, &'static str)>,
    }

    impl Viewer {
        fn user(user_id: i64) -> Self {
            Self {
                admin: false,
                user_id,
                allowed: Vec::new(),
            }
        }

        fn admin(user_id: i64) -> Self {
            Self {
                admin: true,
                ..Self::user(user_id)
            }
        }

        fn allow(mut self, controller: &'static str, action: &'static str) -> Self {
            self.allowed.push((controller, action));
            self
        }
    }

    impl AccessChecker for Viewer {
        fn has_access(&self, controller: &str, action: &str) -> bool {
            self.admin || self.allowed.iter().any(|&(c, a)| c == controller && a == action)
        }

        fn is_admin(&self) -> bool {
            self.admin
        }

        fn is_current_user(&self, user_id: i64) -> bool {
            self.user_id == user_id
        }
    }

    fn profile(id: i64) -> SidebarUser {
        SidebarUser {
            id,
            is_ldap_user: false,
            twofactor_activated: false,
        }
    }

    fn render(viewer: &Viewer, user: &SidebarUser, selection: &MenuSelection) -> String {
        sidebar(&Untranslated, viewer, user, selection).into_string()
    }

    #[test]
    fn test_own_profile() {
        let viewer = Viewer::user(5).allow("UserViewController", "show");
        let out = render(&viewer, &profile(5), &MenuSelection::default());

        assert!(out.contains("Summary"));
        assert!(out.contains("Time tracking"));
        assert!(out.contains("Change password"));
        assert!(out.contains("/user/5/twofactor\""));
        assert!(out.contains("Public access"));
        assert!(!out.contains("User dashboard"));
        assert!(!out.contains("Edit Authentication"));
    }

    #[test]
    fn test_other_profile_without_rights() {
        let out = render(&Viewer::user(5), &profile(8), &MenuSelection::default());

        assert!(!out.contains("Summary"));
        assert!(!out.contains("Time tracking"));
        assert!(!out.contains("Two factor authentication"));
        assert!(!out.contains("Public access"));
    }

    #[test]
    fn test_admin_sees_everything_for_other_user() {
        let mut user = profile(8);
        user.twofactor_activated = true;
        let out = render(&Viewer::admin(1), &user, &MenuSelection::default());

        assert!(out.contains("/dashboard/8"));
        assert!(out.contains("Edit profile"));
        assert!(out.contains("Avatar"));
        assert!(out.contains("/user/8/twofactor/disable"));
        assert!(out.contains("Edit Authentication"));
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    fn test_ldap_users_cannot_change_password(#[case] is_ldap_user: bool, #[case] expected: bool) {
        let mut user = profile(5);
        user.is_ldap_user = is_ldap_user;
        let out = render(&Viewer::user(5), &user, &MenuSelection::default());

        assert_eq!(out.contains("Change password"), expected);
    }

    #[test]
    fn test_disable_twofactor_requires_activation() {
        let viewer = Viewer::user(1).allow("twofactor", "disable");
        let mut other = profile(8);

        // Not the owner and not admin: the actions block is hidden altogether
        assert!(!render(&viewer, &other, &MenuSelection::default()).contains("Two factor"));

        let admin = Viewer::admin(1);
        assert!(!render(&admin, &other, &MenuSelection::default()).contains("twofactor/disable"));
        other.twofactor_activated = true;
        assert!(render(&admin, &other, &MenuSelection::default()).contains("twofactor/disable"));
    }

    #[test]
    fn test_selected_entry_is_marked_active() {
        let selection = MenuSelection::new("UserViewController", "timesheet");
        let out = render(&Viewer::user(5), &profile(5), &selection);

        assert!(out.contains(r#"<li class="active"><a href="/user/5/timesheet">"#));
        assert_eq!(out.matches("class=\"active\"").count(), 1);
    }

    #[test]
    fn test_controller_only_entry_matches_any_action() {
        let viewer = Viewer::user(5).allow("UserModificationController", "show");
        let out = render(&viewer, &profile(5), &MenuSelection::new("AvatarFile", "upload"));

        assert!(out.contains(r#"<li class="active"><a href="/user/5/avatar">"#));
    }

    #[test]
    fn test_hook_items_are_appended() {
        let selection = MenuSelection::default()
            .information(html! { li { "Plugin info" } })
            .action(html! { li { "Plugin action" } });
        let out = render(&Viewer::user(5), &profile(5), &selection);

        assert!(out.contains("<li>Plugin info</li>"));
        assert!(out.contains("<li>Plugin action</li>"));
    }

    #[test]
    fn test_user_page_places_sidebar_beside_content() {
        let selection = MenuSelection::new("UserViewController", "show");
        let viewer = Viewer::user(5).allow("UserViewController", "show");
        let out = user_page(
            &Untranslated,
            &viewer,
            &profile(5),
            &selection,
            "Summary",
            html! { p { "Profile" } },
        )
        .into_string();

        assert!(out.contains("<title>Summary</title>"));
        let sidebar_at = out.find(r#"<div class="sidebar">"#).unwrap();
        let content_at = out.find(r#"<main class="page-content"><p>Profile</p>"#).unwrap();
        assert!(sidebar_at < content_at);
        assert!(out.contains(r#"<li class="active"><a href="/user/5">"#));
    }
}
