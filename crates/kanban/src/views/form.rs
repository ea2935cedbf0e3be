// File: src/views/form.rs
// Purpose: Form context (values + errors) and the field helpers that render it

use kanban_validation::{FormValues, ValidationResult};
use maud::{html, Markup};
use std::collections::HashMap;

/// Context for forms that includes validation errors and submitted values
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: HashMap<String, Vec<String>>,
    /// Values shown in the inputs
    pub values: FormValues,
}

impl FormContext {
    pub fn new(values: FormValues, errors: HashMap<String, Vec<String>>) -> Self {
        Self { errors, values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Form pre-filled with values and no errors
    pub fn with_values(values: FormValues) -> Self {
        Self::new(values, HashMap::new())
    }

    /// Form re-displayed after a failed validation
    pub fn from_result(values: FormValues, result: ValidationResult) -> Self {
        let (_, errors) = result.into_parts();
        Self::new(values, errors)
    }

    /// Fill a value only when the form does not already carry one
    pub fn with_default(mut self, field: &str, value: impl Into<String>) -> Self {
        if !self.values.has(field) {
            self.values.insert(field, value);
        }
        self
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_value(&self, field: &str) -> &str {
        self.values.get(field).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.errors.is_empty()
    }
}

// ============================================================================
// Field helpers
// ============================================================================

pub fn csrf(token: &str) -> Markup {
    html! { input type="hidden" name="csrf_token" value=(token); }
}

pub fn hidden(form: &FormContext, name: &str) -> Markup {
    html! { input type="hidden" name=(name) value=(form.get_value(name)); }
}

pub fn errors(form: &FormContext, name: &str) -> Markup {
    html! {
        @if form.has_error(name) {
            ul class="form-errors" {
                @for message in form.get_errors(name) {
                    li { (message) }
                }
            }
        }
    }
}

pub fn text(form: &FormContext, name: &str, label: &str, max_length: Option<usize>) -> Markup {
    html! {
        label for=(format!("form-{}", name)) { (label) }
        input
            type="text"
            id=(format!("form-{}", name))
            name=(name)
            value=(form.get_value(name))
            maxlength=[max_length]
            class=[form.has_error(name).then_some("form-error")];
        (errors(form, name))
    }
}

pub fn textarea(form: &FormContext, name: &str, label: &str) -> Markup {
    html! {
        label for=(format!("form-{}", name)) { (label) }
        textarea id=(format!("form-{}", name)) name=(name) { (form.get_value(name)) }
        (errors(form, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_context_errors() {
        let mut errors = HashMap::new();
        errors.insert("name".to_string(), vec!["The name is required".to_string()]);

        let context = FormContext::new(FormValues::new(), errors);

        assert!(context.has_error("name"));
        assert_eq!(context.get_errors("name"), ["The name is required".to_string()]);
        assert!(context.has_errors());
    }

    #[test]
    fn test_empty_form_context() {
        let context = FormContext::empty();
        assert!(!context.has_errors());
        assert!(context.get_errors("any").is_empty());
        assert_eq!(context.get_value("any"), "");
        assert!(context.is_empty());
    }

    #[test]
    fn test_with_default_keeps_submitted_value() {
        let context = FormContext::with_values(FormValues::new().with("project_id", "2"))
            .with_default("project_id", "9")
            .with_default("name", "");

        assert_eq!(context.get_value("project_id"), "2");
        assert!(context.values.has("name"));
    }

    #[test]
    fn test_text_field_renders_value_and_errors() {
        let mut errors = HashMap::new();
        errors.insert("name".to_string(), vec!["Too long".to_string()]);
        let context = FormContext::new(FormValues::new().with("name", "<b>"), errors);

        let out = text(&context, "name", "Name", Some(50)).into_string();
        assert!(out.contains(r#"value="&lt;b&gt;""#));
        assert!(out.contains(r#"maxlength="50""#));
        assert!(out.contains("form-error"));
        assert!(out.contains("<li>Too long</li>"));
    }
}
