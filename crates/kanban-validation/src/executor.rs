// File: src/executor.rs
// Purpose: Run a rule set over form values and collect errors per field

use crate::form::FormValues;
use crate::rule::RuleSet;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of running a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Field name to messages, in rule evaluation order
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Split into `(valid, errors)`
    pub fn into_parts(self) -> (bool, HashMap<String, Vec<String>>) {
        (self.is_valid, self.errors)
    }
}

/// Evaluate every rule against the form. Never stops at the first failure:
/// each failing rule appends its message to its field's list.
pub fn execute(values: &FormValues, rules: &RuleSet) -> ValidationResult {
    let errors = rules
        .iter()
        .filter(|rule| !rule.evaluate(values))
        .fold(
            HashMap::new(),
            |mut errors: HashMap<String, Vec<String>>, rule| {
                errors
                    .entry(rule.field().to_string())
                    .or_default()
                    .push(rule.message().to_string());
                errors
            },
        );

    debug!(
        rules = rules.len(),
        failed_fields = errors.len(),
        "executed rule set"
    );

    if errors.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_empty_rule_set_is_valid() {
        let result = execute(&FormValues::new().with("title", "x"), &RuleSet::new());
        assert!(result.is_valid);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_two_rules_on_one_field() {
        let rules = RuleSet::new()
            .with(Rule::required("category_id", "This value is required"))
            .with(Rule::integer("category_id", "This value must be an integer"));

        let result = execute(&FormValues::new().with("category_id", "abc"), &rules);
        assert_eq!(
            result.get_errors("category_id"),
            Some(&vec!["This value must be an integer".to_string()])
        );

        let result = execute(&FormValues::new(), &rules);
        assert_eq!(
            result.get_errors("category_id"),
            Some(&vec!["This value is required".to_string()])
        );
    }

    #[test]
    fn test_messages_keep_rule_order() {
        let rules = RuleSet::new()
            .with(Rule::integer("score", "first"))
            .with(Rule::numeric("score", "second"));

        let result = execute(&FormValues::new().with("score", "high"), &rules);

        assert_eq!(
            result.get_errors("score"),
            Some(&vec!["first".to_string(), "second".to_string()])
        );
        assert_eq!(result.get_error("score"), Some(&"first".to_string()));
    }

    #[test]
    fn test_failure_is_never_valid() {
        let result = ValidationResult::failure(HashMap::new());
        assert!(!result.is_valid);
        assert!(!result.has_errors());

        assert!(ValidationResult::success().is_valid);
    }

    #[test]
    fn test_into_parts() {
        let rules = RuleSet::new().with(Rule::required("title", "The title is required"));
        let (valid, errors) = execute(&FormValues::new(), &rules).into_parts();

        assert!(!valid);
        assert!(errors.contains_key("title"));
    }
}
