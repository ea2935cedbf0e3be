// File: src/validators/category.rs
// Purpose: Rule sets for the category forms

use crate::translator::Translator;
use kanban_validation::{execute, FormValues, Rule, RuleSet, ValidationResult};
use std::sync::Arc;

const MAX_NAME_LENGTH: usize = 50;

#[derive(Clone)]
pub struct CategoryValidator {
    translator: Arc<dyn Translator>,
}

impl CategoryValidator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    fn common_rules(&self) -> RuleSet {
        let t = &self.translator;

        RuleSet::new()
            .with(Rule::required("name", t.t("The name is required")))
            .with(Rule::integer("id", t.t("The id must be an integer")))
            .with(Rule::integer("project_id", t.t("The project id must be an integer")))
            .with(Rule::max_length(
                "name",
                MAX_NAME_LENGTH,
                t.translate("The maximum length is %d characters", &[&MAX_NAME_LENGTH]),
            ))
    }

    pub fn creation_rules(&self) -> RuleSet {
        RuleSet::new()
            .with(Rule::required("project_id", self.translator.t("The project id is required")))
            .merge(self.common_rules())
    }

    pub fn modification_rules(&self) -> RuleSet {
        RuleSet::new()
            .with(Rule::required("id", self.translator.t("The id is required")))
            .merge(self.common_rules())
    }

    pub fn validate_creation(&self, values: &FormValues) -> ValidationResult {
        execute(values, &self.creation_rules())
    }

    pub fn validate_modification(&self, values: &FormValues) -> ValidationResult {
        execute(values, &self.modification_rules())
    }
}
