// File: src/validators/task.rs
// Purpose: Rule sets for every task form operation

use crate::date_parser::DateParser;
use crate::translator::Translator;
use kanban_validation::{execute, FormValues, Rule, RuleSet, ValidationResult};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;

const INTEGER_FIELDS: [&str; 16] = [
    "id",
    "project_id",
    "column_id",
    "owner_id",
    "creator_id",
    "score",
    "category_id",
    "swimlane_id",
    "recurrence_child",
    "recurrence_parent",
    "recurrence_factor",
    "recurrence_timeframe",
    "recurrence_basedate",
    "recurrence_trigger",
    "recurrence_status",
    "priority",
];

const MAX_TITLE_LENGTH: usize = 200;
const MAX_REFERENCE_LENGTH: usize = 50;

/// Task operations that have their own rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOperation {
    Creation,
    BulkCreation,
    DescriptionCreation,
    EditRecurrence,
    Modification,
    ApiModification,
    AssigneeModification,
    CategoryModification,
    ProjectModification,
    TimeModification,
}

impl TaskOperation {
    pub const ALL: [TaskOperation; 10] = [
        TaskOperation::Creation,
        TaskOperation::BulkCreation,
        TaskOperation::DescriptionCreation,
        TaskOperation::EditRecurrence,
        TaskOperation::Modification,
        TaskOperation::ApiModification,
        TaskOperation::AssigneeModification,
        TaskOperation::CategoryModification,
        TaskOperation::ProjectModification,
        TaskOperation::TimeModification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOperation::Creation => "creation",
            TaskOperation::BulkCreation => "bulk_creation",
            TaskOperation::DescriptionCreation => "description_creation",
            TaskOperation::EditRecurrence => "edit_recurrence",
            TaskOperation::Modification => "modification",
            TaskOperation::ApiModification => "api_modification",
            TaskOperation::AssigneeModification => "assignee_modification",
            TaskOperation::CategoryModification => "category_modification",
            TaskOperation::ProjectModification => "project_modification",
            TaskOperation::TimeModification => "time_modification",
        }
    }
}

impl FromStr for TaskOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskOperation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("Unknown task operation: {}", s))
    }
}

/// Builds and runs the rule sets for task forms
#[derive(Clone)]
pub struct TaskValidator {
    translator: Arc<dyn Translator>,
    date_parser: DateParser,
}

impl TaskValidator {
    pub fn new(translator: Arc<dyn Translator>, date_parser: DateParser) -> Self {
        Self {
            translator,
            date_parser,
        }
    }

    /// Rules shared by every task operation
    pub fn common_rules(&self) -> RuleSet {
        let t = &self.translator;
        let integer_message = t.t("This value must be an integer");
        let date_message = t.t("Invalid date");
        let numeric_message = t.t("This value must be numeric");

        INTEGER_FIELDS
            .iter()
            .map(|field| Rule::integer(*field, integer_message.clone()))
            .collect::<RuleSet>()
            .with(Rule::max_length(
                "title",
                MAX_TITLE_LENGTH,
                t.translate("The maximum length is %d characters", &[&MAX_TITLE_LENGTH]),
            ))
            .with(Rule::max_length(
                "reference",
                MAX_REFERENCE_LENGTH,
                t.translate("The maximum length is %d characters", &[&MAX_REFERENCE_LENGTH]),
            ))
            .with(Rule::date(
                "date_due",
                self.date_parser.date_formats(),
                date_message.clone(),
            ))
            .with(Rule::date(
                "date_started",
                self.date_parser.date_time_formats(),
                date_message,
            ))
            .with(Rule::numeric("time_spent", numeric_message.clone()))
            .with(Rule::numeric("time_estimated", numeric_message))
    }

    /// Operation-specific rules followed by the common rules
    pub fn rules(&self, operation: TaskOperation) -> RuleSet {
        self.operation_rules(operation).merge(self.common_rules())
    }

    fn operation_rules(&self, operation: TaskOperation) -> RuleSet {
        let t = &self.translator;
        let id = || Rule::required("id", t.t("The id is required"));
        let project = || Rule::required("project_id", t.t("The project is required"));
        let title = || Rule::required("title", t.t("The title is required"));

        match operation {
            TaskOperation::Creation => RuleSet::new().with(project()).with(title()),
            TaskOperation::BulkCreation => RuleSet::new()
                .with(project())
                .with(Rule::required("tasks", t.t("Field required")))
                .with(Rule::required("column_id", t.t("Field required")))
                .with(Rule::required("swimlane_id", t.t("Field required")))
                .with(Rule::integer("category_id", t.t("This value must be an integer")))
                .with(Rule::integer("swimlane_id", t.t("This value must be an integer"))),
            TaskOperation::DescriptionCreation
            | TaskOperation::EditRecurrence
            | TaskOperation::ApiModification
            | TaskOperation::TimeModification => RuleSet::new().with(id()),
            TaskOperation::Modification => RuleSet::new().with(id()).with(title()),
            TaskOperation::AssigneeModification => RuleSet::new()
                .with(id())
                .with(project())
                .with(Rule::required("owner_id", t.t("This value is required"))),
            TaskOperation::CategoryModification => RuleSet::new()
                .with(id())
                .with(project())
                .with(Rule::required("category_id", t.t("This value is required"))),
            TaskOperation::ProjectModification => RuleSet::new().with(id()).with(project()),
        }
    }

    /// Run an operation's rule set
    pub fn validate(&self, operation: TaskOperation, values: &FormValues) -> ValidationResult {
        execute(values, &self.rules(operation))
    }

    pub fn validate_creation(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::Creation, values)
    }

    pub fn validate_bulk_creation(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::BulkCreation, values)
    }

    pub fn validate_description_creation(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::DescriptionCreation, values)
    }

    pub fn validate_edit_recurrence(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::EditRecurrence, values)
    }

    pub fn validate_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::Modification, values)
    }

    pub fn validate_api_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::ApiModification, values)
    }

    pub fn validate_assignee_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::AssigneeModification, values)
    }

    pub fn validate_category_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::CategoryModification, values)
    }

    pub fn validate_project_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::ProjectModification, values)
    }

    pub fn validate_time_modification(&self, values: &FormValues) -> ValidationResult {
        self.validate(TaskOperation::TimeModification, values)
    }
}
