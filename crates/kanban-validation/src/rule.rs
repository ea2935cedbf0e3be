// File: src/rule.rs
// Purpose: Field rules and ordered rule sets

use crate::date;
use crate::form::FormValues;
use crate::numeric::{is_integer, is_numeric};
use serde::Serialize;

/// The check a rule performs on its field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Value must be present and not blank
    Required,
    /// Base-10 integer with optional sign
    Integer,
    /// At most `max` characters
    MaxLength { max: usize },
    /// Must match one of the chrono format patterns
    Date { formats: Vec<String> },
    /// Integer or decimal number
    Numeric,
}

impl RuleKind {
    /// Evaluate against a raw value, `None` meaning the field was not provided.
    ///
    /// Only `Required` enforces presence. Format checks skip absent and empty
    /// values, `MaxLength` skips absent values.
    pub fn evaluate(&self, value: Option<&str>) -> bool {
        let filled = value.filter(|v| !v.is_empty());

        match self {
            RuleKind::Required => value.is_some_and(|v| !v.trim().is_empty()),
            RuleKind::Integer => filled.map_or(true, is_integer),
            RuleKind::MaxLength { max } => value.map_or(true, |v| v.chars().count() <= *max),
            RuleKind::Date { formats } => filled.map_or(true, |v| date::matches_any(v, formats.as_slice())),
            RuleKind::Numeric => filled.map_or(true, is_numeric),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Integer => "integer",
            RuleKind::MaxLength { .. } => "max_length",
            RuleKind::Date { .. } => "date",
            RuleKind::Numeric => "numeric",
        }
    }
}

/// A single check bound to one form field, with its pre-rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    field: String,
    #[serde(flatten)]
    kind: RuleKind,
    message: String,
}

impl Rule {
    pub fn new(field: impl Into<String>, kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Required, message)
    }

    pub fn integer(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Integer, message)
    }

    pub fn max_length(field: impl Into<String>, max: usize, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::MaxLength { max }, message)
    }

    pub fn date<S: Into<String>>(
        field: impl Into<String>,
        formats: impl IntoIterator<Item = S>,
        message: impl Into<String>,
    ) -> Self {
        let formats = formats.into_iter().map(Into::into).collect();
        Self::new(field, RuleKind::Date { formats }, message)
    }

    pub fn numeric(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Numeric, message)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate this rule against the submitted form
    pub fn evaluate(&self, values: &FormValues) -> bool {
        self.kind.evaluate(values.get(&self.field))
    }
}

/// Ordered collection of rules for one operation.
///
/// Order only decides the order of messages within a field; every rule is
/// evaluated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule (functional builder pattern)
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append every rule of another set after this one's
    pub fn merge(mut self, other: RuleSet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules targeting a field, in set order
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.field == field)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
