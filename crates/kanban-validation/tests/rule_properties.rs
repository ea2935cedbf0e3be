//! Behavioural checks for the rule engine across many inputs
//!
//! Covers required/integer/max-length boundaries, idempotence and
//! collection of failures on several fields at once.

use kanban_validation::{execute, FormValues, Rule, RuleSet};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn integer_rules() -> RuleSet {
    RuleSet::new().with(Rule::integer("category_id", "This value must be an integer"))
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn test_required_fails_when_missing_or_empty(#[case] value: Option<&str>) {
    let rules = RuleSet::new().with(Rule::required("title", "The title is required"));
    let mut form = FormValues::new();
    if let Some(v) = value {
        form.insert("title", v);
    }

    let result = execute(&form, &rules);

    assert!(!result.is_valid);
    assert!(!result.get_errors("title").unwrap().is_empty());
}

#[rstest]
#[case("0")]
#[case("12")]
#[case("-12")]
#[case("+3")]
#[case("9223372036854775807")]
#[case("123456789012345678901234567890")]
fn test_integer_accepts_base10_integers(#[case] value: &str) {
    let form = FormValues::new().with("category_id", value);
    assert!(execute(&form, &integer_rules()).is_valid);
}

#[rstest]
#[case("abc")]
#[case("1.0")]
#[case("1e2")]
#[case("0x10")]
#[case("12abc")]
#[case("-")]
#[case(" ")]
fn test_integer_rejects_non_integers(#[case] value: &str) {
    let form = FormValues::new().with("category_id", value);
    let result = execute(&form, &integer_rules());

    assert!(!result.is_valid);
    assert_eq!(
        result.get_errors("category_id"),
        Some(&vec!["This value must be an integer".to_string()])
    );
}

#[rstest]
#[case(1)]
#[case(50)]
#[case(200)]
fn test_max_length_boundary(#[case] max: usize) {
    let rules = RuleSet::new().with(Rule::max_length("title", max, "too long"));

    let exact = FormValues::new().with("title", "x".repeat(max));
    let over = FormValues::new().with("title", "x".repeat(max + 1));

    assert!(execute(&exact, &rules).is_valid);
    assert!(!execute(&over, &rules).is_valid);
}

#[test]
fn test_execute_is_idempotent() {
    let rules = RuleSet::new()
        .with(Rule::required("title", "The title is required"))
        .with(Rule::integer("owner_id", "This value must be an integer"))
        .with(Rule::numeric("time_spent", "This value must be numeric"))
        .with(Rule::date("date_due", ["%Y-%m-%d"], "Invalid date"));

    let form = FormValues::new()
        .with("owner_id", "me")
        .with("time_spent", "2h")
        .with("date_due", "soon");

    let first = execute(&form, &rules);
    let second = execute(&form, &rules);

    assert_eq!(first, second);
}

#[test]
fn test_failures_on_disjoint_fields_are_all_reported() {
    let rules = RuleSet::new()
        .with(Rule::required("title", "The title is required"))
        .with(Rule::integer("owner_id", "This value must be an integer"))
        .with(Rule::numeric("time_spent", "This value must be numeric"))
        .with(Rule::max_length("reference", 5, "The maximum length is 5 characters"));

    let form = FormValues::new()
        .with("owner_id", "bob")
        .with("time_spent", "lots")
        .with("reference", "ABCDEFG");

    let result = execute(&form, &rules);

    assert!(!result.is_valid);
    let mut fields: Vec<&String> = result.errors.keys().collect();
    fields.sort();
    assert_eq!(fields, vec!["owner_id", "reference", "time_spent", "title"]);
}

#[test]
fn test_valid_form_has_empty_error_map() {
    let rules = RuleSet::new()
        .with(Rule::required("title", "The title is required"))
        .with(Rule::integer("owner_id", "This value must be an integer"));

    let form = FormValues::new().with("title", "Bug").with("owner_id", "4");
    let result = execute(&form, &rules);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}
