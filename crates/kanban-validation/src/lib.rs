//! Kanban Validation
//!
//! Field rules, ordered rule sets and the executor that runs them over
//! submitted form values. Everything here is pure computation over an
//! in-memory map, so rule sets can be shared freely between request tasks.

pub mod date;
pub mod executor;
pub mod form;
pub mod numeric;
pub mod rule;

pub use executor::{execute, ValidationResult};
pub use form::FormValues;
pub use rule::{Rule, RuleKind, RuleSet};
