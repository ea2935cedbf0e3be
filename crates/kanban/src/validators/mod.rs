// File: src/validators/mod.rs
// Purpose: Per-operation rule sets for task and category forms

pub mod category;
pub mod task;

pub use category::CategoryValidator;
pub use task::{TaskOperation, TaskValidator};
