// File: src/controllers/mod.rs
// Purpose: Request controllers

pub mod category;

pub use category::CategoryController;
