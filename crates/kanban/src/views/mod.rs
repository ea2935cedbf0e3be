// File: src/views/mod.rs
// Purpose: Maud views

pub mod category;
pub mod errors;
pub mod form;
pub mod layout;
pub mod user_sidebar;

pub use form::FormContext;
pub use layout::Slots;
