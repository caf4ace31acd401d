//! Intake form page
//!
//! - state.rs: request lifecycle (pure, tested)
//! - view_model.rs: signals + commands that run the HTTP calls
//! - view.rs: Leptos component

pub mod state;
mod view;
mod view_model;

pub use view::IntakeForm;
pub use view_model::IntakeFormViewModel;
