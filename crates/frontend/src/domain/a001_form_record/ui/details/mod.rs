//! Edit modal of the records browser and the field editors it shares with
//! the intake form.

mod fields;
mod view;

pub use fields::{CommandsInputs, FormFieldsInputs};
pub use view::RecordEditModal;
