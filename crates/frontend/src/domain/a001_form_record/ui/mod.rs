pub mod details;
pub mod draft;
pub mod intake;
pub mod list;
