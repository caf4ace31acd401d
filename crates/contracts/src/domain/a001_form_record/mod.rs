pub mod aggregate;
pub mod calendar_date;
