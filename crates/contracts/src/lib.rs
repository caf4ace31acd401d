//! Wire types shared between the intake form and the records browser.
//!
//! Everything here mirrors the JSON contract of the remote form-data API,
//! so the crate has no browser dependencies and can be tested natively.

pub mod domain;
