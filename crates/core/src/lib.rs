//! Shared domain types and errors used by the other placemark crates.

pub mod error;
pub mod types;
