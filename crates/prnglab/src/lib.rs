//! Application logic for the prnglab binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
