pub mod db;

pub mod custom_fields;
pub mod dashboard;
pub mod investments;
pub mod investors;

pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
