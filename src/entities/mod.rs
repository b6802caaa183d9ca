//! SeaORM entities for the `app` schema.

pub mod employees;
pub mod prelude;

/// Schema that owns every table of the application.
pub const SCHEMA: &str = "app";
