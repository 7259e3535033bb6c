//! HTTP handlers for the category and post endpoints.

pub mod categories;
pub mod posts;
pub mod types;
