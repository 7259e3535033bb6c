//! Backend Error Module
//!
//! Defines the error taxonomy used by HTTP handlers and repositories, and
//! the conversions that turn those errors into HTTP responses.
//!
//! - **`types`** - error type definitions and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Repositories report expected conditions (not found, zero rows affected)
//! as tagged results, never through this type; `ApiError` carries the
//! classified outcome a handler maps to a response. Unexpected datastore
//! failures surface as `ApiError::Storage`, whose underlying message is
//! logged but never returned to the client.

pub mod conversion;
pub mod types;

pub use types::ApiError;
