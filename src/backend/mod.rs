//! Server-side modules.

pub mod auth;
pub mod blog;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod storage;
