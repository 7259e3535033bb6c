//! Blog domain: post and category repositories, the resource existence
//! gate and the HTTP handlers over them.

pub mod categories;
pub mod exists;
pub mod handlers;
pub mod posts;
