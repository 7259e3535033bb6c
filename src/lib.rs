//! Inkpost - a small blog backend.
//!
//! REST API for a simple blog: user registration and login issuing signed
//! session tokens, plus CRUD over posts and categories. Posts carry a
//! many-to-many relation to categories through a join table, and the
//! repository layer keeps that relation exactly consistent with the post
//! record across create, update and delete.
//!
//! # Module Structure
//!
//! - **`backend::auth`** - credential store, token issuer, login/register handlers
//! - **`backend::blog`** - post and category repositories, existence gate, handlers
//! - **`backend::server`** - configuration, shared state, app construction
//! - **`backend::routes`** - route table
//! - **`backend::middleware`** - bearer-token request guard
//! - **`backend::error`** / **`backend::response`** - error taxonomy and the
//!   uniform JSON response envelope every endpoint honors

pub mod backend;
