//! Authentication: credential storage, session token issuance and the
//! login/register handlers.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{login, register};
