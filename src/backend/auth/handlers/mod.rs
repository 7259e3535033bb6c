//! Login and registration handlers.

pub mod login;
pub mod register;
pub mod types;

pub use login::login;
pub use register::register;
