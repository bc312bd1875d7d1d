//! Value Object Module

pub mod account_flags;
pub mod email;
pub mod route;
pub mod session_token;
pub mod user_role;

pub use kernel::id::UserId;
