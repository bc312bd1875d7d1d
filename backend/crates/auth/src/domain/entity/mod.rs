//! Entity Module

pub mod credentials;
pub mod session_state;
pub mod user_profile;
