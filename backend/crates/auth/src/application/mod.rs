//! Application Layer
//!
//! Use cases and the session manager that composes them.

pub mod admin_override;
pub mod check_session;
pub mod config;
pub mod session_manager;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use admin_override::AdminOverride;
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use session_manager::AuthSessionManager;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpUseCase, validate_draft};
