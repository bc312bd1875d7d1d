//! Domain Layer
//!
//! Contains entities, value objects, ports and pure domain services.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    credentials::{Credentials, RegistrationDetails, SignUpDraft},
    session_state::{SessionPhase, SessionSnapshot, SessionState},
    user_profile::{RoleDetails, UserProfile},
};
pub use repository::{IdentityResolver, LoginOutcome, SessionStore, SignUpOutcome};
pub use value_object::{route::Route, session_token::SessionToken, user_role::UserRole};
