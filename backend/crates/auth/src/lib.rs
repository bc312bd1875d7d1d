//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profiles, roles, routes, session state, port traits
//! - `application/` - Session manager and use cases
//! - `infra/` - REST identity resolver, token storage
//! - `presentation/` - Wire DTOs, route guard, route table
//!
//! ## Features
//! - Email + password login against the credential platform API
//! - Role-specific registration (student, college, employer)
//! - Session restored from a persisted bearer token at startup
//! - Role-gated navigation with pending-approval and verify-email interstitials
//!
//! ## Session Model
//! - One token under a fixed storage key; nothing else is persisted
//! - Session state is owned by [`AuthSessionManager`]; views read snapshots
//! - Late profile responses never override a newer login or logout

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_manager::AuthSessionManager;
pub use domain::{
    Credentials, RegistrationDetails, Route, SessionSnapshot, SessionState, SignUpDraft,
    SignUpOutcome, UserProfile, UserRole,
};
pub use error::{AuthError, AuthResult};
pub use infra::{HttpIdentityResolver, StorageSessionStore};
pub use presentation::{GuardConfig, GuardDecision, Navigation, RouteGuard, RouteTable};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
