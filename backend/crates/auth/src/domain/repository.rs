//! Ports
//!
//! Interfaces to durable token storage and to the identity backend.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{
    credentials::{Credentials, SignUpDraft},
    user_profile::UserProfile,
};
use crate::domain::value_object::{UserId, session_token::SessionToken};
use crate::error::AuthResult;

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: SessionToken,
}

/// Successful registration
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// The backend returned the created profile
    Registered(UserProfile),
    /// The backend acknowledged the registration without a profile
    Confirmation {
        message: String,
        user_id: Option<UserId>,
    },
}

impl SignUpOutcome {
    /// Text to show the user after a successful registration
    pub fn message(&self) -> &str {
        match self {
            SignUpOutcome::Registered(_) => "Account created successfully! Please log in to continue.",
            SignUpOutcome::Confirmation { message, .. } => message,
        }
    }
}

/// Durable persistence of the single session token
///
/// Reads and clears never fail from the caller's point of view: storage
/// problems are logged and a missing value is reported instead.
pub trait SessionStore: Send + Sync {
    /// Persist the token, replacing any previous one
    fn save(&self, token: &SessionToken) -> AuthResult<()>;

    /// Current token, if any
    fn read(&self) -> Option<SessionToken>;

    /// Forget the token. Idempotent.
    fn clear(&self);
}

/// Identity backend
///
/// Pure request/response: implementations never touch session state.
#[trait_variant::make(IdentityResolver: Send)]
pub trait LocalIdentityResolver {
    /// Resolve the stored token into a profile
    async fn fetch_current_user(&self) -> AuthResult<UserProfile>;

    /// Exchange credentials for a profile and a token
    async fn login(&self, credentials: &Credentials) -> AuthResult<LoginOutcome>;

    /// Register a new account
    async fn signup(&self, draft: &SignUpDraft) -> AuthResult<SignUpOutcome>;
}
