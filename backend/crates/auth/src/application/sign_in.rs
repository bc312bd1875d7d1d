//! Sign In Use Case
//!
//! Exchanges credentials for a token and the effective profile.

use std::sync::Arc;

use crate::application::admin_override::AdminOverride;
use crate::domain::entity::credentials::Credentials;
use crate::domain::repository::{IdentityResolver, LoginOutcome};
use crate::error::{AuthError, AuthResult};

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: IdentityResolver,
{
    resolver: Arc<R>,
    admin: AdminOverride,
}

impl<R> SignInUseCase<R>
where
    R: IdentityResolver + Sync,
{
    pub fn new(resolver: Arc<R>, admin: AdminOverride) -> Self {
        Self { resolver, admin }
    }

    /// Does not persist the token; the session manager does.
    pub async fn execute(&self, credentials: &Credentials) -> AuthResult<LoginOutcome> {
        if credentials.email.is_empty() || credentials.password.is_blank() {
            return Err(AuthError::invalid_credentials(
                "Email and password are required",
            ));
        }

        let outcome = self.resolver.login(credentials).await.inspect_err(|e| e.log())?;

        let user = self.admin.apply(outcome.user);

        tracing::info!(
            user_id = %user.id,
            role = %user.role(),
            token = %outcome.token.fingerprint(),
            "User signed in"
        );

        Ok(LoginOutcome {
            user,
            token: outcome.token,
        })
    }
}
