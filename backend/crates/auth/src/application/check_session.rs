//! Check Session Use Case
//!
//! Resolves the stored token into the effective profile.

use std::sync::Arc;

use crate::application::admin_override::AdminOverride;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::{IdentityResolver, SessionStore};
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S, R>
where
    S: SessionStore,
    R: IdentityResolver,
{
    store: Arc<S>,
    resolver: Arc<R>,
    admin: AdminOverride,
}

impl<S, R> CheckSessionUseCase<S, R>
where
    S: SessionStore,
    R: IdentityResolver + Sync,
{
    pub fn new(store: Arc<S>, resolver: Arc<R>, admin: AdminOverride) -> Self {
        Self {
            store,
            resolver,
            admin,
        }
    }

    /// `Ok(None)` when no token is stored; the resolver is not contacted.
    ///
    /// Does not clear the token on failure; the caller decides whether the
    /// failure still concerns the current session.
    pub async fn execute(&self) -> AuthResult<Option<UserProfile>> {
        let Some(token) = self.store.read() else {
            tracing::debug!("No stored session token");
            return Ok(None);
        };

        tracing::debug!(token = %token.fingerprint(), "Resolving stored session");
        let profile = self.resolver.fetch_current_user().await?;
        Ok(Some(self.admin.apply(profile)))
    }
}
