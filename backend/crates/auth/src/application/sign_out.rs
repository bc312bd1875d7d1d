//! Sign Out Use Case
//!
//! Forgets the stored session token. Local only: the backend issues
//! stateless tokens and keeps no session to revoke.

use std::sync::Arc;

use crate::domain::repository::SessionStore;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Infallible and idempotent
    pub fn execute(&self) {
        match self.store.read() {
            Some(token) => {
                self.store.clear();
                tracing::info!(token = %token.fingerprint(), "User signed out");
            }
            None => {
                self.store.clear();
                tracing::debug!("Sign out without a stored token");
            }
        }
    }
}
