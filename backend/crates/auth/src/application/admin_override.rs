//! Admin Account Override
//!
//! One configured administrative address is always treated as approved,
//! verified and active, whatever flags the backend reports for it.

use crate::application::config::AuthConfig;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::{account_flags::AccountFlags, email::Email};

#[derive(Debug, Clone, Default)]
pub struct AdminOverride {
    email: Option<Email>,
}

impl AdminOverride {
    pub fn new(email: Option<Email>) -> Self {
        Self { email }
    }

    pub fn disabled() -> Self {
        Self { email: None }
    }

    /// Build from config. An unparsable address disables the override.
    pub fn from_config(config: &AuthConfig) -> Self {
        let email = config
            .admin_override_email
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match Email::new(raw) {
                Ok(email) => Some(email),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring invalid admin override email");
                    None
                }
            });
        Self { email }
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn matches(&self, profile: &UserProfile) -> bool {
        self.email.as_ref() == Some(&profile.email)
    }

    /// Effective profile: flags forced on for the admin account
    pub fn apply(&self, mut profile: UserProfile) -> UserProfile {
        if self.matches(&profile) && !profile.flags.is_fully_granted() {
            tracing::info!(email = %profile.email, "Admin account flags enforced");
            profile.flags = AccountFlags::granted();
        }
        profile
    }
}
