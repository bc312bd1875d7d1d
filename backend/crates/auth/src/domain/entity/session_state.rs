//! Session State
//!
//! In-memory aggregate owned by the session manager. Never persisted:
//! it is rebuilt from the stored token on every start.

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::user_role::UserRole;

/// Lifecycle phase of the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Stored token not yet resolved
    Initializing,
    /// No authenticated principal
    Anonymous,
    /// Principal known
    Authenticated(UserProfile),
}

/// Current session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    phase: SessionPhase,
}

/// Exposed view of the session: `{profile, is_loading, is_authenticated}`
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub profile: Option<UserProfile>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl SessionState {
    pub const fn initializing() -> Self {
        Self {
            phase: SessionPhase::Initializing,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
        }
    }

    pub fn authenticated(profile: UserProfile) -> Self {
        Self {
            phase: SessionPhase::Authenticated(profile),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.phase {
            SessionPhase::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub(crate) fn profile_mut(&mut self) -> Option<&mut UserProfile> {
        match &mut self.phase {
            SessionPhase::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Initializing)
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    /// True iff authenticated with exactly this role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.profile().is_some_and(|profile| profile.has_role(role))
    }

    /// Short phase name for logs
    pub fn label(&self) -> &'static str {
        match self.phase {
            SessionPhase::Initializing => "initializing",
            SessionPhase::Anonymous => "anonymous",
            SessionPhase::Authenticated(_) => "authenticated",
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            profile: self.profile().cloned(),
            is_loading: self.is_loading(),
            is_authenticated: self.is_authenticated(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initializing()
    }
}
