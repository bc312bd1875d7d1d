//! Auth Session Manager
//!
//! Single source of truth for the session. Built once at application
//! start and shared through `Arc`; every state change goes through one
//! of its operations.
//!
//! ## State machine
//! - `Initializing` -> `Anonymous` | `Authenticated` via [`AuthSessionManager::initialize`]
//! - `Anonymous` -> `Authenticated` via [`AuthSessionManager::login`]
//! - any -> `Anonymous` via [`AuthSessionManager::logout`]
//!
//! ## Stale responses
//! Every transition bumps a session epoch. A profile fetch started by
//! `initialize` only lands if the epoch it captured is still current and
//! the session is still initializing; the check and the write happen
//! under the state channel's lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::application::admin_override::AdminOverride;
use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::SignUpUseCase;
use crate::domain::entity::{
    credentials::{Credentials, SignUpDraft},
    session_state::{SessionSnapshot, SessionState},
    user_profile::UserProfile,
};
use crate::domain::repository::{IdentityResolver, SessionStore, SignUpOutcome};
use crate::domain::services::dashboard_route_for;
use crate::domain::value_object::{route::Route, user_role::UserRole};
use crate::error::AuthResult;

/// Session service
pub struct AuthSessionManager<S, R>
where
    S: SessionStore,
    R: IdentityResolver,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
    admin: AdminOverride,
    check_session: CheckSessionUseCase<S, R>,
    sign_in: SignInUseCase<R>,
    sign_up: SignUpUseCase<R>,
    sign_out: SignOutUseCase<S>,
    state: watch::Sender<SessionState>,
    epoch: AtomicU64,
}

impl<S, R> AuthSessionManager<S, R>
where
    S: SessionStore,
    R: IdentityResolver + Sync,
{
    /// New manager in the `Initializing` phase. Call [`Self::initialize`] next.
    pub fn new(store: Arc<S>, resolver: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let admin = AdminOverride::from_config(&config);
        let (state, _) = watch::channel(SessionState::initializing());

        Self {
            check_session: CheckSessionUseCase::new(store.clone(), resolver.clone(), admin.clone()),
            sign_in: SignInUseCase::new(resolver.clone(), admin.clone()),
            sign_up: SignUpUseCase::new(resolver),
            sign_out: SignOutUseCase::new(store.clone()),
            store,
            config,
            admin,
            state,
            epoch: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve the stored token, settling the session
    ///
    /// Resolver failures are never returned: the token is cleared and the
    /// session becomes anonymous. Does nothing once the session has settled.
    pub async fn initialize(&self) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        if !self.state.borrow().is_loading() {
            tracing::debug!("Session already initialized");
            return;
        }

        let outcome = self.check_session.execute().await;

        self.state.send_if_modified(|state| {
            if self.epoch.load(Ordering::SeqCst) != epoch || !state.is_loading() {
                tracing::debug!(epoch, "Discarding stale session check");
                return false;
            }

            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = match outcome {
                Ok(Some(profile)) => {
                    tracing::info!(
                        user_id = %profile.id,
                        role = %profile.role(),
                        "Session restored"
                    );
                    SessionState::authenticated(profile)
                }
                Ok(None) => SessionState::anonymous(),
                Err(e) => {
                    tracing::debug!(error = %e, "Stored session rejected, continuing anonymously");
                    self.store.clear();
                    SessionState::anonymous()
                }
            };
            true
        });
    }

    /// Log in, persist the token and authenticate the session
    ///
    /// On failure the session and the stored token are left untouched and
    /// the error is returned for display.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<UserProfile> {
        let outcome = self.sign_in.execute(credentials).await?;

        self.store
            .save(&outcome.token)
            .inspect_err(|e| e.log())?;

        // A pending `initialize` sees the new epoch and drops its result.
        self.state.send_modify(|state| {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = SessionState::authenticated(outcome.user.clone());
        });

        Ok(outcome.user)
    }

    /// Register an account. The session is not changed.
    pub async fn signup(&self, draft: &SignUpDraft) -> AuthResult<SignUpOutcome> {
        self.sign_up.execute(draft).await
    }

    /// Forget the token and become anonymous
    ///
    /// Unconditional and idempotent. Any in-flight initialization is
    /// abandoned.
    pub fn logout(&self) {
        self.state.send_modify(|state| {
            self.sign_out.execute();
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = SessionState::anonymous();
        });
    }

    /// Replace the in-memory profile after a profile edit
    ///
    /// Returns `false` (and changes nothing) unless authenticated with the
    /// same role. The backend is not contacted.
    pub fn update_user(&self, profile: UserProfile) -> bool {
        let profile = self.admin.apply(profile);
        self.state.send_if_modified(|state| {
            let Some(current) = state.profile_mut() else {
                tracing::warn!("Profile update ignored: not authenticated");
                return false;
            };
            if current.role() != profile.role() {
                tracing::warn!(
                    current = %current.role(),
                    attempted = %profile.role(),
                    "Profile update ignored: role cannot change"
                );
                return false;
            }
            *current = profile;
            true
        })
    }

    /// True iff authenticated with exactly this role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.state.borrow().has_role(role)
    }

    /// Landing route for the current profile (login when anonymous)
    pub fn dashboard_route(&self) -> Route {
        dashboard_route_for(self.state.borrow().profile())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Current transition count
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Suspend until the session leaves `Initializing`
    pub async fn wait_until_settled(&self) -> SessionState {
        let mut receiver = self.state.subscribe();
        match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}
