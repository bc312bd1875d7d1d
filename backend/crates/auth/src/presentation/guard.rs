//! Route Guard
//!
//! Decides, for one navigation attempt, whether the target view renders,
//! the user is sent elsewhere, or a blocking interstitial is shown.
//! Pure and synchronous: reads a session snapshot, never performs I/O.

use derive_more::Display;

use crate::domain::entity::session_state::{SessionPhase, SessionState};
use crate::domain::value_object::{route::Route, user_role::UserRole};

/// Guard settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Block unverified accounts behind [`Interstitial::VerifyEmail`]
    pub require_email_verification: bool,
}

/// Outcome of guarding a protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still initializing; show a placeholder and re-evaluate
    Loading,
    /// Navigate to another route instead
    Redirect(Route),
    /// Show a blocking page instead of the view
    Interstitial(Interstitial),
    /// Show the requested view
    Render,
}

/// Blocking page shown in place of a protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interstitial {
    /// College or government account not yet approved
    PendingApproval { role: UserRole },
    /// Email verification is required and the address is unverified
    VerifyEmail { email: String },
}

impl Interstitial {
    pub fn title(&self) -> &'static str {
        match self {
            Interstitial::PendingApproval { .. } => "Account Pending Approval",
            Interstitial::VerifyEmail { .. } => "Email Verification Required",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Interstitial::PendingApproval { role } => format!(
                "Your {role} account is currently under review by government administrators."
            ),
            Interstitial::VerifyEmail { .. } => {
                "Please verify your email address to continue.".to_string()
            }
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Interstitial::PendingApproval { .. } => "You will receive an email notification \
                once your account has been approved. This process typically takes 1-2 business days."
                .to_string(),
            Interstitial::VerifyEmail { email } => format!(
                "We've sent a verification email to {email}. \
                 Please check your inbox and click the verification link."
            ),
        }
    }

    /// Actions offered, primary first
    pub fn actions(&self) -> &'static [InterstitialAction] {
        match self {
            Interstitial::PendingApproval { .. } => &[InterstitialAction::BackToLogin],
            Interstitial::VerifyEmail { .. } => &[
                InterstitialAction::ResendVerification,
                InterstitialAction::BackToLogin,
            ],
        }
    }
}

/// Button on an interstitial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InterstitialAction {
    #[display("Back to Login")]
    BackToLogin,
    #[display("Resend Verification Email")]
    ResendVerification,
}

impl InterstitialAction {
    pub fn label(&self) -> &'static str {
        match self {
            InterstitialAction::BackToLogin => "Back to Login",
            InterstitialAction::ResendVerification => "Resend Verification Email",
        }
    }

    /// Route the action navigates to; `None` when it stays on the page
    pub fn target(&self) -> Option<Route> {
        match self {
            InterstitialAction::BackToLogin => Some(Route::Login),
            InterstitialAction::ResendVerification => None,
        }
    }
}

/// Role router guard
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    config: GuardConfig,
}

impl RouteGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GuardConfig {
        self.config
    }

    /// Decide for a protected view requiring `required` (any signed-in user
    /// when `None`)
    pub fn evaluate(&self, state: &SessionState, required: Option<UserRole>) -> GuardDecision {
        let profile = match state.phase() {
            SessionPhase::Initializing => return GuardDecision::Loading,
            SessionPhase::Anonymous => return GuardDecision::Redirect(Route::Login),
            SessionPhase::Authenticated(profile) => profile,
        };

        let role = profile.role();
        if let Some(required) = required.filter(|required| *required != role) {
            tracing::debug!(%required, actual = %role, "Role mismatch, redirecting to own dashboard");
            return GuardDecision::Redirect(Route::dashboard_for(role));
        }

        if role.requires_approval() && !profile.flags.approved {
            return GuardDecision::Interstitial(Interstitial::PendingApproval { role });
        }

        if self.config.require_email_verification && !profile.flags.verified {
            return GuardDecision::Interstitial(Interstitial::VerifyEmail {
                email: profile.email.to_string(),
            });
        }

        GuardDecision::Render
    }
}
