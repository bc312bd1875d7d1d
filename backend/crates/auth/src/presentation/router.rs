//! Route Table
//!
//! Static map of navigable paths to the role each one requires, resolved
//! through the [`RouteGuard`].

use crate::domain::entity::session_state::SessionState;
use crate::domain::value_object::{route::Route, user_role::UserRole};
use crate::presentation::guard::{GuardConfig, GuardDecision, Interstitial, RouteGuard};

/// Access rule of one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Rendered for everyone, whatever the session
    Public,
    /// Guarded; `Some(role)` additionally requires that role
    Protected(Option<UserRole>),
}

/// Result of navigating to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
    Loading,
    Interstitial(Interstitial),
}

/// Route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(Route, Access)>,
    guard: RouteGuard,
}

impl RouteTable {
    /// The application's routes: four public pages and one dashboard per role
    pub fn standard(config: GuardConfig) -> Self {
        let mut entries = vec![
            (Route::Home, Access::Public),
            (Route::Login, Access::Public),
            (Route::Signup, Access::Public),
            (Route::Documents, Access::Public),
        ];
        entries.extend(
            UserRole::ALL
                .iter()
                .map(|role| (Route::dashboard_for(*role), Access::Protected(Some(*role)))),
        );

        Self {
            entries,
            guard: RouteGuard::new(config),
        }
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn access(&self, route: Route) -> Option<Access> {
        self.entries
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, access)| *access)
    }

    /// Resolve `path` for the current session
    ///
    /// Paths outside the table redirect to the home page.
    pub fn navigate(&self, path: &str, state: &SessionState) -> Navigation {
        let Some((route, access)) = Route::from_path(path)
            .and_then(|route| self.access(route).map(|access| (route, access)))
        else {
            tracing::debug!(path, "Unknown path, redirecting home");
            return Navigation::Redirect(Route::Home);
        };

        let Access::Protected(required) = access else {
            return Navigation::Render(route);
        };

        match self.guard.evaluate(state, required) {
            GuardDecision::Render => Navigation::Render(route),
            GuardDecision::Redirect(target) => Navigation::Redirect(target),
            GuardDecision::Loading => Navigation::Loading,
            GuardDecision::Interstitial(page) => Navigation::Interstitial(page),
        }
    }

    /// [`Self::navigate`], following redirects to the page finally shown
    pub fn resolve(&self, path: &str, state: &SessionState) -> Navigation {
        let mut outcome = self.navigate(path, state);
        let mut hops = 0;
        while let Navigation::Redirect(target) = outcome {
            hops += 1;
            if hops > self.entries.len() {
                tracing::warn!(path, %target, "Redirect loop");
                return Navigation::Redirect(target);
            }
            outcome = self.navigate(target.path(), state);
        }
        outcome
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard(GuardConfig::default())
    }
}
