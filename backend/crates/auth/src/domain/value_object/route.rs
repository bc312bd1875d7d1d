//! Navigable Routes

use derive_more::Display;

use super::user_role::UserRole;

/// Every view the client can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Route {
    #[display("/")]
    Home,
    #[display("/login")]
    Login,
    #[display("/signup")]
    Signup,
    #[display("/documents")]
    Documents,
    #[display("/student-dashboard")]
    StudentDashboard,
    #[display("/college-dashboard")]
    CollegeDashboard,
    #[display("/government-dashboard")]
    GovernmentDashboard,
    #[display("/employer-dashboard")]
    EmployerDashboard,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::Documents,
        Route::StudentDashboard,
        Route::CollegeDashboard,
        Route::GovernmentDashboard,
        Route::EmployerDashboard,
    ];

    pub const fn path(&self) -> &'static str {
        use Route::*;
        match self {
            Home => "/",
            Login => "/login",
            Signup => "/signup",
            Documents => "/documents",
            StudentDashboard => "/student-dashboard",
            CollegeDashboard => "/college-dashboard",
            GovernmentDashboard => "/government-dashboard",
            EmployerDashboard => "/employer-dashboard",
        }
    }

    /// Parse a path. Query strings, fragments and one trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Landing view for a role
    pub const fn dashboard_for(role: UserRole) -> Self {
        match role {
            UserRole::Student => Route::StudentDashboard,
            UserRole::College => Route::CollegeDashboard,
            UserRole::Government => Route::GovernmentDashboard,
            UserRole::Employer => Route::EmployerDashboard,
        }
    }

    /// Role whose dashboard this is, if any
    pub const fn dashboard_role(&self) -> Option<UserRole> {
        match self {
            Route::StudentDashboard => Some(UserRole::Student),
            Route::CollegeDashboard => Some(UserRole::College),
            Route::GovernmentDashboard => Some(UserRole::Government),
            Route::EmployerDashboard => Some(UserRole::Employer),
            _ => None,
        }
    }
}
