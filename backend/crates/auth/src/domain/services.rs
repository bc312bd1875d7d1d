//! Domain Services
//!
//! Pure routing rules shared by the session manager and the guard.

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::{route::Route, user_role::UserRole};

/// Landing route for a (possibly absent) profile
///
/// No profile means the login route.
pub fn dashboard_route_for(profile: Option<&UserProfile>) -> Route {
    match profile {
        Some(profile) => Route::dashboard_for(profile.role()),
        None => Route::Login,
    }
}

/// Landing route for a raw role code
///
/// Total over arbitrary strings: codes outside the known roles land on
/// the home route.
pub fn dashboard_route_for_code(code: &str) -> Route {
    UserRole::from_code(code)
        .map(Route::dashboard_for)
        .unwrap_or(Route::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user_profile::RoleDetails;
    use crate::domain::value_object::{UserId, email::Email};

    #[test]
    fn test_dashboard_route_for_profiles() {
        let expected = [
            (UserRole::Student, Route::StudentDashboard),
            (UserRole::College, Route::CollegeDashboard),
            (UserRole::Government, Route::GovernmentDashboard),
            (UserRole::Employer, Route::EmployerDashboard),
        ];
        for (role, route) in expected {
            let profile = UserProfile::new(
                UserId::new(),
                Email::new("x@example.com").unwrap(),
                "X",
                RoleDetails::empty(role),
            );
            assert_eq!(dashboard_route_for(Some(&profile)), route);
        }
    }

    #[test]
    fn test_dashboard_route_for_absent_profile() {
        assert_eq!(dashboard_route_for(None), Route::Login);
    }

    #[test]
    fn test_dashboard_route_for_code() {
        assert_eq!(dashboard_route_for_code("student"), Route::StudentDashboard);
        assert_eq!(dashboard_route_for_code("employer"), Route::EmployerDashboard);
        assert_eq!(dashboard_route_for_code("auditor"), Route::Home);
        assert_eq!(dashboard_route_for_code(""), Route::Home);
    }
}
