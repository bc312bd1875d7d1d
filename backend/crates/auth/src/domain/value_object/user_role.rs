use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role of an authenticated principal
///
/// Closed set: every profile carries exactly one role, and the role never
/// changes for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[display("student")]
    Student,
    #[display("college")]
    College,
    #[display("government")]
    Government,
    #[display("employer")]
    Employer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Student,
        UserRole::College,
        UserRole::Government,
        UserRole::Employer,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Student => "student",
            College => "college",
            Government => "government",
            Employer => "employer",
        }
    }

    /// Roles whose accounts must be vetted by an administrator
    #[inline]
    pub const fn requires_approval(&self) -> bool {
        matches!(self, UserRole::College | UserRole::Government)
    }

    /// Government accounts are provisioned by the administrator only
    #[inline]
    pub const fn is_self_registrable(&self) -> bool {
        !matches!(self, UserRole::Government)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "student" => Some(Student),
            "college" => Some(College),
            "government" => Some(Government),
            "employer" => Some(Employer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("student"), Some(UserRole::Student));
        assert_eq!(UserRole::from_code("college"), Some(UserRole::College));
        assert_eq!(UserRole::from_code("government"), Some(UserRole::Government));
        assert_eq!(UserRole::from_code("employer"), Some(UserRole::Employer));
        assert_eq!(UserRole::from_code("admin"), None);
        assert_eq!(UserRole::from_code("Student"), None);
    }

    #[test]
    fn test_user_role_display_matches_code() {
        for role in UserRole::ALL {
            assert_eq!(role.to_string(), role.code());
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_user_role_serde() {
        let json = serde_json::to_string(&UserRole::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
        let role: UserRole = serde_json::from_str("\"college\"").unwrap();
        assert_eq!(role, UserRole::College);
        assert!(serde_json::from_str::<UserRole>("\"moderator\"").is_err());
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::Student.requires_approval());
        assert!(UserRole::College.requires_approval());
        assert!(UserRole::Government.requires_approval());
        assert!(!UserRole::Employer.requires_approval());

        assert!(UserRole::Student.is_self_registrable());
        assert!(UserRole::College.is_self_registrable());
        assert!(!UserRole::Government.is_self_registrable());
        assert!(UserRole::Employer.is_self_registrable());
    }
}
