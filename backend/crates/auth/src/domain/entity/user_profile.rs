//! User Profile Entity
//!
//! The authenticated principal as returned by the identity endpoint.
//! Role-specific attributes live in a [`RoleDetails`] variant, so the
//! profile's role and the shape of its payload can never disagree.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, account_flags::AccountFlags, email::Email, user_role::UserRole,
};

/// Student attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDetails {
    pub roll_number: Option<String>,
    pub college_name: Option<String>,
    pub course: Option<String>,
    pub year_of_study: Option<String>,
    pub date_of_birth: Option<String>,
}

/// College (institution) attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollegeDetails {
    pub college_name: Option<String>,
    pub college_code: Option<String>,
    pub address: Option<String>,
    pub university: Option<String>,
    pub admin_name: Option<String>,
}

/// Government officer attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GovernmentDetails {
    pub department_name: Option<String>,
    pub designation: Option<String>,
    pub employee_id: Option<String>,
}

/// Employer attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerDetails {
    pub company_name: Option<String>,
    pub company_registration: Option<String>,
    pub industry: Option<String>,
    pub hr_contact: Option<String>,
    pub company_description: Option<String>,
    pub company_website: Option<String>,
}

/// Role-keyed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleDetails {
    Student(StudentDetails),
    College(CollegeDetails),
    Government(GovernmentDetails),
    Employer(EmployerDetails),
}

impl RoleDetails {
    pub const fn role(&self) -> UserRole {
        match self {
            RoleDetails::Student(_) => UserRole::Student,
            RoleDetails::College(_) => UserRole::College,
            RoleDetails::Government(_) => UserRole::Government,
            RoleDetails::Employer(_) => UserRole::Employer,
        }
    }

    /// Empty payload for a role
    pub fn empty(role: UserRole) -> Self {
        match role {
            UserRole::Student => RoleDetails::Student(StudentDetails::default()),
            UserRole::College => RoleDetails::College(CollegeDetails::default()),
            UserRole::Government => RoleDetails::Government(GovernmentDetails::default()),
            UserRole::Employer => RoleDetails::Employer(EmployerDetails::default()),
        }
    }
}

/// Authenticated principal
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
    pub phone: Option<String>,
    pub flags: AccountFlags,
    pub created_at: Option<DateTime<Utc>>,
    pub details: RoleDetails,
}

impl UserProfile {
    /// Profile with default flags and no optional attributes
    pub fn new(id: UserId, email: Email, full_name: impl Into<String>, details: RoleDetails) -> Self {
        Self {
            id,
            email,
            full_name: full_name.into(),
            phone: None,
            flags: AccountFlags::default(),
            created_at: None,
            details,
        }
    }

    #[inline]
    pub fn role(&self) -> UserRole {
        self.details.role()
    }

    #[inline]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role() == role
    }

    /// Whether the approval gate lets this profile through
    ///
    /// Roles that need no administrative vetting always pass.
    pub fn is_cleared_for_access(&self) -> bool {
        !self.role().requires_approval() || self.flags.approved
    }

    pub fn student(&self) -> Option<&StudentDetails> {
        match &self.details {
            RoleDetails::Student(details) => Some(details),
            _ => None,
        }
    }

    pub fn college(&self) -> Option<&CollegeDetails> {
        match &self.details {
            RoleDetails::College(details) => Some(details),
            _ => None,
        }
    }

    pub fn government(&self) -> Option<&GovernmentDetails> {
        match &self.details {
            RoleDetails::Government(details) => Some(details),
            _ => None,
        }
    }

    pub fn employer(&self) -> Option<&EmployerDetails> {
        match &self.details {
            RoleDetails::Employer(details) => Some(details),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: UserRole) -> UserProfile {
        UserProfile::new(
            UserId::new(),
            Email::new("someone@example.com").unwrap(),
            "Someone",
            RoleDetails::empty(role),
        )
    }

    #[test]
    fn test_role_follows_details() {
        for role in UserRole::ALL {
            let profile = profile(role);
            assert_eq!(profile.role(), role);
            for other in UserRole::ALL {
                assert_eq!(profile.has_role(other), other == role);
            }
        }
    }

    #[test]
    fn test_role_accessors_narrow() {
        let student = profile(UserRole::Student);
        assert!(student.student().is_some());
        assert!(student.college().is_none());
        assert!(student.government().is_none());
        assert!(student.employer().is_none());

        let employer = profile(UserRole::Employer);
        assert!(employer.employer().is_some());
        assert!(employer.student().is_none());
    }

    #[test]
    fn test_approval_gate() {
        let mut college = profile(UserRole::College);
        assert!(!college.is_cleared_for_access());
        college.flags.approved = true;
        assert!(college.is_cleared_for_access());

        // Students and employers are never gated
        assert!(profile(UserRole::Student).is_cleared_for_access());
        assert!(profile(UserRole::Employer).is_cleared_for_access());
    }
}
