//! Credentials and Registration Drafts
//!
//! Inputs of the login and signup operations. Passwords are held as
//! [`ClearTextPassword`] so they are wiped from memory once sent.

use platform::password::ClearTextPassword;

use crate::domain::value_object::user_role::UserRole;

/// Email + password pair for login
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: ClearTextPassword,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: ClearTextPassword::new(password),
        }
    }
}

/// Student registration fields
#[derive(Debug, Clone, Default)]
pub struct StudentRegistration {
    pub name: String,
    pub enrollment_number: String,
    pub institution: String,
    pub program: String,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
}

/// College registration fields
#[derive(Debug, Clone, Default)]
pub struct CollegeRegistration {
    pub college_name: String,
    pub registration_number: String,
    pub contact_person: String,
    pub designation: String,
    pub address: Option<String>,
    pub affiliation: Option<String>,
}

/// Government registration fields (always refused client-side)
#[derive(Debug, Clone, Default)]
pub struct GovernmentRegistration {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub employee_id: String,
    pub office_address: Option<String>,
}

/// Employer registration fields
#[derive(Debug, Clone, Default)]
pub struct EmployerRegistration {
    pub name: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub company_website: Option<String>,
}

/// Role-keyed registration payload
#[derive(Debug, Clone)]
pub enum RegistrationDetails {
    Student(StudentRegistration),
    College(CollegeRegistration),
    Government(GovernmentRegistration),
    Employer(EmployerRegistration),
}

impl RegistrationDetails {
    pub const fn role(&self) -> UserRole {
        match self {
            RegistrationDetails::Student(_) => UserRole::Student,
            RegistrationDetails::College(_) => UserRole::College,
            RegistrationDetails::Government(_) => UserRole::Government,
            RegistrationDetails::Employer(_) => UserRole::Employer,
        }
    }

    /// Fields that must be non-blank, in form order, keyed by wire name
    pub fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            RegistrationDetails::Student(s) => vec![
                ("name", s.name.as_str()),
                ("enrollment_number", s.enrollment_number.as_str()),
                ("institution", s.institution.as_str()),
                ("program", s.program.as_str()),
            ],
            RegistrationDetails::College(c) => vec![
                ("college_name", c.college_name.as_str()),
                ("registration_number", c.registration_number.as_str()),
                ("contact_person", c.contact_person.as_str()),
                ("designation", c.designation.as_str()),
            ],
            RegistrationDetails::Government(g) => vec![
                ("name", g.name.as_str()),
                ("department", g.department.as_str()),
                ("designation", g.designation.as_str()),
                ("employee_id", g.employee_id.as_str()),
            ],
            RegistrationDetails::Employer(e) => vec![
                ("name", e.name.as_str()),
                ("company_name", e.company_name.as_str()),
            ],
        }
    }
}

/// Everything the signup endpoint needs
#[derive(Debug)]
pub struct SignUpDraft {
    pub email: String,
    pub password: ClearTextPassword,
    /// Confirmation as typed; checked only when present
    pub confirm_password: Option<ClearTextPassword>,
    pub phone: Option<String>,
    pub details: RegistrationDetails,
}

impl SignUpDraft {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        details: RegistrationDetails,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: ClearTextPassword::new(password),
            confirm_password: None,
            phone: None,
            details,
        }
    }

    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(ClearTextPassword::new(confirm_password));
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[inline]
    pub fn role(&self) -> UserRole {
        self.details.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_trim_email_only() {
        let credentials = Credentials::new("  user@example.com ", " Secret123 ");
        assert_eq!(credentials.email, "user@example.com");
        assert_eq!(credentials.password.expose(), " Secret123 ");
    }

    #[test]
    fn test_required_fields_per_role() {
        let student = RegistrationDetails::Student(StudentRegistration::default());
        let names: Vec<_> = student.required_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["name", "enrollment_number", "institution", "program"]);

        let employer = RegistrationDetails::Employer(EmployerRegistration {
            name: "Acme HR".into(),
            company_name: "Acme".into(),
            ..Default::default()
        });
        assert!(employer.required_fields().iter().all(|(_, v)| !v.is_empty()));
        assert_eq!(employer.role(), UserRole::Employer);
    }

    #[test]
    fn test_draft_builders() {
        let draft = SignUpDraft::new(
            "a@b.co",
            "Secret123",
            RegistrationDetails::College(CollegeRegistration::default()),
        )
        .with_confirmation("Secret123")
        .with_phone("9876543210");

        assert_eq!(draft.role(), UserRole::College);
        assert_eq!(draft.phone.as_deref(), Some("9876543210"));
        assert!(draft.confirm_password.is_some());
    }
}
