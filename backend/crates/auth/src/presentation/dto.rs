//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes of the identity backend, and their conversion to and from
//! domain types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    credentials::{Credentials, RegistrationDetails, SignUpDraft},
    session_state::SessionSnapshot,
    user_profile::{
        CollegeDetails, EmployerDetails, GovernmentDetails, RoleDetails, StudentDetails,
        UserProfile,
    },
};
use crate::domain::value_object::{
    UserId, account_flags::AccountFlags, email::Email, session_token::SessionToken,
    user_role::UserRole,
};
use crate::error::AuthError;

// ============================================================================
// User Profile
// ============================================================================

/// Flat user object as sent by the backend
///
/// Role-specific attributes sit next to the common ones; which of them are
/// meaningful depends on `role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    // Student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    // College
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,

    // Government
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    // Employer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hr_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
}

/// The backend sends `""` for unset text columns
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// RFC 3339, or a naive ISO-8601 timestamp taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl TryFrom<UserProfileDto> for UserProfile {
    type Error = AuthError;

    fn try_from(dto: UserProfileDto) -> Result<Self, Self::Error> {
        let role = UserRole::from_code(&dto.role).ok_or_else(|| {
            AuthError::UnexpectedResponse(format!("unknown role `{}`", dto.role))
        })?;
        let email = Email::new(dto.email)
            .map_err(|e| AuthError::UnexpectedResponse(format!("invalid email: {}", e.message())))?;

        let flags = AccountFlags {
            approved: dto.is_approved.unwrap_or(false),
            verified: dto.is_verified.or(dto.email_verified).unwrap_or(false),
            active: dto.is_active.unwrap_or(true),
        };

        let details = match role {
            UserRole::Student => RoleDetails::Student(StudentDetails {
                roll_number: non_blank(dto.roll_number),
                college_name: non_blank(dto.college_name),
                course: non_blank(dto.course),
                year_of_study: non_blank(dto.year_of_study),
                date_of_birth: non_blank(dto.date_of_birth),
            }),
            UserRole::College => RoleDetails::College(CollegeDetails {
                college_name: non_blank(dto.college_name),
                college_code: non_blank(dto.college_code),
                address: non_blank(dto.address),
                university: non_blank(dto.university),
                admin_name: non_blank(dto.admin_name),
            }),
            UserRole::Government => RoleDetails::Government(GovernmentDetails {
                department_name: non_blank(dto.department_name),
                designation: non_blank(dto.designation),
                employee_id: non_blank(dto.employee_id),
            }),
            UserRole::Employer => RoleDetails::Employer(EmployerDetails {
                company_name: non_blank(dto.company_name),
                company_registration: non_blank(dto.company_registration),
                industry: non_blank(dto.industry),
                hr_contact: non_blank(dto.hr_contact),
                company_description: non_blank(dto.company_description),
                company_website: non_blank(dto.company_website),
            }),
        };

        Ok(UserProfile {
            id: dto.id,
            email,
            full_name: non_blank(dto.full_name)
                .or(non_blank(dto.name))
                .unwrap_or_default(),
            phone: non_blank(dto.phone),
            flags,
            created_at: dto.created_at.as_deref().and_then(parse_timestamp),
            details,
        })
    }
}

impl From<&UserProfile> for UserProfileDto {
    fn from(profile: &UserProfile) -> Self {
        let mut dto = UserProfileDto {
            id: profile.id,
            email: profile.email.to_string(),
            full_name: Some(profile.full_name.clone()),
            name: None,
            phone: profile.phone.clone(),
            role: profile.role().code().to_string(),
            is_approved: Some(profile.flags.approved),
            is_verified: Some(profile.flags.verified),
            email_verified: None,
            is_active: Some(profile.flags.active),
            created_at: profile.created_at.map(|ts| ts.to_rfc3339()),
            roll_number: None,
            college_name: None,
            course: None,
            year_of_study: None,
            date_of_birth: None,
            college_code: None,
            address: None,
            university: None,
            admin_name: None,
            department_name: None,
            designation: None,
            employee_id: None,
            company_name: None,
            company_registration: None,
            industry: None,
            hr_contact: None,
            company_description: None,
            company_website: None,
        };

        match &profile.details {
            RoleDetails::Student(s) => {
                dto.roll_number = s.roll_number.clone();
                dto.college_name = s.college_name.clone();
                dto.course = s.course.clone();
                dto.year_of_study = s.year_of_study.clone();
                dto.date_of_birth = s.date_of_birth.clone();
            }
            RoleDetails::College(c) => {
                dto.college_name = c.college_name.clone();
                dto.college_code = c.college_code.clone();
                dto.address = c.address.clone();
                dto.university = c.university.clone();
                dto.admin_name = c.admin_name.clone();
            }
            RoleDetails::Government(g) => {
                dto.department_name = g.department_name.clone();
                dto.designation = g.designation.clone();
                dto.employee_id = g.employee_id.clone();
            }
            RoleDetails::Employer(e) => {
                dto.company_name = e.company_name.clone();
                dto.company_registration = e.company_registration.clone();
                dto.industry = e.industry.clone();
                dto.hr_contact = e.hr_contact.clone();
                dto.company_description = e.company_description.clone();
                dto.company_website = e.company_website.clone();
            }
        }
        dto
    }
}

/// `GET /api/auth/profile` answers either `{ "user": {...} }` or the bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Wrapped { user: UserProfileDto },
    Bare(UserProfileDto),
}

impl ProfileResponse {
    pub fn into_dto(self) -> UserProfileDto {
        match self {
            ProfileResponse::Wrapped { user } | ProfileResponse::Bare(user) => user,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose(),
        }
    }
}

/// Login response
///
/// The refresh token the backend also returns is not kept.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: SessionToken,
    pub user: UserProfileDto,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request: common fields plus the role's fields, flattened
#[derive(Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<&'a str>,
}

fn field(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

fn optional_field(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(field)
}

impl<'a> From<&'a SignUpDraft> for SignUpRequest<'a> {
    fn from(draft: &'a SignUpDraft) -> Self {
        let mut request = SignUpRequest {
            email: &draft.email,
            password: draft.password.expose(),
            role: draft.role().code(),
            name: None,
            phone: optional_field(&draft.phone),
            enrollment_number: None,
            institution: None,
            program: None,
            semester: None,
            academic_year: None,
            college_name: None,
            registration_number: None,
            contact_person: None,
            designation: None,
            address: None,
            affiliation: None,
            department: None,
            employee_id: None,
            office_address: None,
            company_name: None,
            industry: None,
            company_website: None,
        };

        match &draft.details {
            RegistrationDetails::Student(s) => {
                request.name = field(&s.name);
                request.enrollment_number = field(&s.enrollment_number);
                request.institution = field(&s.institution);
                request.program = field(&s.program);
                request.semester = optional_field(&s.semester);
                request.academic_year = optional_field(&s.academic_year);
            }
            RegistrationDetails::College(c) => {
                request.college_name = field(&c.college_name);
                request.registration_number = field(&c.registration_number);
                request.contact_person = field(&c.contact_person);
                request.designation = field(&c.designation);
                request.address = optional_field(&c.address);
                request.affiliation = optional_field(&c.affiliation);
            }
            RegistrationDetails::Government(g) => {
                request.name = field(&g.name);
                request.department = field(&g.department);
                request.designation = field(&g.designation);
                request.employee_id = field(&g.employee_id);
                request.office_address = optional_field(&g.office_address);
            }
            RegistrationDetails::Employer(e) => {
                request.name = field(&e.name);
                request.company_name = field(&e.company_name);
                request.industry = optional_field(&e.industry);
                request.company_website = optional_field(&e.company_website);
            }
        }
        request
    }
}

/// Sign up response
#[derive(Debug, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user: Option<UserProfileDto>,
}

// ============================================================================
// Health
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Session
// ============================================================================

/// Session snapshot as exposed to views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotResponse {
    pub profile: Option<UserProfileDto>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl From<&SessionSnapshot> for SessionSnapshotResponse {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            profile: snapshot.profile.as_ref().map(UserProfileDto::from),
            is_loading: snapshot.is_loading,
            is_authenticated: snapshot.is_authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::credentials::{CollegeRegistration, StudentRegistration};
    use serde_json::json;

    const ID: &str = "6f1c1f4e-8c43-4a8e-9b55-0c3f7f8a2d10";

    fn decode(value: serde_json::Value) -> Result<UserProfile, AuthError> {
        let dto: UserProfileDto = serde_json::from_value(value).unwrap();
        UserProfile::try_from(dto)
    }

    #[test]
    fn test_decode_login_user() {
        let profile = decode(json!({
            "id": ID,
            "email": "Asha@College.ac.in",
            "full_name": "Asha Rao",
            "phone": "9876543210",
            "role": "student",
            "is_verified": true,
            "is_approved": true,
            "created_at": "2024-09-01T10:15:30.123456",
            "roll_number": "EN2024001",
            "college_name": "Govt. Engineering College",
            "course": "B.Tech",
            "year_of_study": ""
        }))
        .unwrap();

        assert_eq!(profile.id.to_string(), ID);
        assert_eq!(profile.email.as_str(), "asha@college.ac.in");
        assert_eq!(profile.full_name, "Asha Rao");
        assert_eq!(profile.role(), UserRole::Student);
        assert!(profile.flags.approved && profile.flags.verified && profile.flags.active);
        assert!(profile.created_at.is_some());

        let student = profile.student().unwrap();
        assert_eq!(student.roll_number.as_deref(), Some("EN2024001"));
        assert_eq!(student.year_of_study, None);
    }

    #[test]
    fn test_decode_flag_defaults() {
        let profile = decode(json!({
            "id": ID,
            "email": "admissions@college.ac.in",
            "role": "college"
        }))
        .unwrap();
        assert_eq!(profile.flags, AccountFlags::default());
        assert_eq!(profile.full_name, "");
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn test_decode_email_verified_alias() {
        let profile = decode(json!({
            "id": ID,
            "email": "hr@acme.example",
            "role": "employer",
            "email_verified": true,
            "is_active": false
        }))
        .unwrap();
        assert!(profile.flags.verified);
        assert!(!profile.flags.active);
    }

    #[test]
    fn test_decode_unknown_role() {
        let result = decode(json!({ "id": ID, "email": "x@example.com", "role": "auditor" }));
        assert!(matches!(result, Err(AuthError::UnexpectedResponse(_))));
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2024-09-01T10:15:30Z").is_some());
        assert!(parse_timestamp("2024-09-01T10:15:30+05:30").is_some());
        assert!(parse_timestamp("2024-09-01T10:15:30").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_profile_response_shapes() {
        let wrapped: ProfileResponse = serde_json::from_value(json!({
            "user": { "id": ID, "email": "x@example.com", "role": "student" }
        }))
        .unwrap();
        assert_eq!(wrapped.into_dto().role, "student");

        let bare: ProfileResponse = serde_json::from_value(json!({
            "id": ID, "email": "x@example.com", "role": "employer"
        }))
        .unwrap();
        assert_eq!(bare.into_dto().role, "employer");
    }

    #[test]
    fn test_profile_dto_round_trip_keeps_role_payload() {
        let original = decode(json!({
            "id": ID,
            "email": "officer@gov.in",
            "full_name": "Officer",
            "role": "government",
            "is_approved": true,
            "department_name": "Higher Education",
            "employee_id": "G-42"
        }))
        .unwrap();

        let dto = UserProfileDto::from(&original);
        assert_eq!(dto.college_name, None);
        let back = UserProfile::try_from(dto).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_sign_up_request_flattens_role_fields() {
        let draft = SignUpDraft::new(
            "asha@college.ac.in",
            "Student123",
            RegistrationDetails::Student(StudentRegistration {
                name: "Asha Rao".into(),
                enrollment_number: "EN2024001".into(),
                institution: "Govt. Engineering College".into(),
                program: "B.Tech".into(),
                semester: Some("  ".into()),
                academic_year: None,
            }),
        )
        .with_confirmation("Student123");

        let body = serde_json::to_value(SignUpRequest::from(&draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "asha@college.ac.in",
                "password": "Student123",
                "role": "student",
                "name": "Asha Rao",
                "enrollment_number": "EN2024001",
                "institution": "Govt. Engineering College",
                "program": "B.Tech"
            })
        );
    }

    #[test]
    fn test_sign_up_request_college() {
        let draft = SignUpDraft::new(
            "admissions@college.ac.in",
            "College123",
            RegistrationDetails::College(CollegeRegistration {
                college_name: "GEC".into(),
                registration_number: "AICTE-1".into(),
                contact_person: "Registrar".into(),
                designation: "Registrar".into(),
                address: None,
                affiliation: Some("State University".into()),
            }),
        )
        .with_phone("9876543210");

        let body = serde_json::to_value(SignUpRequest::from(&draft)).unwrap();
        assert_eq!(body["role"], "college");
        assert_eq!(body["phone"], "9876543210");
        assert_eq!(body["affiliation"], "State University");
        assert!(body.get("name").is_none());
        assert!(body.get("address").is_none());
    }

    #[test]
    fn test_snapshot_response_is_camel_case() {
        let snapshot = SessionSnapshot {
            profile: None,
            is_loading: false,
            is_authenticated: false,
        };
        let body = serde_json::to_value(SessionSnapshotResponse::from(&snapshot)).unwrap();
        assert_eq!(
            body,
            json!({ "profile": null, "isLoading": false, "isAuthenticated": false })
        );
    }
}
