//! Sign Up Use Case
//!
//! Validates a registration draft locally, then submits it.
//! Never signs the user in: a separate login follows registration.

use std::sync::Arc;

use platform::password::PasswordPolicy;
use serde_json::{Map, Value};

use crate::domain::entity::credentials::SignUpDraft;
use crate::domain::repository::{IdentityResolver, SignUpOutcome};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

const GOVERNMENT_REFUSED: &str =
    "Government registrations are not allowed. Use the designated admin account.";

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: IdentityResolver,
{
    resolver: Arc<R>,
    policy: PasswordPolicy,
}

impl<R> SignUpUseCase<R>
where
    R: IdentityResolver + Sync,
{
    pub fn new(resolver: Arc<R>) -> Self {
        Self {
            resolver,
            policy: PasswordPolicy::default(),
        }
    }

    /// Use case enforcing `policy` instead of the backend's default rules
    pub fn with_policy(resolver: Arc<R>, policy: PasswordPolicy) -> Self {
        Self { resolver, policy }
    }

    pub async fn execute(&self, draft: &SignUpDraft) -> AuthResult<SignUpOutcome> {
        validate_draft(draft, &self.policy)?;

        let outcome = self.resolver.signup(draft).await.inspect_err(|e| e.log())?;

        tracing::info!(role = %draft.role(), "Registration submitted");
        Ok(outcome)
    }
}

/// Check a draft before it is sent
///
/// Every problem is collected into `details` keyed by field name; the
/// error message is the first problem in form order.
pub fn validate_draft(draft: &SignUpDraft, policy: &PasswordPolicy) -> AuthResult<()> {
    let mut problems: Vec<(&'static str, String)> = Vec::new();

    if !draft.role().is_self_registrable() {
        problems.push(("role", GOVERNMENT_REFUSED.to_string()));
    }

    if let Err(e) = Email::new(draft.email.as_str()) {
        problems.push(("email", e.message().to_string()));
    }

    if let Err(e) = policy.check(&draft.password) {
        problems.push(("password", e.to_string()));
    }

    if let Some(confirm) = &draft.confirm_password {
        if confirm.is_blank() {
            problems.push(("confirmPassword", "Please confirm your password".to_string()));
        } else if !draft.password.matches(confirm) {
            problems.push(("confirmPassword", "Passwords do not match".to_string()));
        }
    }

    if let Some(phone) = draft.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        if !is_valid_mobile(phone) {
            problems.push(("phone", "Invalid phone number format".to_string()));
        }
    }

    for (field, value) in draft.details.required_fields() {
        if value.trim().is_empty() {
            problems.push((field, format!("{} is required", field_label(field))));
        }
    }

    let Some((_, message)) = problems.first() else {
        return Ok(());
    };

    let message = message.clone();
    let details: Map<String, Value> = problems
        .into_iter()
        .map(|(field, problem)| (field.to_string(), Value::String(problem)))
        .collect();

    tracing::debug!(fields = details.len(), "Registration draft rejected");

    Err(AuthError::Validation {
        message,
        details: Some(Value::Object(details)),
    })
}

/// Indian mobile number: ten digits, the first one 6-9
fn is_valid_mobile(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 10
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(u8::is_ascii_digit)
}

/// `enrollment_number` -> `Enrollment Number`
fn field_label(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
