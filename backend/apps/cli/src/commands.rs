//! Subcommand implementations

use auth::models::SessionSnapshotResponse;
use auth::models::credentials::{
    CollegeRegistration, EmployerRegistration, GovernmentRegistration, StudentRegistration,
};
use auth::{
    AuthError, AuthSessionManager, Credentials, HttpIdentityResolver, Navigation,
    RegistrationDetails, RouteTable, SignUpDraft, SignUpOutcome, StorageSessionStore,
};
use clap::{Args, Subcommand};
use platform::storage::FileStorage;

pub type Store = StorageSessionStore<FileStorage>;
pub type Resolver = HttpIdentityResolver<Store>;
pub type Manager = AuthSessionManager<Store, Resolver>;

/// Session errors are already logged; show the user-facing text only
fn report(error: AuthError) -> anyhow::Error {
    anyhow::anyhow!(error.user_message())
}

pub async fn status(manager: &Manager) -> anyhow::Result<()> {
    manager.initialize().await;

    let snapshot = manager.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&SessionSnapshotResponse::from(&snapshot))?
    );
    println!("dashboard: {}", manager.dashboard_route());
    Ok(())
}

pub async fn login(manager: &Manager, email: String, password: String) -> anyhow::Result<()> {
    let user = manager
        .login(&Credentials::new(email, password))
        .await
        .map_err(report)?;

    println!("Signed in as {} ({})", user.email, user.role());
    println!("dashboard: {}", manager.dashboard_route());
    Ok(())
}

pub fn logout(manager: &Manager) {
    manager.logout();
    println!("Signed out");
}

pub async fn navigate(
    manager: &Manager,
    table: &RouteTable,
    path: &str,
    follow: bool,
) -> anyhow::Result<()> {
    manager.initialize().await;
    let state = manager.state();

    let outcome = if follow {
        table.resolve(path, &state)
    } else {
        table.navigate(path, &state)
    };

    match outcome {
        Navigation::Render(route) => println!("render {route}"),
        Navigation::Redirect(route) => println!("redirect {route}"),
        Navigation::Loading => println!("loading"),
        Navigation::Interstitial(page) => {
            println!("{}", page.title());
            println!("{}", page.message());
            println!("{}", page.detail());
            for action in page.actions() {
                match action.target() {
                    Some(target) => println!("  [{action}] -> {target}"),
                    None => println!("  [{action}]"),
                }
            }
        }
    }
    Ok(())
}

pub async fn health(resolver: &Resolver) -> anyhow::Result<()> {
    let health = resolver.health_check().await.map_err(report)?;

    println!(
        "{}: {}",
        resolver.base_url(),
        health.status.as_deref().unwrap_or("ok")
    );
    if let Some(message) = health.message {
        println!("{message}");
    }
    Ok(())
}

pub async fn signup(manager: &Manager, command: SignupCommand) -> anyhow::Result<()> {
    let draft = command.into_draft();

    match manager.signup(&draft).await {
        Ok(outcome) => {
            println!("{}", outcome.message());
            if let SignUpOutcome::Confirmation {
                user_id: Some(id), ..
            } = &outcome
            {
                println!("user id: {id}");
            }
            Ok(())
        }
        Err(AuthError::Validation { message, details }) => {
            if let Some(fields) = details.as_ref().and_then(|d| d.as_object()) {
                for (field, problem) in fields {
                    eprintln!("  {field}: {}", problem.as_str().unwrap_or_default());
                }
            }
            anyhow::bail!(message)
        }
        Err(e) => Err(report(e)),
    }
}

/// Fields every registration carries
#[derive(Args)]
pub struct AccountArgs {
    #[arg(short, long)]
    pub email: String,

    #[arg(short, long)]
    pub password: String,

    /// Repeat the password to have it checked before sending
    #[arg(long)]
    pub confirm_password: Option<String>,

    /// Ten-digit mobile number
    #[arg(long)]
    pub phone: Option<String>,
}

// Role fields default to empty so missing ones are reported by validation.
#[derive(Subcommand)]
pub enum SignupCommand {
    /// Student account
    Student {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        enrollment_number: String,
        #[arg(long, default_value = "")]
        institution: String,
        #[arg(long, default_value = "")]
        program: String,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        academic_year: Option<String>,
    },

    /// College account (requires approval)
    College {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long, default_value = "")]
        college_name: String,
        #[arg(long, default_value = "")]
        registration_number: String,
        #[arg(long, default_value = "")]
        contact_person: String,
        #[arg(long, default_value = "")]
        designation: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        affiliation: Option<String>,
    },

    /// Government account (provisioned by the administrator)
    Government {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        designation: String,
        #[arg(long, default_value = "")]
        employee_id: String,
        #[arg(long)]
        office_address: Option<String>,
    },

    /// Employer account
    Employer {
        #[command(flatten)]
        account: AccountArgs,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        company_name: String,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        company_website: Option<String>,
    },
}

impl SignupCommand {
    pub fn into_draft(self) -> SignUpDraft {
        let (account, details) = match self {
            SignupCommand::Student {
                account,
                name,
                enrollment_number,
                institution,
                program,
                semester,
                academic_year,
            } => (
                account,
                RegistrationDetails::Student(StudentRegistration {
                    name,
                    enrollment_number,
                    institution,
                    program,
                    semester,
                    academic_year,
                }),
            ),
            SignupCommand::College {
                account,
                college_name,
                registration_number,
                contact_person,
                designation,
                address,
                affiliation,
            } => (
                account,
                RegistrationDetails::College(CollegeRegistration {
                    college_name,
                    registration_number,
                    contact_person,
                    designation,
                    address,
                    affiliation,
                }),
            ),
            SignupCommand::Government {
                account,
                name,
                department,
                designation,
                employee_id,
                office_address,
            } => (
                account,
                RegistrationDetails::Government(GovernmentRegistration {
                    name,
                    department,
                    designation,
                    employee_id,
                    office_address,
                }),
            ),
            SignupCommand::Employer {
                account,
                name,
                company_name,
                industry,
                company_website,
            } => (
                account,
                RegistrationDetails::Employer(EmployerRegistration {
                    name,
                    company_name,
                    industry,
                    company_website,
                }),
            ),
        };

        let mut draft = SignUpDraft::new(account.email, account.password, details);
        if let Some(confirm) = account.confirm_password {
            draft = draft.with_confirmation(confirm);
        }
        if let Some(phone) = account.phone {
            draft = draft.with_phone(phone);
        }
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::UserRole;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: SignupCommand,
    }

    #[test]
    fn test_student_draft() {
        let harness = Harness::parse_from([
            "signup",
            "student",
            "--email",
            "asha@college.ac.in",
            "--password",
            "Student123",
            "--confirm-password",
            "Student123",
            "--name",
            "Asha Rao",
            "--enrollment-number",
            "EN2024001",
            "--institution",
            "GEC",
            "--program",
            "B.Tech",
        ]);

        let draft = harness.command.into_draft();
        assert_eq!(draft.role(), UserRole::Student);
        assert_eq!(draft.email, "asha@college.ac.in");
        assert!(draft.confirm_password.is_some());
        assert!(draft.phone.is_none());
        assert!(draft
            .details
            .required_fields()
            .iter()
            .all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn test_missing_role_fields_become_empty() {
        let harness = Harness::parse_from([
            "signup",
            "employer",
            "-e",
            "hr@acme.example",
            "-p",
            "Employer123",
            "--phone",
            "9876543210",
        ]);

        let draft = harness.command.into_draft();
        assert_eq!(draft.role(), UserRole::Employer);
        assert_eq!(draft.phone.as_deref(), Some("9876543210"));
        let missing: Vec<_> = draft
            .details
            .required_fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        assert_eq!(missing, vec!["name", "company_name"]);
    }
}
