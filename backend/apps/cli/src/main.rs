//! credctl Entry Point
//!
//! Command-line client for the credential platform session.
//! Uses `anyhow` for top-level errors; session operations report
//! `auth::AuthError` and are turned into user messages here.

mod commands;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use auth::{AuthConfig, AuthSessionManager, HttpIdentityResolver, RouteTable, StorageSessionStore};
use clap::{Parser, Subcommand};
use platform::storage::FileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::SignupCommand;

const DEFAULT_SESSION_FILE: &str = ".credctl/session.json";

#[derive(Parser)]
#[command(name = "credctl")]
#[command(about = "Session client for the credential verification platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (overrides CREDENTIAL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// File holding the session token (overrides CREDENTIAL_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Restore the stored session and print it
    Status,

    /// Log in with email and password
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Register a new account
    Signup {
        #[command(subcommand)]
        account: SignupCommand,
    },

    /// Show what navigating to a path displays
    Navigate {
        /// Path such as /college-dashboard
        path: String,

        /// Follow redirects to the page finally shown
        #[arg(short, long)]
        follow: bool,
    },

    /// Check that the API is reachable
    Health,
}

/// Settings from the environment, with command-line overrides
fn load_config(api_url: Option<String>) -> AuthConfig {
    let mut config = AuthConfig::default();

    if let Some(url) = api_url.or_else(|| env::var("CREDENTIAL_API_URL").ok()) {
        config.api_base_url = url;
    }

    // Present but empty disables the override
    if let Ok(admin) = env::var("CREDENTIAL_ADMIN_EMAIL") {
        config.admin_override_email = Some(admin).filter(|a| !a.trim().is_empty());
    }

    config.require_email_verification = env::var("REQUIRE_EMAIL_VERIFICATION")
        .is_ok_and(|v| v.trim().eq_ignore_ascii_case("true"));

    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credctl=info,auth=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Arc::new(load_config(cli.api_url));

    let session_file = cli
        .session_file
        .or_else(|| env::var_os("CREDENTIAL_SESSION_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

    tracing::debug!(
        api = %config.api_base_url,
        session_file = %session_file.display(),
        "Starting credctl"
    );

    let store = Arc::new(StorageSessionStore::new(
        FileStorage::new(session_file),
        config.token_storage_key.clone(),
    ));
    let resolver = Arc::new(HttpIdentityResolver::new(&config, store.clone())?);
    let manager = AuthSessionManager::new(store, resolver.clone(), config.clone());

    match cli.command {
        Commands::Status => commands::status(&manager).await,
        Commands::Login { email, password } => commands::login(&manager, email, password).await,
        Commands::Logout => {
            commands::logout(&manager);
            Ok(())
        }
        Commands::Signup { account } => commands::signup(&manager, account).await,
        Commands::Navigate { path, follow } => {
            let table = RouteTable::standard(config.guard_config());
            commands::navigate(&manager, &table, &path, follow).await
        }
        Commands::Health => commands::health(&resolver).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_navigate() {
        let cli = Cli::parse_from(["credctl", "navigate", "/college-dashboard", "--follow"]);
        assert!(matches!(
            cli.command,
            Commands::Navigate { ref path, follow: true } if path == "/college-dashboard"
        ));
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::parse_from([
            "credctl",
            "status",
            "--api-url",
            "http://localhost:5001",
            "--session-file",
            "/tmp/session.json",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:5001"));
        assert_eq!(cli.session_file, Some(PathBuf::from("/tmp/session.json")));
    }
}
