//! HTTP Identity Resolver
//!
//! [`IdentityResolver`] backed by the credential platform's REST API.
//!
//! | Operation            | Request                      | Bearer |
//! |----------------------|------------------------------|--------|
//! | `login`              | `POST /api/auth/login`       | no     |
//! | `signup`             | `POST /api/auth/signup`      | no     |
//! | `fetch_current_user` | `GET /api/auth/profile`      | yes    |
//! | `health_check`       | `GET /health`                | no     |

use std::sync::Arc;

use http::StatusCode;
use platform::http::{ApiClient, ApiResponse};

use crate::application::config::AuthConfig;
use crate::domain::entity::{
    credentials::{Credentials, SignUpDraft},
    user_profile::UserProfile,
};
use crate::domain::repository::{IdentityResolver, LoginOutcome, SessionStore, SignUpOutcome};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    HealthResponse, LoginRequest, LoginResponse, ProfileResponse, SignUpRequest, SignUpResponse,
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const PROFILE_PATH: &str = "/api/auth/profile";
pub const HEALTH_PATH: &str = "/health";

const SIGNUP_FALLBACK_MESSAGE: &str = "Account created successfully! Please log in to continue.";

/// REST identity resolver
///
/// Reads the bearer token from the session store. The only store write
/// it performs is clearing a token the backend answered 401 for.
pub struct HttpIdentityResolver<S> {
    client: ApiClient,
    store: Arc<S>,
}

impl<S> HttpIdentityResolver<S>
where
    S: SessionStore,
{
    pub fn new(config: &AuthConfig, store: Arc<S>) -> AuthResult<Self> {
        let client = ApiClient::new(&config.api_client_config())?;
        Ok(Self::with_client(client, store))
    }

    pub fn with_client(client: ApiClient, store: Arc<S>) -> Self {
        Self { client, store }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `GET /health`
    pub async fn health_check(&self) -> AuthResult<HealthResponse> {
        let response = self.client.get(HEALTH_PATH, None).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }
        Ok(response.json().unwrap_or_default())
    }

    /// Clear the stored token only if it is still the one that was rejected
    fn forget_rejected(&self, rejected: &SessionToken) {
        match self.store.read() {
            Some(current) if &current == rejected => {
                self.store.clear();
                tracing::info!(token = %rejected.fingerprint(), "Rejected session token cleared");
            }
            _ => {
                tracing::debug!("Rejected token already replaced, store left alone");
            }
        }
    }
}

fn server_error(response: &ApiResponse) -> AuthError {
    let failure = response.failure();
    AuthError::Server {
        status: failure.status,
        message: failure.message,
    }
}

impl<S> IdentityResolver for HttpIdentityResolver<S>
where
    S: SessionStore,
{
    async fn fetch_current_user(&self) -> AuthResult<UserProfile> {
        let Some(token) = self.store.read() else {
            return Err(AuthError::Unauthorized);
        };

        let response = self.client.get(PROFILE_PATH, Some(token.expose())).await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => {
                self.forget_rejected(&token);
                return Err(AuthError::Unauthorized);
            }
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
                return Err(AuthError::Unauthorized);
            }
            _ => return Err(server_error(&response)),
        }

        let dto = response.json::<ProfileResponse>()?.into_dto();
        UserProfile::try_from(dto)
    }

    async fn login(&self, credentials: &Credentials) -> AuthResult<LoginOutcome> {
        let response = self
            .client
            .post(LOGIN_PATH, &LoginRequest::from(credentials), None)
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AuthError::invalid_credentials(response.failure().message));
            }
            _ => return Err(server_error(&response)),
        }

        let body: LoginResponse = response.json()?;
        let user = UserProfile::try_from(body.user)?;

        Ok(LoginOutcome {
            user,
            token: body.token,
        })
    }

    async fn signup(&self, draft: &SignUpDraft) -> AuthResult<SignUpOutcome> {
        let response = self
            .client
            .post(SIGNUP_PATH, &SignUpRequest::from(draft), None)
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                let failure = response.failure();
                return Err(AuthError::Validation {
                    message: failure.message,
                    details: failure.details,
                });
            }
            _ => return Err(server_error(&response)),
        }

        let body: SignUpResponse = response.json()?;
        if let Some(user) = body.user {
            return Ok(SignUpOutcome::Registered(UserProfile::try_from(user)?));
        }

        Ok(SignUpOutcome::Confirmation {
            message: body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SIGNUP_FALLBACK_MESSAGE.to_string()),
            user_id: body.user_id,
        })
    }
}
