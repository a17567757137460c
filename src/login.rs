//! Login Flow
//!
//! Form state and the submit sequence: validate, call the authenticator once,
//! then either pick a dashboard route or show an error banner.

use crate::auth::Authenticator;
use crate::config::RouteConfig;
use crate::error::GENERIC_LOGIN_FAILURE;
use crate::models::{Credentials, UserProfile};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Navigating(String),
}

/// What came back from one authentication attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Navigate { route: String, user: UserProfile },
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    phase: LoginPhase,
    /// Validation message; lives alongside `Idle`
    notice: Option<String>,
}

impl LoginState {
    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Banner text: validation notice or the last authentication error
    pub fn banner(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Error(msg) => Some(msg.as_str()),
            _ => self.notice(),
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Start a submission. Returns the credentials to send, or `None` when
    /// a request is already in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        if self.email.is_empty() || self.password.is_empty() {
            self.phase = LoginPhase::Idle;
            self.notice = Some(FILL_ALL_FIELDS.to_string());
            return None;
        }
        self.phase = LoginPhase::Submitting;
        self.notice = None;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Finish a submission. Returns the route to navigate to on success.
    pub fn complete(&mut self, outcome: LoginOutcome) -> Option<String> {
        match outcome {
            LoginOutcome::Navigate { route, .. } => {
                self.phase = LoginPhase::Navigating(route.clone());
                Some(route)
            }
            LoginOutcome::Failed(msg) => {
                self.phase = LoginPhase::Error(msg);
                None
            }
        }
    }
}

/// Send credentials to the authenticator and map the answer to an outcome
pub async fn submit_credentials<A>(auth: &A, credentials: Credentials, routes: &RouteConfig) -> LoginOutcome
where
    A: Authenticator + ?Sized,
{
    log::info!("submitting login");
    match auth.login(&credentials).await {
        Ok(result) if result.success => {
            let user = result.user.unwrap_or_default();
            let route = routes.dashboard_for(user.role).to_string();
            log::debug!("login ok, role {:?} -> {}", user.role, route);
            LoginOutcome::Navigate { route, user }
        }
        Ok(_) => {
            log::warn!("login returned success=false");
            LoginOutcome::Failed(GENERIC_LOGIN_FAILURE.to_string())
        }
        Err(e) => {
            log::warn!("login rejected: {}", e);
            LoginOutcome::Failed(e.user_message())
        }
    }
}

/// The submit sequence after validation: authenticate, record the signed-in
/// user, settle the form via `complete`, then navigate if it hands back a route.
pub async fn authenticate_and_route<A, C, S, N>(
    auth: &A,
    credentials: Credentials,
    routes: &RouteConfig,
    complete: C,
    sign_in: S,
    navigate: N,
) where
    A: Authenticator + ?Sized,
    C: FnOnce(LoginOutcome) -> Option<String>,
    S: FnOnce(UserProfile),
    N: FnOnce(&str),
{
    let outcome = submit_credentials(auth, credentials, routes).await;
    if let LoginOutcome::Navigate { user, .. } = &outcome {
        sign_in(user.clone());
    }
    if let Some(route) = complete(outcome) {
        navigate(&route);
    }
}
