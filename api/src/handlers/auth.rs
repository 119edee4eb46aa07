//! Auth handlers
//!
//! Login, logout and signup. These pages are public; the login POST honors
//! the `next` query parameter set by the login gate so a freshly
//! authenticated user lands where they were headed.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::{clear_session_cookie, extract_session_token, session_cookie};
use crate::error::AppError;
use crate::forms::{FormErrors, LoginForm, SignupForm};
use crate::AppState;

/// Body of the login and signup pages: an unbound form
#[derive(Debug, Serialize)]
pub struct AuthPage {
    pub form: FormErrors,
}

/// Body of the logout confirmation
#[derive(Debug, Serialize)]
pub struct LogoutPage {
    pub detail: &'static str,
}

/// `next` query parameter carried through the login flow
#[derive(Debug, Deserialize)]
pub struct NextQuery {
    #[serde(default)]
    pub next: Option<String>,
}

impl NextQuery {
    /// Where to land after login; only local paths are honored
    fn target(&self) -> &str {
        self.next
            .as_deref()
            .filter(|n| n.starts_with('/'))
            .unwrap_or("/")
    }
}

/// GET /auth/login
pub async fn login_page() -> Json<AuthPage> {
    Json(AuthPage {
        form: FormErrors::new(),
    })
}

/// POST /auth/login
///
/// Verify credentials, open a session, and bounce to `next`.
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    Json(form): Json<LoginForm>,
) -> Result<Response, AppError> {
    let (_, token) = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Redirect::to(query.target()),
    )
        .into_response())
}

/// GET|POST /auth/logout
///
/// Close the session, if there is one; always succeeds.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = extract_session_token(&headers) {
        if let Err(e) = state.auth_service.logout(&token).await {
            tracing::warn!(error = %e, "Failed to drop session");
        }
    }

    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(LogoutPage {
            detail: "Logged out.",
        }),
    )
        .into_response()
}

/// GET /auth/signup
pub async fn signup_page() -> Json<AuthPage> {
    Json(AuthPage {
        form: FormErrors::new(),
    })
}

/// POST /auth/signup
///
/// Register an account and send the new user to the login page.
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> Result<Redirect, AppError> {
    state
        .auth_service
        .signup(&form.username, &form.password)
        .await?;

    Ok(Redirect::to("/auth/login"))
}
