//! Session-cookie authentication
//!
//! `session_middleware` runs on every request: it resolves the `session`
//! cookie to a user and stores the result in request extensions as
//! [`CurrentUser`]. `require_login` guards the protected route group: an
//! anonymous request is answered with a redirect to the login page whose
//! `next` parameter carries the originally requested path, verbatim.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::User;
use crate::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// The identity attached to every request; `None` for anonymous
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

/// Extract the session token from the Cookie header
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(|token| token.to_string())
            })
        })
}

/// `Set-Cookie` value opening a session
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

/// `Set-Cookie` value closing the session
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

/// Redirect an anonymous request to the login page, remembering where it
/// was headed
pub fn login_redirect(uri: &Uri) -> Redirect {
    let next = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    Redirect::to(&format!("/auth/login?next={}", next))
}

/// Session middleware
///
/// Resolves the request's session cookie and injects [`CurrentUser`] into
/// request extensions. Runs on every route; it never rejects.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let user = match extract_session_token(request.headers()) {
        Some(token) => match state.auth_service.current_user(&token).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to resolve session");
                None
            }
        },
        None => None,
    };

    request.extensions_mut().insert(CurrentUser(user));

    next.run(request).await
}

/// Login gate for the protected route group
///
/// Requires a resolved user; injects the `User` into extensions for the
/// handlers behind it, and redirects anonymous requests to the login page.
pub async fn require_login(mut request: Request<Body>, next: Next) -> Response {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .and_then(|current| current.0.clone());

    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => login_redirect(request.uri()).into_response(),
    }
}
