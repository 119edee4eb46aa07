//! Session authentication middleware

pub mod session;

pub use session::{
    clear_session_cookie, extract_session_token, login_redirect, require_login, session_cookie,
    session_middleware, CurrentUser,
};
