//! Login session data

use super::user::UserId;

/// A new login session to persist; the token is generated by the auth
/// service and handed to the client as a cookie
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token: String,
    pub user_id: UserId,
}
