//! Auth service
//!
//! Signup, login and session handling. Passwords are stored as salted
//! SHA-256 digests in `salt$hex` form; session tokens are random 256-bit
//! values handed to the client in a cookie and resolved back to a user on
//! every request.

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{NewSession, NewUser, User};
use crate::domain::ports::{SessionStore, UserRepository};
use crate::error::{AppError, DomainError};
use crate::forms::{FormErrors, REQUIRED};

/// Attached to the username field when the name is already registered
pub const USERNAME_TAKEN: &str = "This username is already taken.";

/// Attached to the password field on a failed login
pub const INVALID_CREDENTIALS: &str = "Please enter a correct username and password.";

/// Service for accounts and sessions
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Register a new account
    pub async fn signup(&self, username: &str, password: &str) -> Result<User, AppError> {
        let mut errors = FormErrors::new();
        if username.trim().is_empty() {
            errors.add("username", REQUIRED);
        }
        if password.is_empty() {
            errors.add("password", REQUIRED);
        }
        if !errors.is_empty() {
            return Err(AppError::Form(errors));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Form(
                FormErrors::new().field("username", USERNAME_TAKEN),
            ));
        }

        let new_user = NewUser {
            username: username.to_string(),
            password_hash: hash_password(password),
        };

        let user = self.users.create(&new_user).await.map_err(|e| match e {
            // Unique-constraint race on the username column
            DomainError::AlreadyExists(_) => {
                AppError::Form(FormErrors::new().field("username", USERNAME_TAKEN))
            }
            other => AppError::Domain(other),
        })?;

        Ok(user)
    }

    /// Verify credentials and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self.users.find_by_username(username).await?;

        let user = match user {
            Some(user) if verify_password(password, &user.password_hash) => user,
            // Same error whether the user is unknown or the password is
            // wrong; no account probing
            _ => {
                return Err(AppError::Form(
                    FormErrors::new().field("password", INVALID_CREDENTIALS),
                ))
            }
        };

        let token = generate_session_token();
        self.sessions
            .insert(&NewSession {
                token: token.clone(),
                user_id: user.id,
            })
            .await?;

        Ok((user, token))
    }

    /// Drop a session; unknown tokens are ignored
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.sessions.delete(token).await?;
        Ok(())
    }

    /// Resolve the session token carried by a request to its user
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, AppError> {
        let user_id = match self.sessions.find_user_id(token).await? {
            Some(id) => id,
            None => return Ok(None),
        };

        Ok(self.users.find_by_id(&user_id).await?)
    }
}

/// Hash a password with a fresh random salt, `salt$hex` form
pub fn hash_password(password: &str) -> String {
    let mut rng = rand::thread_rng();
    let salt: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
    let salt = hex::encode(salt);
    format!("{}${}", salt, digest(&salt, password))
}

/// Check a password against a stored `salt$hex` hash
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a random session token
fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}
