//! Account directory behind `POST /signup` and `POST /login`
//!
//! The HTTP layer only knows [`AccountHandler`]; [`InMemoryAccounts`] is the
//! bundled implementation (Argon2id password hashes, opaque session tokens).

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use develevate_types::{AuthResponse, LoginRequest, Progress, SignupRequest, UserRecord};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

pub const MIN_PASSWORD_LEN: usize = 6;
const STARTING_LEVEL: &str = "Beginner";

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("An account with this email already exists")]
    EmailTaken,

    /// Unknown email and wrong password are deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid or expired session token")]
    InvalidToken,
}

/// Registration and login, owned by the server
pub trait AccountHandler: Send + Sync {
    fn register(&self, request: SignupRequest) -> Result<AuthResponse, AccountError>;

    fn login(&self, request: LoginRequest) -> Result<AuthResponse, AccountError>;

    /// User for a token issued by `register`/`login`
    fn resolve_token(&self, token: &str) -> Result<UserRecord, AccountError>;

    fn account_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct StoredAccount {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    progress: Progress,
    created_at: DateTime<Utc>,
}

impl StoredAccount {
    fn to_user(&self) -> UserRecord {
        UserRecord {
            id: Some(self.id.to_string()),
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            avatar: None,
            progress: Some(self.progress.clone()),
        }
    }
}

/// Accounts and sessions kept in memory for the lifetime of the process
///
/// Each account holds at most one live token: signing in again revokes the
/// previous one, so the session map is bounded by the number of accounts.
#[derive(Default)]
pub struct InMemoryAccounts {
    /// Keyed by normalized email
    accounts: DashMap<String, StoredAccount>,
    /// Session token -> normalized email
    sessions: DashMap<String, String>,
    /// Normalized email -> its live token
    active_tokens: DashMap<String, String>,
    hasher: Argon2<'static>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let salt = SaltString::generate(&mut OsRng);
        self.hasher
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AccountError::Hashing(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                self.hasher
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// New token for `email`, revoking the one it replaces
    fn issue_token(&self, email: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        // Lock order: active_tokens entry, then sessions
        match self.active_tokens.entry(email.to_string()) {
            Entry::Occupied(mut slot) => {
                let previous = slot.insert(token.clone());
                self.sessions.remove(&previous);
                debug!(email = %email, "Previous session revoked");
                self.sessions.insert(token.clone(), email.to_string());
            }
            Entry::Vacant(slot) => {
                self.sessions.insert(token.clone(), email.to_string());
                slot.insert(token.clone());
            }
        }
        token
    }

    /// Number of live session tokens
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// When the account for `email` was created
    pub fn created_at(&self, email: &str) -> Option<DateTime<Utc>> {
        self.accounts
            .get(&normalize_email(email))
            .map(|account| account.created_at)
    }
}

impl AccountHandler for InMemoryAccounts {
    fn register(&self, request: SignupRequest) -> Result<AuthResponse, AccountError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AccountError::Validation {
                field: "name",
                reason: "must not be empty".into(),
            });
        }
        let email = normalize_email(&request.email);
        validate_email(&email)?;
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::Validation {
                field: "password",
                reason: format!("must be at least {} characters", MIN_PASSWORD_LEN),
            });
        }

        // Hash outside the map entry so the shard lock is held briefly
        let password_hash = self.hash_password(&request.password)?;

        let user = match self.accounts.entry(email.clone()) {
            Entry::Occupied(_) => return Err(AccountError::EmailTaken),
            Entry::Vacant(slot) => {
                let account = StoredAccount {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    email: email.clone(),
                    password_hash,
                    progress: Progress {
                        level: Some(STARTING_LEVEL.to_string()),
                        total_points: Some(0),
                    },
                    created_at: Utc::now(),
                };
                let user = account.to_user();
                slot.insert(account);
                user
            }
        };

        info!(email = %email, "Account registered");
        Ok(AuthResponse {
            user,
            token: self.issue_token(&email),
        })
    }

    fn login(&self, request: LoginRequest) -> Result<AuthResponse, AccountError> {
        let email = normalize_email(&request.email);
        let user = {
            let account = self
                .accounts
                .get(&email)
                .ok_or(AccountError::InvalidCredentials)?;
            if !self.verify_password(&request.password, &account.password_hash) {
                debug!(email = %email, "Rejected login: wrong password");
                return Err(AccountError::InvalidCredentials);
            }
            account.to_user()
        };

        info!(email = %email, "Login succeeded");
        Ok(AuthResponse {
            user,
            token: self.issue_token(&email),
        })
    }

    fn resolve_token(&self, token: &str) -> Result<UserRecord, AccountError> {
        let email = self
            .sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(AccountError::InvalidToken)?;
        self.accounts
            .get(&email)
            .map(|account| account.to_user())
            .ok_or(AccountError::InvalidToken)
    }

    fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AccountError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if valid {
        Ok(())
    } else {
        Err(AccountError::Validation {
            field: "email",
            reason: format!("'{}' is not an email address", email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_register_then_login() {
        let accounts = InMemoryAccounts::new();
        let registered = accounts
            .register(signup("Ada", "Ada@Example.com ", "hunter22"))
            .unwrap();
        assert_eq!(registered.user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(
            registered.user.progress.as_ref().unwrap().level.as_deref(),
            Some("Beginner")
        );
        assert!(accounts.created_at("ada@example.com").is_some());

        let logged_in = accounts.login(login("ada@example.com", "hunter22")).unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);
        assert_ne!(logged_in.token, registered.token);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let accounts = InMemoryAccounts::new();
        accounts
            .register(signup("Ada", "ada@example.com", "hunter22"))
            .unwrap();
        let err = accounts
            .register(signup("Other", "ADA@example.com", "different"))
            .unwrap_err();
        assert!(matches!(err, AccountError::EmailTaken));
        assert_eq!(accounts.account_count(), 1);
    }

    #[test]
    fn test_wrong_password_and_unknown_email_look_the_same() {
        let accounts = InMemoryAccounts::new();
        accounts
            .register(signup("Ada", "ada@example.com", "hunter22"))
            .unwrap();

        let wrong = accounts
            .login(login("ada@example.com", "nope-nope"))
            .unwrap_err();
        let unknown = accounts
            .login(login("bob@example.com", "hunter22"))
            .unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn test_validation() {
        let accounts = InMemoryAccounts::new();
        for (request, field) in [
            (signup("  ", "a@b.c", "secret1"), "name"),
            (signup("Ada", "not-an-email", "secret1"), "email"),
            (signup("Ada", "@b.c", "secret1"), "email"),
            (signup("Ada", "a@b.c", "short"), "password"),
        ] {
            match accounts.register(request) {
                Err(AccountError::Validation { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected validation error on {}, got {:?}", field, other),
            }
        }
        assert_eq!(accounts.account_count(), 0);
    }

    #[test]
    fn test_repeated_logins_keep_one_session() {
        let accounts = InMemoryAccounts::new();
        let first = accounts
            .register(signup("Ada", "ada@example.com", "hunter22"))
            .unwrap();

        let mut last = first.token.clone();
        for _ in 0..20 {
            last = accounts
                .login(login("ada@example.com", "hunter22"))
                .unwrap()
                .token;
        }

        assert_eq!(accounts.session_count(), 1);
        assert!(matches!(
            accounts.resolve_token(&first.token),
            Err(AccountError::InvalidToken)
        ));
        assert!(accounts.resolve_token(&last).is_ok());

        accounts
            .register(signup("Bob", "bob@example.com", "hunter22"))
            .unwrap();
        assert_eq!(accounts.session_count(), 2);
    }

    #[test]
    fn test_resolve_token() {
        let accounts = InMemoryAccounts::new();
        let response = accounts
            .register(signup("Ada", "ada@example.com", "hunter22"))
            .unwrap();

        let user = accounts.resolve_token(&response.token).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert!(matches!(
            accounts.resolve_token("bogus"),
            Err(AccountError::InvalidToken)
        ));
    }
}
