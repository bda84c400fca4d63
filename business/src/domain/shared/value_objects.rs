use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Represents a stable user identifier issued by the identity provider.
/// Used to isolate data between users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, thiserror::Error)]
#[error("identity.invalid_email")]
pub struct InvalidEmail;

/// A validated email address. Shares are keyed by email at invite time,
/// so the address doubles as a principal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(address: impl Into<String>) -> Result<Self, InvalidEmail> {
        let address = address.into();
        if EMAIL_PATTERN.is_match(&address) {
            Ok(Self(address))
        } else {
            Err(InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The per-request caller identity resolved by the identity provider.
///
/// `principals` is the set of strings that may appear in a list share
/// granting this identity access: the stable user id, plus the email the
/// share was recorded under when the invite predates signup. Every share
/// lookup and analytics scope filter goes through this one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
}

impl Identity {
    pub fn new(user_id: UserId, email: Email) -> Self {
        Self { user_id, email }
    }

    /// Principal strings a share may be keyed by for this identity.
    pub fn principals(&self) -> Vec<String> {
        vec![
            self.user_id.as_str().to_string(),
            self.email.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("provider-uid-123");
        assert_eq!(user_id.as_str(), "provider-uid-123");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::new("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::new("different-user"));
    }

    #[test]
    fn should_accept_valid_email() {
        let email = Email::new("ana@example.com").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
    }

    #[test]
    fn should_reject_email_without_at_sign() {
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn should_reject_email_with_whitespace() {
        assert!(Email::new("ana @example.com").is_err());
    }

    #[test]
    fn should_reject_email_without_domain_dot() {
        assert!(Email::new("ana@localhost").is_err());
    }

    #[test]
    fn should_expose_both_principals_in_order() {
        let identity = Identity::new(
            UserId::new("uid-1"),
            Email::new("ana@example.com").unwrap(),
        );

        assert_eq!(
            identity.principals(),
            vec!["uid-1".to_string(), "ana@example.com".to_string()]
        );
    }
}
