//! Auth Types
//!
//! Session wire shapes issued by the hosted auth service plus the
//! client-side registration checks. Token refresh is handled by the
//! service; the client only stores and replays what it was given.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Active session: bearer token plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Password strength ladder shown live on the register screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Empty -> None, under 6 chars -> Weak, under 10 -> Medium, else Strong
    pub fn rate(password: &str) -> Self {
        match password.chars().count() {
            0 => Self::None,
            1..=5 => Self::Weak,
            6..=9 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Pre-flight checks for the register form, run before any network call
pub fn check_registration(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_ladder_boundaries() {
        assert_eq!(PasswordStrength::rate(""), PasswordStrength::None);
        assert_eq!(PasswordStrength::rate("abc12"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::rate("abc123"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::rate("abc123456"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::rate("abc1234567"), PasswordStrength::Strong);
    }

    #[test]
    fn test_check_registration_rejects_mismatch() {
        let err = check_registration("a@b.se", "secret123", "secret124").unwrap_err();
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn test_check_registration_requires_credentials() {
        assert!(check_registration("  ", "pw", "pw").is_err());
        assert!(check_registration("a@b.se", "", "").is_err());
        assert!(check_registration("a@b.se", "secret123", "secret123").is_ok());
    }

    #[test]
    fn test_session_round_trips_as_json() {
        let session = Session {
            access_token: "tok".to_string(),
            refresh_token: None,
            user: User {
                id: "u1".to_string(),
                email: "a@b.se".to_string(),
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
