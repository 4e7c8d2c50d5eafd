//! Auth error taxonomy.

use thiserror::Error;

/// Authentication and token errors.
///
/// `InvalidCredentials` deliberately carries no detail: the login endpoint
/// must answer the same way for an unknown employee id, an inactive
/// account, and a wrong password.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown account, inactive account, or wrong password/PIN.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token failed validation (bad signature, expired, malformed).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token is valid but of the wrong kind (e.g. a POS session token
    /// presented to a PMS-only endpoint).
    #[error("Expected a {expected} token")]
    WrongTokenKind { expected: &'static str },

    /// Reset token does not match or was never issued.
    #[error("Invalid or expired reset token")]
    ResetTokenInvalid,

    /// Reset token matched but its 15-minute window has passed.
    #[error("Reset token has expired")]
    ResetTokenExpired,

    /// Password hashing/verification failure (corrupt hash, etc.).
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// Token encoding failure.
    #[error("Failed to issue token: {0}")]
    TokenIssue(String),
}

/// Convenience type alias for Results with AuthError.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        // No hint about which part of the credentials failed.
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn wrong_kind_message_names_expected_kind() {
        let err = AuthError::WrongTokenKind { expected: "pms" };
        assert_eq!(err.to_string(), "Expected a pms token");
    }
}
