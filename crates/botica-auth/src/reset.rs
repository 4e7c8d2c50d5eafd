//! Password-reset token store.
//!
//! Forgot-password flow:
//!
//! ```text
//! forgot ──► issue(employee_id) ──► 6-digit token, emailed by the backend
//! verify ──► verify(employee_id, token) ──► frontend advances to the form
//! reset  ──► consume(employee_id, token) ──► backend updates the password
//! ```
//!
//! Tokens live 15 minutes and are held in memory only; a restart simply
//! forces the user to request a new one. Re-issuing for the same employee
//! replaces the previous token.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::info;

use crate::error::{AuthError, AuthResult};

/// How long a reset token stays valid.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone)]
struct PendingReset {
    token: String,
    expires_at: DateTime<Utc>,
}

/// In-memory store of pending password resets, keyed by employee id.
#[derive(Debug, Default)]
pub struct ResetTokenStore {
    pending: HashMap<String, PendingReset>,
}

impl ResetTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh 6-digit token for an employee, replacing any
    /// previous one. The caller emails it to the verified address.
    pub fn issue(&mut self, employee_id: &str) -> String {
        let token = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));

        self.pending.insert(
            employee_id.to_string(),
            PendingReset {
                token: token.clone(),
                expires_at: Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
            },
        );

        info!(employee_id, "issued password reset token");
        token
    }

    /// Verifies a token without consuming it (the "enter your code" step).
    ///
    /// An expired entry is removed on sight, so a retry with the same code
    /// fails the same way a never-issued one does on the next call.
    pub fn verify(&mut self, employee_id: &str, token: &str) -> AuthResult<()> {
        let pending = self
            .pending
            .get(employee_id)
            .ok_or(AuthError::ResetTokenInvalid)?;

        if pending.token != token {
            return Err(AuthError::ResetTokenInvalid);
        }

        if Utc::now() > pending.expires_at {
            self.pending.remove(employee_id);
            return Err(AuthError::ResetTokenExpired);
        }

        Ok(())
    }

    /// Verifies and removes a token (the final password-update step).
    pub fn consume(&mut self, employee_id: &str, token: &str) -> AuthResult<()> {
        self.verify(employee_id, token)?;
        self.pending.remove(employee_id);

        info!(employee_id, "password reset token consumed");
        Ok(())
    }

    /// Number of pending resets (for metrics/tests).
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_verify_consume() {
        let mut store = ResetTokenStore::new();
        let token = store.issue("EMP-007");

        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_digit()));

        store.verify("EMP-007", &token).unwrap();
        store.verify("EMP-007", &token).unwrap(); // verify does not consume

        store.consume("EMP-007", &token).unwrap();
        assert!(store.is_empty());

        // Consumed token no longer works.
        assert!(matches!(
            store.verify("EMP-007", &token),
            Err(AuthError::ResetTokenInvalid)
        ));
    }

    #[test]
    fn wrong_token_rejected() {
        let mut store = ResetTokenStore::new();
        let token = store.issue("EMP-007");
        let wrong = if token == "000000" { "000001" } else { "000000" };

        assert!(matches!(
            store.verify("EMP-007", wrong),
            Err(AuthError::ResetTokenInvalid)
        ));
    }

    #[test]
    fn unknown_employee_rejected() {
        let mut store = ResetTokenStore::new();
        assert!(matches!(
            store.verify("EMP-404", "123456"),
            Err(AuthError::ResetTokenInvalid)
        ));
    }

    #[test]
    fn reissue_replaces_previous_token() {
        let mut store = ResetTokenStore::new();
        let first = store.issue("EMP-007");
        let second = store.issue("EMP-007");

        assert_eq!(store.len(), 1);
        store.verify("EMP-007", &second).unwrap();
        if first != second {
            assert!(store.verify("EMP-007", &first).is_err());
        }
    }

    #[test]
    fn expired_token_rejected_and_purged() {
        let mut store = ResetTokenStore::new();
        let token = store.issue("EMP-007");

        // Force the entry into the past.
        store.pending.get_mut("EMP-007").unwrap().expires_at =
            Utc::now() - Duration::minutes(1);

        assert!(matches!(
            store.verify("EMP-007", &token),
            Err(AuthError::ResetTokenExpired)
        ));
        // Purged: the second attempt fails as invalid, not expired.
        assert!(matches!(
            store.verify("EMP-007", &token),
            Err(AuthError::ResetTokenInvalid)
        ));
    }
}
