//! JWT claims and token management.
//!
//! Two token kinds, one claims shape:
//!
//! - `pms` tokens (8h default) carry the user's role for the management
//!   app's role-gated routes.
//! - `pos` tokens (12h default) carry the pharmacist's open sales-session
//!   id instead of a role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Default PMS token lifetime: 8 hours (one management shift).
pub const PMS_TOKEN_LIFETIME_SECS: i64 = 8 * 3600;

/// Default POS token lifetime: 12 hours (one counter shift).
pub const POS_TOKEN_LIFETIME_SECS: i64 = 12 * 3600;

/// Staff roles in the management system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Pharmacist,
}

/// Which login flow issued a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Admin/manager login (employee id + password).
    Pms,
    /// Pharmacist PIN login with an open sales session.
    Pos,
}

impl TokenKind {
    fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Pms => "pms",
            TokenKind::Pos => "pos",
        }
    }
}

/// JWT claims structure shared by both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id (PMS) or staff id (POS).
    pub sub: String,

    /// Display name shown in the app header.
    pub name: String,

    /// Branch the holder is logged into.
    pub branch_id: String,

    /// Role, present on PMS tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Employee id, present on PMS tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    /// Open sales-session id, present on POS tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i64>,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp).
    pub exp: i64,

    /// JWT ID (unique identifier for this token).
    pub jti: String,

    /// Token kind ("pms" or "pos").
    pub token_type: TokenKind,
}

/// JWT token manager.
pub struct JwtManager {
    secret: String,
    pms_lifetime_secs: i64,
    pos_lifetime_secs: i64,
}

impl JwtManager {
    /// Create a manager with explicit lifetimes.
    pub fn new(secret: String, pms_lifetime_secs: i64, pos_lifetime_secs: i64) -> Self {
        JwtManager {
            secret,
            pms_lifetime_secs,
            pos_lifetime_secs,
        }
    }

    /// Create a manager with the default shift lifetimes (8h PMS, 12h POS).
    pub fn with_defaults(secret: String) -> Self {
        Self::new(secret, PMS_TOKEN_LIFETIME_SECS, POS_TOKEN_LIFETIME_SECS)
    }

    /// Issue a PMS token for an admin/manager user.
    pub fn issue_pms_token(
        &self,
        user_id: &str,
        role: Role,
        employee_id: &str,
        name: &str,
        branch_id: &str,
    ) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.pms_lifetime_secs);

        self.encode(Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            branch_id: branch_id.to_string(),
            role: Some(role),
            employee_id: Some(employee_id.to_string()),
            session_id: None,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: TokenKind::Pms,
        })
    }

    /// Issue a POS session token for a pharmacist.
    pub fn issue_pos_token(
        &self,
        staff_id: &str,
        name: &str,
        branch_id: &str,
        session_id: i64,
    ) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.pos_lifetime_secs);

        self.encode(Claims {
            sub: staff_id.to_string(),
            name: name.to_string(),
            branch_id: branch_id.to_string(),
            role: None,
            employee_id: None,
            session_id: Some(session_id),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: TokenKind::Pos,
        })
    }

    /// Validate and decode a token of either kind.
    pub fn validate_token(&self, token: &str) -> AuthResult<Claims> {
        let validation = Validation::default();

        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }

    /// Validate that a token is a PMS token.
    pub fn validate_pms_token(&self, token: &str) -> AuthResult<Claims> {
        let claims = self.validate_token(token)?;

        if claims.token_type != TokenKind::Pms {
            return Err(AuthError::WrongTokenKind { expected: "pms" });
        }

        Ok(claims)
    }

    /// Validate that a token is a POS session token.
    pub fn validate_pos_token(&self, token: &str) -> AuthResult<Claims> {
        let claims = self.validate_token(token)?;

        if claims.token_type != TokenKind::Pos {
            return Err(AuthError::WrongTokenKind { expected: "pos" });
        }

        Ok(claims)
    }

    /// Get remaining lifetime of a token in seconds.
    pub fn token_lifetime(&self, token: &str) -> AuthResult<i64> {
        let claims = self.validate_token(token)?;
        let now = Utc::now().timestamp();
        Ok(claims.exp - now)
    }

    fn encode(&self, claims: Claims) -> AuthResult<String> {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }
}

/// Extract bearer token from an Authorization header value.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> JwtManager {
        JwtManager::with_defaults("test-secret".to_string())
    }

    #[test]
    fn pms_token_roundtrip() {
        let token = manager()
            .issue_pms_token("user-1", Role::Manager, "EMP-007", "Maria Santos", "branch-2")
            .unwrap();

        let claims = manager().validate_pms_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Some(Role::Manager));
        assert_eq!(claims.employee_id.as_deref(), Some("EMP-007"));
        assert_eq!(claims.branch_id, "branch-2");
        assert_eq!(claims.session_id, None);
        assert_eq!(claims.token_type, TokenKind::Pms);
    }

    #[test]
    fn pos_token_roundtrip() {
        let token = manager()
            .issue_pos_token("staff-9", "Jose Cruz", "branch-1", 314)
            .unwrap();

        let claims = manager().validate_pos_token(&token).unwrap();
        assert_eq!(claims.sub, "staff-9");
        assert_eq!(claims.session_id, Some(314));
        assert_eq!(claims.role, None);
        assert_eq!(claims.token_type, TokenKind::Pos);
    }

    #[test]
    fn wrong_kind_rejected() {
        let pms = manager()
            .issue_pms_token("user-1", Role::Admin, "EMP-001", "Ana", "branch-1")
            .unwrap();

        let err = manager().validate_pos_token(&pms).unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenKind { expected: "pos" }));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = manager()
            .issue_pos_token("staff-9", "Jose", "branch-1", 1)
            .unwrap();

        let other = JwtManager::with_defaults("other-secret".to_string());
        assert!(matches!(
            other.validate_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn lifetime_is_positive_for_fresh_token() {
        let token = manager()
            .issue_pms_token("user-1", Role::Admin, "EMP-001", "Ana", "branch-1")
            .unwrap();

        let remaining = manager().token_lifetime(&token).unwrap();
        assert!(remaining > 0 && remaining <= PMS_TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token(""), None);
    }
}
