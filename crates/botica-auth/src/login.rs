//! The two login flows.
//!
//! The backend owns the lookups: it fetches the user/pharmacist record by
//! employee id or PIN (and, for POS, opens the sales session row in a
//! transaction). This module owns everything after that - credential
//! verification and token issuance - so the rules live in one tested place.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AuthError, AuthResult};
use crate::password::verify_password;
use crate::token::{JwtManager, Role};

// =============================================================================
// Records (caller-fetched)
// =============================================================================

/// An admin/manager account row, as fetched by the backend.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub employee_id: String,
    pub name: String,
    /// argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub branch_id: String,
    pub is_active: bool,
}

/// A pharmacist row, as fetched by the backend from the PIN lookup.
#[derive(Debug, Clone)]
pub struct PharmacistRecord {
    pub staff_id: String,
    pub name: String,
    pub branch_id: String,
    pub is_active: bool,
}

// =============================================================================
// Responses
// =============================================================================

/// User summary returned alongside the PMS token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    pub role: Role,
    pub employee_id: String,
    pub branch_id: String,
}

/// Successful PMS login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmsLoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Pharmacist summary returned alongside the POS token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacistSummary {
    pub name: String,
    pub staff_id: String,
    pub branch_id: String,
    pub session_id: i64,
}

/// Successful POS login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosLoginResponse {
    pub token: String,
    pub pharmacist: PharmacistSummary,
}

// =============================================================================
// Flows
// =============================================================================

/// PMS login: verify the password against the fetched record and issue an
/// 8-hour token carrying the user's role.
///
/// Inactive accounts and wrong passwords both collapse to
/// [`AuthError::InvalidCredentials`] so the endpoint leaks nothing.
pub fn pms_login(
    user: &UserRecord,
    password: &str,
    jwt: &JwtManager,
) -> AuthResult<PmsLoginResponse> {
    if !user.is_active {
        warn!(employee_id = %user.employee_id, "PMS login attempt on inactive account");
        return Err(AuthError::InvalidCredentials);
    }

    if !verify_password(password, &user.password_hash)? {
        warn!(employee_id = %user.employee_id, "PMS login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let token = jwt.issue_pms_token(
        &user.user_id,
        user.role,
        &user.employee_id,
        &user.name,
        &user.branch_id,
    )?;

    info!(employee_id = %user.employee_id, "successful PMS login");

    Ok(PmsLoginResponse {
        token,
        user: UserSummary {
            name: user.name.clone(),
            role: user.role,
            employee_id: user.employee_id.clone(),
            branch_id: user.branch_id.clone(),
        },
    })
}

/// POS login: the backend has already matched the PIN and opened the sales
/// session; issue the 12-hour session token.
pub fn pos_login(
    pharmacist: &PharmacistRecord,
    session_id: i64,
    jwt: &JwtManager,
) -> AuthResult<PosLoginResponse> {
    if !pharmacist.is_active {
        warn!(staff_id = %pharmacist.staff_id, "POS login attempt on inactive pharmacist");
        return Err(AuthError::InvalidCredentials);
    }

    let token = jwt.issue_pos_token(
        &pharmacist.staff_id,
        &pharmacist.name,
        &pharmacist.branch_id,
        session_id,
    )?;

    info!(staff_id = %pharmacist.staff_id, session_id, "successful POS login");

    Ok(PosLoginResponse {
        token,
        pharmacist: PharmacistSummary {
            name: pharmacist.name.clone(),
            staff_id: pharmacist.staff_id.clone(),
            branch_id: pharmacist.branch_id.clone(),
            session_id,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;
    use crate::token::TokenKind;

    fn jwt() -> JwtManager {
        JwtManager::with_defaults("test-secret".to_string())
    }

    fn user(password: &str, active: bool) -> UserRecord {
        UserRecord {
            user_id: "user-1".to_string(),
            employee_id: "EMP-007".to_string(),
            name: "Maria Santos".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::Manager,
            branch_id: "branch-2".to_string(),
            is_active: active,
        }
    }

    #[test]
    fn pms_login_issues_role_token() {
        let response = pms_login(&user("s3cret", true), "s3cret", &jwt()).unwrap();

        assert_eq!(response.user.employee_id, "EMP-007");
        assert_eq!(response.user.role, Role::Manager);

        let claims = jwt().validate_pms_token(&response.token).unwrap();
        assert_eq!(claims.token_type, TokenKind::Pms);
        assert_eq!(claims.role, Some(Role::Manager));
    }

    #[test]
    fn pms_response_serializes_camel_case() {
        let response = pms_login(&user("s3cret", true), "s3cret", &jwt()).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["user"]["employeeId"], "EMP-007");
        assert_eq!(json["user"]["branchId"], "branch-2");
        assert_eq!(json["user"]["role"], "manager");
    }

    #[test]
    fn pms_login_rejects_wrong_password() {
        let err = pms_login(&user("s3cret", true), "guess", &jwt()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn pms_login_rejects_inactive_account() {
        let err = pms_login(&user("s3cret", false), "s3cret", &jwt()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn pos_login_issues_session_token() {
        let pharmacist = PharmacistRecord {
            staff_id: "staff-9".to_string(),
            name: "Jose Cruz".to_string(),
            branch_id: "branch-1".to_string(),
            is_active: true,
        };

        let response = pos_login(&pharmacist, 314, &jwt()).unwrap();
        assert_eq!(response.pharmacist.session_id, 314);

        let claims = jwt().validate_pos_token(&response.token).unwrap();
        assert_eq!(claims.session_id, Some(314));
    }

    #[test]
    fn pos_login_rejects_inactive_pharmacist() {
        let pharmacist = PharmacistRecord {
            staff_id: "staff-9".to_string(),
            name: "Jose Cruz".to_string(),
            branch_id: "branch-1".to_string(),
            is_active: false,
        };

        let err = pos_login(&pharmacist, 314, &jwt()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
