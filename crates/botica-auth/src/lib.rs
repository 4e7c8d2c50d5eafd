//! Authentication domain logic for Botica POS.
//!
//! Two login flows share this crate:
//!
//! - **PMS login** (admins and managers): employee id + password, verified
//!   against the stored argon2 hash, issuing an 8-hour token carrying the
//!   user's role.
//! - **POS login** (pharmacists): PIN-based. The backend matches the PIN
//!   and opens the sales session row; this crate then issues the 12-hour
//!   session token.
//!
//! Plus the forgot-password flow: a 6-digit reset token with a 15-minute
//! expiry, held in an in-memory store until the password is reset.
//!
//! The crate performs no I/O. Record lookup, session-row writes, and the
//! reset email are the backend's job.

pub mod error;
pub mod login;
pub mod password;
pub mod reset;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use login::{pms_login, pos_login, PharmacistRecord, UserRecord};
pub use password::{hash_password, verify_password};
pub use reset::ResetTokenStore;
pub use token::{extract_bearer_token, Claims, JwtManager, Role, TokenKind};
