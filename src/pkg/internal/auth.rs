use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum_extra::extract::cookie::Cookie;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{conf::settings, prelude::*};

pub const TOKEN_COOKIE: &str = "access_token";
/// Session tokens live this long before the client must log in again.
const TOKEN_TTL_DAYS: i64 = 30;
/// Tokens closer than this to expiry get rotated on the way out.
const REFRESH_WINDOW_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
}

/// The validated identity a request carries once the authn middleware has
/// accepted its cookie.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: String,
    pub role: Role,
}

impl AuthSession {
    pub fn require_role(&self, required: Role) -> Result<()> {
        if self.role == required {
            Ok(())
        } else {
            Err(Error::Forbidden)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub role: Role,
    pub exp: i64,
}

pub fn issue_token(user_id: &str, role: Role) -> Result<String> {
    let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp();
    let claims = Claims {
        user_id: user_id.to_string(),
        role,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_token(token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized)
}

/// True once the token is inside the rotation window.
pub fn expires_soon(claims: &Claims) -> bool {
    claims.exp - Utc::now().timestamp() < REFRESH_WINDOW_MINUTES * 60
}

pub fn token_cookie(token: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie
}

pub fn clear_token_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, "");
    cookie.set_path("/");
    cookie
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| Error::PasswordHash)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|_| Error::PasswordHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() -> Result<()> {
        let hash = hash_password("hunter2")?;
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash)?);
        assert!(!verify_password("hunter3", &hash)?);
        Ok(())
    }

    #[test]
    fn test_token_roundtrip() -> Result<()> {
        set_test_settings();
        let token = issue_token("user-1", Role::Recruiter)?;
        let claims = verify_token(&token)?;
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.role, Role::Recruiter);
        assert!(!expires_soon(&claims));
        Ok(())
    }

    #[test]
    fn test_expired_token_rejected() {
        set_test_settings();
        let claims = Claims {
            user_id: "user-1".into(),
            role: Role::Candidate,
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
        )
        .unwrap();
        assert!(matches!(verify_token(&token), Err(Error::Unauthorized)));
    }

    #[test]
    fn test_expires_soon_window() {
        let near = Claims {
            user_id: "user-1".into(),
            role: Role::Candidate,
            exp: (Utc::now() + Duration::minutes(10)).timestamp(),
        };
        let far = Claims {
            user_id: "user-1".into(),
            role: Role::Candidate,
            exp: (Utc::now() + Duration::hours(2)).timestamp(),
        };
        assert!(expires_soon(&near));
        assert!(!expires_soon(&far));
    }

    /// The lazy_static settings read the process environment once; seed the
    /// variables every test needs before first touch.
    fn set_test_settings() {
        for (key, value) in [
            ("BASE_URL", "http://localhost:3000"),
            ("SERVICE_NAME", "jobfinder"),
            ("LISTEN_PORT", "5000"),
            ("DATABASE_URL", "postgres://localhost/jobfinder"),
            ("DATABASE_POOL_MAX_CONNECTIONS", "5"),
            ("JWT_SECRET", "test-secret"),
            ("FROM_EMAIL", "noreply@example.com"),
            ("SMTP_USER", "user"),
            ("SMTP_PASS", "pass"),
            ("SMTP_SERVER", "localhost"),
            ("SMTP_PORT", "465"),
        ] {
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}
