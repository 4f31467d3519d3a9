//! Admin session gate.
//!
//! Login checks the configured admin credential (argon2 hash) and issues an
//! HS256 token that carries the user and an expiry. Admin pages call
//! [`SessionService::require_admin`] before touching the catalog.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::{Role, User};

const ISSUER: &str = "montela";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        User {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// The single admin account. Only the password hash is kept.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

impl Credentials {
    pub fn new(user: User, password: &str) -> Result<Self, AuthError> {
        Ok(Credentials {
            user,
            password_hash: hash_password(password)?,
        })
    }
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::Hashing("password cannot be empty".to_string()));
    }
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

pub fn verify_password(password_hash: &str, password: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

/// 64 printable characters from the OS RNG.
pub fn generate_secret() -> String {
    const ALLOWED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut bytes = [0u8; 64];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| ALLOWED[(*b as usize) % ALLOWED.len()] as char)
        .collect()
}

pub struct SessionService {
    credentials: Credentials,
    lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn new(credentials: Credentials, secret: &str, lifetime: Duration) -> Self {
        SessionService {
            credentials,
            lifetime,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// `Ok(None)` for an unknown email or a wrong password.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError> {
        if !email.eq_ignore_ascii_case(&self.credentials.user.email) {
            tracing::warn!(email, "login rejected: unknown email");
            return Ok(None);
        }
        if !verify_password(&self.credentials.password_hash, password)? {
            tracing::warn!(email, "login rejected: wrong password");
            return Ok(None);
        }

        let session = self.issue(&self.credentials.user, Utc::now())?;
        tracing::info!(user = %session.user.id, expires_at = %session.expires_at, "admin logged in");
        Ok(Some(session))
    }

    pub fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AuthError::Generation("session expiry out of range".to_string()))?;
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: ISSUER.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Generation(e.to_string()))?;

        Ok(Session {
            user: user.clone(),
            token,
            expires_at,
        })
    }

    pub fn verify(&self, token: &str) -> Result<User, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["sub", "exp", "iss"]);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(data.claims.into())
    }

    /// Page-level guard for admin routes.
    pub fn require_admin(&self, token: Option<&str>) -> Result<User, AuthError> {
        let token = token.ok_or_else(|| AuthError::InvalidToken("missing token".to_string()))?;
        let user = self.verify(token)?;
        if user.role != Role::Admin {
            tracing::warn!(user = %user.id, "admin access denied");
            return Err(AuthError::Forbidden);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

    fn admin() -> User {
        User {
            id: "1".to_string(),
            email: "admin@montela.com".to_string(),
            name: "Admin Montela".to_string(),
            role: Role::Admin,
        }
    }

    fn service() -> SessionService {
        let credentials = Credentials::new(admin(), "admin123").unwrap();
        SessionService::new(credentials, SECRET, Duration::hours(24))
    }

    #[test]
    fn test_login_and_verify() {
        let service = service();

        let session = service.login("admin@montela.com", "admin123").unwrap().unwrap();
        assert_eq!(session.user, admin());
        assert!(session.expires_at > Utc::now());

        let user = service.require_admin(Some(&session.token)).unwrap();
        assert_eq!(user.email, "admin@montela.com");

        // wrong password and unknown email give no session
        assert!(service.login("admin@montela.com", "nope").unwrap().is_none());
        assert!(service.login("someone@montela.com", "admin123").unwrap().is_none());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let session = service.issue(&admin(), Utc::now() - Duration::hours(48)).unwrap();

        assert!(matches!(service.verify(&session.token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let service = service();
        let other = SessionService::new(
            service.credentials.clone(),
            "another-secret-that-is-also-32-bytes-long",
            Duration::hours(24),
        );
        let session = other.issue(&admin(), Utc::now()).unwrap();

        assert!(matches!(
            service.verify(&session.token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_and_missing_tokens() {
        let service = service();
        assert!(matches!(service.verify("not-a-token"), Err(AuthError::InvalidToken(_))));
        assert!(matches!(service.require_admin(None), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_customer_forbidden() {
        let service = service();
        let customer = User {
            role: Role::Customer,
            ..admin()
        };
        let session = service.issue(&customer, Utc::now()).unwrap();

        assert!(service.verify(&session.token).is_ok());
        assert!(matches!(
            service.require_admin(Some(&session.token)),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_out_of_range_expiry_is_an_error() {
        let credentials = Credentials::new(admin(), "admin123").unwrap();
        let service = SessionService::new(credentials, SECRET, Duration::days(365_000_000));

        assert!(matches!(
            service.issue(&admin(), Utc::now()),
            Err(AuthError::Generation(_))
        ));
        assert!(matches!(
            service.login("admin@montela.com", "admin123"),
            Err(AuthError::Generation(_))
        ));
    }

    #[test]
    fn test_generated_secret() {
        let a = generate_secret();
        let b = generate_secret();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_password_cannot_be_hashed() {
        assert!(matches!(hash_password(""), Err(AuthError::Hashing(_))));
    }
}
