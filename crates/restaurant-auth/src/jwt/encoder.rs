//! Token creation with configurable TTLs.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use restaurant_core::config::AuthConfig;
use restaurant_core::error::AppError;

use super::claims::{Claims, TokenSubject, TokenType};

/// Creates HS256-signed session and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session token TTL.
    session_ttl: Duration,
    /// Refresh token TTL.
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("session_ttl", &self.session_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// A freshly issued session and refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Session token for the `token` header.
    pub token: String,
    /// Refresh token for `/users/refresh`.
    pub refresh_token: String,
    /// Session token expiration.
    pub token_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            session_ttl: Duration::hours(config.session_ttl_hours as i64),
            refresh_ttl: Duration::hours(config.refresh_ttl_hours as i64),
        }
    }

    /// Issues a session + refresh pair carrying the same identity claims.
    pub fn issue_pair(&self, subject: &TokenSubject) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let token_expires_at = now + self.session_ttl;
        let refresh_expires_at = now + self.refresh_ttl;

        let token = self.encode_claims(&Self::claims(
            subject,
            now,
            token_expires_at,
            TokenType::Session,
        ))?;
        let refresh_token = self.encode_claims(&Self::claims(
            subject,
            now,
            refresh_expires_at,
            TokenType::Refresh,
        ))?;

        Ok(TokenPair {
            token,
            refresh_token,
            token_expires_at,
            refresh_expires_at,
        })
    }

    /// Signs an arbitrary claims payload.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            AppError::internal(format!(
                "Failed to encode {} token: {e}",
                claims.token_type.as_str()
            ))
        })
    }

    fn claims(
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        token_type: TokenType,
    ) -> Claims {
        Claims {
            email: subject.email.clone(),
            first_name: subject.first_name.clone(),
            last_name: subject.last_name.clone(),
            uid: subject.uid.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            token_type,
        }
    }
}
