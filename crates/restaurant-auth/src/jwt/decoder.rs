//! Token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use restaurant_core::config::AuthConfig;

use super::claims::{Claims, TokenType};
use super::error::TokenError;

/// Validates token signatures and expiry. Never touches storage.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a session token.
    pub fn decode_session_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_typed(token, TokenType::Session)
    }

    /// Decodes a refresh token.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_typed(token, TokenType::Refresh)
    }

    fn decode_typed(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let claims = self.decode_token(token)?;
        if claims.token_type != expected {
            return Err(TokenError::Malformed(format!(
                "expected {} token",
                expected.as_str()
            )));
        }
        Ok(claims)
    }

    /// Signature first, then expiry.
    fn decode_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                JwtErrorKind::InvalidSignature => TokenError::Malformed("bad signature".into()),
                JwtErrorKind::InvalidToken => TokenError::Malformed("bad structure".into()),
                JwtErrorKind::MissingRequiredClaim(claim) => {
                    TokenError::Malformed(format!("missing claim '{claim}'"))
                }
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::jwt::claims::TokenSubject;
    use crate::jwt::encoder::JwtEncoder;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            ..AuthConfig::default()
        }
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            uid: "u-1".into(),
        }
    }

    #[test]
    fn test_issue_then_validate_round_trip() {
        let config = config();
        let pair = JwtEncoder::new(&config).issue_pair(&subject()).unwrap();
        let claims = JwtDecoder::new(&config)
            .decode_session_token(&pair.token)
            .unwrap();

        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.uid, "u-1");
        assert_eq!(claims.token_type, TokenType::Session);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_refresh_token_outlives_session_token() {
        let pair = JwtEncoder::new(&config()).issue_pair(&subject()).unwrap();
        assert!(pair.refresh_expires_at > pair.token_expires_at);
        assert_ne!(pair.token, pair.refresh_token);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = config();
        let past = Utc::now() - Duration::hours(1);
        let claims = Claims {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            uid: "u-1".into(),
            iat: (past - Duration::hours(24)).timestamp(),
            exp: past.timestamp(),
            token_type: TokenType::Session,
        };
        let token = JwtEncoder::new(&config).encode_claims(&claims).unwrap();

        let err = JwtDecoder::new(&config)
            .decode_session_token(&token)
            .unwrap_err();
        assert_eq!(err, TokenError::Expired);
    }

    #[test]
    fn test_tampered_signature_is_malformed() {
        let config = config();
        let pair = JwtEncoder::new(&config).issue_pair(&subject()).unwrap();
        let sig_start = pair.token.rfind('.').unwrap() + 1;
        let first = &pair.token[sig_start..sig_start + 1];
        let tampered = format!(
            "{}{}{}",
            &pair.token[..sig_start],
            if first == "A" { "Q" } else { "A" },
            &pair.token[sig_start + 1..]
        );

        let err = JwtDecoder::new(&config)
            .decode_session_token(&tampered)
            .unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_malformed() {
        let other = AuthConfig {
            jwt_secret: "other-secret".into(),
            ..AuthConfig::default()
        };
        let pair = JwtEncoder::new(&other).issue_pair(&subject()).unwrap();

        let err = JwtDecoder::new(&config())
            .decode_session_token(&pair.token)
            .unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = JwtDecoder::new(&config())
            .decode_session_token("not-a-token")
            .unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_refresh_token_is_not_a_session_token() {
        let config = config();
        let pair = JwtEncoder::new(&config).issue_pair(&subject()).unwrap();
        let decoder = JwtDecoder::new(&config);

        assert!(decoder.decode_session_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_ok());
    }
}
