//! Token validation failures.

use restaurant_core::error::AppError;

/// Why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The signature is valid but the expiry instant has passed.
    #[error("Token has expired")]
    Expired,
    /// Bad signature, bad structure, missing claims or wrong token type.
    #[error("Invalid token: {0}")]
    Malformed(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restaurant_core::error::ErrorKind;

    #[test]
    fn test_token_errors_become_authentication_errors() {
        let err: AppError = TokenError::Expired.into();
        assert!(err.is(ErrorKind::Authentication));
        assert_eq!(err.message, "Token has expired");

        let err: AppError = TokenError::Malformed("bad signature".into()).into();
        assert_eq!(err.message, "Invalid token: bad signature");
    }
}
