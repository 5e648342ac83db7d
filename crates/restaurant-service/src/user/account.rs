//! Account operations: signup, login and token refresh.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use restaurant_auth::password::{PasswordHasher, PasswordValidator};
use restaurant_auth::{TokenPair, TokenService, TokenSubject};
use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_database::repositories::UserRepository;
use restaurant_entity::User;
use restaurant_entity::record::NewIdentity;
use restaurant_entity::user::model::CreateUser;

/// Data for a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
    /// Avatar image URL.
    pub avatar: Option<String>,
}

/// A user together with the token pair just issued to them.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user, tokens included.
    pub user: User,
    /// The issued pair.
    pub tokens: TokenPair,
}

/// Handles signup, login and refresh.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    users: UserRepository,
    /// Credential hasher.
    hasher: PasswordHasher,
    /// Password policy.
    validator: PasswordValidator,
    /// Token service.
    tokens: TokenService,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: UserRepository,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            tokens,
        }
    }

    /// Register a new user and issue their first token pair.
    ///
    /// Email and phone must each be unused; either clash stops the signup
    /// with a conflict before anything is written.
    pub async fn signup(&self, req: Signup) -> AppResult<AuthSession> {
        self.validator.validate(&req.password)?;

        if self.users.count_by_email(&req.email).await? > 0 {
            return Err(AppError::conflict("This email already exists"));
        }
        if self.users.count_by_phone(&req.phone).await? > 0 {
            return Err(AppError::conflict("This phone number already exists"));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let mut user = CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            password_hash,
            avatar: req.avatar,
        }
        .into_user(NewIdentity::generate());

        let tokens = self.tokens.issue_for(&TokenSubject::from(&user))?;
        user.token = Some(tokens.token.clone());
        user.refresh_token = Some(tokens.refresh_token.clone());

        self.users.create(&user).await?;
        info!(user_id = %user.user_id, email = %user.email, "User signed up");

        Ok(AuthSession { user, tokens })
    }

    /// Verify credentials and issue a fresh token pair.
    ///
    /// Unknown email and wrong password fail identically. The new pair is
    /// persisted in the background.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let Some(mut user) = self.users.find_by_email(email).await? else {
            warn!(email, "Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.user_id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        let tokens = self.tokens.issue_for(&TokenSubject::from(&user))?;
        self.tokens.persist_in_background(&tokens, &user.user_id);

        user.token = Some(tokens.token.clone());
        user.refresh_token = Some(tokens.refresh_token.clone());
        info!(user_id = %user.user_id, "User logged in");

        Ok(AuthSession { user, tokens })
    }

    /// Exchange a refresh token for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let (claims, tokens) = self.tokens.refresh(refresh_token)?;
        self.tokens.persist_in_background(&tokens, &claims.uid);
        info!(user_id = %claims.uid, "Token pair refreshed");
        Ok(tokens)
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid email or password")
}
