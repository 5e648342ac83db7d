//! User lookups and self-service profile updates.

use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::{DocumentPatch, PageRequest, Slice};
use restaurant_database::repositories::UserRepository;
use restaurant_entity::User;

use crate::context::RequestContext;

/// Data for updating a user's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number, must stay unique.
    pub phone: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
}

/// Handles user listing, lookup and profile updates.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: UserRepository,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// One page of users with the total count.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Slice<User>> {
        self.users.find_page(page).await
    }

    /// Gets a user by `user_id`.
    pub async fn get(&self, user_id: &str) -> AppResult<User> {
        self.users.get(user_id).await
    }

    /// Gets the caller's own record.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users.get(&ctx.user_id).await
    }

    /// Updates the caller's own profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        user_id: &str,
        req: UpdateProfile,
    ) -> AppResult<User> {
        if !ctx.is_user(user_id) {
            return Err(AppError::authentication(
                "You can only update your own profile",
            ));
        }

        let current = self.users.get(user_id).await?;

        if let Some(phone) = req.phone.as_deref() {
            if phone != current.phone && self.users.count_by_phone(phone).await? > 0 {
                return Err(AppError::conflict("This phone number already exists"));
            }
        }

        let patch = DocumentPatch::new()
            .set_opt("first_name", req.first_name)?
            .set_opt("last_name", req.last_name)?
            .set_opt("phone", req.phone)?
            .set_opt("avatar", req.avatar)?;

        let user = self.users.update(user_id, patch).await?;
        info!(user_id, "Profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, signup};
    use restaurant_core::error::ErrorKind;

    #[tokio::test]
    async fn test_list_pages_users() -> AppResult<()> {
        let fx = Fixture::new();
        for i in 0..7 {
            fx.accounts
                .signup(signup(&format!("u{i}@x.com"), &format!("55{i}")))
                .await?;
        }

        let page = fx
            .user_service
            .list(&PageRequest::from_query(Some("5"), Some("2"), None))
            .await?;
        assert_eq!(page.total_count, 7);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].email, "u5@x.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_own_profile() -> AppResult<()> {
        let fx = Fixture::new();
        let session = fx.accounts.signup(signup("a@x.com", "555")).await?;
        let ctx = fx.context_for(&session.user);

        let req = UpdateProfile {
            first_name: Some("Augusta".into()),
            ..UpdateProfile::default()
        };
        let user = fx
            .user_service
            .update_profile(&ctx, &session.user.user_id, req)
            .await?;
        assert_eq!(user.first_name, "Augusta");
        assert_eq!(user.last_name, "Lovelace");
        Ok(())
    }

    #[tokio::test]
    async fn test_cannot_update_someone_else() -> AppResult<()> {
        let fx = Fixture::new();
        let a = fx.accounts.signup(signup("a@x.com", "555")).await?;
        let b = fx.accounts.signup(signup("b@x.com", "556")).await?;

        let err = fx
            .user_service
            .update_profile(&fx.context_for(&a.user), &b.user.user_id, UpdateProfile::default())
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Authentication));
        Ok(())
    }

    #[tokio::test]
    async fn test_phone_taken_by_other_user_is_conflict() -> AppResult<()> {
        let fx = Fixture::new();
        let a = fx.accounts.signup(signup("a@x.com", "555")).await?;
        fx.accounts.signup(signup("b@x.com", "556")).await?;

        let req = UpdateProfile {
            phone: Some("556".into()),
            ..UpdateProfile::default()
        };
        let err = fx
            .user_service
            .update_profile(&fx.context_for(&a.user), &a.user.user_id, req)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
        Ok(())
    }
}
