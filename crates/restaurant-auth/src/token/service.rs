//! Token service: issue, validate, persist and refresh token pairs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use restaurant_core::config::AuthConfig;
use restaurant_core::result::AppResult;
use restaurant_database::repositories::UserRepository;

use crate::jwt::claims::TokenSubject;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenPair};

/// Owns the signing keys and the write path for the latest token pair.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    users: UserRepository,
    writes: Arc<WriteOrder>,
}

/// Issue order of background token writes, per user.
///
/// Each slot holds the sequence number of the last pair written for that
/// user. Holding the slot lock across the write keeps writes for one user
/// serialized.
#[derive(Debug, Default)]
struct WriteOrder {
    next: AtomicU64,
    slots: DashMap<String, Arc<Mutex<u64>>>,
}

/// A reserved place in a user's write order.
#[derive(Debug)]
struct WriteTicket {
    seq: u64,
    slot: Arc<Mutex<u64>>,
}

impl TokenService {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig, users: UserRepository) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            users,
            writes: Arc::default(),
        }
    }

    /// Issue a session + refresh pair for an identity.
    pub fn issue(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        uid: &str,
    ) -> AppResult<TokenPair> {
        self.issue_for(&TokenSubject {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            uid: uid.to_string(),
        })
    }

    /// Issue a pair for an already-assembled subject.
    pub fn issue_for(&self, subject: &TokenSubject) -> AppResult<TokenPair> {
        self.encoder.issue_pair(subject)
    }

    /// Validate a session token. Pure: no storage access.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.decoder.decode_session_token(token)
    }

    /// Overwrite the stored token pair of a user.
    pub async fn persist(&self, token: &str, refresh_token: &str, user_id: &str) -> AppResult<()> {
        self.users
            .update_tokens(user_id, token, refresh_token)
            .await?;
        debug!(user_id, "Persisted token pair");
        Ok(())
    }

    /// Persist a pair without holding up the caller.
    ///
    /// Pairs are written in the order they were issued: a pair superseded
    /// by a later one for the same user is skipped. Failures are logged
    /// and otherwise dropped.
    pub fn persist_in_background(&self, pair: &TokenPair, user_id: &str) {
        let ticket = self.reserve(user_id);
        let service = self.clone();
        let token = pair.token.clone();
        let refresh_token = pair.refresh_token.clone();
        let user_id = user_id.to_string();

        tokio::spawn(async move {
            if let Err(e) = service
                .persist_ticketed(ticket, &token, &refresh_token, &user_id)
                .await
            {
                warn!(user_id = %user_id, error = %e, "Failed to persist token pair");
            }
        });
    }

    fn reserve(&self, user_id: &str) -> WriteTicket {
        let seq = self.writes.next.fetch_add(1, Ordering::SeqCst) + 1;
        let slot = self
            .writes
            .slots
            .entry(user_id.to_string())
            .or_default()
            .clone();
        WriteTicket { seq, slot }
    }

    /// Returns `false` when a later pair was already written.
    async fn persist_ticketed(
        &self,
        ticket: WriteTicket,
        token: &str,
        refresh_token: &str,
        user_id: &str,
    ) -> AppResult<bool> {
        let mut last_written = ticket.slot.lock().await;
        if *last_written > ticket.seq {
            debug!(user_id, seq = ticket.seq, "Skipped superseded token pair");
            return Ok(false);
        }
        self.persist(token, refresh_token, user_id).await?;
        *last_written = ticket.seq;
        Ok(true)
    }

    /// Exchange a refresh token for a new pair carrying the same identity.
    pub fn refresh(&self, refresh_token: &str) -> AppResult<(Claims, TokenPair)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        let pair = self.issue_for(&TokenSubject::from(&claims))?;
        Ok((claims, pair))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use restaurant_core::error::ErrorKind;
    use restaurant_database::StoreManager;
    use restaurant_entity::record::NewIdentity;
    use restaurant_entity::user::model::CreateUser;

    fn service() -> (TokenService, UserRepository) {
        let users = UserRepository::new(StoreManager::in_memory(Duration::from_secs(5)));
        let config = AuthConfig {
            jwt_secret: "service-secret".into(),
            ..AuthConfig::default()
        };
        (TokenService::new(&config, users.clone()), users)
    }

    #[test]
    fn test_issue_and_validate() {
        let (service, _) = service();
        let pair = service.issue("a@x.com", "Ada", "L", "u-1").unwrap();

        let claims = service.validate(&pair.token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.user_id(), "u-1");
        assert_eq!(
            service.validate(&pair.refresh_token).unwrap_err(),
            TokenError::Malformed("expected session token".into())
        );
    }

    #[test]
    fn test_refresh_keeps_identity() {
        let (service, _) = service();
        let pair = service.issue("a@x.com", "Ada", "L", "u-1").unwrap();

        let (claims, fresh) = service.refresh(&pair.refresh_token).unwrap();
        assert_eq!(claims.uid, "u-1");
        assert_eq!(service.validate(&fresh.token).unwrap().uid, "u-1");

        let err = service.refresh(&pair.token).unwrap_err();
        assert!(err.is(ErrorKind::Authentication));
    }

    #[tokio::test]
    async fn test_persist_overwrites_stored_pair() -> AppResult<()> {
        let (service, users) = service();
        let user = CreateUser {
            first_name: "Ada".into(),
            last_name: "L".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            password_hash: "hash".into(),
            avatar: None,
        }
        .into_user(NewIdentity::generate());
        users.create(&user).await?;

        service.persist("t1", "r1", &user.user_id).await?;
        service.persist("t2", "r2", &user.user_id).await?;

        let stored = users.get(&user.user_id).await?;
        assert_eq!(stored.token.as_deref(), Some("t2"));
        assert_eq!(stored.refresh_token.as_deref(), Some("r2"));
        Ok(())
    }

    #[tokio::test]
    async fn test_superseded_pair_is_not_written() -> AppResult<()> {
        let (service, users) = service();
        let user = CreateUser {
            first_name: "Ada".into(),
            last_name: "L".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            password_hash: "hash".into(),
            avatar: None,
        }
        .into_user(NewIdentity::generate());
        users.create(&user).await?;

        let older = service.reserve(&user.user_id);
        let newer = service.reserve(&user.user_id);
        assert!(
            service
                .persist_ticketed(newer, "t2", "r2", &user.user_id)
                .await?
        );
        assert!(
            !service
                .persist_ticketed(older, "t1", "r1", &user.user_id)
                .await?
        );

        let stored = users.get(&user.user_id).await?;
        assert_eq!(stored.token.as_deref(), Some("t2"));
        assert_eq!(stored.refresh_token.as_deref(), Some("r2"));
        Ok(())
    }

    #[tokio::test]
    async fn test_persist_for_unknown_user_surfaces_not_found() {
        let (service, _) = service();
        let err = service.persist("t", "r", "ghost").await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
