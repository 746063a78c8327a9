//! Authentication operations.

use std::sync::Arc;

use mensa_api_types::{LoginRequest, MessageResponse, RegisterRequest, User};

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, Session, endpoints};

pub struct AuthService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
    session: Session,
}

impl AuthService {
    pub fn new(
        http: HttpClient,
        fetcher: Arc<ResourceFetcher>,
        trigger: Arc<CacheTrigger>,
        session: Session,
    ) -> Self {
        Self {
            http,
            fetcher,
            trigger,
            session,
        }
    }

    /// Log in with email and password. The server sets the session cookie;
    /// the returned user lands in the local session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user: User = self.http.post(endpoints::login(), &request).await?;
        self.session.set_user(user.clone());
        self.trigger.mutation_committed(MutationKind::LoggedIn);
        Ok(user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ClientError> {
        let user: User = self.http.post(endpoints::register(), request).await?;
        self.trigger.mutation_committed(MutationKind::Registered);
        Ok(user)
    }

    /// Log out. On success the local session and the whole cache are
    /// dropped; a failed logout keeps both so the caller can retry.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: MessageResponse = self.http.post_empty(endpoints::logout()).await?;
        self.session.clear();
        self.trigger.mutation_committed(MutationKind::LoggedOut);
        Ok(())
    }

    /// Fetch the authenticated user, through the cache.
    pub async fn me(&self) -> Result<User, ClientError> {
        let http = self.http.clone();
        let user: User = self
            .fetcher
            .fetch(QueryKey::CurrentUser, vec![ResourceTag::Auth], move || {
                async move { http.get_bytes(endpoints::me()).await }
            })
            .await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
