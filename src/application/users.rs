//! User administration and profile operations.

use std::sync::Arc;

use mensa_api_types::{AdminUserUpdateRequest, User, UserUpdateRequest};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, endpoints};

pub struct UsersService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
}

impl UsersService {
    pub fn new(
        http: HttpClient,
        fetcher: Arc<ResourceFetcher>,
        trigger: Arc<CacheTrigger>,
    ) -> Self {
        Self {
            http,
            fetcher,
            trigger,
        }
    }

    /// List all users. Server-side this is admin-only.
    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(QueryKey::UserList, vec![ResourceTag::UserList], move || {
                async move { http.get_bytes(endpoints::users()).await }
            })
            .await?)
    }

    /// Update the own profile.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: &UserUpdateRequest,
    ) -> Result<User, ClientError> {
        let user: User = self.http.patch(&endpoints::user(user_id), request).await?;
        self.trigger
            .mutation_committed(MutationKind::ProfileUpdated { user_id });
        Ok(user)
    }

    /// Admin update of another user (activation, verification, admin flag).
    pub async fn admin_update(
        &self,
        user_id: Uuid,
        request: &AdminUserUpdateRequest,
    ) -> Result<User, ClientError> {
        let user: User = self.http.patch(&endpoints::user(user_id), request).await?;
        self.trigger
            .mutation_committed(MutationKind::UserAdministered { user_id });
        Ok(user)
    }
}
