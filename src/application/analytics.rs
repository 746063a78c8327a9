//! Spending analytics reads.

use std::sync::Arc;

use mensa_api_types::{GroupAnalytics, UserAnalytics};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, endpoints};

pub struct AnalyticsService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
}

impl AnalyticsService {
    pub fn new(http: HttpClient, fetcher: Arc<ResourceFetcher>) -> Self {
        Self { http, fetcher }
    }

    pub async fn group(&self, group_id: Uuid) -> Result<GroupAnalytics, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::GroupAnalytics(group_id),
                vec![ResourceTag::GroupAnalytics(group_id)],
                move || async move { http.get_bytes(&endpoints::group_analytics(group_id)).await },
            )
            .await?)
    }

    pub async fn me(&self) -> Result<UserAnalytics, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::UserAnalytics,
                vec![ResourceTag::UserAnalytics],
                move || async move { http.get_bytes(endpoints::user_analytics()).await },
            )
            .await?)
    }
}
