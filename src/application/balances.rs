//! Balance and ledger operations.

use std::sync::Arc;

use mensa_api_types::{Balance, BalanceAdjustRequest, BalanceHistoryEntry};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, endpoints};

pub struct BalancesService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
}

impl BalancesService {
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

    /// All member balances of a group.
    pub async fn list(&self, group_id: Uuid) -> Result<Vec<Balance>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::BalanceList(group_id),
                vec![ResourceTag::BalanceList(group_id)],
                move || async move { http.get_bytes(&endpoints::balances(group_id)).await },
            )
            .await?)
    }

    /// The current user's balance in a group.
    pub async fn mine(&self, group_id: Uuid) -> Result<Balance, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::MyBalance(group_id),
                vec![ResourceTag::BalanceList(group_id)],
                move || async move { http.get_bytes(&endpoints::my_balance(group_id)).await },
            )
            .await?)
    }

    /// One member's ledger. Registered under the group-wide balance tag as
    /// well, so a finished order refreshes every history view in the group.
    pub async fn history(
        &self,
        group_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<BalanceHistoryEntry>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::BalanceHistory { group_id, user_id },
                vec![
                    ResourceTag::BalanceList(group_id),
                    ResourceTag::BalanceHistory { group_id, user_id },
                ],
                move || async move {
                    http.get_bytes(&endpoints::balance_history(group_id, user_id)).await
                },
            )
            .await?)
    }

    /// Manual correction (top-up or write-off) by a balances editor.
    pub async fn adjust(
        &self,
        group_id: Uuid,
        request: &BalanceAdjustRequest,
    ) -> Result<Balance, ClientError> {
        let balance: Balance = self
            .http
            .post(&endpoints::balance_adjust(group_id), request)
            .await?;
        self.trigger.mutation_committed(MutationKind::BalanceAdjusted {
            group_id,
            user_id: request.user_id,
        });
        Ok(balance)
    }
}
