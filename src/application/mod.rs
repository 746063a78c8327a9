//! Application services: one per API surface, bundled behind [`MensaClient`].

pub mod analytics;
pub mod auth;
pub mod balances;
pub mod error;
pub mod groups;
pub mod orders;
pub mod restaurants;
pub mod users;

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use balances::BalancesService;
pub use error::ClientError;
pub use groups::GroupsService;
pub use orders::OrdersService;
pub use restaurants::RestaurantsService;
pub use users::UsersService;

use crate::cache::{CacheConfig, CacheTrigger, QueryStore, ResourceFetcher, TagRegistry};
use crate::config::Settings;
use crate::domain::settlement::{self, Settlement};
use crate::infra::{HttpClient, Session};

/// Facade over the whole client: shared transport, session, and cache, with
/// one service per API surface.
pub struct MensaClient {
    session: Session,
    auth: AuthService,
    users: UsersService,
    groups: GroupsService,
    restaurants: RestaurantsService,
    orders: OrdersService,
    balances: BalancesService,
    analytics: AnalyticsService,
}

impl MensaClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let session = Session::new();
        let http = HttpClient::new(&settings.api, session.clone())?;

        let cache_config = CacheConfig::from(&settings.cache);
        let store = Arc::new(QueryStore::new(&cache_config));
        let registry = Arc::new(TagRegistry::new());
        let fetcher = Arc::new(ResourceFetcher::new(
            cache_config.clone(),
            Arc::clone(&store),
            Arc::clone(&registry),
        ));
        let trigger = Arc::new(CacheTrigger::new(cache_config, store, registry));

        Ok(Self {
            auth: AuthService::new(
                http.clone(),
                Arc::clone(&fetcher),
                Arc::clone(&trigger),
                session.clone(),
            ),
            users: UsersService::new(http.clone(), Arc::clone(&fetcher), Arc::clone(&trigger)),
            groups: GroupsService::new(http.clone(), Arc::clone(&fetcher), Arc::clone(&trigger)),
            restaurants: RestaurantsService::new(
                http.clone(),
                Arc::clone(&fetcher),
                Arc::clone(&trigger),
            ),
            orders: OrdersService::new(http.clone(), Arc::clone(&fetcher), Arc::clone(&trigger)),
            balances: BalancesService::new(http.clone(), Arc::clone(&fetcher), Arc::clone(&trigger)),
            analytics: AnalyticsService::new(http, fetcher),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn users(&self) -> &UsersService {
        &self.users
    }

    pub fn groups(&self) -> &GroupsService {
        &self.groups
    }

    pub fn restaurants(&self) -> &RestaurantsService {
        &self.restaurants
    }

    pub fn orders(&self) -> &OrdersService {
        &self.orders
    }

    pub fn balances(&self) -> &BalancesService {
        &self.balances
    }

    pub fn analytics(&self) -> &AnalyticsService {
        &self.analytics
    }

    /// Preview the settlement a finish would produce: per-participant
    /// subtotals, the equal fee share, and the balances each participant
    /// would land on. Purely local arithmetic over the order detail and the
    /// group's current balances.
    pub async fn settlement_preview(
        &self,
        group_id: Uuid,
        order_id: Uuid,
    ) -> Result<Settlement, ClientError> {
        let detail = self.orders.get(group_id, order_id).await?;
        let balances = self.balances.list(group_id).await?;

        let prior: HashMap<Uuid, _> = balances
            .into_iter()
            .map(|balance| (balance.user_id, balance.amount))
            .collect();

        Ok(settlement::settle(
            &detail.items,
            detail.order.delivery_fee_total,
            &prior,
        ))
    }
}
