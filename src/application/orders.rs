//! Order lifecycle, item, and favorite operations.
//!
//! Status changes are pre-validated against the order state machine before
//! any request leaves the client, so an impossible transition fails fast
//! with a typed error instead of a server round trip.

use std::sync::Arc;

use mensa_api_types::{
    FavoriteDish, MessageResponse, Order, OrderCreateRequest, OrderDetail, OrderItem,
    OrderItemCreateRequest, OrderItemUpdateRequest, OrderStatus, OrderStatusRequest,
    SetDeliveryFeeRequest,
};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::domain::{self, DomainError};
use crate::infra::{HttpClient, endpoints};

pub struct OrdersService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
}

impl OrdersService {
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

    pub async fn list(&self, group_id: Uuid) -> Result<Vec<Order>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::OrderList(group_id),
                vec![ResourceTag::OrderList(group_id)],
                move || async move { http.get_bytes(&endpoints::orders(group_id)).await },
            )
            .await?)
    }

    /// The group's currently running order, if any.
    pub async fn active(&self, group_id: Uuid) -> Result<Option<OrderDetail>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::ActiveOrder(group_id),
                vec![ResourceTag::ActiveOrder(group_id)],
                move || async move { http.get_bytes(&endpoints::active_order(group_id)).await },
            )
            .await?)
    }

    pub async fn get(&self, group_id: Uuid, order_id: Uuid) -> Result<OrderDetail, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::Order(order_id),
                vec![
                    ResourceTag::Order(order_id),
                    ResourceTag::OrderItemList(order_id),
                ],
                move || async move { http.get_bytes(&endpoints::order(group_id, order_id)).await },
            )
            .await?)
    }

    pub async fn create(
        &self,
        group_id: Uuid,
        request: &OrderCreateRequest,
    ) -> Result<Order, ClientError> {
        let order: Order = self.http.post(&endpoints::orders(group_id), request).await?;
        self.trigger
            .mutation_committed(MutationKind::OrderCreated { group_id });
        Ok(order)
    }

    /// Move an order along its lifecycle. `current` is the status the caller
    /// last observed; the edge `current → new_status` must exist in the
    /// state machine.
    pub async fn update_status(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        current: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<Order, ClientError> {
        domain::orders::check_transition(current, new_status)?;

        let request = OrderStatusRequest { status: new_status };
        let order: Order = self
            .http
            .patch(&endpoints::order_status(group_id, order_id), &request)
            .await?;
        self.trigger.mutation_committed(MutationKind::OrderStatusChanged {
            group_id,
            order_id,
            new_status,
        });
        Ok(order)
    }

    /// Cancel from whatever non-terminal status the order is in.
    pub async fn cancel(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        current: OrderStatus,
    ) -> Result<Order, ClientError> {
        self.update_status(group_id, order_id, current, OrderStatus::Cancelled)
            .await
    }

    /// Set the delivery fee. Exactly one of total or per-person must be
    /// given; the fee is only editable while the order is running.
    pub async fn set_delivery_fee(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        current: OrderStatus,
        request: &SetDeliveryFeeRequest,
    ) -> Result<Order, ClientError> {
        if !domain::orders::delivery_fee_editable(current) {
            return Err(DomainError::validation(format!(
                "delivery fee cannot be changed on a {current} order"
            ))
            .into());
        }
        match (&request.delivery_fee_total, &request.delivery_fee_per_person) {
            (Some(_), None) | (None, Some(_)) => {}
            _ => {
                return Err(DomainError::validation(
                    "exactly one of total or per-person fee must be given",
                )
                .into());
            }
        }

        let order: Order = self
            .http
            .put(&endpoints::order_delivery_fee(group_id, order_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::DeliveryFeeSet { group_id, order_id });
        Ok(order)
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub async fn items(&self, group_id: Uuid, order_id: Uuid) -> Result<Vec<OrderItem>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::OrderItemList(order_id),
                vec![ResourceTag::OrderItemList(order_id)],
                move || async move {
                    http.get_bytes(&endpoints::order_items(group_id, order_id)).await
                },
            )
            .await?)
    }

    pub async fn add_item(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        request: &OrderItemCreateRequest,
    ) -> Result<OrderItem, ClientError> {
        let item: OrderItem = self
            .http
            .post(&endpoints::order_items(group_id, order_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::OrderItemsChanged { group_id, order_id });
        Ok(item)
    }

    pub async fn update_item(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        item_id: Uuid,
        request: &OrderItemUpdateRequest,
    ) -> Result<OrderItem, ClientError> {
        let item: OrderItem = self
            .http
            .patch(&endpoints::order_item(group_id, order_id, item_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::OrderItemsChanged { group_id, order_id });
        Ok(item)
    }

    pub async fn remove_item(
        &self,
        group_id: Uuid,
        order_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), ClientError> {
        self.http
            .delete(&endpoints::order_item(group_id, order_id, item_id))
            .await?;
        self.trigger
            .mutation_committed(MutationKind::OrderItemsChanged { group_id, order_id });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    pub async fn favorites(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Vec<FavoriteDish>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::FavoriteList {
                    group_id,
                    restaurant_id,
                },
                vec![ResourceTag::FavoriteList {
                    group_id,
                    restaurant_id,
                }],
                move || async move {
                    http.get_bytes(&endpoints::favorites(group_id, restaurant_id)).await
                },
            )
            .await?)
    }

    pub async fn toggle_favorite(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
        dish_id: Uuid,
    ) -> Result<(), ClientError> {
        let body = serde_json::json!({ "dish_id": dish_id });
        let _: MessageResponse = self
            .http
            .post(&endpoints::favorites(group_id, restaurant_id), &body)
            .await?;
        self.trigger.mutation_committed(MutationKind::FavoriteToggled {
            group_id,
            restaurant_id,
        });
        Ok(())
    }
}
