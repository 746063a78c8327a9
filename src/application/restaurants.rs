//! Restaurant and dish operations.

use std::sync::Arc;

use mensa_api_types::{
    Dish, DishCreateRequest, DishUpdateRequest, Restaurant, RestaurantCreateRequest,
    RestaurantDetail, RestaurantUpdateRequest,
};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, endpoints};

pub struct RestaurantsService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
}

impl RestaurantsService {
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

    pub async fn list(&self, group_id: Uuid) -> Result<Vec<Restaurant>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::RestaurantList(group_id),
                vec![ResourceTag::RestaurantList(group_id)],
                move || async move { http.get_bytes(&endpoints::restaurants(group_id)).await },
            )
            .await?)
    }

    /// One restaurant with its menu.
    pub async fn get(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<RestaurantDetail, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::Restaurant(restaurant_id),
                vec![
                    ResourceTag::Restaurant(restaurant_id),
                    ResourceTag::DishList(restaurant_id),
                ],
                move || async move {
                    http.get_bytes(&endpoints::restaurant(group_id, restaurant_id))
                        .await
                },
            )
            .await?)
    }

    pub async fn create(
        &self,
        group_id: Uuid,
        request: &RestaurantCreateRequest,
    ) -> Result<Restaurant, ClientError> {
        let restaurant: Restaurant = self
            .http
            .post(&endpoints::restaurants(group_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::RestaurantCreated { group_id });
        Ok(restaurant)
    }

    pub async fn update(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
        request: &RestaurantUpdateRequest,
    ) -> Result<Restaurant, ClientError> {
        let restaurant: Restaurant = self
            .http
            .patch(&endpoints::restaurant(group_id, restaurant_id), request)
            .await?;
        self.trigger.mutation_committed(MutationKind::RestaurantUpdated {
            group_id,
            restaurant_id,
        });
        Ok(restaurant)
    }

    pub async fn delete(&self, group_id: Uuid, restaurant_id: Uuid) -> Result<(), ClientError> {
        self.http
            .delete(&endpoints::restaurant(group_id, restaurant_id))
            .await?;
        self.trigger.mutation_committed(MutationKind::RestaurantDeleted {
            group_id,
            restaurant_id,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dishes
    // ------------------------------------------------------------------

    pub async fn dishes(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Vec<Dish>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::DishList(restaurant_id),
                vec![ResourceTag::DishList(restaurant_id)],
                move || async move {
                    http.get_bytes(&endpoints::dishes(group_id, restaurant_id)).await
                },
            )
            .await?)
    }

    pub async fn add_dish(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
        request: &DishCreateRequest,
    ) -> Result<Dish, ClientError> {
        let dish: Dish = self
            .http
            .post(&endpoints::dishes(group_id, restaurant_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::DishesChanged { restaurant_id });
        Ok(dish)
    }

    pub async fn update_dish(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
        dish_id: Uuid,
        request: &DishUpdateRequest,
    ) -> Result<Dish, ClientError> {
        let dish: Dish = self
            .http
            .patch(&endpoints::dish(group_id, restaurant_id, dish_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::DishesChanged { restaurant_id });
        Ok(dish)
    }

    pub async fn remove_dish(
        &self,
        group_id: Uuid,
        restaurant_id: Uuid,
        dish_id: Uuid,
    ) -> Result<(), ClientError> {
        self.http
            .delete(&endpoints::dish(group_id, restaurant_id, dish_id))
            .await?;
        self.trigger
            .mutation_committed(MutationKind::DishesChanged { restaurant_id });
        Ok(())
    }
}
