#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::{
    DishCreateRequest, DishUpdateRequest, RestaurantCreateRequest, RestaurantUpdateRequest,
};

use crate::CliError;
use crate::args::RestaurantsCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: RestaurantsCmd) -> Result<(), CliError> {
    match cmd {
        RestaurantsCmd::List { group } => {
            let restaurants = client.restaurants().list(group).await?;
            print_json(&restaurants)
        }
        RestaurantsCmd::Get { group, id } => {
            let detail = client.restaurants().get(group, id).await?;
            print_json(&detail)
        }
        RestaurantsCmd::Create {
            group,
            name,
            description,
        } => {
            let request = RestaurantCreateRequest { name, description };
            let restaurant = client.restaurants().create(group, &request).await?;
            print_json(&restaurant)
        }
        RestaurantsCmd::Update {
            group,
            id,
            name,
            description,
        } => {
            let request = RestaurantUpdateRequest { name, description };
            let restaurant = client.restaurants().update(group, id, &request).await?;
            print_json(&restaurant)
        }
        RestaurantsCmd::Delete { group, id } => {
            client.restaurants().delete(group, id).await?;
            println!("deleted {id}");
            Ok(())
        }
        RestaurantsCmd::Dishes { group, restaurant } => {
            let dishes = client.restaurants().dishes(group, restaurant).await?;
            print_json(&dishes)
        }
        RestaurantsCmd::AddDish {
            group,
            restaurant,
            name,
            detail,
            price,
        } => {
            let request = DishCreateRequest {
                name,
                detail,
                price,
            };
            let dish = client.restaurants().add_dish(group, restaurant, &request).await?;
            print_json(&dish)
        }
        RestaurantsCmd::UpdateDish {
            group,
            restaurant,
            id,
            name,
            detail,
            price,
        } => {
            let request = DishUpdateRequest {
                name,
                detail,
                price,
            };
            let dish = client
                .restaurants()
                .update_dish(group, restaurant, id, &request)
                .await?;
            print_json(&dish)
        }
        RestaurantsCmd::RemoveDish {
            group,
            restaurant,
            id,
        } => {
            client.restaurants().remove_dish(group, restaurant, id).await?;
            println!("removed {id}");
            Ok(())
        }
    }
}
