#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::{
    OrderCreateRequest, OrderItemCreateRequest, OrderItemUpdateRequest, OrderStatus,
    SetDeliveryFeeRequest,
};

use crate::CliError;
use crate::args::OrdersCmd;
use crate::print::{print_json, print_settlement};

pub async fn handle(client: &MensaClient, cmd: OrdersCmd) -> Result<(), CliError> {
    match cmd {
        OrdersCmd::List { group } => {
            let orders = client.orders().list(group).await?;
            print_json(&orders)
        }
        OrdersCmd::Active { group } => {
            match client.orders().active(group).await? {
                Some(detail) => print_json(&detail),
                None => {
                    println!("no active order");
                    Ok(())
                }
            }
        }
        OrdersCmd::Get { group, id } => {
            let detail = client.orders().get(group, id).await?;
            print_json(&detail)
        }
        OrdersCmd::Create {
            group,
            restaurant,
            restaurant_name,
        } => {
            let request = OrderCreateRequest {
                restaurant_id: restaurant,
                restaurant_name,
            };
            let order = client.orders().create(group, &request).await?;
            print_json(&order)
        }
        OrdersCmd::Status { group, id, to } => {
            let detail = client.orders().get(group, id).await?;
            let to: OrderStatus = to.into();
            // Settlement must be computed against the pre-finish balances;
            // afterwards the server has already moved the money.
            let settlement = if to == OrderStatus::Finished {
                Some(client.settlement_preview(group, id).await?)
            } else {
                None
            };
            let order = client
                .orders()
                .update_status(group, id, detail.order.status, to)
                .await?;
            print_json(&order)?;
            if let Some(settlement) = settlement {
                print_settlement(&settlement);
            }
            Ok(())
        }
        OrdersCmd::Cancel { group, id } => {
            let detail = client.orders().get(group, id).await?;
            let order = client.orders().cancel(group, id, detail.order.status).await?;
            print_json(&order)
        }
        OrdersCmd::Fee {
            group,
            id,
            total,
            per_person,
        } => {
            let detail = client.orders().get(group, id).await?;
            let request = SetDeliveryFeeRequest {
                delivery_fee_total: total,
                delivery_fee_per_person: per_person,
            };
            let order = client
                .orders()
                .set_delivery_fee(group, id, detail.order.status, &request)
                .await?;
            print_json(&order)
        }
        OrdersCmd::Items { group, order } => {
            let items = client.orders().items(group, order).await?;
            print_json(&items)
        }
        OrdersCmd::AddItem {
            group,
            order,
            name,
            detail,
            price,
            quantity,
            dish,
        } => {
            let request = OrderItemCreateRequest {
                name,
                detail,
                price,
                quantity,
                dish_id: dish,
            };
            let item = client.orders().add_item(group, order, &request).await?;
            print_json(&item)
        }
        OrdersCmd::UpdateItem {
            group,
            order,
            id,
            name,
            detail,
            price,
            quantity,
        } => {
            let request = OrderItemUpdateRequest {
                name,
                detail,
                price,
                quantity,
            };
            let item = client.orders().update_item(group, order, id, &request).await?;
            print_json(&item)
        }
        OrdersCmd::RemoveItem { group, order, id } => {
            client.orders().remove_item(group, order, id).await?;
            println!("removed {id}");
            Ok(())
        }
        OrdersCmd::Favorites { group, restaurant } => {
            let favorites = client.orders().favorites(group, restaurant).await?;
            print_json(&favorites)
        }
        OrdersCmd::ToggleFavorite {
            group,
            restaurant,
            dish,
        } => {
            client.orders().toggle_favorite(group, restaurant, dish).await?;
            println!("toggled {dish}");
            Ok(())
        }
        OrdersCmd::Settle { group, id } => {
            let settlement = client.settlement_preview(group, id).await?;
            print_settlement(&settlement);
            Ok(())
        }
    }
}
