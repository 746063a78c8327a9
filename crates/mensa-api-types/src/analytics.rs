//! Aggregated statistics payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupAnalytics {
    pub total_orders: u32,
    pub completed_orders: u32,
    pub cancelled_orders: u32,
    pub active_orders: u32,
    pub total_members: u32,
    pub total_spent: Decimal,
    pub average_order_value: Decimal,
    pub most_popular_restaurant: Option<String>,
    pub most_active_member: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub total_groups: u32,
    pub total_orders_participated: u32,
    pub total_spent: Decimal,
    pub average_order_value: Decimal,
    pub favorite_restaurant: Option<String>,
    pub total_balance_across_groups: Decimal,
}
