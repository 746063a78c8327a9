#![deny(clippy::all, clippy::pedantic)]

pub mod analytics;
pub mod auth;
pub mod balances;
pub mod groups;
pub mod orders;
pub mod restaurants;
pub mod users;
