//! Command-line surface for `mensa`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mensa_api_types::{GroupRole, OrderStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "mensa", version, about = "Group lunch ordering CLI", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <http://localhost:8000/api/>
    #[arg(long, env = "MENSA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Optional path to a configuration file.
    #[arg(long, env = "MENSA_CONFIG_FILE", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Disable the client-side query cache.
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session management
    Auth(AuthArgs),
    /// User administration and profile
    Users(UsersArgs),
    /// Groups, members, and invitations
    Groups(GroupsArgs),
    /// Restaurants and dishes
    Restaurants(RestaurantsArgs),
    /// Order lifecycle, items, and favorites
    Orders(OrdersArgs),
    /// Balances and ledger
    Balances(BalancesArgs),
    /// Spending analytics
    Analytics(AnalyticsArgs),
}

#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub action: AuthCmd,
}

#[derive(Subcommand, Debug)]
pub enum AuthCmd {
    /// Log in and persist the session cookie for this invocation
    Login {
        #[arg(long)]
        email: String,
        /// Password from env (CLI flag hidden to avoid shell history leaks)
        #[arg(long, env = "MENSA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "MENSA_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: String,
    },
    /// Log out and drop the session
    Logout,
    /// Show the authenticated user
    Me,
}

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersCmd,
}

#[derive(Subcommand, Debug)]
pub enum UsersCmd {
    /// List all users (admin only)
    List,
    /// Update the own profile
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        navigate_to_active_order: Option<bool>,
    },
    /// Administrative update of another user
    AdminUpdate {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        is_active: Option<bool>,
        #[arg(long)]
        is_admin: Option<bool>,
    },
}

#[derive(Parser, Debug)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub action: GroupsCmd,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCmd {
    /// List groups the current user belongs to
    List,
    /// Show one group with its member roster
    Get { id: Uuid },
    /// Create a group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a group
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a group
    Delete { id: Uuid },
    /// List members of a group
    Members { group: Uuid },
    /// Add a member with a role preset
    AddMember {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        user: Uuid,
        #[arg(long, default_value_t = RoleArg::Member)]
        role: RoleArg,
    },
    /// Change a member's role preset
    UpdateMember {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        role: RoleArg,
    },
    /// Remove a member
    RemoveMember {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        user: Uuid,
    },
    /// List pending invitations
    Invitations { group: Uuid },
    /// Invite a user by email
    Invite {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = RoleArg::Member)]
        role: RoleArg,
    },
    /// Accept an invitation token
    Accept { token: String },
    /// Decline an invitation token
    Decline { token: String },
}

#[derive(Parser, Debug)]
pub struct RestaurantsArgs {
    #[command(subcommand)]
    pub action: RestaurantsCmd,
}

#[derive(Subcommand, Debug)]
pub enum RestaurantsCmd {
    /// List restaurants of a group
    List { group: Uuid },
    /// Show one restaurant with its menu
    Get {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Create a restaurant
    Create {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a restaurant
    Update {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a restaurant
    Delete {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// List dishes of a restaurant
    Dishes {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
    },
    /// Add a dish
    AddDish {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        price: Decimal,
    },
    /// Update a dish
    UpdateDish {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
    },
    /// Remove a dish
    RemoveDish {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub action: OrdersCmd,
}

#[derive(Subcommand, Debug)]
pub enum OrdersCmd {
    /// List orders of a group
    List { group: Uuid },
    /// Show the group's active order
    Active { group: Uuid },
    /// Show one order with its items
    Get {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Start a new order
    Create {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Option<Uuid>,
        #[arg(long)]
        restaurant_name: Option<String>,
    },
    /// Move an order to a new status
    Status {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        to: StatusArg,
    },
    /// Cancel an order
    Cancel {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Set the delivery fee (total or per person, not both)
    Fee {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        total: Option<Decimal>,
        #[arg(long)]
        per_person: Option<Decimal>,
    },
    /// List items of an order
    Items {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        order: Uuid,
    },
    /// Add an item to an order
    AddItem {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        order: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        price: Decimal,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long)]
        dish: Option<Uuid>,
    },
    /// Update an item
    UpdateItem {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        order: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        quantity: Option<u32>,
    },
    /// Remove an item
    RemoveItem {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        order: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// List favorite dishes for a restaurant
    Favorites {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
    },
    /// Toggle a dish as favorite
    ToggleFavorite {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        restaurant: Uuid,
        #[arg(long)]
        dish: Uuid,
    },
    /// Preview the settlement a finish would produce
    Settle {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct BalancesArgs {
    #[command(subcommand)]
    pub action: BalancesCmd,
}

#[derive(Subcommand, Debug)]
pub enum BalancesCmd {
    /// All member balances of a group
    List { group: Uuid },
    /// The own balance in a group
    Me { group: Uuid },
    /// One member's ledger
    History {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        user: Uuid,
    },
    /// Manual balance correction
    Adjust {
        #[arg(long)]
        group: Uuid,
        #[arg(long)]
        user: Uuid,
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Parser, Debug)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub action: AnalyticsCmd,
}

#[derive(Subcommand, Debug)]
pub enum AnalyticsCmd {
    /// Spending breakdown for a group
    Group { id: Uuid },
    /// The own spending across groups
    Me,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Initiated,
    Confirmed,
    Ordered,
    Finished,
    Cancelled,
}

impl From<StatusArg> for OrderStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Initiated => OrderStatus::Initiated,
            StatusArg::Confirmed => OrderStatus::Confirmed,
            StatusArg::Ordered => OrderStatus::Ordered,
            StatusArg::Finished => OrderStatus::Finished,
            StatusArg::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    SupervisorMember,
    Member,
}

impl std::fmt::Display for RoleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoleArg::Admin => "admin",
            RoleArg::SupervisorMember => "supervisor-member",
            RoleArg::Member => "member",
        };
        f.write_str(name)
    }
}

impl From<RoleArg> for GroupRole {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Admin => GroupRole::Admin,
            RoleArg::SupervisorMember => GroupRole::SupervisorMember,
            RoleArg::Member => GroupRole::Member,
        }
    }
}
