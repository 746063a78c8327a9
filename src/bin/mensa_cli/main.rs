//! mensa: command-line client for the group lunch ordering API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod handlers;
mod print;

use clap::Parser;
use thiserror::Error;

use args::{Cli, Commands};
use mensa::MensaClient;
use mensa::application::ClientError;
use mensa::config::{self, LoadError, Overrides};
use mensa::infra::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{0}")]
    Output(String),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let overrides = Overrides {
        base_url: cli.api_url.clone(),
        timeout_secs: cli.timeout_secs,
        no_cache: cli.no_cache,
        log_level: cli.log_level.clone(),
        log_json: cli.log_json.then_some(true),
    };
    let settings = config::load(cli.config_file.as_deref(), &overrides)?;
    telemetry::init(&settings.logging)?;

    let client = MensaClient::new(&settings)?;

    match cli.command {
        Commands::Auth(cmd) => handlers::auth::handle(&client, cmd.action).await?,
        Commands::Users(cmd) => handlers::users::handle(&client, cmd.action).await?,
        Commands::Groups(cmd) => handlers::groups::handle(&client, cmd.action).await?,
        Commands::Restaurants(cmd) => handlers::restaurants::handle(&client, cmd.action).await?,
        Commands::Orders(cmd) => handlers::orders::handle(&client, cmd.action).await?,
        Commands::Balances(cmd) => handlers::balances::handle(&client, cmd.action).await?,
        Commands::Analytics(cmd) => handlers::analytics::handle(&client, cmd.action).await?,
    }

    Ok(())
}
