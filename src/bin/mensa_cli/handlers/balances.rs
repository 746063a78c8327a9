#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::BalanceAdjustRequest;

use crate::CliError;
use crate::args::BalancesCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: BalancesCmd) -> Result<(), CliError> {
    match cmd {
        BalancesCmd::List { group } => {
            let balances = client.balances().list(group).await?;
            print_json(&balances)
        }
        BalancesCmd::Me { group } => {
            let balance = client.balances().mine(group).await?;
            print_json(&balance)
        }
        BalancesCmd::History { group, user } => {
            let entries = client.balances().history(group, user).await?;
            print_json(&entries)
        }
        BalancesCmd::Adjust {
            group,
            user,
            amount,
            note,
        } => {
            let request = BalanceAdjustRequest {
                user_id: user,
                amount,
                note,
            };
            let balance = client.balances().adjust(group, &request).await?;
            print_json(&balance)
        }
    }
}
