#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;

use crate::CliError;
use crate::args::AnalyticsCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: AnalyticsCmd) -> Result<(), CliError> {
    match cmd {
        AnalyticsCmd::Group { id } => {
            let analytics = client.analytics().group(id).await?;
            print_json(&analytics)
        }
        AnalyticsCmd::Me => {
            let analytics = client.analytics().me().await?;
            print_json(&analytics)
        }
    }
}
