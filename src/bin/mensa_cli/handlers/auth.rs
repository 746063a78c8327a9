#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::RegisterRequest;

use crate::CliError;
use crate::args::AuthCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: AuthCmd) -> Result<(), CliError> {
    match cmd {
        AuthCmd::Login { email, password } => {
            let user = client.auth().login(&email, &password).await?;
            print_json(&user)
        }
        AuthCmd::Register {
            email,
            password,
            full_name,
        } => {
            let request = RegisterRequest {
                email,
                password,
                full_name,
            };
            let user = client.auth().register(&request).await?;
            print_json(&user)
        }
        AuthCmd::Logout => {
            client.auth().logout().await?;
            println!("logged out");
            Ok(())
        }
        AuthCmd::Me => {
            let user = client.auth().me().await?;
            print_json(&user)
        }
    }
}
