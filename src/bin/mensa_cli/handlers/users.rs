#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::{AdminUserUpdateRequest, UserUpdateRequest};

use crate::CliError;
use crate::args::UsersCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: UsersCmd) -> Result<(), CliError> {
    match cmd {
        UsersCmd::List => {
            let users = client.users().list().await?;
            print_json(&users)
        }
        UsersCmd::Update {
            id,
            full_name,
            navigate_to_active_order,
        } => {
            let request = UserUpdateRequest {
                full_name,
                email: None,
                navigate_to_active_order,
            };
            let user = client.users().update_profile(id, &request).await?;
            print_json(&user)
        }
        UsersCmd::AdminUpdate {
            id,
            is_active,
            is_admin,
        } => {
            let request = AdminUserUpdateRequest {
                is_active,
                is_admin,
                ..Default::default()
            };
            let user = client.users().admin_update(id, &request).await?;
            print_json(&user)
        }
    }
}
