#![deny(clippy::all, clippy::pedantic)]

use mensa::MensaClient;
use mensa_api_types::{
    GroupCreateRequest, GroupMemberCreateRequest, GroupMemberUpdateRequest, GroupUpdateRequest,
    InvitationCreateRequest,
};

use crate::CliError;
use crate::args::GroupsCmd;
use crate::print::print_json;

pub async fn handle(client: &MensaClient, cmd: GroupsCmd) -> Result<(), CliError> {
    match cmd {
        GroupsCmd::List => {
            let groups = client.groups().list().await?;
            print_json(&groups)
        }
        GroupsCmd::Get { id } => {
            let detail = client.groups().get(id).await?;
            print_json(&detail)
        }
        GroupsCmd::Create { name, description } => {
            let request = GroupCreateRequest { name, description };
            let group = client.groups().create(&request).await?;
            print_json(&group)
        }
        GroupsCmd::Update {
            id,
            name,
            description,
        } => {
            let request = GroupUpdateRequest { name, description };
            let group = client.groups().update(id, &request).await?;
            print_json(&group)
        }
        GroupsCmd::Delete { id } => {
            client.groups().delete(id).await?;
            println!("deleted {id}");
            Ok(())
        }
        GroupsCmd::Members { group } => {
            let members = client.groups().members(group).await?;
            print_json(&members)
        }
        GroupsCmd::AddMember { group, user, role } => {
            let request = GroupMemberCreateRequest {
                user_id: user,
                role: role.into(),
                members_scope: None,
                orders_scope: None,
                balances_scope: None,
                analytics_scope: None,
                restaurants_scope: None,
            };
            let member = client.groups().add_member(group, &request).await?;
            print_json(&member)
        }
        GroupsCmd::UpdateMember { group, user, role } => {
            let request = GroupMemberUpdateRequest {
                role: Some(role.into()),
                ..Default::default()
            };
            let member = client.groups().update_member(group, user, &request).await?;
            print_json(&member)
        }
        GroupsCmd::RemoveMember { group, user } => {
            client.groups().remove_member(group, user).await?;
            println!("removed {user}");
            Ok(())
        }
        GroupsCmd::Invitations { group } => {
            let invitations = client.groups().invitations(group).await?;
            print_json(&invitations)
        }
        GroupsCmd::Invite { group, email, role } => {
            let request = InvitationCreateRequest {
                email,
                role: role.into(),
            };
            let invitation = client.groups().invite(group, &request).await?;
            print_json(&invitation)
        }
        GroupsCmd::Accept { token } => {
            let response = client.groups().accept_invitation(&token).await?;
            print_json(&response)
        }
        GroupsCmd::Decline { token } => {
            client.groups().decline_invitation(&token).await?;
            println!("declined");
            Ok(())
        }
    }
}
