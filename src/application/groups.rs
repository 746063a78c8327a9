//! Group, membership, and invitation operations.

use std::sync::Arc;

use mensa_api_types::{
    Group, GroupCreateRequest, GroupDetail, GroupMember, GroupMemberCreateRequest,
    GroupMemberUpdateRequest, GroupUpdateRequest, Invitation, InvitationAcceptResponse,
    InvitationCreateRequest, MessageResponse,
};
use uuid::Uuid;

use super::error::ClientError;
use crate::cache::{CacheTrigger, MutationKind, QueryKey, ResourceFetcher, ResourceTag};
use crate::infra::{HttpClient, endpoints};

pub struct GroupsService {
    http: HttpClient,
    fetcher: Arc<ResourceFetcher>,
    trigger: Arc<CacheTrigger>,
}

impl GroupsService {
    pub fn new(
        http: HttpClient,
        fetcher: Arc<ResourceFetcher>,
        trigger: Arc<CacheTrigger>,
    ) -> Self {
        Self {
            http,
            fetcher,
            trigger,
        }
    }

    /// Groups the current user belongs to.
    pub async fn list(&self) -> Result<Vec<Group>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(QueryKey::GroupList, vec![ResourceTag::GroupList], move || {
                async move { http.get_bytes(endpoints::groups()).await }
            })
            .await?)
    }

    /// One group with its member roster. Depends on both the group and its
    /// member list, so a membership change refreshes the detail too.
    pub async fn get(&self, group_id: Uuid) -> Result<GroupDetail, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::Group(group_id),
                vec![
                    ResourceTag::Group(group_id),
                    ResourceTag::MemberList(group_id),
                ],
                move || async move { http.get_bytes(&endpoints::group(group_id)).await },
            )
            .await?)
    }

    pub async fn create(&self, request: &GroupCreateRequest) -> Result<Group, ClientError> {
        let group: Group = self.http.post(endpoints::groups(), request).await?;
        self.trigger.mutation_committed(MutationKind::GroupCreated);
        Ok(group)
    }

    pub async fn update(
        &self,
        group_id: Uuid,
        request: &GroupUpdateRequest,
    ) -> Result<Group, ClientError> {
        let group: Group = self.http.patch(&endpoints::group(group_id), request).await?;
        self.trigger
            .mutation_committed(MutationKind::GroupUpdated { group_id });
        Ok(group)
    }

    pub async fn delete(&self, group_id: Uuid) -> Result<(), ClientError> {
        self.http.delete(&endpoints::group(group_id)).await?;
        self.trigger
            .mutation_committed(MutationKind::GroupDeleted { group_id });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------

    pub async fn members(&self, group_id: Uuid) -> Result<Vec<GroupMember>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::MemberList(group_id),
                vec![ResourceTag::MemberList(group_id)],
                move || async move { http.get_bytes(&endpoints::group_members(group_id)).await },
            )
            .await?)
    }

    pub async fn add_member(
        &self,
        group_id: Uuid,
        request: &GroupMemberCreateRequest,
    ) -> Result<GroupMember, ClientError> {
        let member: GroupMember = self
            .http
            .post(&endpoints::group_members(group_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::MembersChanged { group_id });
        Ok(member)
    }

    /// Change a member's role or scope overrides.
    pub async fn update_member(
        &self,
        group_id: Uuid,
        user_id: Uuid,
        request: &GroupMemberUpdateRequest,
    ) -> Result<GroupMember, ClientError> {
        let member: GroupMember = self
            .http
            .patch(&endpoints::group_member(group_id, user_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::MembersChanged { group_id });
        Ok(member)
    }

    pub async fn remove_member(&self, group_id: Uuid, user_id: Uuid) -> Result<(), ClientError> {
        self.http
            .delete(&endpoints::group_member(group_id, user_id))
            .await?;
        self.trigger
            .mutation_committed(MutationKind::MembersChanged { group_id });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Invitations
    // ------------------------------------------------------------------

    pub async fn invitations(&self, group_id: Uuid) -> Result<Vec<Invitation>, ClientError> {
        let http = self.http.clone();
        Ok(self
            .fetcher
            .fetch(
                QueryKey::InvitationList(group_id),
                vec![ResourceTag::InvitationList(group_id)],
                move || async move {
                    http.get_bytes(&endpoints::group_invitations(group_id)).await
                },
            )
            .await?)
    }

    pub async fn invite(
        &self,
        group_id: Uuid,
        request: &InvitationCreateRequest,
    ) -> Result<Invitation, ClientError> {
        let invitation: Invitation = self
            .http
            .post(&endpoints::group_invitations(group_id), request)
            .await?;
        self.trigger
            .mutation_committed(MutationKind::InvitationsChanged { group_id });
        Ok(invitation)
    }

    /// Accept an invitation by token. Joins the group, so the own group
    /// list refreshes.
    pub async fn accept_invitation(
        &self,
        token: &str,
    ) -> Result<InvitationAcceptResponse, ClientError> {
        let response: InvitationAcceptResponse = self
            .http
            .post_empty(&endpoints::invitation_accept(token))
            .await?;
        self.trigger
            .mutation_committed(MutationKind::InvitationAnswered);
        Ok(response)
    }

    pub async fn decline_invitation(&self, token: &str) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .http
            .post_empty(&endpoints::invitation_decline(token))
            .await?;
        self.trigger
            .mutation_committed(MutationKind::InvitationAnswered);
        Ok(())
    }
}
