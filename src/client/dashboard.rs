//! Dashboard controller: user actions, reloads and notifications.

use std::time::Instant;

use super::{ClientError, DashboardState, SkillsClient};
use crate::models::{CreateMemberRequest, CreateSkillRequest};
use crate::render;
use crate::ui::{ModalId, Modals, Toasts};

/// Drives the dashboard. Every successful mutation is followed by a full
/// reload of the affected lists; failures leave the last-known state intact.
#[derive(Debug)]
pub struct Dashboard {
    client: SkillsClient,
    state: DashboardState,
    modals: Modals,
    toasts: Toasts,
}

impl Dashboard {
    pub fn new(client: SkillsClient) -> Self {
        Self {
            client,
            state: DashboardState::default(),
            modals: Modals::default(),
            toasts: Toasts::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Initial load of members and skills.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        let members = self.refresh_members().await;
        let skills = self.refresh_skills().await;
        members.and(skills)
    }

    /// Reload the member list. On failure the previous list is kept.
    pub async fn refresh_members(&mut self) -> Result<(), ClientError> {
        match self.client.list_members().await {
            Ok(members) => {
                self.state.members = members;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load members: {}", e);
                self.toasts.error("❌ Failed to load crew members");
                Err(e)
            }
        }
    }

    /// Reload the skill catalog. On failure the previous list is kept.
    pub async fn refresh_skills(&mut self) -> Result<(), ClientError> {
        match self.client.list_skills().await {
            Ok(skills) => {
                self.state.skills = skills;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load skills: {}", e);
                self.toasts.error("❌ Failed to load skills");
                Err(e)
            }
        }
    }

    pub fn open_modal(&mut self, id: ModalId) {
        self.modals.open(id);
    }

    pub fn close_modal(&mut self, id: ModalId) {
        self.modals.close(id);
    }

    /// Submit the add-member form. Returns the new member id.
    pub async fn add_member(&mut self, form: CreateMemberRequest) -> Result<i64, ClientError> {
        let created = match self.client.create_member(&form).await {
            Ok(created) => created,
            Err(e) => return Err(self.failed("Failed to add crew member", e)),
        };

        // The member exists server-side; a failed reload has already toasted.
        let _ = self.refresh_members().await;
        self.modals.close(ModalId::AddMember);
        self.toasts.success("🎉 New crew member added!");
        Ok(created.id)
    }

    /// Submit the add-skill form. Returns the new skill id.
    pub async fn add_skill(&mut self, form: CreateSkillRequest) -> Result<i64, ClientError> {
        let created = match self.client.create_skill(&form).await {
            Ok(created) => created,
            Err(e) => return Err(self.failed("Failed to add skill", e)),
        };

        let _ = self.refresh_skills().await;
        self.modals.close(ModalId::AddSkill);
        self.toasts.success("⚡ New skill discovered!");
        Ok(created.id)
    }

    /// Select a member and show the assignment dialog for them.
    pub fn open_skill_assignment(&mut self, member_id: i64) -> Result<(), ClientError> {
        if self.state.member(member_id).is_none() {
            return Err(ClientError::UnknownMember(member_id));
        }
        self.state.current_member_id = Some(member_id);
        self.modals.open(ModalId::AssignSkill);
        Ok(())
    }

    /// Set the selected member's level on a skill; level 0 removes the rating.
    pub async fn set_skill_level(&mut self, skill_id: i64, level: u8) -> Result<(), ClientError> {
        let member = self
            .state
            .current_member()
            .ok_or(ClientError::NoMemberSelected)?;
        let member_id = member.id;
        let current = self
            .state
            .skill(skill_id)
            .map(|skill| member.level_for(&skill.name))
            .unwrap_or(0);

        if level == 0 {
            if current > 0 {
                if let Err(e) = self.client.remove_skill(member_id, skill_id).await {
                    return Err(self.failed("Failed to update skill", e));
                }
                let _ = self.refresh_members().await;
            }
            self.toasts.success("🗑️ Skill removed");
            return Ok(());
        }

        if let Err(e) = self
            .client
            .assign_skill(member_id, skill_id, level as i64)
            .await
        {
            return Err(self.failed("Failed to update skill", e));
        }
        let _ = self.refresh_members().await;
        self.toasts
            .success(format!("⚡ Skill level updated to {}", level));
        Ok(())
    }

    /// Full HTML of the dashboard body as it currently stands.
    pub fn render(&mut self) -> String {
        let now = Instant::now();
        self.toasts.prune(now);
        let toasts: Vec<_> = self.toasts.visible(now).collect();
        render::dashboard(&self.state, &self.modals, &toasts)
    }

    fn failed(&mut self, action: &str, err: ClientError) -> ClientError {
        tracing::warn!("{}: {}", action, err);
        self.toasts.error(format!("❌ {}", action));
        err
    }
}
