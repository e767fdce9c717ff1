//! Team member model.

use serde::{Deserialize, Serialize};

/// Avatar used when a member is created without one.
pub const DEFAULT_AVATAR: &str = "🧑‍💻";

/// A team member together with the skills they have been rated on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub created_at: String,
    /// Derived from the assignment table, ordered by skill name
    #[serde(default)]
    pub skills: Vec<MemberSkill>,
}

impl Member {
    /// Current level for a skill, 0 if the member has not been rated on it.
    /// Skill names are unique, so the name identifies the rating.
    pub fn level_for(&self, skill_name: &str) -> u8 {
        self.skills
            .iter()
            .find(|s| s.name == skill_name)
            .map(|s| s.level)
            .unwrap_or(0)
    }
}

/// One entry of a member's skill list, serialized as `{name, level, icon}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSkill {
    pub name: String,
    pub level: u8,
    pub icon: String,
}

/// Request body for creating a new team member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CreateMemberRequest {
    /// The avatar to store: the caller's, or the default when absent or blank.
    pub fn avatar_or_default(&self) -> &str {
        match self.avatar.as_deref().map(str::trim) {
            Some(avatar) if !avatar.is_empty() => avatar,
            _ => DEFAULT_AVATAR,
        }
    }
}
