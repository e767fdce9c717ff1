//! Skill catalog model.

use serde::{Deserialize, Serialize};

/// Icon used when a skill is created without one.
pub const DEFAULT_ICON: &str = "⚡";

/// A skill members can be rated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub icon: String,
}

/// Request body for creating a new skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CreateSkillRequest {
    /// The icon to store: the caller's, or the default when absent or blank.
    pub fn icon_or_default(&self) -> &str {
        match self.icon.as_deref().map(str::trim) {
            Some(icon) if !icon.is_empty() => icon,
            _ => DEFAULT_ICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_defaults() {
        let request = CreateSkillRequest {
            name: "Rust".into(),
            category: "Systems".into(),
            icon: None,
        };
        assert_eq!(request.icon_or_default(), DEFAULT_ICON);

        let request = CreateSkillRequest {
            icon: Some("🦀".into()),
            ..request
        };
        assert_eq!(request.icon_or_default(), "🦀");
    }
}
