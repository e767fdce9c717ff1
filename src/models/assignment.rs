//! Member/skill assignment model.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Lowest rating a member can hold on a skill.
pub const MIN_LEVEL: i64 = 1;
/// Highest rating a member can hold on a skill.
pub const MAX_LEVEL: i64 = 5;

/// A validated skill level in `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn new(level: i64) -> Result<Self, AppError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(AppError::Validation(format!(
                "Level must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, level
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = AppError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

/// Request body for rating a member on a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignSkillRequest {
    pub member_id: i64,
    pub skill_id: i64,
    pub level: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(SkillLevel::new(0).is_err());
        assert!(SkillLevel::new(6).is_err());
        assert!(SkillLevel::new(-3).is_err());
        for level in MIN_LEVEL..=MAX_LEVEL {
            assert_eq!(SkillLevel::new(level).unwrap().get() as i64, level);
        }
    }

    #[test]
    fn test_level_error_is_validation() {
        let err = SkillLevel::try_from(9).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
