//! Mirrored dashboard state and derived statistics.

use crate::models::{Member, Skill};

/// Last-fetched members and skills plus the member whose skills are being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub members: Vec<Member>,
    pub skills: Vec<Skill>,
    pub current_member_id: Option<i64>,
}

impl DashboardState {
    pub fn member(&self, id: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn skill(&self, id: i64) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// The member selected for the assignment dialog, if it is still loaded.
    pub fn current_member(&self) -> Option<&Member> {
        self.current_member_id.and_then(|id| self.member(id))
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_state(self)
    }
}

/// Summary numbers shown above the member grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_members: usize,
    pub total_skills: usize,
    pub total_assignments: usize,
    /// Mean level over every assignment, one decimal place; 0 when there are none
    pub average_level: f64,
}

impl DashboardStats {
    pub fn from_state(state: &DashboardState) -> Self {
        let (sum, count) = state
            .members
            .iter()
            .flat_map(|m| m.skills.iter())
            .fold((0u64, 0usize), |(sum, count), skill| {
                (sum + skill.level as u64, count + 1)
            });

        Self {
            total_members: state.members.len(),
            total_skills: state.skills.len(),
            total_assignments: count,
            average_level: average_level(sum, count),
        }
    }

    /// Average formatted the way the dashboard shows it: "0" or one decimal.
    pub fn average_label(&self) -> String {
        if self.total_assignments == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_level)
        }
    }
}

fn average_level(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 10.0).round() / 10.0
}
