//! HTML rendering of the dashboard.
//!
//! Everything is rebuilt from `DashboardState` on each call; there is no
//! incremental patching. All user-supplied text is escaped.

use std::fmt::Write;

use crate::client::{DashboardState, DashboardStats};
use crate::models::{Member, Skill, MAX_LEVEL};
use crate::ui::{ModalId, Modals, Toast};

/// Complete HTML document for the server-rendered page.
pub fn page(state: &DashboardState) -> String {
    let body = dashboard(state, &Modals::default(), &[]);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skill Matrix</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
{}
<script src="/script.js" defer></script>
</body>
</html>
"#,
        body
    )
}

/// Stats, member grid, open dialogs and visible toasts.
pub fn dashboard(state: &DashboardState, modals: &Modals, toasts: &[&Toast]) -> String {
    let mut html = String::new();
    html.push_str(&stats_panel(&state.stats()));
    html.push_str(&member_grid(&state.members));

    if modals.is_open(ModalId::AssignSkill) {
        if let Some(member) = state.current_member() {
            html.push_str(&assignment_dialog(member, &state.skills));
        }
    }

    if !toasts.is_empty() {
        html.push_str(&toast_stack(toasts));
    }
    html
}

pub fn stats_panel(stats: &DashboardStats) -> String {
    format!(
        r#"<section class="stats">
<div class="stat"><span id="totalMembers">{}</span> Crew Members</div>
<div class="stat"><span id="totalSkills">{}</span> Skills</div>
<div class="stat"><span id="avgSkillLevel">{}</span> Avg Level</div>
</section>
"#,
        stats.total_members,
        stats.total_skills,
        stats.average_label()
    )
}

/// The member grid, or an empty-state notice when there are no members.
pub fn member_grid(members: &[Member]) -> String {
    if members.is_empty() {
        return r#"<div id="membersGrid" class="members-grid">
<div class="empty-state">
<h3>🏴‍☠️ No crew members aboard yet!</h3>
<p>Add your first developer to start tracking skills.</p>
</div>
</div>
"#
        .to_string();
    }

    let mut html = String::from("<div id=\"membersGrid\" class=\"members-grid\">\n");
    for member in members {
        html.push_str(&member_card(member));
    }
    html.push_str("</div>\n");
    html
}

pub fn member_card(member: &Member) -> String {
    let skills = if member.skills.is_empty() {
        "<span class=\"no-skills\">No skills assigned yet</span>".to_string()
    } else {
        member
            .skills
            .iter()
            .map(|skill| {
                format!(
                    "<div class=\"skill-chip\"><span>{} {}</span>{}</div>",
                    escape(&skill.icon),
                    escape(&skill.name),
                    skill_dots(skill.level)
                )
            })
            .collect()
    };

    format!(
        r#"<div class="member-card" data-member-id="{id}">
<div class="member-header">
<div class="member-avatar">{avatar}</div>
<div class="member-info"><h3>{name}</h3><div class="member-role">{role}</div></div>
</div>
<div class="member-skills">
<div class="skills-header"><h4>Skills ({count})</h4><button class="manage-skills-btn" data-member-id="{id}">Manage</button></div>
<div class="skills-list">{skills}</div>
</div>
</div>
"#,
        id = member.id,
        avatar = escape(&member.avatar),
        name = escape(&member.name),
        role = escape(&member.role),
        count = member.skills.len(),
        skills = skills
    )
}

/// Five dots, the first `level` of them filled.
pub fn skill_dots(level: u8) -> String {
    let mut html = String::from("<div class=\"skill-level\">");
    for i in 0..MAX_LEVEL as u8 {
        if i < level {
            html.push_str("<div class=\"skill-dot filled\"></div>");
        } else {
            html.push_str("<div class=\"skill-dot\"></div>");
        }
    }
    html.push_str("</div>");
    html
}

/// Dialog listing every skill with the member's current level (0 if unrated).
pub fn assignment_dialog(member: &Member, skills: &[Skill]) -> String {
    let mut rows = String::new();
    for skill in skills {
        rows.push_str(&assignment_row(skill, member.level_for(&skill.name)));
    }

    format!(
        r#"<div id="{modal}" class="modal active">
<h2 id="assignModalTitle">⚡ Manage Skills - {name}</h2>
<div id="skillsAssignment">
{rows}</div>
</div>
"#,
        modal = ModalId::AssignSkill.element_id(),
        name = escape(&member.name),
        rows = rows
    )
}

pub fn assignment_row(skill: &Skill, current_level: u8) -> String {
    let mut buttons = String::new();
    for level in 1..=MAX_LEVEL as u8 {
        let active = if level <= current_level { " active" } else { "" };
        // Writing to a String cannot fail.
        let _ = write!(
            buttons,
            "<button class=\"level-btn{}\" data-skill-id=\"{}\" data-level=\"{}\">{}</button>",
            active, skill.id, level, level
        );
    }
    let _ = write!(
        buttons,
        "<button class=\"level-btn remove\" data-skill-id=\"{}\" data-level=\"0\">✕</button>",
        skill.id
    );

    format!(
        r#"<div class="skill-assignment-item">
<div class="skill-info"><span>{icon}</span><div><div class="skill-name">{name}</div><div class="skill-category">{category}</div></div></div>
<div class="level-selector">{buttons}</div>
</div>
"#,
        icon = escape(&skill.icon),
        name = escape(&skill.name),
        category = escape(&skill.category),
        buttons = buttons
    )
}

pub fn toast_stack(toasts: &[&Toast]) -> String {
    let mut html = String::from("<div class=\"toasts\">");
    for toast in toasts {
        let _ = write!(
            html,
            "<div class=\"toast {}\">{}</div>",
            toast.kind.css_class(),
            escape(&toast.message)
        );
    }
    html.push_str("</div>\n");
    html
}

/// Plain-text summary: stats line, then one line per member.
pub fn text_report(state: &DashboardState) -> String {
    let stats = state.stats();
    let mut out = format!(
        "{} members, {} skills, average level {}\n",
        stats.total_members,
        stats.total_skills,
        stats.average_label()
    );

    for member in &state.members {
        let skills: Vec<String> = member
            .skills
            .iter()
            .map(|s| format!("{} {} ({})", s.icon, s.name, s.level))
            .collect();
        let _ = writeln!(
            out,
            "{} {} [{}]: {}",
            member.avatar,
            member.name,
            member.role,
            if skills.is_empty() {
                "-".to_string()
            } else {
                skills.join(", ")
            }
        );
    }
    out
}

/// Escape text for HTML element and attribute content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberSkill;
    use crate::ui::{ToastKind, Toasts};
    use std::time::Instant;

    fn ada() -> Member {
        Member {
            id: 1,
            name: "Ada".into(),
            role: "Engineer".into(),
            avatar: "🧑‍💻".into(),
            created_at: "2024-01-01T00:00:00+00:00".into(),
            skills: vec![MemberSkill {
                name: "Rust".into(),
                level: 4,
                icon: "⚡".into(),
            }],
        }
    }

    fn rust() -> Skill {
        Skill {
            id: 10,
            name: "Rust".into(),
            category: "Systems".into(),
            icon: "⚡".into(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b onclick="x()">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x()&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("🦀 plain"), "🦀 plain");
    }

    #[test]
    fn test_empty_grid() {
        let html = member_grid(&[]);
        assert!(html.contains("No crew members aboard yet!"));
    }

    #[test]
    fn test_skill_dots() {
        let html = skill_dots(3);
        assert_eq!(html.matches("skill-dot filled").count(), 3);
        assert_eq!(html.matches("class=\"skill-dot\"").count(), 2);
    }

    #[test]
    fn test_member_card_escapes_user_text() {
        let mut member = ada();
        member.name = "<script>alert(1)</script>".into();
        let html = member_card(&member);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Skills (1)"));
    }

    #[test]
    fn test_assignment_row_marks_current_level() {
        let html = assignment_row(&rust(), 2);
        assert_eq!(html.matches("level-btn active").count(), 2);
        assert!(html.contains("data-level=\"0\""));

        let unrated = assignment_row(&rust(), 0);
        assert_eq!(unrated.matches("level-btn active").count(), 0);
    }

    #[test]
    fn test_dashboard_renders_dialog_only_when_open() {
        let state = DashboardState {
            members: vec![ada()],
            skills: vec![rust()],
            current_member_id: Some(1),
        };

        let closed = dashboard(&state, &Modals::default(), &[]);
        assert!(!closed.contains("skillAssignModal"));
        assert!(closed.contains("<span id=\"avgSkillLevel\">4.0</span>"));

        let mut modals = Modals::default();
        modals.open(ModalId::AssignSkill);
        let open = dashboard(&state, &modals, &[]);
        assert!(open.contains("⚡ Manage Skills - Ada"));
        assert_eq!(open.matches("level-btn active").count(), 4);
    }

    #[test]
    fn test_toasts_rendered() {
        let mut toasts = Toasts::default();
        toasts.push_at("❌ Failed to add skill", ToastKind::Error, Instant::now());
        let visible: Vec<_> = toasts.visible(Instant::now()).collect();
        let html = dashboard(&DashboardState::default(), &Modals::default(), &visible);
        assert!(html.contains("toast toast-error"));
        assert!(html.contains("Failed to add skill"));
    }

    #[test]
    fn test_text_report() {
        let state = DashboardState {
            members: vec![ada()],
            skills: vec![rust()],
            current_member_id: None,
        };
        let report = text_report(&state);
        assert!(report.starts_with("1 members, 1 skills, average level 4.0\n"));
        assert!(report.contains("Ada [Engineer]: ⚡ Rust (4)"));
    }

    #[test]
    fn test_page_is_full_document() {
        let html = page(&DashboardState::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<span id=\"totalMembers\">0</span>"));
    }
}
