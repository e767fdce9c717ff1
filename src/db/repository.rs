//! Database repository for CRUD operations.
//!
//! Uses prepared statements and transactions for data integrity.

use chrono::Utc;
use sqlx::{Row, SqliteExecutor, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    CreateMemberRequest, CreateSkillRequest, Member, MemberSkill, Skill, SkillLevel,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ==================== MEMBER OPERATIONS ====================

    /// List every member with their rated skills, ordered by member name.
    ///
    /// Members without assignments are included with an empty skill list.
    pub async fn list_members_with_skills(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query(
            r#"SELECT m.id, m.name, m.role, m.avatar, m.created_at,
                      s.name AS skill_name, s.icon AS skill_icon, ms.level
               FROM members m
               LEFT JOIN member_skills ms ON ms.member_id = m.id
               LEFT JOIN skills s ON s.id = ms.skill_id
               ORDER BY m.name, m.id, s.name"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(group_member_rows(rows.iter().map(member_skill_row_from_row)))
    }

    /// Get a member by ID, with skills.
    pub async fn get_member(&self, id: i64) -> Result<Option<Member>, AppError> {
        let rows = sqlx::query(
            r#"SELECT m.id, m.name, m.role, m.avatar, m.created_at,
                      s.name AS skill_name, s.icon AS skill_icon, ms.level
               FROM members m
               LEFT JOIN member_skills ms ON ms.member_id = m.id
               LEFT JOIN skills s ON s.id = ms.skill_id
               WHERE m.id = ?
               ORDER BY s.name"#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_member_rows(rows.iter().map(member_skill_row_from_row))
            .into_iter()
            .next())
    }

    /// Create a new member. The avatar falls back to the default when omitted.
    pub async fn create_member(&self, request: &CreateMemberRequest) -> Result<Member, AppError> {
        let now = Utc::now().to_rfc3339();
        let name = request.name.trim();
        let role = request.role.trim();
        let avatar = request.avatar_or_default();

        let result =
            sqlx::query("INSERT INTO members (name, role, avatar, created_at) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(role)
                .bind(avatar)
                .bind(&now)
                .execute(&self.pool)
                .await?;

        let id = result.last_insert_rowid();
        tracing::info!(member_id = id, "Member {} added", name);

        Ok(Member {
            id,
            name: name.to_string(),
            role: role.to_string(),
            avatar: avatar.to_string(),
            created_at: now,
            skills: Vec::new(),
        })
    }

    /// Whether a member with this ID exists.
    pub async fn member_exists(&self, id: i64) -> Result<bool, AppError> {
        member_exists_with(&self.pool, id).await
    }

    /// Number of members in the store.
    pub async fn count_members(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM members")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    // ==================== SKILL OPERATIONS ====================

    /// List all skills ordered by category, then name.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query("SELECT id, name, category, icon FROM skills ORDER BY category, name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(skill_from_row).collect())
    }

    /// Get a skill by ID.
    pub async fn get_skill(&self, id: i64) -> Result<Option<Skill>, AppError> {
        let row = sqlx::query("SELECT id, name, category, icon FROM skills WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(skill_from_row))
    }

    /// Whether a skill with this ID exists.
    pub async fn skill_exists(&self, id: i64) -> Result<bool, AppError> {
        skill_exists_with(&self.pool, id).await
    }

    /// Create a new skill. Fails with `Conflict` if the name is taken.
    pub async fn create_skill(&self, request: &CreateSkillRequest) -> Result<Skill, AppError> {
        let name = request.name.trim();
        let category = request.category.trim();
        let icon = request.icon_or_default();

        let result = sqlx::query("INSERT INTO skills (name, category, icon) VALUES (?, ?, ?)")
            .bind(name)
            .bind(category)
            .bind(icon)
            .execute(&self.pool)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => {
                    AppError::Conflict(format!("Skill '{}' already exists", name))
                }
                other => other,
            })?;

        let id = result.last_insert_rowid();
        tracing::info!(skill_id = id, "Skill {} added", name);

        Ok(Skill {
            id,
            name: name.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
        })
    }

    // ==================== ASSIGNMENT OPERATIONS ====================

    /// Rate a member on a skill, replacing any earlier rating for the pair.
    ///
    /// The existence guards and the write are one statement, so the write lock
    /// is taken up front and no read snapshot can go stale in between.
    pub async fn upsert_assignment(
        &self,
        member_id: i64,
        skill_id: i64,
        level: SkillLevel,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"INSERT INTO member_skills (member_id, skill_id, level)
               SELECT ?, ?, ?
               WHERE EXISTS (SELECT 1 FROM members WHERE id = ?)
                 AND EXISTS (SELECT 1 FROM skills WHERE id = ?)
               ON CONFLICT (member_id, skill_id) DO UPDATE SET level = excluded.level"#,
        )
        .bind(member_id)
        .bind(skill_id)
        .bind(level.get() as i64)
        .bind(member_id)
        .bind(skill_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            let mut conn = self.pool.acquire().await?;
            if !member_exists_with(&mut *conn, member_id).await? {
                return Err(AppError::NotFound(format!("Member {} not found", member_id)));
            }
            if !skill_exists_with(&mut *conn, skill_id).await? {
                return Err(AppError::NotFound(format!("Skill {} not found", skill_id)));
            }
            return Err(AppError::NotFound(format!(
                "Member {} or skill {} not found",
                member_id, skill_id
            )));
        }

        tracing::debug!(member_id, skill_id, level = level.get(), "Assignment stored");
        Ok(())
    }

    /// Remove a member's rating on a skill.
    pub async fn remove_assignment(&self, member_id: i64, skill_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM member_skills WHERE member_id = ? AND skill_id = ?")
            .bind(member_id)
            .bind(skill_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Member {} has no rating for skill {}",
                member_id, skill_id
            )));
        }

        tracing::debug!(member_id, skill_id, "Assignment removed");
        Ok(())
    }

    /// Number of stored assignments.
    pub async fn count_assignments(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM member_skills")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }
}

/// Existence check that runs on any executor: the pool, a pooled connection
/// or an open transaction (`&mut *tx`).
pub async fn member_exists_with<'e, E>(executor: E, id: i64) -> Result<bool, AppError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT 1 FROM members WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// See [`member_exists_with`].
pub async fn skill_exists_with<'e, E>(executor: E, id: i64) -> Result<bool, AppError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT 1 FROM skills WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// One row of the member/skill LEFT JOIN. Skill columns are `None` for members
/// without assignments.
#[derive(Debug, Clone)]
struct MemberSkillRow {
    id: i64,
    name: String,
    role: String,
    avatar: String,
    created_at: String,
    skill: Option<MemberSkill>,
}

/// Fold flat join rows into members. Rows of one member must be adjacent,
/// which the `ORDER BY m.name, m.id` of the join guarantees.
fn group_member_rows(rows: impl IntoIterator<Item = MemberSkillRow>) -> Vec<Member> {
    let mut members: Vec<Member> = Vec::new();

    for row in rows {
        match members.last_mut() {
            Some(member) if member.id == row.id => {
                member.skills.extend(row.skill);
            }
            _ => members.push(Member {
                id: row.id,
                name: row.name,
                role: row.role,
                avatar: row.avatar,
                created_at: row.created_at,
                skills: row.skill.into_iter().collect(),
            }),
        }
    }

    members
}

// Helper functions for row conversion

fn member_skill_row_from_row(row: &sqlx::sqlite::SqliteRow) -> MemberSkillRow {
    let skill_name: Option<String> = row.get("skill_name");
    let skill_icon: Option<String> = row.get("skill_icon");
    let level: Option<i64> = row.get("level");

    let skill = match (skill_name, level) {
        (Some(name), Some(level)) => Some(MemberSkill {
            name,
            level: level.clamp(0, u8::MAX as i64) as u8,
            icon: skill_icon.unwrap_or_default(),
        }),
        _ => None,
    };

    MemberSkillRow {
        id: row.get("id"),
        name: row.get("name"),
        role: row.get("role"),
        avatar: row.get("avatar"),
        created_at: row.get("created_at"),
        skill,
    }
}

fn skill_from_row(row: &sqlx::sqlite::SqliteRow) -> Skill {
    Skill {
        id: row.get("id"),
        name: row.get("name"),
        category: row.get("category"),
        icon: row.get("icon"),
    }
}
