//! Sample crew inserted on first startup.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

const SAMPLE_MEMBERS: [(&str, &str, &str); 4] = [
    ("Captain JavaScript", "Full Stack Developer", "🏴‍☠️"),
    ("Admiral Python", "Backend Engineer", "🐍"),
    ("Commander React", "Frontend Specialist", "⚛️"),
    ("Lieutenant Docker", "DevOps Engineer", "🐳"),
];

const SAMPLE_SKILLS: [(&str, &str, &str); 8] = [
    ("JavaScript", "Frontend", "🟨"),
    ("Python", "Backend", "🐍"),
    ("React", "Frontend", "⚛️"),
    ("Node.js", "Backend", "🟢"),
    ("Docker", "DevOps", "🐳"),
    ("SQL", "Database", "🗄️"),
    ("Git", "Tools", "📝"),
    ("AWS", "Cloud", "☁️"),
];

/// (member index, skill index, level), indexes into the arrays above.
const SAMPLE_ASSIGNMENTS: [(usize, usize, i64); 14] = [
    (0, 0, 5),
    (0, 2, 4),
    (0, 3, 5),
    (0, 6, 3),
    (1, 1, 5),
    (1, 3, 4),
    (1, 5, 4),
    (1, 7, 3),
    (2, 0, 4),
    (2, 2, 5),
    (2, 6, 4),
    (3, 4, 5),
    (3, 7, 4),
    (3, 6, 5),
];

/// Insert the sample members, skills and ratings if the member table is empty.
///
/// Runs in one transaction and returns whether anything was inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM members")
        .fetch_one(&mut *tx)
        .await?
        .get("count");
    if count > 0 {
        return Ok(false);
    }

    let now = Utc::now().to_rfc3339();
    let mut member_ids = Vec::with_capacity(SAMPLE_MEMBERS.len());
    for (name, role, avatar) in SAMPLE_MEMBERS {
        let result =
            sqlx::query("INSERT INTO members (name, role, avatar, created_at) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(role)
                .bind(avatar)
                .bind(&now)
                .execute(&mut *tx)
                .await?;
        member_ids.push(result.last_insert_rowid());
    }

    // Existing skills keep their ids; only missing names are inserted.
    let mut skill_ids = Vec::with_capacity(SAMPLE_SKILLS.len());
    for (name, category, icon) in SAMPLE_SKILLS {
        sqlx::query("INSERT OR IGNORE INTO skills (name, category, icon) VALUES (?, ?, ?)")
            .bind(name)
            .bind(category)
            .bind(icon)
            .execute(&mut *tx)
            .await?;
        let id: i64 = sqlx::query("SELECT id FROM skills WHERE name = ?")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?
            .get("id");
        skill_ids.push(id);
    }

    for (member, skill, level) in SAMPLE_ASSIGNMENTS {
        sqlx::query(
            r#"INSERT INTO member_skills (member_id, skill_id, level) VALUES (?, ?, ?)
               ON CONFLICT (member_id, skill_id) DO UPDATE SET level = excluded.level"#,
        )
        .bind(member_ids[member])
        .bind(skill_ids[skill])
        .bind(level)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        members = SAMPLE_MEMBERS.len(),
        skills = SAMPLE_SKILLS.len(),
        assignments = SAMPLE_ASSIGNMENTS.len(),
        "Seeded demo data"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_database, Repository};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("seed.sqlite"))
            .await
            .unwrap();

        assert!(seed_demo_data(&pool).await.unwrap());
        assert!(!seed_demo_data(&pool).await.unwrap());

        let repo = Repository::new(pool);
        let members = repo.list_members_with_skills().await.unwrap();
        assert_eq!(members.len(), 4);
        assert_eq!(repo.list_skills().await.unwrap().len(), 8);
        assert_eq!(repo.count_assignments().await.unwrap(), 14);

        // Sorted by name: Admiral Python comes first.
        assert_eq!(members[0].name, "Admiral Python");
        assert_eq!(members[0].skills.len(), 4);
    }
}
