use sqlx::MySqlPool;

use crate::dto::club::ClubSummary;
use crate::error::{Result, StorageError};
use crate::models::{Club, Runner};

pub struct ClubRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All clubs with their member counts, largest first. Clubs without
    /// members are included with a count of zero.
    pub async fn list_with_member_counts(&self) -> Result<Vec<ClubSummary>> {
        let clubs = sqlx::query_as::<_, ClubSummary>(
            r#"
            SELECT c.id, c.name, COUNT(cm.runner_id) AS members_count
            FROM clubs c
            LEFT JOIN club_members cm ON c.id = cm.club_id
            GROUP BY c.id, c.name
            ORDER BY members_count DESC, c.name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(clubs)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            SELECT id, name
            FROM clubs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    pub async fn members(&self, club_id: i64) -> Result<Vec<Runner>> {
        let members = sqlx::query_as::<_, Runner>(
            r#"
            SELECT ru.id, ru.telegram_id, ru.first_name, ru.last_name, ru.middle_name,
                   ru.gender, ru.city, ru.country, ru.club_name
            FROM club_members cm
            JOIN runners ru ON cm.runner_id = ru.id
            WHERE cm.club_id = ?
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }
}
