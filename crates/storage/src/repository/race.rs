use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::dto::race::RaceResultEntry;
use crate::error::{Result, StorageError};
use crate::models::Race;

pub struct RaceRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Active races on or after `today`, soonest first
    pub async fn list_upcoming(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT id, name, date, location, organizer, race_type, distances,
                   website_url, protocol_url, is_active
            FROM races
            WHERE date >= ?
              AND is_active = 1
            ORDER BY date ASC, name ASC
            LIMIT ?
            "#,
        )
        .bind(today)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    /// Races before `today`, most recent first, regardless of the active flag
    pub async fn list_past(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT id, name, date, location, organizer, race_type, distances,
                   website_url, protocol_url, is_active
            FROM races
            WHERE date < ?
            ORDER BY date DESC
            LIMIT ?
            "#,
        )
        .bind(today)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Race> {
        let race = sqlx::query_as::<_, Race>(
            r#"
            SELECT id, name, date, location, organizer, race_type, distances,
                   website_url, protocol_url, is_active
            FROM races
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(race)
    }

    /// Every result of a race with runner names, fastest first
    pub async fn results(&self, race_id: i64) -> Result<Vec<RaceResultEntry>> {
        let results = sqlx::query_as::<_, RaceResultEntry>(
            r#"
            SELECT r.id, r.race_id, r.runner_id, r.distance, r.finish_time,
                   r.finish_time_seconds, r.pace, r.overall_place, r.gender_place,
                   r.age_group, r.age_group_place,
                   ru.first_name, ru.last_name
            FROM results r
            JOIN runners ru ON r.runner_id = ru.id
            WHERE r.race_id = ?
            ORDER BY r.finish_time_seconds ASC
            "#,
        )
        .bind(race_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
