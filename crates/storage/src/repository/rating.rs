use sqlx::MySqlPool;

use crate::dto::rating::RatingEntry;
use crate::error::Result;

pub struct RatingRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Runners ranked by their best time at exactly `distance`. Runners
    /// without a recorded time are left out.
    pub async fn by_distance(&self, distance: &str, limit: i64) -> Result<Vec<RatingEntry>> {
        let entries = sqlx::query_as::<_, RatingEntry>(
            r#"
            WITH ranked AS (
                SELECT
                    r.runner_id,
                    r.finish_time_seconds,
                    r.finish_time,
                    COUNT(*) OVER (PARTITION BY r.runner_id) AS races_count,
                    MIN(r.overall_place) OVER (PARTITION BY r.runner_id) AS best_place,
                    ROW_NUMBER() OVER (
                        PARTITION BY r.runner_id
                        ORDER BY r.finish_time_seconds IS NULL, r.finish_time_seconds ASC
                    ) AS rn
                FROM results r
                WHERE r.distance = ?
            )
            SELECT ru.id,
                   ru.first_name,
                   ru.last_name,
                   ru.city,
                   ranked.finish_time_seconds AS best_time_seconds,
                   ranked.finish_time AS best_time,
                   ranked.races_count,
                   ranked.best_place
            FROM ranked
            JOIN runners ru ON ranked.runner_id = ru.id
            WHERE ranked.rn = 1
              AND ranked.finish_time_seconds IS NOT NULL
            ORDER BY best_time_seconds ASC
            LIMIT ?
            "#,
        )
        .bind(distance)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
