use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::dto::runner::{PersonalBest, RunnerResultEntry};
use crate::error::Result;
use crate::models::distance::distance_priority_sql;

pub struct RunnerRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> RunnerRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All results of the runner with this Telegram id, newest race first
    pub async fn results_by_telegram_id(&self, telegram_id: &str) -> Result<Vec<RunnerResultEntry>> {
        let results = sqlx::query_as::<_, RunnerResultEntry>(
            r#"
            SELECT r.id, r.race_id, r.runner_id, r.distance, r.finish_time,
                   r.finish_time_seconds, r.pace, r.overall_place, r.gender_place,
                   r.age_group, r.age_group_place,
                   ra.name AS race_name, ra.date AS race_date, ra.location AS race_location
            FROM results r
            JOIN runners ru ON r.runner_id = ru.id
            JOIN races ra ON r.race_id = ra.id
            WHERE ru.telegram_id = ?
            ORDER BY ra.date DESC, r.finish_time_seconds ASC
            "#,
        )
        .bind(telegram_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// One row per distance: the runner's fastest finish there and the race it
    /// was set at. Distances are ordered by their priority bucket.
    pub async fn bests_by_telegram_id(&self, telegram_id: &str) -> Result<Vec<PersonalBest>> {
        let mut query: QueryBuilder<MySql> = QueryBuilder::new(
            r#"
            WITH ranked AS (
                SELECT
                    r.distance,
                    r.finish_time_seconds,
                    r.finish_time,
                    ra.name AS race_name,
                    ra.date AS race_date,
                    ROW_NUMBER() OVER (
                        PARTITION BY r.distance
                        ORDER BY r.finish_time_seconds IS NULL, r.finish_time_seconds ASC
                    ) AS rn
                FROM results r
                JOIN runners ru ON r.runner_id = ru.id
                JOIN races ra ON r.race_id = ra.id
                WHERE ru.telegram_id =
            "#,
        );
        query.push_bind(telegram_id);
        query.push(
            r#"
            )
            SELECT distance,
                   finish_time_seconds AS best_time_seconds,
                   finish_time AS best_time,
                   race_name,
                   race_date
            FROM ranked
            WHERE rn = 1
            ORDER BY
            "#,
        );
        query.push(distance_priority_sql("distance"));

        let bests: Vec<PersonalBest> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(bests)
    }
}
