use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single finish of one runner at one distance of one race.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub id: i64,
    pub race_id: i64,
    pub runner_id: i64,
    pub distance: String,
    pub finish_time: Option<String>,
    pub finish_time_seconds: Option<i64>,
    pub pace: Option<String>,
    pub overall_place: Option<i64>,
    pub gender_place: Option<i64>,
    pub age_group: Option<String>,
    pub age_group_place: Option<i64>,
}
