use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::RaceResult;

/// One of a runner's results, with the race it was run at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RunnerResultEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: RaceResult,
    pub race_name: String,
    pub race_date: NaiveDate,
    pub race_location: Option<String>,
}

/// Fastest finish of a runner at one distance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PersonalBest {
    pub distance: String,
    pub best_time_seconds: Option<i64>,
    pub best_time: Option<String>,
    pub race_name: String,
    pub race_date: NaiveDate,
}
