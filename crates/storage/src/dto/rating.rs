use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A runner's standing on a single distance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RatingEntry {
    /// Runner id
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub best_time_seconds: i64,
    pub best_time: Option<String>,
    /// Number of results the runner has at this distance
    pub races_count: i64,
    pub best_place: Option<i64>,
}
