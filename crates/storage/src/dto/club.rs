use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{Club, Runner};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClubSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub club: Club,
    pub members_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubDetailResponse {
    #[serde(flatten)]
    pub club: Club,
    pub members: Vec<Runner>,
}
