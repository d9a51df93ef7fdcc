use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `races` table. `distances` is kept in its stored, encoded
/// form; decoding happens when the race is shaped for a response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Race {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub race_type: Option<String>,
    pub distances: Option<String>,
    pub website_url: Option<String>,
    pub protocol_url: Option<String>,
    pub is_active: bool,
}
