use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{Distances, Race, RaceResult, decode_distances};

/// A race as returned by the API, with its distances decoded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResponse {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub race_type: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub distances: Option<Distances>,
    pub website_url: Option<String>,
    pub protocol_url: Option<String>,
    pub is_active: bool,
    /// `dd.mm.YYYY`, only present in the upcoming listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_formatted: Option<String>,
    /// `YYYY-MM-DD`, only present in the upcoming listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
}

impl RaceResponse {
    /// Adds the display and ISO renderings of the race date.
    pub fn with_formatted_date(mut self) -> Self {
        self.date_formatted = Some(self.date.format("%d.%m.%Y").to_string());
        self.date_iso = Some(self.date.format("%Y-%m-%d").to_string());
        self
    }
}

impl From<Race> for RaceResponse {
    fn from(race: Race) -> Self {
        Self {
            id: race.id,
            name: race.name,
            date: race.date,
            location: race.location,
            organizer: race.organizer,
            race_type: race.race_type,
            distances: decode_distances(race.distances),
            website_url: race.website_url,
            protocol_url: race.protocol_url,
            is_active: race.is_active,
            date_formatted: None,
            date_iso: None,
        }
    }
}

/// A race together with every result recorded for it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceDetailResponse {
    #[serde(flatten)]
    pub race: RaceResponse,
    pub results: Vec<RaceResultEntry>,
}

/// A result row of a race, with the runner's name attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResultEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: RaceResult,
    pub first_name: String,
    pub last_name: String,
}
