use chrono::NaiveDate;
use storage::{
    RaceStore,
    dto::race::{RaceDetailResponse, RaceResponse},
};

use crate::error::{WebResult, not_found};
use crate::response::ApiResponse;

pub const UPCOMING_RACES_LIMIT: i64 = 100;
pub const PAST_RACES_LIMIT: i64 = 50;

/// Active races from `today` on, with display dates added
pub async fn upcoming_races(
    store: &dyn RaceStore,
    today: NaiveDate,
) -> WebResult<ApiResponse<Vec<RaceResponse>>> {
    let races = store.upcoming_races(today, UPCOMING_RACES_LIMIT).await?;

    let data = races
        .into_iter()
        .map(|race| RaceResponse::from(race).with_formatted_date())
        .collect();

    Ok(ApiResponse::list(data))
}

/// Races before `today`, newest first
pub async fn past_races(
    store: &dyn RaceStore,
    today: NaiveDate,
) -> WebResult<ApiResponse<Vec<RaceResponse>>> {
    let races = store.past_races(today, PAST_RACES_LIMIT).await?;

    Ok(ApiResponse::list(
        races.into_iter().map(RaceResponse::from).collect(),
    ))
}

/// A race with all of its results. Fails as a whole if either lookup fails.
pub async fn race_detail(store: &dyn RaceStore, id: &str) -> WebResult<ApiResponse<RaceDetailResponse>> {
    let race = store.find_race(id).await.map_err(not_found("Race not found"))?;
    let results = store.race_results(race.id).await?;

    Ok(ApiResponse::single(RaceDetailResponse {
        race: RaceResponse::from(race),
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{MemoryStore, memory::Failure, models::Race};

    use crate::error::WebError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn race(id: i64, date: NaiveDate, is_active: bool) -> Race {
        Race {
            id,
            name: format!("Забег {}", id),
            date,
            location: None,
            organizer: None,
            race_type: None,
            distances: Some(r#"["5 км"]"#.to_string()),
            website_url: None,
            protocol_url: None,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_upcoming_is_capped_at_one_hundred() {
        let today = date(2026, 1, 1);
        let mut store = MemoryStore::new();
        for id in 0..120 {
            store = store.with_race(race(id, today + chrono::Days::new(id as u64), true));
        }

        let response = upcoming_races(&store, today).await.unwrap();
        assert_eq!(response.count, Some(100));
        assert_eq!(response.data.len(), 100);
        assert_eq!(response.data[0].date_formatted.as_deref(), Some("01.01.2026"));
    }

    #[tokio::test]
    async fn test_past_is_capped_at_fifty_without_display_dates() {
        let today = date(2026, 1, 1);
        let mut store = MemoryStore::new();
        for id in 1..=60 {
            store = store.with_race(race(id, today - chrono::Days::new(id as u64), id % 3 == 0));
        }

        let response = past_races(&store, today).await.unwrap();
        assert_eq!(response.count, Some(50));
        assert!(response.data.iter().all(|race| race.date_formatted.is_none()));
        assert_eq!(response.data[0].date, date(2025, 12, 31));
    }

    #[tokio::test]
    async fn test_missing_race_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            race_detail(&store, "1").await,
            Err(WebError::NotFound("Race not found"))
        ));
    }

    #[tokio::test]
    async fn test_failing_results_query_fails_the_detail() {
        let store = MemoryStore::new()
            .with_race(race(1, date(2026, 1, 1), true))
            .failing(Failure::Query {
                operation: "race_results",
                message: "Lock wait timeout exceeded".to_string(),
            });

        assert!(matches!(
            race_detail(&store, "1").await,
            Err(WebError::Storage(_))
        ));
    }
}
