//! The data-access seam the API layer is written against.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Database;
use crate::dto::club::ClubSummary;
use crate::dto::race::RaceResultEntry;
use crate::dto::rating::RatingEntry;
use crate::dto::runner::{PersonalBest, RunnerResultEntry};
use crate::error::Result;
use crate::models::{Club, Race, Runner};
use crate::repository::club::ClubRepository;
use crate::repository::race::RaceRepository;
use crate::repository::rating::RatingRepository;
use crate::repository::runner::RunnerRepository;

/// Read operations over races, runners, results and clubs.
///
/// Every method is a single query. Composite views (a race with its results,
/// a club with its members) are assembled by the caller from two calls.
///
/// Identifiers arrive exactly as the client sent them; the store decides how
/// they match stored keys.
#[async_trait]
pub trait RaceStore: Send + Sync {
    /// Active races dated `today` or later, ordered by date then name.
    async fn upcoming_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>>;

    /// Races dated before `today`, most recent first.
    async fn past_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>>;

    /// Returns [`StorageError::NotFound`](crate::StorageError::NotFound) when
    /// no race has this id.
    async fn find_race(&self, id: &str) -> Result<Race>;

    /// Results of a race joined with runner names, by finish time ascending.
    async fn race_results(&self, race_id: i64) -> Result<Vec<RaceResultEntry>>;

    async fn runner_results(&self, telegram_id: &str) -> Result<Vec<RunnerResultEntry>>;

    async fn runner_bests(&self, telegram_id: &str) -> Result<Vec<PersonalBest>>;

    async fn rating(&self, distance: &str, limit: i64) -> Result<Vec<RatingEntry>>;

    async fn clubs(&self) -> Result<Vec<ClubSummary>>;

    /// Returns [`StorageError::NotFound`](crate::StorageError::NotFound) when
    /// no club has this id.
    async fn find_club(&self, id: &str) -> Result<Club>;

    async fn club_members(&self, club_id: i64) -> Result<Vec<Runner>>;
}

#[async_trait]
impl RaceStore for Database {
    async fn upcoming_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        RaceRepository::new(self.pool()).list_upcoming(today, limit).await
    }

    async fn past_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        RaceRepository::new(self.pool()).list_past(today, limit).await
    }

    async fn find_race(&self, id: &str) -> Result<Race> {
        RaceRepository::new(self.pool()).find_by_id(id).await
    }

    async fn race_results(&self, race_id: i64) -> Result<Vec<RaceResultEntry>> {
        RaceRepository::new(self.pool()).results(race_id).await
    }

    async fn runner_results(&self, telegram_id: &str) -> Result<Vec<RunnerResultEntry>> {
        RunnerRepository::new(self.pool())
            .results_by_telegram_id(telegram_id)
            .await
    }

    async fn runner_bests(&self, telegram_id: &str) -> Result<Vec<PersonalBest>> {
        RunnerRepository::new(self.pool())
            .bests_by_telegram_id(telegram_id)
            .await
    }

    async fn rating(&self, distance: &str, limit: i64) -> Result<Vec<RatingEntry>> {
        RatingRepository::new(self.pool())
            .by_distance(distance, limit)
            .await
    }

    async fn clubs(&self) -> Result<Vec<ClubSummary>> {
        ClubRepository::new(self.pool())
            .list_with_member_counts()
            .await
    }

    async fn find_club(&self, id: &str) -> Result<Club> {
        ClubRepository::new(self.pool()).find_by_id(id).await
    }

    async fn club_members(&self, club_id: i64) -> Result<Vec<Runner>> {
        ClubRepository::new(self.pool()).members(club_id).await
    }
}
