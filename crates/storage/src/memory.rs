//! In-memory [`RaceStore`] for tests and local development.
//!
//! Mirrors the MySQL queries: same filters, orderings, limits and grouping.
//! `NULL` finish times sort first in ascending order, as they do in MySQL.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::dto::club::ClubSummary;
use crate::dto::race::RaceResultEntry;
use crate::dto::rating::RatingEntry;
use crate::dto::runner::{PersonalBest, RunnerResultEntry};
use crate::error::{Result, StorageError};
use crate::models::{Club, ClubMember, Race, RaceResult, Runner, distance_priority};
use crate::store::RaceStore;

/// A failure the store reports instead of answering.
#[derive(Debug, Clone)]
pub enum Failure {
    /// Every operation fails as if the server could not be reached.
    Connection,
    /// Only `operation` (a [`RaceStore`] method name) fails, with `message`.
    Query {
        operation: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    races: Vec<Race>,
    runners: Vec<Runner>,
    results: Vec<RaceResult>,
    clubs: Vec<Club>,
    members: Vec<ClubMember>,
    failure: Option<Failure>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.races.push(race);
        self
    }

    pub fn with_runner(mut self, runner: Runner) -> Self {
        self.runners.push(runner);
        self
    }

    pub fn with_result(mut self, result: RaceResult) -> Self {
        self.results.push(result);
        self
    }

    pub fn with_club(mut self, club: Club) -> Self {
        self.clubs.push(club);
        self
    }

    pub fn with_member(mut self, club_id: i64, runner_id: i64) -> Self {
        self.members.push(ClubMember { club_id, runner_id });
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        match &self.failure {
            Some(Failure::Connection) => Err(StorageError::Database(sqlx::Error::PoolTimedOut)),
            Some(Failure::Query {
                operation: failing,
                message,
            }) if *failing == operation => Err(StorageError::Database(sqlx::Error::Protocol(
                message.clone(),
            ))),
            _ => Ok(()),
        }
    }

    fn race(&self, id: i64) -> Option<&Race> {
        self.races.iter().find(|race| race.id == id)
    }

    fn runner(&self, id: i64) -> Option<&Runner> {
        self.runners.iter().find(|runner| runner.id == id)
    }

    /// Results of runners with this Telegram id, each with its race.
    fn results_of(&self, telegram_id: &str) -> Vec<(&RaceResult, &Race)> {
        let Some(telegram_id) = parse_key(telegram_id) else {
            return Vec::new();
        };

        self.results
            .iter()
            .filter(|result| {
                self.runner(result.runner_id)
                    .is_some_and(|runner| runner.telegram_id == Some(telegram_id))
            })
            .filter_map(|result| self.race(result.race_id).map(|race| (result, race)))
            .collect()
    }
}

/// Client-supplied keys are compared numerically, like MySQL does when a
/// string is matched against an integer column.
fn parse_key(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Sort key putting the fastest recorded time first and missing times last.
fn fastest_first(result: &RaceResult) -> (bool, Option<i64>) {
    (
        result.finish_time_seconds.is_none(),
        result.finish_time_seconds,
    )
}

/// Groups items by key, keeping groups in order of first appearance.
fn group_by<T, K: PartialEq>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, group)) => group.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

#[async_trait]
impl RaceStore for MemoryStore {
    async fn upcoming_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        self.check("upcoming_races")?;

        let mut races: Vec<Race> = self
            .races
            .iter()
            .filter(|race| race.date >= today && race.is_active)
            .cloned()
            .collect();
        races.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        races.truncate(limit as usize);

        Ok(races)
    }

    async fn past_races(&self, today: NaiveDate, limit: i64) -> Result<Vec<Race>> {
        self.check("past_races")?;

        let mut races: Vec<Race> = self
            .races
            .iter()
            .filter(|race| race.date < today)
            .cloned()
            .collect();
        races.sort_by_key(|race| Reverse(race.date));
        races.truncate(limit as usize);

        Ok(races)
    }

    async fn find_race(&self, id: &str) -> Result<Race> {
        self.check("find_race")?;

        parse_key(id)
            .and_then(|id| self.race(id))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn race_results(&self, race_id: i64) -> Result<Vec<RaceResultEntry>> {
        self.check("race_results")?;

        let mut entries: Vec<RaceResultEntry> = self
            .results
            .iter()
            .filter(|result| result.race_id == race_id)
            .filter_map(|result| {
                self.runner(result.runner_id).map(|runner| RaceResultEntry {
                    result: result.clone(),
                    first_name: runner.first_name.clone(),
                    last_name: runner.last_name.clone(),
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.result.finish_time_seconds);

        Ok(entries)
    }

    async fn runner_results(&self, telegram_id: &str) -> Result<Vec<RunnerResultEntry>> {
        self.check("runner_results")?;

        let mut entries: Vec<RunnerResultEntry> = self
            .results_of(telegram_id)
            .into_iter()
            .map(|(result, race)| RunnerResultEntry {
                result: result.clone(),
                race_name: race.name.clone(),
                race_date: race.date,
                race_location: race.location.clone(),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.race_date
                .cmp(&a.race_date)
                .then_with(|| a.result.finish_time_seconds.cmp(&b.result.finish_time_seconds))
        });

        Ok(entries)
    }

    async fn runner_bests(&self, telegram_id: &str) -> Result<Vec<PersonalBest>> {
        self.check("runner_bests")?;

        let rows = self.results_of(telegram_id);
        let mut bests: Vec<PersonalBest> = group_by(rows, |(result, _)| result.distance.clone())
            .into_iter()
            .filter_map(|(distance, group)| {
                group
                    .into_iter()
                    .min_by_key(|(result, _)| fastest_first(result))
                    .map(|(result, race)| PersonalBest {
                        distance,
                        best_time_seconds: result.finish_time_seconds,
                        best_time: result.finish_time.clone(),
                        race_name: race.name.clone(),
                        race_date: race.date,
                    })
            })
            .collect();
        bests.sort_by_key(|best| distance_priority(&best.distance));

        Ok(bests)
    }

    async fn rating(&self, distance: &str, limit: i64) -> Result<Vec<RatingEntry>> {
        self.check("rating")?;

        let at_distance: Vec<&RaceResult> = self
            .results
            .iter()
            .filter(|result| result.distance == distance)
            .collect();

        let mut entries: Vec<RatingEntry> = group_by(at_distance, |result| result.runner_id)
            .into_iter()
            .filter_map(|(runner_id, group)| {
                let runner = self.runner(runner_id)?;
                let best = group.iter().min_by_key(|result| fastest_first(result))?;
                let best_time_seconds = best.finish_time_seconds?;

                Some(RatingEntry {
                    id: runner.id,
                    first_name: runner.first_name.clone(),
                    last_name: runner.last_name.clone(),
                    city: runner.city.clone(),
                    best_time_seconds,
                    best_time: best.finish_time.clone(),
                    races_count: group.len() as i64,
                    best_place: group.iter().filter_map(|result| result.overall_place).min(),
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.best_time_seconds);
        entries.truncate(limit as usize);

        Ok(entries)
    }

    async fn clubs(&self) -> Result<Vec<ClubSummary>> {
        self.check("clubs")?;

        let mut clubs: Vec<ClubSummary> = self
            .clubs
            .iter()
            .map(|club| ClubSummary {
                club: club.clone(),
                members_count: self
                    .members
                    .iter()
                    .filter(|member| member.club_id == club.id)
                    .count() as i64,
            })
            .collect();
        clubs.sort_by(|a, b| {
            b.members_count
                .cmp(&a.members_count)
                .then_with(|| a.club.name.cmp(&b.club.name))
        });

        Ok(clubs)
    }

    async fn find_club(&self, id: &str) -> Result<Club> {
        self.check("find_club")?;

        parse_key(id)
            .and_then(|id| self.clubs.iter().find(|club| club.id == id))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn club_members(&self, club_id: i64) -> Result<Vec<Runner>> {
        self.check("club_members")?;

        Ok(self
            .members
            .iter()
            .filter(|member| member.club_id == club_id)
            .filter_map(|member| self.runner(member.runner_id).cloned())
            .collect())
    }
}
