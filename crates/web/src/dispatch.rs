//! Maps the `action` query parameter and its arguments onto a typed request.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::WebError;

/// Every action the endpoint answers, in the order they are advertised.
pub const ACTIONS: [&str; 8] = [
    "races_upcoming",
    "races_past",
    "race",
    "runner_results",
    "runner_bests",
    "rating",
    "clubs",
    "club",
];

/// Raw query string of the endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActionQuery {
    /// Operation to perform; omit for service information
    pub action: Option<String>,
    /// Race or club id (`race`, `club`)
    pub id: Option<String>,
    /// Runner's Telegram id (`runner_results`, `runner_bests`)
    pub telegram_id: Option<String>,
    /// Exact distance label, e.g. `5 км` (`rating`)
    pub distance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Info,
    RacesUpcoming,
    RacesPast,
    Race { id: String },
    RunnerResults { telegram_id: String },
    RunnerBests { telegram_id: String },
    Rating { distance: String },
    Clubs,
    Club { id: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::RacesUpcoming => "races_upcoming",
            Self::RacesPast => "races_past",
            Self::Race { .. } => "race",
            Self::RunnerResults { .. } => "runner_results",
            Self::RunnerBests { .. } => "runner_bests",
            Self::Rating { .. } => "rating",
            Self::Clubs => "clubs",
            Self::Club { .. } => "club",
        }
    }
}

impl FromIterator<(String, String)> for ActionQuery {
    /// Folds decoded query pairs. A repeated key keeps its last value and
    /// unknown keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "action" => &mut query.action,
                "id" => &mut query.id,
                "telegram_id" => &mut query.telegram_id,
                "distance" => &mut query.distance,
                _ => continue,
            };
            *slot = Some(value);
        }
        query
    }
}

impl TryFrom<ActionQuery> for Action {
    type Error = WebError;

    fn try_from(query: ActionQuery) -> Result<Self, Self::Error> {
        let ActionQuery {
            action,
            id,
            telegram_id,
            distance,
        } = query;

        match action.as_deref().unwrap_or_default() {
            "" => Ok(Self::Info),
            "races_upcoming" => Ok(Self::RacesUpcoming),
            "races_past" => Ok(Self::RacesPast),
            "race" => required(id, "Missing race ID").map(|id| Self::Race { id }),
            "runner_results" => required(telegram_id, "Missing telegram_id")
                .map(|telegram_id| Self::RunnerResults { telegram_id }),
            "runner_bests" => required(telegram_id, "Missing telegram_id")
                .map(|telegram_id| Self::RunnerBests { telegram_id }),
            "rating" => required(distance, "Missing distance").map(|distance| Self::Rating { distance }),
            "clubs" => Ok(Self::Clubs),
            "club" => required(id, "Missing club ID").map(|id| Self::Club { id }),
            _ => Err(WebError::UnknownAction),
        }
    }
}

/// Absent, empty and "0" all count as missing.
fn required(value: Option<String>, message: &'static str) -> Result<String, WebError> {
    value
        .filter(|v| !v.is_empty() && v != "0")
        .ok_or(WebError::MissingParameter(message))
}
