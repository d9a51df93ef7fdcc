use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::dispatch::{ACTIONS, Action, ActionQuery};
use crate::error::WebResult;
use crate::features::{clubs, races, rating, runners};
use crate::response::PrettyJson;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api",
    params(ActionQuery),
    responses(
        (status = 200, description = "Action result as {status, count?, message?, data}, or service information when no action is given"),
        (status = 400, description = "Unknown action or missing required parameter"),
        (status = 404, description = "Race or club not found"),
        (status = 500, description = "Database connection or query failure")
    ),
    tag = "races"
)]
pub async fn handle_action(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    let action = Action::try_from(pairs.into_iter().collect::<ActionQuery>())?;
    tracing::debug!(action = action.name(), "Dispatching action");

    let store = state.store.as_ref();
    let today = chrono::Local::now().date_naive();

    let response = match action {
        Action::Info => PrettyJson(ServiceInfo::current()).into_response(),
        Action::RacesUpcoming => races::services::upcoming_races(store, today)
            .await?
            .into_response(),
        Action::RacesPast => races::services::past_races(store, today)
            .await?
            .into_response(),
        Action::Race { id } => races::services::race_detail(store, &id)
            .await?
            .into_response(),
        Action::RunnerResults { telegram_id } => {
            runners::services::runner_results(store, &telegram_id)
                .await?
                .into_response()
        }
        Action::RunnerBests { telegram_id } => runners::services::runner_bests(store, &telegram_id)
            .await?
            .into_response(),
        Action::Rating { distance } => rating::services::rating(store, &distance)
            .await?
            .into_response(),
        Action::Clubs => clubs::services::clubs(store).await?.into_response(),
        Action::Club { id } => clubs::services::club_detail(store, &id)
            .await?
            .into_response(),
    };

    Ok(response)
}

/// Cross-origin preflight. Answered without touching the database; the CORS
/// layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Version reported in the service info.
pub const API_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub actions: Vec<&'static str>,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub description: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        let endpoints = [
            ("GET /api", "Service information"),
            ("GET /api?action=races_upcoming", "Upcoming races"),
            ("GET /api?action=races_past", "Past races"),
            ("GET /api?action=race&id=1", "Race with its results"),
            ("GET /api?action=runner_results&telegram_id=123", "Runner results"),
            ("GET /api?action=runner_bests&telegram_id=123", "Runner personal bests"),
            ("GET /api?action=rating&distance=5 км", "Rating for a distance"),
            ("GET /api?action=clubs", "Clubs"),
            ("GET /api?action=club&id=1", "Club with its members"),
        ];

        Self {
            service: "Seido API",
            version: API_VERSION,
            status: "running",
            actions: ACTIONS.to_vec(),
            endpoints: endpoints
                .into_iter()
                .map(|(path, description)| EndpointInfo { path, description })
                .collect(),
        }
    }
}
