use std::time::Duration;

use axum::{
    Router,
    http::{Method, header},
    routing::{MethodRouter, get},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{handle_action, preflight};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::handle_action),
    components(
        schemas(
            storage::dto::race::RaceResponse,
            storage::dto::race::RaceDetailResponse,
            storage::dto::race::RaceResultEntry,
            storage::dto::runner::RunnerResultEntry,
            storage::dto::runner::PersonalBest,
            storage::dto::rating::RatingEntry,
            storage::dto::club::ClubSummary,
            storage::dto::club::ClubDetailResponse,
            storage::models::Race,
            storage::models::RaceResult,
            storage::models::Runner,
            storage::models::Club,
        )
    ),
    tags(
        (name = "races", description = "Race events, results, personal bests, ratings and clubs"),
    )
)]
pub struct ApiDoc;

fn endpoint() -> MethodRouter<AppState> {
    get(handle_action).post(handle_action).options(preflight)
}

/// Builds the application router. The action endpoint is mounted at `/`,
/// `/api` and `/api/api.php`.
pub fn create_router(state: AppState, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(cors_max_age);

    Router::new()
        .route("/", endpoint())
        .route("/api", endpoint())
        .route("/api/api.php", endpoint())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
