use storage::{
    RaceStore,
    dto::runner::{PersonalBest, RunnerResultEntry},
};

use crate::error::WebResult;
use crate::response::ApiResponse;

/// All results of a runner. An unknown runner is not an error, just an
/// empty list with an explanatory message.
pub async fn runner_results(
    store: &dyn RaceStore,
    telegram_id: &str,
) -> WebResult<ApiResponse<Vec<RunnerResultEntry>>> {
    let results = store.runner_results(telegram_id).await?;

    if results.is_empty() {
        return Ok(ApiResponse::single(results).with_message("No results found"));
    }

    Ok(ApiResponse::list(results))
}

/// Best time per distance
pub async fn runner_bests(
    store: &dyn RaceStore,
    telegram_id: &str,
) -> WebResult<ApiResponse<Vec<PersonalBest>>> {
    let bests = store.runner_bests(telegram_id).await?;

    Ok(ApiResponse::list(bests))
}
