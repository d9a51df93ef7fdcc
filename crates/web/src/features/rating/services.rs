use storage::{RaceStore, dto::rating::RatingEntry};

use crate::error::WebResult;
use crate::response::ApiResponse;

pub const RATING_LIMIT: i64 = 50;

pub async fn rating(
    store: &dyn RaceStore,
    distance: &str,
) -> WebResult<ApiResponse<Vec<RatingEntry>>> {
    let entries = store.rating(distance, RATING_LIMIT).await?;

    Ok(ApiResponse::list(entries))
}
