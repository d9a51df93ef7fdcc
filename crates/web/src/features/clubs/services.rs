use storage::{
    RaceStore,
    dto::club::{ClubDetailResponse, ClubSummary},
};

use crate::error::{WebResult, not_found};
use crate::response::ApiResponse;

pub async fn clubs(store: &dyn RaceStore) -> WebResult<ApiResponse<Vec<ClubSummary>>> {
    let clubs = store.clubs().await?;

    Ok(ApiResponse::list(clubs))
}

/// A club with its full member list
pub async fn club_detail(store: &dyn RaceStore, id: &str) -> WebResult<ApiResponse<ClubDetailResponse>> {
    let club = store.find_club(id).await.map_err(not_found("Club not found"))?;
    let members = store.club_members(club.id).await?;

    Ok(ApiResponse::single(ClubDetailResponse { club, members }))
}
