//! Friend list endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::{FriendRequest, FriendsStatusQuery, MessageResponse, PeerStatusResponse};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::routes::{FRIEND_ADDED_MESSAGE, FRIEND_DELETED_MESSAGE};

/// Parse the `tg_id` query parameter.
fn parse_tg_id(raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Err(ApiError::BadRequest("tg_id is required".to_string())),
        Some(value) => value
            .parse()
            .map_err(|_| ApiError::BadRequest("invalid tg_id".to_string())),
    }
}

/// Statuses of every located friend of a Telegram account.
///
/// GET /get_friends_status/?tg_id=N
pub async fn get_friends_status(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<FriendsStatusQuery>, ApiError>,
) -> Result<Json<Vec<PeerStatusResponse>>, ApiError> {
    let tg_id = parse_tg_id(query.tg_id.as_deref())?;
    let friends = state.service.get_friends_status(tg_id).await?;
    Ok(Json(friends))
}

/// POST /add_friend/
pub async fn add_friend(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FriendRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .service
        .add_friend(request.tg_id, &request.peer_name)
        .await?;

    info!(tg_id = request.tg_id, peer_name = %request.peer_name, "Friend added");
    Ok(Json(MessageResponse::new(FRIEND_ADDED_MESSAGE)))
}

/// POST /delete_friend/
pub async fn delete_friend(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FriendRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .service
        .delete_friend(request.tg_id, &request.peer_name)
        .await?;

    info!(tg_id = request.tg_id, peer_name = %request.peer_name, "Friend deleted");
    Ok(Json(MessageResponse::new(FRIEND_DELETED_MESSAGE)))
}
