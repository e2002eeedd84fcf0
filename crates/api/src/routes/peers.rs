//! Peer status endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::{MessageResponse, PeerStatusQuery, PeerStatusResponse, UpdatePeersRequest};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_peers_upserted;
use crate::routes::PEERS_UPDATED_MESSAGE;

/// Get the stored status of one peer.
///
/// GET /get_peer_status/?peer_name=X
pub async fn get_peer_status(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<PeerStatusQuery>, ApiError>,
) -> Result<Json<PeerStatusResponse>, ApiError> {
    let peer_name = query
        .peer_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("peer_name is required".to_string()))?;

    let peer = state
        .service
        .get_peer_status(&peer_name)
        .await?
        .ok_or_else(|| ApiError::NotFound("peer not found".to_string()))?;

    Ok(Json(peer))
}

/// Upsert a batch of peers. The batch is applied entirely or not at all.
///
/// POST /update_peers/
pub async fn update_peers(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdatePeersRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let count = state.service.update_peers(request).await?;

    record_peers_upserted(count);
    info!(peer_count = count, "Peers updated");

    Ok(Json(MessageResponse::new(PEERS_UPDATED_MESSAGE)))
}
