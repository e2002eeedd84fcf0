//! Peer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status written for every upserted peer.
pub const PEER_STATUS_ACTIVE: &str = "1";

/// Location fields written for a single peer by an upsert.
///
/// The timestamp is not part of the record: storage stamps each row itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub row: String,
    pub col: String,
    pub cluster: String,
    /// Status as submitted by the client. Storage writes [`PEER_STATUS_ACTIVE`] instead.
    pub status: Option<String>,
}

/// Stored status of a peer, as returned by status queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PeerStatusResponse {
    pub peer_name: String,
    pub row: String,
    pub col: String,
    pub cluster: String,
    pub time: DateTime<Utc>,
    pub status: String,
}

/// Query string for `GET /get_peer_status/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeerStatusQuery {
    pub peer_name: Option<String>,
}

// ============================================================================
// Bulk update (POST /update_peers/)
// ============================================================================

/// Request payload for the bulk peer upsert.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePeersRequest {
    #[validate(nested)]
    pub peers: Vec<PeerUpdate>,
}

/// A single entry of [`UpdatePeersRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PeerUpdate {
    #[validate(custom(function = "shared::validation::validate_peer_name"))]
    pub peer_name: String,

    pub row: String,

    pub col: String,

    pub cluster: String,

    #[serde(default)]
    pub status: Option<String>,
}

impl PeerUpdate {
    /// Splits the entry into its name and the location record.
    pub fn into_parts(self) -> (String, Peer) {
        let peer = Peer {
            row: self.row,
            col: self.col,
            cluster: self.cluster,
            status: self.status,
        };
        (self.peer_name, peer)
    }
}

/// Acknowledgement body returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
