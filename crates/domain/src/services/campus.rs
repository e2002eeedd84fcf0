//! Campus service and the storage contract it drives.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{Peer, PeerStatusResponse, UpdatePeersRequest};

/// Storage contract for peers and friend links.
#[async_trait::async_trait]
pub trait CampusRepository: Send + Sync {
    /// Fetch the stored status of a peer. `Ok(None)` when no row matches.
    async fn get_peer_status(
        &self,
        peer_name: &str,
    ) -> Result<Option<PeerStatusResponse>, StoreError>;

    /// Upsert `peers[i]` under `peer_names[i]` for every `i`, atomically.
    ///
    /// Every row is stamped with the current server time and status
    /// [`PEER_STATUS_ACTIVE`](crate::models::PEER_STATUS_ACTIVE). If any row
    /// fails, no row of the batch is written.
    async fn update_peers(&self, peers: &[Peer], peer_names: &[String]) -> Result<(), StoreError>;

    /// Statuses of every peer linked to `tg_id` that has a stored row.
    async fn get_friends_status(&self, tg_id: i64) -> Result<Vec<PeerStatusResponse>, StoreError>;

    /// Link `peer_name` to `tg_id`. Succeeds if the link already exists.
    async fn add_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError>;

    /// Unlink `peer_name` from `tg_id`. Succeeds if there was no link.
    async fn delete_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Converts the wire-level bulk request into parallel peer and name lists.
pub fn split_update_request(request: UpdatePeersRequest) -> (Vec<Peer>, Vec<String>) {
    request
        .peers
        .into_iter()
        .map(|update| {
            let (name, peer) = update.into_parts();
            (peer, name)
        })
        .unzip()
}

/// Request-facing facade over a [`CampusRepository`].
#[derive(Clone)]
pub struct CampusService {
    repository: Arc<dyn CampusRepository>,
}

impl CampusService {
    pub fn new(repository: Arc<dyn CampusRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_peer_status(
        &self,
        peer_name: &str,
    ) -> Result<Option<PeerStatusResponse>, StoreError> {
        self.repository.get_peer_status(peer_name).await
    }

    /// Upserts every peer of the request and returns how many were written.
    pub async fn update_peers(&self, request: UpdatePeersRequest) -> Result<usize, StoreError> {
        let (peers, peer_names) = split_update_request(request);
        self.repository.update_peers(&peers, &peer_names).await?;
        Ok(peers.len())
    }

    pub async fn get_friends_status(
        &self,
        tg_id: i64,
    ) -> Result<Vec<PeerStatusResponse>, StoreError> {
        self.repository.get_friends_status(tg_id).await
    }

    pub async fn add_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        self.repository.add_friend(tg_id, peer_name).await
    }

    pub async fn delete_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        self.repository.delete_friend(tg_id, peer_name).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
