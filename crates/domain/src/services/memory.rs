//! In-memory campus repository.
//!
//! Backs the HTTP tests and local runs without a database. Mirrors the
//! PostgreSQL semantics: upserts keyed on peer name, all-or-nothing batches,
//! idempotent friend links.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{FriendLink, Peer, PeerStatusResponse, PEER_STATUS_ACTIVE};
use crate::services::campus::CampusRepository;

#[derive(Debug, Default)]
struct MemoryState {
    peers: BTreeMap<String, PeerStatusResponse>,
    friends: BTreeSet<FriendLink>,
}

/// [`CampusRepository`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCampusRepository {
    state: RwLock<MemoryState>,
    /// Upserting this peer name fails, aborting the whole batch.
    failing_peer: Option<String>,
    /// Every operation fails as if the database were unreachable.
    unavailable: bool,
}

impl InMemoryCampusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose batches fail when they reach `peer_name`.
    pub fn failing_on(peer_name: impl Into<String>) -> Self {
        Self {
            failing_peer: Some(peer_name.into()),
            ..Self::default()
        }
    }

    /// Repository that reports a storage failure for every call.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of stored peer rows.
    pub async fn peer_count(&self) -> usize {
        self.state.read().await.peers.len()
    }

    /// Number of stored friend links.
    pub async fn friend_count(&self) -> usize {
        self.state.read().await.friends.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            tracing::warn!("In-memory repository simulating storage outage");
            return Err(StoreError::database("connection refused"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CampusRepository for InMemoryCampusRepository {
    async fn get_peer_status(
        &self,
        peer_name: &str,
    ) -> Result<Option<PeerStatusResponse>, StoreError> {
        self.check_available()?;
        Ok(self.state.read().await.peers.get(peer_name).cloned())
    }

    async fn update_peers(&self, peers: &[Peer], peer_names: &[String]) -> Result<(), StoreError> {
        self.check_available()?;
        if peers.len() != peer_names.len() {
            return Err(StoreError::InvalidInput(format!(
                "{} peers but {} peer names",
                peers.len(),
                peer_names.len()
            )));
        }

        let mut state = self.state.write().await;
        // Stage on a copy so a failure leaves the stored rows untouched.
        let mut staged = state.peers.clone();

        for (peer, name) in peers.iter().zip(peer_names) {
            if self.failing_peer.as_deref() == Some(name.as_str()) {
                return Err(StoreError::database(format!(
                    "simulated failure upserting peer {name}"
                )));
            }

            staged.insert(
                name.clone(),
                PeerStatusResponse {
                    peer_name: name.clone(),
                    row: peer.row.clone(),
                    col: peer.col.clone(),
                    cluster: peer.cluster.clone(),
                    time: Utc::now(),
                    status: PEER_STATUS_ACTIVE.to_string(),
                },
            );
        }

        state.peers = staged;
        Ok(())
    }

    async fn get_friends_status(&self, tg_id: i64) -> Result<Vec<PeerStatusResponse>, StoreError> {
        self.check_available()?;
        let state = self.state.read().await;

        Ok(state
            .friends
            .iter()
            .filter(|link| link.tg_id == tg_id)
            .filter_map(|link| state.peers.get(&link.peer_name).cloned())
            .collect())
    }

    async fn add_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.state.write().await.friends.insert(FriendLink {
            tg_id,
            peer_name: peer_name.to_string(),
        });
        Ok(())
    }

    async fn delete_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.state.write().await.friends.remove(&FriendLink {
            tg_id,
            peer_name: peer_name.to_string(),
        });
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
