//! PostgreSQL campus repository.

use chrono::Utc;
use domain::models::{Peer, PeerStatusResponse, PEER_STATUS_ACTIVE};
use domain::services::CampusRepository;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::PeerEntity;
use crate::metrics::{record_pool_metrics, QueryTimer};

fn store_error(err: sqlx::Error) -> StoreError {
    StoreError::Database(err.to_string())
}

/// Repository for peer and friend link database operations.
#[derive(Clone)]
pub struct PgCampusRepository {
    pool: PgPool,
}

impl PgCampusRepository {
    /// Creates a new PgCampusRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl CampusRepository for PgCampusRepository {
    async fn get_peer_status(
        &self,
        peer_name: &str,
    ) -> Result<Option<PeerStatusResponse>, StoreError> {
        let timer = QueryTimer::new("get_peer_status");

        let result = sqlx::query_as::<_, PeerEntity>(
            r#"
            SELECT peer_name, "row", col, cluster, "time", status
            FROM peers
            WHERE peer_name = $1
            "#,
        )
        .bind(peer_name)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        Ok(result.map_err(store_error)?.map(PeerStatusResponse::from))
    }

    /// Upserts the batch inside one transaction. Any failure rolls back the
    /// rows already written by this call.
    async fn update_peers(&self, peers: &[Peer], peer_names: &[String]) -> Result<(), StoreError> {
        if peers.len() != peer_names.len() {
            return Err(StoreError::InvalidInput(format!(
                "{} peers but {} peer names",
                peers.len(),
                peer_names.len()
            )));
        }

        let result = QueryTimer::new("update_peers")
            .time(async {
                let mut tx = self.pool.begin().await?;

                for (peer, peer_name) in peers.iter().zip(peer_names) {
                    sqlx::query(
                        r#"
                        INSERT INTO peers (peer_name, "row", col, cluster, "time", status)
                        VALUES ($1, $2, $3, $4, $5, $6)
                        ON CONFLICT (peer_name) DO UPDATE SET
                            "row" = EXCLUDED."row",
                            col = EXCLUDED.col,
                            cluster = EXCLUDED.cluster,
                            "time" = EXCLUDED."time",
                            status = EXCLUDED.status
                        "#,
                    )
                    .bind(peer_name)
                    .bind(&peer.row)
                    .bind(&peer.col)
                    .bind(&peer.cluster)
                    .bind(Utc::now())
                    .bind(PEER_STATUS_ACTIVE)
                    .execute(&mut *tx)
                    .await?;
                }

                tx.commit().await
            })
            .await;

        result.map_err(store_error)
    }

    async fn get_friends_status(&self, tg_id: i64) -> Result<Vec<PeerStatusResponse>, StoreError> {
        let timer = QueryTimer::new("get_friends_status");

        let result = sqlx::query_as::<_, PeerEntity>(
            r#"
            SELECT p.peer_name, p."row", p.col, p.cluster, p."time", p.status
            FROM friends f
            JOIN peers p ON f.peer_name = p.peer_name
            WHERE f.tg_id = $1
            ORDER BY p.peer_name
            "#,
        )
        .bind(tg_id)
        .fetch_all(&self.pool)
        .await;

        timer.record();
        Ok(result
            .map_err(store_error)?
            .into_iter()
            .map(PeerStatusResponse::from)
            .collect())
    }

    async fn add_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        let timer = QueryTimer::new("add_friend");

        let result = sqlx::query(
            r#"
            INSERT INTO friends (tg_id, peer_name)
            VALUES ($1, $2)
            ON CONFLICT (tg_id, peer_name) DO NOTHING
            "#,
        )
        .bind(tg_id)
        .bind(peer_name)
        .execute(&self.pool)
        .await;

        timer.record();
        result.map_err(store_error)?;
        Ok(())
    }

    async fn delete_friend(&self, tg_id: i64, peer_name: &str) -> Result<(), StoreError> {
        let timer = QueryTimer::new("delete_friend");

        let result = sqlx::query(
            r#"
            DELETE FROM friends
            WHERE tg_id = $1 AND peer_name = $2
            "#,
        )
        .bind(tg_id)
        .bind(peer_name)
        .execute(&self.pool)
        .await;

        timer.record();
        result.map_err(store_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        record_pool_metrics(&self.pool);
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_keeps_driver_text() {
        let err = store_error(sqlx::Error::PoolTimedOut);
        assert_eq!(err, StoreError::Database(sqlx::Error::PoolTimedOut.to_string()));
    }
}
