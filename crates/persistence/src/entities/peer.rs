//! Peer entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::PeerStatusResponse;
use sqlx::FromRow;

/// Database row mapping for the peers table.
#[derive(Debug, Clone, FromRow)]
pub struct PeerEntity {
    pub peer_name: String,
    #[sqlx(rename = "row")]
    pub seat_row: String,
    pub col: String,
    pub cluster: String,
    pub time: DateTime<Utc>,
    pub status: String,
}

impl From<PeerEntity> for PeerStatusResponse {
    fn from(entity: PeerEntity) -> Self {
        Self {
            peer_name: entity.peer_name,
            row: entity.seat_row,
            col: entity.col,
            cluster: entity.cluster,
            time: entity.time,
            status: entity.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entity() -> PeerEntity {
        PeerEntity {
            peer_name: "p1".to_string(),
            seat_row: "A".to_string(),
            col: "3".to_string(),
            cluster: "C1".to_string(),
            time: Utc::now(),
            status: "1".to_string(),
        }
    }

    #[test]
    fn test_peer_entity_into_response() {
        let entity = create_test_entity();
        let time = entity.time;
        let response: PeerStatusResponse = entity.into();

        assert_eq!(response.peer_name, "p1");
        assert_eq!(response.row, "A");
        assert_eq!(response.col, "3");
        assert_eq!(response.cluster, "C1");
        assert_eq!(response.time, time);
        assert_eq!(response.status, "1");
    }

    #[test]
    fn test_peer_entity_maps_from_pg_rows() {
        fn assert_from_row<T: for<'r> FromRow<'r, sqlx::postgres::PgRow>>() {}
        assert_from_row::<PeerEntity>();
    }

    #[test]
    fn test_peer_entity_debug() {
        let debug_str = format!("{:?}", create_test_entity());
        assert!(debug_str.contains("PeerEntity"));
    }
}
