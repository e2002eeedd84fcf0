//! Friend link domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Association between a Telegram account and a tracked peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FriendLink {
    pub tg_id: i64,
    pub peer_name: String,
}

/// Request payload for `POST /add_friend/` and `POST /delete_friend/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct FriendRequest {
    pub tg_id: i64,

    #[validate(custom(function = "shared::validation::validate_peer_name"))]
    pub peer_name: String,
}

/// Query string for `GET /get_friends_status/`.
///
/// `tg_id` stays textual so that a missing and a malformed value can be told apart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendsStatusQuery {
    pub tg_id: Option<String>,
}
