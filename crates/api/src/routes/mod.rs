//! HTTP route handlers.

pub mod fallback;
pub mod friends;
pub mod health;
pub mod peers;

/// Acknowledgement messages returned by the mutating endpoints.
pub const PEERS_UPDATED_MESSAGE: &str = "peers updated successfully";
pub const FRIEND_ADDED_MESSAGE: &str = "friend added successfully";
pub const FRIEND_DELETED_MESSAGE: &str = "friend deleted successfully";
