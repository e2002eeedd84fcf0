//! Domain models for the campus peer status backend.

pub mod friend;
pub mod peer;

pub use friend::{FriendLink, FriendRequest, FriendsStatusQuery};
pub use peer::{
    MessageResponse, Peer, PeerStatusQuery, PeerStatusResponse, PeerUpdate, UpdatePeersRequest,
    PEER_STATUS_ACTIVE,
};
