//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod peer;

pub use peer::PeerEntity;
