//! Domain layer for the campus peer status backend.
//!
//! This crate contains:
//! - Domain models (Peer, Friend link, request/response payloads)
//! - The storage contract and the service that drives it
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::StoreError;
