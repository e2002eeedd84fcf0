//! Persistence layer for the campus peer status backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - The PostgreSQL campus repository

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
