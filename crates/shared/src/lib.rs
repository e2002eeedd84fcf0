//! Shared utilities for the campus peer status backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validators for request payloads

pub mod validation;
