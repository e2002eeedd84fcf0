//! Repository implementations for database operations.

pub mod campus;

pub use campus::PgCampusRepository;
