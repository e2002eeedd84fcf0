//! Domain services for the campus peer status backend.
//!
//! Services contain the logic that sits between transport and storage.

pub mod campus;
pub mod memory;

pub use campus::{split_update_request, CampusRepository, CampusService};
pub use memory::InMemoryCampusRepository;
