//! Common validation utilities.

use validator::ValidationError;

/// Validates that a peer name is present.
///
/// Names are stored verbatim, so anything beyond an empty or blank value is
/// accepted.
pub fn validate_peer_name(peer_name: &str) -> Result<(), ValidationError> {
    if peer_name.trim().is_empty() {
        let mut err = ValidationError::new("peer_name_required");
        err.message = Some("peer_name must not be empty".into());
        return Err(err);
    }

    Ok(())
}
