//! Ownership trait for caller-owned resources.
//!
//! Provides the `OwnedByCaller` trait that standardizes ownership checking
//! for single-owner aggregates: one consistent method set and a
//! `check_ownership()` that returns a proper domain error.

use super::{CallerId, DomainError, ErrorCode};

/// Trait for aggregates that have a single owner.
///
/// Implementors return the `CallerId` of the owning caller; the trait
/// provides default implementations for ownership checking.
pub trait OwnedByCaller {
    /// Returns the ID of the caller who owns this resource.
    fn owner_id(&self) -> &CallerId;

    /// Checks if the given caller is the owner.
    fn is_owner(&self, caller_id: &CallerId) -> bool {
        self.owner_id() == caller_id
    }

    /// Validates ownership, returning `Unauthorized` if the caller is
    /// not the owner.
    fn check_ownership(&self, caller_id: &CallerId) -> Result<(), DomainError> {
        if self.is_owner(caller_id) {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::Unauthorized, "Caller does not own this resource")
                    .with_detail("owner_id", self.owner_id().to_string())
                    .with_detail("requested_by", caller_id.to_string()),
            )
        }
    }
}
