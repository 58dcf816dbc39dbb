use packhouse_core::{DomainError, DomainResult};

use crate::manager::{Manager, Role};

/// Naming-convention rule: user ids with this prefix denote managers.
pub const MANAGER_ID_PREFIX: &str = "mgr_";

/// Validates a manager's access rights against a looked-up [`Manager`].
pub struct ManagerAccessService;

impl ManagerAccessService {
    /// Returns `Ok(true)` for the `manager` role, `AccessDenied` otherwise.
    pub fn validate_access(manager: &Manager) -> DomainResult<bool> {
        if manager.role() != Role::Manager {
            return Err(DomainError::access_denied(
                "only managers are allowed",
            ));
        }
        Ok(true)
    }
}

/// Validates manager permissions from a raw user-id string.
///
/// Kept separate from [`ManagerAccessService`]: the two services serve
/// different call sites with different identity representations.
pub struct PermissionService;

impl PermissionService {
    /// Empty id is a validation failure; a well-formed id without the
    /// manager prefix is a policy rejection.
    pub fn validate_manager(user_id: &str) -> DomainResult<()> {
        if user_id.trim().is_empty() {
            return Err(DomainError::validation(
                "user_id must be a non-empty string",
            ));
        }
        if !user_id.starts_with(MANAGER_ID_PREFIX) {
            return Err(DomainError::access_denied(
                "user does not have manager permissions",
            ));
        }
        Ok(())
    }
}
