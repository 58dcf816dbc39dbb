//! Access control for privileged order operations.
//!
//! Pure policy checks only: no IO, no panics, no business logic. Two
//! deliberately separate services cover the two identity representations the
//! presentation layer works with (a looked-up [`Manager`] entity vs. a raw
//! user-id string).

pub mod manager;
pub mod service;

pub use manager::{Manager, Role};
pub use service::{ManagerAccessService, PermissionService, MANAGER_ID_PREFIX};
