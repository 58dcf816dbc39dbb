//! Audit records: immutable facts about actions taken on orders.
//!
//! Records are validated on construction and never mutated or deleted. The
//! audit-log store itself belongs to the persistence collaborator; this crate
//! only defines the facts.

pub mod entry;
pub mod packaging;

pub use entry::AuditLogEntry;
pub use packaging::PackagingAudit;
