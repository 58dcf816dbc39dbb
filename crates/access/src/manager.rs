use serde::{Deserialize, Serialize};

use packhouse_core::{DomainError, DomainResult, Entity};

/// Warehouse role. Determines which operations an actor may gate through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Staff,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Manager => f.write_str("manager"),
            Role::Staff => f.write_str("staff"),
        }
    }
}

/// An actor looked up for access checks. No lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Manager {
    id: i64,
    role: Role,
}

impl Manager {
    pub fn new(id: i64, role: Role) -> DomainResult<Self> {
        if id < 1 {
            return Err(DomainError::validation("id must be positive"));
        }
        Ok(Self { id, role })
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Entity for Manager {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
