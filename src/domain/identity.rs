//! Caller identity and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_MEMBER, ROLE_MERCHANT};

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Merchant,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Check if this role satisfies a required role
    pub fn can_access(&self, required: Role) -> bool {
        self.is_admin() || *self == required
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => Role::Admin,
            ROLE_MERCHANT => Role::Merchant,
            _ => Role::Member,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::Member => write!(f, "{}", ROLE_MEMBER),
            Role::Merchant => write!(f, "{}", ROLE_MERCHANT),
        }
    }
}

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}
