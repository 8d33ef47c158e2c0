//! Role and permission domain models

use serde::{Deserialize, Serialize};

/// Role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: Vec<PermissionRef>,
}

impl Role {
    /// Case-insensitive substring match on the role name (`needle` lowercased).
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }

    pub fn to_ref(&self) -> RoleRef {
        RoleRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub name: String,
}

impl Permission {
    pub fn to_ref(&self) -> PermissionRef {
        PermissionRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Reference from a user to one of its roles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: String,
    pub name: String,
}

/// Reference from a role to one of its permissions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRef {
    pub id: String,
    pub name: String,
}
