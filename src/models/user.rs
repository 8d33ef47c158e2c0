//! User domain models

use serde::{Deserialize, Serialize};

use super::role::RoleRef;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<RoleRef>,
}

impl User {
    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased; an empty needle matches every user.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }

    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles.iter().any(|r| r.id == role_id)
    }
}

/// Create user request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
}

impl CreateUserRequest {
    pub fn into_user(self) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            email: self.email,
            roles: self.roles,
        }
    }
}
