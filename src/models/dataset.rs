//! Entity collections owned by the data service

use serde::{Deserialize, Serialize};

use super::{role::Permission, role::Role, user::User};

/// Full entity dataset, persisted as one blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}
