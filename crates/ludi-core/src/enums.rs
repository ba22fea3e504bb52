//! Shared enums.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FacilitatorSource
// ---------------------------------------------------------------------------

/// Which users endpoint lists facilitator accounts.
///
/// Deployments differ in how facilitator accounts are tagged: either with a
/// custom `type` field on the user, or through the role relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FacilitatorSource {
    /// `/api/users-permissions/users?filters[type]=Facilitator`
    #[default]
    UsersPermissions,
    /// `/api/users?filters[role][name][$eq]=Facilitator`
    RoleFilter,
}

impl FacilitatorSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsersPermissions => "users-permissions",
            Self::RoleFilter => "role-filter",
        }
    }
}

impl fmt::Display for FacilitatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
