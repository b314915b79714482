//! Identity of the user a search runs for.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which side of a placement the caller's organization is on.
///
/// Decides whether "owned by me" and "owned by my organization" follow the
/// hiring side (job creator) or the supplying side (source partner) of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    JobCreator,
    SourcePartner,
}

/// Admin role of the calling user, most privileged first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SystemAdmin,
    Admin,
    PartnerAdmin,
    SemiLimited,
    Limited,
    ReadOnly,
}

impl UserRole {
    /// Admins and above see every organization's users.
    pub fn sees_all_partners(self) -> bool {
        self <= Self::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerContext {
    pub user_id: i64,
    pub partner_id: i64,
    pub organization_role: OrganizationRole,
    pub role: UserRole,
    /// Countries the caller may see; empty means unrestricted.
    #[serde(default)]
    pub permitted_countries: BTreeSet<i64>,
}

impl CallerContext {
    /// A caller with the least privileged role; widen it with [`Self::with_role`].
    pub fn new(user_id: i64, partner_id: i64, organization_role: OrganizationRole) -> Self {
        Self {
            user_id,
            partner_id,
            organization_role,
            role: UserRole::ReadOnly,
            permitted_countries: BTreeSet::new(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_permitted_countries(mut self, countries: impl IntoIterator<Item = i64>) -> Self {
        self.permitted_countries = countries.into_iter().collect();
        self
    }
}
