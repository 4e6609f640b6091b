use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// A capability flag key within a `PermissionSet`.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
pub enum Permission {
    #[serde(rename = "canView")]
    View,
    #[serde(rename = "canCreate")]
    Create,
    #[serde(rename = "canEdit")]
    Edit,
    #[serde(rename = "canDelete")]
    Delete,
    #[serde(rename = "canValidate")]
    Validate,
    #[serde(rename = "canManageUsers")]
    ManageUsers,
    #[serde(rename = "canAccessAnalytics")]
    AccessAnalytics,
}

/// The fixed record of capability flags attached to a role.
///
/// The default value denies everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_validate: bool,
    pub can_manage_users: bool,
    pub can_access_analytics: bool,
}

mod impls;
