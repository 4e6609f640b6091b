//! The role to permission set table.
//!
//! Lookup is total: every assignable role has a complete entry, and
//! `Role::Undefined` (or no role at all) resolves to the all-denied set.

use khcore::ac::{
    Permission,
    PermissionSet,
    Role,
};

const fn set(
    can_view: bool,
    can_create: bool,
    can_edit: bool,
    can_delete: bool,
    can_validate: bool,
    can_manage_users: bool,
    can_access_analytics: bool,
) -> PermissionSet {
    PermissionSet {
        can_view,
        can_create,
        can_edit,
        can_delete,
        can_validate,
        can_manage_users,
        can_access_analytics,
    }
}

//                                                view   create edit   delete valid  users  analytics
static PERMISSION_TABLE: [(Role, PermissionSet); 5] = [
    (Role::Consultant,             set(true,  true,  true,  false, false, false, true)),
    (Role::KnowledgeChampion,      set(true,  true,  true,  true,  true,  false, true)),
    (Role::Administrator,          set(true,  true,  true,  true,  true,  true,  true)),
    (Role::ExecutiveLeadership,    set(true,  true,  true,  false, true,  false, true)),
    (Role::KnowledgeCouncilMember, set(true,  true,  true,  false, true,  false, true)),
];

/// The full table in declaration order.
pub fn permission_table() -> &'static [(Role, PermissionSet)] {
    &PERMISSION_TABLE
}

/// Returns the permission set for the role.
pub fn permissions(role: Role) -> PermissionSet {
    PERMISSION_TABLE.iter()
        .find(|(r, _)| *r == role)
        .map(|(_, permissions)| *permissions)
        .unwrap_or_else(|| {
            log::debug!("no permission set for role {role}; denying all");
            PermissionSet::default()
        })
}

/// Returns the permission set for the role, or the all-denied set when
/// there is no authenticated role.
pub fn permissions_for(role: Option<Role>) -> PermissionSet {
    role.map(permissions)
        .unwrap_or_default()
}

pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    let result = permissions_for(role).has(permission);
    log::trace!("has_permission({role:?}, {permission}) -> {result}");
    result
}
