use enumset::EnumSet;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Permission,
    PermissionSet,
};

impl Permission {
    pub const VARIANTS: [Permission; 7] = [
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::Validate,
        Permission::ManageUsers,
        Permission::AccessAnalytics,
    ];
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> &'static str {
        match permission {
            Permission::View => "canView",
            Permission::Create => "canCreate",
            Permission::Edit => "canEdit",
            Permission::Delete => "canDelete",
            Permission::Validate => "canValidate",
            Permission::ManageUsers => "canManageUsers",
            Permission::AccessAnalytics => "canAccessAnalytics",
        }
    }
}

impl FromStr for Permission {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canView" => Ok(Permission::View),
            "canCreate" => Ok(Permission::Create),
            "canEdit" => Ok(Permission::Edit),
            "canDelete" => Ok(Permission::Delete),
            "canValidate" => Ok(Permission::Validate),
            "canManageUsers" => Ok(Permission::ManageUsers),
            "canAccessAnalytics" => Ok(Permission::AccessAnalytics),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl PermissionSet {
    pub fn has(&self, permission: Permission) -> bool {
        match permission {
            Permission::View => self.can_view,
            Permission::Create => self.can_create,
            Permission::Edit => self.can_edit,
            Permission::Delete => self.can_delete,
            Permission::Validate => self.can_validate,
            Permission::ManageUsers => self.can_manage_users,
            Permission::AccessAnalytics => self.can_access_analytics,
        }
    }

    /// The granted flags as a set.
    pub fn granted(&self) -> EnumSet<Permission> {
        Permission::VARIANTS.into_iter()
            .filter(|permission| self.has(*permission))
            .collect()
    }
}

impl From<EnumSet<Permission>> for PermissionSet {
    fn from(granted: EnumSet<Permission>) -> Self {
        Self {
            can_view: granted.contains(Permission::View),
            can_create: granted.contains(Permission::Create),
            can_edit: granted.contains(Permission::Edit),
            can_delete: granted.contains(Permission::Delete),
            can_validate: granted.contains(Permission::Validate),
            can_manage_users: granted.contains(Permission::ManageUsers),
            can_access_analytics: granted.contains(Permission::AccessAnalytics),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for Permission {
        fn value_variants<'a>() -> &'a [Self] {
            &Permission::VARIANTS
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(PossibleValue::new(<&'static str>::from(*self)))
        }
    }
}
