use khcore::ac::{
    Permission,
    Role,
};
use crate::permission::has_permission;
use super::*;

impl SidebarItem {
    /// A copy of this item carrying the given badge, e.g. a runtime
    /// unread count.
    pub fn with_badge(&self, badge: Badge) -> Self {
        Self {
            badge: Some(badge),
            ..self.clone()
        }
    }

    pub fn is_visible(&self, has_permission: impl Fn(Permission) -> bool) -> bool {
        match self.visibility {
            Visibility::Always => true,
            Visibility::Requires(permission) => has_permission(permission),
        }
    }
}

impl NavContext {
    pub fn admits(&self, item: &SidebarItem) -> bool {
        let explore = EXPLORE_PREFIXES.iter()
            .any(|prefix| item.path.starts_with(prefix))
            || EXPLORE_IDS.contains(&item.id);
        match self {
            NavContext::Explore => explore,
            NavContext::Organization => !explore,
        }
    }

    /// Where a route guard sends a user who may not view a page.
    pub fn fallback_route(&self) -> &'static str {
        match self {
            NavContext::Organization => "/dashboard",
            NavContext::Explore => "/explore",
        }
    }
}

/// The navigation entries visible to the role, in declaration order.
///
/// The permission check is consulted for every entry on every call;
/// without a known role nothing is visible.
pub fn visible_items(
    role: Option<Role>,
    has_permission: impl Fn(Permission) -> bool,
) -> Vec<&'static SidebarItem> {
    if !role.map(|role| role.is_assignable()).unwrap_or(false) {
        log::trace!("no known role ({role:?}); empty sidebar");
        return Vec::new();
    }
    sidebar_items().iter()
        .filter(|item| item.is_visible(&has_permission))
        .collect()
}

/// The navigation entries visible to the role, checked against the
/// permission table.
pub fn sidebar_for(role: Option<Role>) -> Vec<&'static SidebarItem> {
    visible_items(role, |permission| has_permission(role, permission))
}

/// Keeps only the entries belonging to the context, preserving order.
pub fn filter_context<'a>(
    items: impl IntoIterator<Item = &'a SidebarItem>,
    context: NavContext,
) -> Vec<&'a SidebarItem> {
    items.into_iter()
        .filter(|item| context.admits(item))
        .collect()
}
