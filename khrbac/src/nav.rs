//! Sidebar navigation.
//!
//! The navigation table is filtered in two independent steps: by role,
//! through a permission check, then optionally by the routing context.
//! Neither step reorders the entries.

use khcore::ac::Permission;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Count(u32),
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Always,
    Requires(Permission),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SidebarItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub badge: Option<Badge>,
    pub visibility: Visibility,
}

/// The routing context a navigation list is rendered for.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavContext {
    #[default]
    Organization,
    Explore,
}

const fn item(
    id: &'static str,
    label: &'static str,
    path: &'static str,
    icon: &'static str,
    visibility: Visibility,
) -> SidebarItem {
    SidebarItem { id, label, path, icon, badge: None, visibility }
}

static SIDEBAR: [SidebarItem; 12] = [
    item("dashboard", "Dashboard", "/dashboard", "layout-dashboard", Visibility::Always),
    item("explore", "Explore", "/explore", "compass", Visibility::Always),
    item("knowledge", "Knowledge Base", "/knowledge", "book-open",
        Visibility::Requires(Permission::View)),
    item("projects", "Projects", "/projects", "folder-kanban",
        Visibility::Requires(Permission::View)),
    item("repositories", "Repositories", "/repositories", "database",
        Visibility::Requires(Permission::View)),
    item("workspaces", "Workspaces", "/workspaces", "users",
        Visibility::Requires(Permission::View)),
    item("validation", "Validation Queue", "/validation", "check-circle",
        Visibility::Requires(Permission::Validate)),
    item("analytics", "Analytics", "/analytics", "bar-chart",
        Visibility::Requires(Permission::AccessAnalytics)),
    SidebarItem {
        badge: Some(Badge::Text("Beta")),
        ..item("leaderboard", "Leaderboard", "/leaderboard", "trophy", Visibility::Always)
    },
    item("notifications", "Notifications", "/notifications", "bell", Visibility::Always),
    item("user-management", "User Management", "/user-management", "shield",
        Visibility::Requires(Permission::ManageUsers)),
    item("settings", "Settings", "/settings", "settings", Visibility::Always),
];

// Entries kept in the explore context; the organization context keeps
// the rest.
const EXPLORE_PREFIXES: [&str; 3] = ["/explore", "/knowledge", "/repositories"];
const EXPLORE_IDS: [&str; 2] = ["notifications", "settings"];

/// The complete navigation table in declaration order.
pub fn sidebar_items() -> &'static [SidebarItem] {
    &SIDEBAR
}

mod impls;
pub use self::impls::{
    filter_context,
    sidebar_for,
    visible_items,
};
