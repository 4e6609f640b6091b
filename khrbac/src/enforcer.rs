use khcore::ac::{
    Action,
    Feature,
    Page,
    Permission,
    PermissionSet,
    Role,
};
use serde::Serialize;

use crate::{
    guard::{
        self,
        PageAccess,
    },
    nav::{
        self,
        NavContext,
        SidebarItem,
    },
    permission,
    policy,
};

/// The access control view of a single session.
///
/// This holds the authenticated role, if any, and nothing else; it is
/// built from the session on every request and every query is answered
/// against the compiled-in tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Enforcer {
    role: Option<Role>,
}

/// Everything a client needs to drive its navigation and UI for a role.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CapabilitySummary {
    pub role: Option<Role>,
    pub display_name: Option<String>,
    pub badge_class: Option<&'static str>,
    pub permissions: PermissionSet,
    pub pages: Vec<Page>,
    pub sidebar: Vec<&'static SidebarItem>,
}

impl Enforcer {
    pub fn new(role: Option<Role>) -> Self {
        Self { role }
    }

    /// Builds the enforcer from the role string held by the session
    /// provider, which is not trusted.
    pub fn from_session(role: Option<&str>) -> Self {
        Self::new(role.map(policy::by_name::session_role))
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn permissions(&self) -> PermissionSet {
        permission::permissions_for(self.role)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        permission::has_permission(self.role, permission)
    }

    pub fn can_view_page(&self, page: Page) -> bool {
        policy::can_view_page(self.role, page)
    }

    pub fn can_perform_action(&self, page: Page, action: Action) -> bool {
        policy::can_perform_action(self.role, page, action)
    }

    pub fn can_access_feature(&self, page: Page, feature: Feature) -> bool {
        policy::can_access_feature(self.role, page, feature)
    }

    pub fn accessible_pages(&self) -> impl Iterator<Item = Page> {
        policy::accessible_pages(self.role)
    }

    pub fn sidebar(&self) -> Vec<&'static SidebarItem> {
        nav::sidebar_for(self.role)
    }

    pub fn sidebar_in(&self, context: NavContext) -> Vec<&'static SidebarItem> {
        nav::filter_context(self.sidebar(), context)
    }

    pub fn guard_page(&self, page: Page, context: NavContext) -> PageAccess {
        guard::guard_page(self.role, page, context)
    }

    pub fn guard_action(&self, page: Page, action: Action, context: NavContext) -> PageAccess {
        guard::guard_action(self.role, page, action, context)
    }

    pub fn summarize(&self) -> CapabilitySummary {
        summarize(self.role)
    }
}

pub fn summarize(role: Option<Role>) -> CapabilitySummary {
    CapabilitySummary {
        role,
        display_name: role.map(|role| role.display_name()),
        badge_class: role.map(|role| role.badge_class()),
        permissions: permission::permissions_for(role),
        pages: policy::accessible_pages(role).collect(),
        sidebar: nav::sidebar_for(role),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_session() {
        assert_eq!(
            Enforcer::from_session(Some("administrator")).role(),
            Some(Role::Administrator),
        );
        assert_eq!(
            Enforcer::from_session(Some("root")).role(),
            Some(Role::Undefined),
        );
        assert_eq!(Enforcer::from_session(None).role(), None);
        assert_eq!(Enforcer::default(), Enforcer::from_session(None));
    }

    #[test]
    fn delegates_to_tables() {
        let enforcer = Enforcer::new(Some(Role::KnowledgeChampion));
        assert!(enforcer.has_permission(Permission::Delete));
        assert!(!enforcer.has_permission(Permission::ManageUsers));
        assert!(enforcer.can_view_page(Page::Validation));
        assert!(!enforcer.can_view_page(Page::UserManagement));
        assert!(enforcer.can_perform_action(Page::Projects, Action::Manage));
        assert!(enforcer.can_access_feature(Page::Leaderboard, Feature::AwardPoints));
        assert!(!enforcer.can_access_feature(Page::Analytics, Feature::ExportAnalytics));
        assert!(!enforcer.guard_page(Page::UserManagement, NavContext::Organization).is_granted());
        assert!(enforcer.guard_action(Page::Knowledge, Action::Delete, NavContext::Explore).is_granted());
    }

    #[test]
    fn sidebar_in_context() {
        let enforcer = Enforcer::new(Some(Role::Consultant));
        let ids = enforcer.sidebar_in(NavContext::Organization)
            .into_iter()
            .map(|item| item.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [
            "dashboard",
            "projects",
            "workspaces",
            "analytics",
            "leaderboard",
        ]);
    }

    #[test]
    fn summary() -> anyhow::Result<()> {
        let summary = Enforcer::new(Some(Role::ExecutiveLeadership)).summarize();
        assert_eq!(summary.display_name.as_deref(), Some("Executive Leadership"));
        assert!(summary.permissions.can_validate);
        assert!(!summary.pages.contains(&Page::UserManagement));
        assert!(summary.pages.contains(&Page::Validation));

        let value = serde_json::to_value(&summary)?;
        assert_eq!(value["role"], "executive_leadership");
        assert_eq!(value["permissions"]["canDelete"], false);
        assert_eq!(value["pages"][0], "dashboard");
        assert_eq!(value["sidebar"][0]["path"], "/dashboard");
        Ok(())
    }

    #[test]
    fn summary_unauthenticated() {
        let summary = Enforcer::default().summarize();
        assert_eq!(summary.role, None);
        assert_eq!(summary.display_name, None);
        assert_eq!(summary.permissions, PermissionSet::default());
        assert!(summary.pages.is_empty());
        assert!(summary.sidebar.is_empty());
    }
}
