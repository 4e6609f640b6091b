use khcore::ac::{
    Action,
    Feature,
    Role,
    Roles,
};
use super::PagePolicy;

impl PagePolicy {
    pub fn can_view(&self, role: Role) -> bool {
        self.view.contains(role)
    }

    /// The roles granted the action, empty when the page declares no
    /// entry for it.
    pub fn action_roles(&self, action: Action) -> Roles {
        self.actions.iter()
            .find(|(a, _)| *a == action)
            .map(|(_, roles)| *roles)
            .unwrap_or_else(Roles::empty)
    }

    /// The roles granted the feature, empty when the page declares no
    /// entry for it.
    pub fn feature_roles(&self, feature: Feature) -> Roles {
        self.features.iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, roles)| *roles)
            .unwrap_or_else(Roles::empty)
    }

    pub fn can_perform(&self, role: Role, action: Action) -> bool {
        self.action_roles(action).contains(role)
    }

    pub fn can_access(&self, role: Role, feature: Feature) -> bool {
        self.feature_roles(feature).contains(role)
    }
}

#[cfg(test)]
mod test {
    use khcore::ac::{
        Page,
        Role::*,
    };
    use crate::policy::*;
    use super::*;

    #[test]
    fn every_page_declared_once() {
        for page in Page::VARIANTS {
            assert_eq!(
                page_policies().iter()
                    .filter(|policy| policy.page == page)
                    .count(),
                1,
                "{page} must have exactly one policy",
            );
        }
    }

    #[test]
    fn no_duplicate_action_or_feature_entries() {
        for policy in page_policies() {
            for action in Action::VARIANTS {
                assert!(policy.actions.iter().filter(|(a, _)| *a == action).count() <= 1);
            }
            for feature in Feature::VARIANTS {
                assert!(policy.features.iter().filter(|(f, _)| *f == feature).count() <= 1);
            }
        }
    }

    #[test]
    fn undefined_role_is_never_granted() {
        for policy in page_policies() {
            assert!(!policy.can_view(Undefined));
            for action in Action::VARIANTS {
                assert!(!policy.can_perform(Undefined, action));
            }
            for feature in Feature::VARIANTS {
                assert!(!policy.can_access(Undefined, feature));
            }
        }
    }

    #[test]
    fn user_management() {
        assert!(!can_view_page(Some(Consultant), Page::UserManagement));
        assert!(can_view_page(Some(Administrator), Page::UserManagement));
        assert!(can_perform_action(Some(Administrator), Page::UserManagement, Action::Manage));
        assert!(!can_perform_action(Some(KnowledgeChampion), Page::UserManagement, Action::Manage));
        assert_eq!(view_roles(Page::UserManagement), Roles::from([Administrator]));
    }

    #[test]
    fn knowledge_delete() {
        assert!(can_perform_action(Some(KnowledgeChampion), Page::Knowledge, Action::Delete));
        assert!(can_perform_action(Some(Administrator), Page::Knowledge, Action::Delete));
        assert!(!can_perform_action(Some(Consultant), Page::Knowledge, Action::Delete));
        assert!(!can_perform_action(Some(ExecutiveLeadership), Page::Knowledge, Action::Delete));
        assert!(!can_perform_action(Some(KnowledgeCouncilMember), Page::Knowledge, Action::Delete));
        // no manage entry on the knowledge page at all
        assert!(!can_perform_action(Some(Administrator), Page::Knowledge, Action::Manage));
    }

    #[test]
    fn analytics_features() {
        assert!(can_view_page(Some(Consultant), Page::Analytics));
        assert!(!can_access_feature(Some(Consultant), Page::Analytics, Feature::ViewOrgAnalytics));
        assert!(can_access_feature(Some(Consultant), Page::Analytics, Feature::ViewPersonalAnalytics));
        assert!(can_access_feature(Some(ExecutiveLeadership), Page::Analytics, Feature::ViewOrgAnalytics));
        assert!(can_access_feature(Some(KnowledgeCouncilMember), Page::Analytics, Feature::ViewRegionalAnalytics));
        assert!(!can_access_feature(Some(KnowledgeCouncilMember), Page::Analytics, Feature::ViewOrgAnalytics));
        // features are scoped to the page declaring them
        assert!(!can_access_feature(Some(Administrator), Page::Dashboard, Feature::ViewOrgAnalytics));
    }

    #[test]
    fn no_role_no_access() {
        assert!(!can_view_page(None, Page::Dashboard));
        assert!(!can_perform_action(None, Page::Settings, Action::Edit));
        assert!(!can_access_feature(None, Page::Analytics, Feature::ViewPersonalAnalytics));
        assert_eq!(accessible_pages(None).count(), 0);
    }

    #[test]
    fn accessible_pages_order() {
        assert_eq!(
            accessible_pages(Some(Administrator)).collect::<Vec<_>>(),
            Page::VARIANTS.to_vec(),
        );
        let pages = accessible_pages(Some(Consultant)).collect::<Vec<_>>();
        assert!(!pages.contains(&Page::Validation));
        assert!(!pages.contains(&Page::UserManagement));
        assert_eq!(pages.first(), Some(&Page::Dashboard));
        assert_eq!(pages.last(), Some(&Page::Settings));
        assert_eq!(pages.len(), Page::VARIANTS.len() - 2);
    }
}
