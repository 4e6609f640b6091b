//! The page policy table.
//!
//! Each page lists the roles that may view it, and independently the
//! roles granted each action and each feature on it.  Anything not
//! listed is denied.  Administrator access is granted by the entries
//! below like any other role.

use enumset::enum_set;
use khcore::ac::{
    Action,
    Feature,
    Page,
    Role,
    Roles,
};
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct PagePolicy {
    pub page: Page,
    pub view: Roles,
    pub actions: &'static [(Action, Roles)],
    pub features: &'static [(Feature, Roles)],
}

const EVERYONE: Roles = Roles(enum_set!(
    Role::Consultant |
    Role::KnowledgeChampion |
    Role::Administrator |
    Role::ExecutiveLeadership |
    Role::KnowledgeCouncilMember
));
const VALIDATORS: Roles = Roles(enum_set!(
    Role::KnowledgeChampion |
    Role::Administrator |
    Role::ExecutiveLeadership |
    Role::KnowledgeCouncilMember
));
const ORGANIZERS: Roles = Roles(enum_set!(
    Role::KnowledgeChampion |
    Role::Administrator |
    Role::ExecutiveLeadership
));
const STEWARDS: Roles = Roles(enum_set!(
    Role::KnowledgeChampion |
    Role::Administrator
));
const LEADERSHIP: Roles = Roles(enum_set!(
    Role::Administrator |
    Role::ExecutiveLeadership
));
const ADMINISTRATORS: Roles = Roles(enum_set!(
    Role::Administrator
));

static PAGE_POLICIES: [PagePolicy; 11] = [
    PagePolicy {
        page: Page::Dashboard,
        view: EVERYONE,
        actions: &[],
        features: &[
            (Feature::ViewTeamActivity, VALIDATORS),
        ],
    },
    PagePolicy {
        page: Page::Knowledge,
        view: EVERYONE,
        actions: &[
            (Action::Create, EVERYONE),
            (Action::Edit, EVERYONE),
            (Action::Delete, STEWARDS),
        ],
        features: &[
            (Feature::ValidateKnowledge, VALIDATORS),
            (Feature::FeatureKnowledge, STEWARDS),
        ],
    },
    PagePolicy {
        page: Page::Projects,
        view: EVERYONE,
        actions: &[
            (Action::Create, EVERYONE),
            (Action::Edit, EVERYONE),
            (Action::Delete, STEWARDS),
            (Action::Manage, STEWARDS),
        ],
        features: &[],
    },
    PagePolicy {
        page: Page::Repositories,
        view: EVERYONE,
        actions: &[
            (Action::Create, EVERYONE),
            (Action::Edit, EVERYONE),
            (Action::Delete, STEWARDS),
        ],
        features: &[],
    },
    PagePolicy {
        page: Page::Workspaces,
        view: EVERYONE,
        actions: &[
            (Action::Create, ORGANIZERS),
            (Action::Edit, ORGANIZERS),
            (Action::Manage, STEWARDS),
        ],
        features: &[
            (Feature::InviteMembers, STEWARDS),
        ],
    },
    PagePolicy {
        page: Page::Validation,
        view: VALIDATORS,
        actions: &[
            (Action::Manage, VALIDATORS),
        ],
        features: &[],
    },
    PagePolicy {
        page: Page::Analytics,
        view: EVERYONE,
        actions: &[],
        features: &[
            (Feature::ViewPersonalAnalytics, EVERYONE),
            (Feature::ViewRegionalAnalytics, VALIDATORS),
            (Feature::ViewOrgAnalytics, LEADERSHIP),
            (Feature::ExportAnalytics, LEADERSHIP),
        ],
    },
    PagePolicy {
        page: Page::Leaderboard,
        view: EVERYONE,
        actions: &[
            (Action::Manage, ADMINISTRATORS),
        ],
        features: &[
            (Feature::AwardPoints, STEWARDS),
        ],
    },
    PagePolicy {
        page: Page::Notifications,
        view: EVERYONE,
        actions: &[],
        features: &[],
    },
    PagePolicy {
        page: Page::UserManagement,
        view: ADMINISTRATORS,
        actions: &[
            (Action::Create, ADMINISTRATORS),
            (Action::Edit, ADMINISTRATORS),
            (Action::Delete, ADMINISTRATORS),
            (Action::Manage, ADMINISTRATORS),
        ],
        features: &[
            (Feature::InviteUsers, ADMINISTRATORS),
            (Feature::AssignRoles, ADMINISTRATORS),
        ],
    },
    PagePolicy {
        page: Page::Settings,
        view: EVERYONE,
        actions: &[
            (Action::Edit, EVERYONE),
        ],
        features: &[],
    },
];

/// The full table in declaration order.
pub fn page_policies() -> &'static [PagePolicy] {
    &PAGE_POLICIES
}

pub fn page_policy(page: Page) -> Option<&'static PagePolicy> {
    PAGE_POLICIES.iter()
        .find(|policy| policy.page == page)
}

/// The roles that may view the page.
pub fn view_roles(page: Page) -> Roles {
    page_policy(page)
        .map(|policy| policy.view)
        .unwrap_or_else(Roles::empty)
}

pub fn can_view_page(role: Option<Role>, page: Page) -> bool {
    let result = role
        .zip(page_policy(page))
        .map(|(role, policy)| policy.can_view(role))
        .unwrap_or(false);
    log::trace!("can_view_page({role:?}, {page}) -> {result}");
    result
}

pub fn can_perform_action(role: Option<Role>, page: Page, action: Action) -> bool {
    let result = role
        .zip(page_policy(page))
        .map(|(role, policy)| policy.can_perform(role, action))
        .unwrap_or(false);
    log::trace!("can_perform_action({role:?}, {page}, {action}) -> {result}");
    result
}

pub fn can_access_feature(role: Option<Role>, page: Page, feature: Feature) -> bool {
    let result = role
        .zip(page_policy(page))
        .map(|(role, policy)| policy.can_access(role, feature))
        .unwrap_or(false);
    log::trace!("can_access_feature({role:?}, {page}, {feature}) -> {result}");
    result
}

/// The pages the role may view, in table declaration order.
pub fn accessible_pages(role: Option<Role>) -> impl Iterator<Item = Page> {
    page_policies().iter()
        .filter(move |policy| role
            .map(|role| policy.can_view(role))
            .unwrap_or(false)
        )
        .map(|policy| policy.page)
}

mod impls;
pub mod by_name;
