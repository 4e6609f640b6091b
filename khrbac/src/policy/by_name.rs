//! String entry points for callers holding raw names, such as a role
//! read back from session state or a page name taken from a route.
//!
//! Roles are parsed leniently and unknown page, action or feature names
//! are denied.

use khcore::ac::{
    Action,
    Feature,
    Page,
    Role,
    Roles,
};
use std::str::FromStr;

use crate::{
    guard::{
        self,
        AccessDenied,
        PageAccess,
    },
    nav::NavContext,
};

fn parse<T: FromStr>(kind: &str, name: &str) -> Option<T> {
    T::from_str(name)
        .map_err(|_| log::debug!("unknown {kind} name {name:?}; denying"))
        .ok()
}

/// Parses a role name held by the session; unknown names become
/// `Role::Undefined`.
pub fn session_role(name: &str) -> Role {
    let role = Role::parse_lenient(name);
    if !role.is_assignable() && !name.is_empty() {
        log::debug!("unknown role name {name:?}; denying");
    }
    role
}

fn role(role: Option<&str>) -> Option<Role> {
    role.map(session_role)
}

pub fn can_view_page(role_name: Option<&str>, page: &str) -> bool {
    parse::<Page>("page", page)
        .map(|page| super::can_view_page(role(role_name), page))
        .unwrap_or(false)
}

pub fn can_perform_action(role_name: Option<&str>, page: &str, action: &str) -> bool {
    parse::<Page>("page", page)
        .zip(parse::<Action>("action", action))
        .map(|(page, action)| super::can_perform_action(role(role_name), page, action))
        .unwrap_or(false)
}

pub fn can_access_feature(role_name: Option<&str>, page: &str, feature: &str) -> bool {
    parse::<Page>("page", page)
        .zip(parse::<Feature>("feature", feature))
        .map(|(page, feature)| super::can_access_feature(role(role_name), page, feature))
        .unwrap_or(false)
}

/// Route guard for a page name taken from the route; an unknown page
/// is denied with no roles that could have viewed it.
pub fn guard_page(role_name: Option<&str>, page: &str, context: NavContext) -> PageAccess {
    let role = role(role_name);
    match parse::<Page>("page", page) {
        Some(page) => guard::guard_page(role, page, context),
        None => PageAccess::Denied(AccessDenied {
            role,
            page: page.to_string(),
            action: None,
            required: Roles::empty(),
            fallback: context.fallback_route(),
        }),
    }
}

/// Mutation pre-check for page and action names from a request.
pub fn guard_action(
    role_name: Option<&str>,
    page: &str,
    action: &str,
    context: NavContext,
) -> PageAccess {
    let role = role(role_name);
    match parse::<Page>("page", page).zip(parse::<Action>("action", action)) {
        Some((page, action)) => guard::guard_action(role, page, action, context),
        None => PageAccess::Denied(AccessDenied {
            role,
            page: page.to_string(),
            action: Action::from_str(action).ok(),
            required: Roles::empty(),
            fallback: context.fallback_route(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_names() {
        assert!(!can_view_page(Some("consultant"), "user-management"));
        assert!(can_view_page(Some("administrator"), "user-management"));
        assert!(can_perform_action(Some("administrator"), "user-management", "manage"));
        assert!(!can_perform_action(Some("knowledge_champion"), "user-management", "manage"));
        assert!(can_view_page(Some("consultant"), "analytics"));
        assert!(!can_access_feature(Some("consultant"), "analytics", "viewOrgAnalytics"));
    }

    #[test]
    fn unknown_names_denied() {
        for role in Role::VARIANTS {
            let role = role.to_string();
            assert!(!can_view_page(Some(&role), "no-such-page"));
            assert!(!can_perform_action(Some(&role), "knowledge", "publish"));
            assert!(!can_access_feature(Some(&role), "analytics", "viewEverything"));
            assert!(!can_perform_action(Some(&role), "no-such-page", "create"));
        }
    }

    #[test]
    fn session_roles() {
        assert_eq!(session_role("knowledge_council_member"), Role::KnowledgeCouncilMember);
        assert_eq!(session_role("superuser"), Role::Undefined);
        assert_eq!(session_role(""), Role::Undefined);
        assert_eq!(role(Some("superuser")), Some(Role::Undefined));
        assert_eq!(role(None), None);
    }

    #[test]
    fn unknown_or_missing_role_denied() {
        assert!(!can_view_page(None, "dashboard"));
        assert!(!can_view_page(Some("superuser"), "dashboard"));
        assert!(!can_view_page(Some("Administrator"), "dashboard"));
        assert!(!can_view_page(Some(""), "dashboard"));
        assert!(!can_perform_action(Some("undefined"), "settings", "edit"));
    }

    #[test]
    fn guard_unknown_page() {
        let access = guard_page(Some("administrator"), "reports", NavContext::Explore);
        let denied = access.denied().expect("unknown page must be denied");
        assert_eq!(denied.page, "reports");
        assert_eq!(denied.required, Roles::empty());
        assert_eq!(denied.fallback, "/explore");
        assert_eq!(
            denied.to_string(),
            r#"role "administrator" may not view page "reports"; requires one of: (none)"#,
        );
    }

    #[test]
    fn guard_known_page() {
        assert!(guard_page(Some("administrator"), "user-management", NavContext::Organization)
            .is_granted());
        let access = guard_page(Some("superuser"), "dashboard", NavContext::Organization);
        let denied = access.denied().expect("unknown role must be denied");
        assert_eq!(denied.role, Some(Role::Undefined));
        assert_eq!(denied.page, "dashboard");
        assert_eq!(denied.required, Roles::assignable());
        assert_eq!(denied.fallback, "/dashboard");
    }

    #[test]
    fn guard_action_names() {
        assert!(guard_action(Some("knowledge_champion"), "knowledge", "delete", NavContext::Organization)
            .is_granted());
        let access = guard_action(Some("administrator"), "knowledge", "publish", NavContext::Organization);
        let denied = access.denied().expect("unknown action must be denied");
        assert_eq!(denied.action, None);
        assert_eq!(denied.required, Roles::empty());
        let access = guard_action(Some("administrator"), "reports", "create", NavContext::Organization);
        let denied = access.denied().expect("unknown page must be denied");
        assert_eq!(denied.action, Some(Action::Create));
        assert_eq!(denied.page, "reports");
    }
}
