//! Route guard and mutation pre-checks.
//!
//! A denial is an ordinary value carrying enough detail to render an
//! access denied state: who asked, what for, which roles would have
//! been permitted, and where to send the user instead.

use khcore::ac::{
    Action,
    Page,
    Role,
    Roles,
};
use serde::Serialize;

use crate::{
    nav::NavContext,
    policy,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessDenied {
    pub role: Option<Role>,
    /// The page as requested, which may not name a known page.
    pub page: String,
    pub action: Option<Action>,
    pub required: Roles,
    pub fallback: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAccess {
    Granted,
    Denied(AccessDenied),
}

/// Decides whether the page may be rendered, or where to redirect.
pub fn guard_page(role: Option<Role>, page: Page, context: NavContext) -> PageAccess {
    if policy::can_view_page(role, page) {
        PageAccess::Granted
    } else {
        log::debug!("denied view of {page} for {role:?}");
        PageAccess::Denied(AccessDenied {
            role,
            page: page.to_string(),
            action: None,
            required: policy::view_roles(page),
            fallback: context.fallback_route(),
        })
    }
}

/// Decides whether a mutation may proceed.  A denial has to be surfaced
/// to the user.
pub fn guard_action(
    role: Option<Role>,
    page: Page,
    action: Action,
    context: NavContext,
) -> PageAccess {
    if policy::can_perform_action(role, page, action) {
        PageAccess::Granted
    } else {
        log::debug!("denied {action} on {page} for {role:?}");
        PageAccess::Denied(AccessDenied {
            role,
            page: page.to_string(),
            action: Some(action),
            required: policy::page_policy(page)
                .map(|policy| policy.action_roles(action))
                .unwrap_or_else(Roles::empty),
            fallback: context.fallback_route(),
        })
    }
}

mod impls;
