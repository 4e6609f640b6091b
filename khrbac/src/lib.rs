//! Role-based access control for the knowledge hub.
//!
//! All policy is compiled in.  Every evaluator is a pure function of the
//! role passed in, which is `None` while the session is not yet
//! authenticated; that, and `Role::Undefined`, always yield no access.

pub mod enforcer;
pub mod guard;
pub mod nav;
pub mod permission;
pub mod policy;

pub use khcore::ac::{
    Action,
    Feature,
    Page,
    Permission,
    PermissionSet,
    Role,
    Roles,
};
pub use khcore::error;

pub use crate::enforcer::Enforcer;
pub use crate::guard::{
    AccessDenied,
    PageAccess,
};
pub use crate::nav::{
    NavContext,
    SidebarItem,
};
