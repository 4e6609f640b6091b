pub mod page;
pub mod permission;
pub mod role;

pub use self::page::{
    Action,
    Feature,
    Page,
};
pub use self::permission::{
    Permission,
    PermissionSet,
};
pub use self::role::{
    Role,
    Roles,
};
