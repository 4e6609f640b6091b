use std::fmt;
use super::*;

impl PageAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, PageAccess::Granted)
    }

    pub fn denied(&self) -> Option<&AccessDenied> {
        match self {
            PageAccess::Granted => None,
            PageAccess::Denied(denied) => Some(denied),
        }
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "role {:?} may not ", <&'static str>::from(role))?,
            None => f.write_str("an unauthenticated session may not ")?,
        }
        match self.action {
            Some(action) => write!(f, "{action} on page {:?}", self.page)?,
            None => write!(f, "view page {:?}", self.page)?,
        }
        write!(f, "; requires one of: {}", self.required)
    }
}
