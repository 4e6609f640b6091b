use enumset::EnumSet;
use std::{
    fmt,
    ops::{
        BitAnd,
        BitOr,
    },
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    display_name,
    Role,
    Roles,
};

impl Role {
    /// Every assignable role, in declaration order.
    pub const VARIANTS: [Role; 5] = [
        Role::Consultant,
        Role::KnowledgeChampion,
        Role::Administrator,
        Role::ExecutiveLeadership,
        Role::KnowledgeCouncilMember,
    ];

    /// The validated construction point for role strings coming from
    /// session state; anything unrecognized becomes `Role::Undefined`.
    pub fn parse_lenient(s: &str) -> Self {
        Role::from_str(s).unwrap_or_default()
    }

    /// Whether this is one of the assignable roles, i.e. not
    /// `Role::Undefined`.
    pub fn is_assignable(&self) -> bool {
        Role::VARIANTS.contains(self)
    }

    pub fn display_name(&self) -> String {
        display_name(<&'static str>::from(*self))
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Administrator => "bg-red-100 text-red-800",
            Role::ExecutiveLeadership => "bg-purple-100 text-purple-800",
            Role::KnowledgeChampion => "bg-blue-100 text-blue-800",
            Role::KnowledgeCouncilMember => "bg-amber-100 text-amber-800",
            Role::Consultant => "bg-green-100 text-green-800",
            Role::Undefined => "bg-gray-100 text-gray-800",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> &'static str {
        match role {
            Role::Consultant => "consultant",
            Role::KnowledgeChampion => "knowledge_champion",
            Role::Administrator => "administrator",
            Role::ExecutiveLeadership => "executive_leadership",
            Role::KnowledgeCouncilMember => "knowledge_council_member",
            Role::Undefined => "undefined",
        }
    }
}

impl FromStr for Role {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consultant" => Ok(Role::Consultant),
            "knowledge_champion" => Ok(Role::KnowledgeChampion),
            "administrator" => Ok(Role::Administrator),
            "executive_leadership" => Ok(Role::ExecutiveLeadership),
            "knowledge_council_member" => Ok(Role::KnowledgeCouncilMember),
            // Undefined,
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl Roles {
    pub fn empty() -> Self {
        Self(EnumSet::empty())
    }

    /// All assignable roles; never includes `Role::Undefined`.
    pub fn assignable() -> Self {
        Self::from(Role::VARIANTS)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> {
        self.0.iter()
    }
}

impl<const N: usize> From<[Role; N]> for Roles {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

impl From<Vec<Role>> for Roles {
    fn from(roles: Vec<Role>) -> Self {
        roles.into_iter().collect()
    }
}

impl From<Roles> for Vec<Role> {
    fn from(roles: Roles) -> Self {
        roles.iter().collect()
    }
}

impl FromIterator<Role> for Roles {
    fn from_iter<I: IntoIterator<Item=Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl BitAnd for Roles {
    type Output = Roles;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Roles {
    type Output = Roles;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let names = self.iter()
            .map(|role| role.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&names)
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for Role {
        fn value_variants<'a>() -> &'a [Self] {
            &Role::VARIANTS
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            match self {
                Role::Undefined => None,
                role => Some(PossibleValue::new(<&'static str>::from(*role))),
            }
        }
    }
}
