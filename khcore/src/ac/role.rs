use enumset::{
    EnumSet,
    EnumSetType,
};
use serde::{Deserialize, Serialize};

/// The organizational capacity of a user.
///
/// The enumeration is closed; `Undefined` is the explicit variant that
/// untrusted input collapses into, and no policy table ever grants it
/// anything.
#[non_exhaustive]
#[derive(Debug, Default, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Consultant,
    KnowledgeChampion,
    Administrator,
    ExecutiveLeadership,
    KnowledgeCouncilMember,
    // catch-all for whenever infallable conversion is needed
    #[default]
    #[serde(other)]
    Undefined,
}

/// A set of roles, typically the roles granted some page, action or
/// feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct Roles(pub EnumSet<Role>);

/// Formats a snake_case identifier for display: split on `_`, title-case
/// each segment and rejoin with a single space.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

mod impls;
