use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// A named page of the application.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Knowledge,
    Projects,
    Repositories,
    Workspaces,
    Validation,
    Analytics,
    Leaderboard,
    Notifications,
    UserManagement,
    Settings,
}

/// A mutation that may be gated on a page.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Edit,
    Delete,
    Manage,
}

/// A read-only toggle within a page.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    ViewTeamActivity,
    ValidateKnowledge,
    FeatureKnowledge,
    InviteMembers,
    ViewPersonalAnalytics,
    ViewRegionalAnalytics,
    ViewOrgAnalytics,
    ExportAnalytics,
    AwardPoints,
    InviteUsers,
    AssignRoles,
}

mod impls;
