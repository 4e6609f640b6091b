use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Action,
    Feature,
    Page,
};

impl Page {
    pub const VARIANTS: [Page; 11] = [
        Page::Dashboard,
        Page::Knowledge,
        Page::Projects,
        Page::Repositories,
        Page::Workspaces,
        Page::Validation,
        Page::Analytics,
        Page::Leaderboard,
        Page::Notifications,
        Page::UserManagement,
        Page::Settings,
    ];
}

impl Action {
    pub const VARIANTS: [Action; 4] = [
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Manage,
    ];
}

impl Feature {
    pub const VARIANTS: [Feature; 11] = [
        Feature::ViewTeamActivity,
        Feature::ValidateKnowledge,
        Feature::FeatureKnowledge,
        Feature::InviteMembers,
        Feature::ViewPersonalAnalytics,
        Feature::ViewRegionalAnalytics,
        Feature::ViewOrgAnalytics,
        Feature::ExportAnalytics,
        Feature::AwardPoints,
        Feature::InviteUsers,
        Feature::AssignRoles,
    ];
}

impl From<Page> for &'static str {
    fn from(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "dashboard",
            Page::Knowledge => "knowledge",
            Page::Projects => "projects",
            Page::Repositories => "repositories",
            Page::Workspaces => "workspaces",
            Page::Validation => "validation",
            Page::Analytics => "analytics",
            Page::Leaderboard => "leaderboard",
            Page::Notifications => "notifications",
            Page::UserManagement => "user-management",
            Page::Settings => "settings",
        }
    }
}

impl From<Action> for &'static str {
    fn from(action: Action) -> &'static str {
        match action {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }
}

impl From<Feature> for &'static str {
    fn from(feature: Feature) -> &'static str {
        match feature {
            Feature::ViewTeamActivity => "viewTeamActivity",
            Feature::ValidateKnowledge => "validateKnowledge",
            Feature::FeatureKnowledge => "featureKnowledge",
            Feature::InviteMembers => "inviteMembers",
            Feature::ViewPersonalAnalytics => "viewPersonalAnalytics",
            Feature::ViewRegionalAnalytics => "viewRegionalAnalytics",
            Feature::ViewOrgAnalytics => "viewOrgAnalytics",
            Feature::ExportAnalytics => "exportAnalytics",
            Feature::AwardPoints => "awardPoints",
            Feature::InviteUsers => "inviteUsers",
            Feature::AssignRoles => "assignRoles",
        }
    }
}

// The string forms are the complete wire vocabulary, so parsing just
// searches the variant list.
macro_rules! impl_str_conv {
    ($($ty:ident),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", <&'static str>::from(*self))
            }
        }

        impl FromStr for $ty {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::VARIANTS.into_iter()
                    .find(|v| <&'static str>::from(*v) == s)
                    .ok_or_else(|| ValueError::Unsupported(s.to_string()))
            }
        }
    )*}
}

impl_str_conv!(Page, Action, Feature);

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    macro_rules! impl_value_enum {
        ($($ty:ident),*) => {$(
            impl ValueEnum for $ty {
                fn value_variants<'a>() -> &'a [Self] {
                    &$ty::VARIANTS
                }

                fn to_possible_value(&self) -> Option<PossibleValue> {
                    Some(PossibleValue::new(<&'static str>::from(*self)))
                }
            }
        )*}
    }

    impl_value_enum!(Page, Action, Feature);
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::*;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        assert_eq!(Page::UserManagement.to_string(), "user-management");
        assert_eq!(Page::UserManagement, Page::from_str("user-management")?);
        assert_eq!(Action::Manage, Action::from_str("manage")?);
        assert_eq!(Feature::ViewOrgAnalytics.to_string(), "viewOrgAnalytics");
        assert_eq!(Feature::ViewOrgAnalytics, Feature::from_str("viewOrgAnalytics")?);

        assert!(matches!(
            Page::from_str("user_management").expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "user_management",
        ));
        assert!(Action::from_str("Create").is_err());
        assert!(Feature::from_str("").is_err());
        Ok(())
    }

    #[test]
    fn serde_matches_display() -> anyhow::Result<()> {
        for page in Page::VARIANTS {
            assert_eq!(serde_json::to_string(&page)?, format!("\"{page}\""));
        }
        for action in Action::VARIANTS {
            assert_eq!(serde_json::to_string(&action)?, format!("\"{action}\""));
        }
        for feature in Feature::VARIANTS {
            assert_eq!(serde_json::to_string(&feature)?, format!("\"{feature}\""));
        }
        Ok(())
    }
}
