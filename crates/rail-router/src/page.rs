use serde::Serialize;

use crate::route_table::{PatternSegment, RoutePattern};

/// Name of the positional parameter carried by per-train pages.
pub const TRAIN_ID_PARAM: &str = "trainId";

/// Top-level pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RailflowPage {
    Dashboard,
    Tracking,
    CollisionDetection,
    Scheduling,
    Analytics,
    Alerts,
    Assistant,
    Settings,
    AllRoutes,
    Emergency,
    TrainDetails,
    TrainChat,
    RouteManagement,
    NotFound,
}

/// Primary sidebar entries, in display order.
pub const SIDEBAR_NAVIGATION_PAGES: [RailflowPage; 7] = [
    RailflowPage::Dashboard,
    RailflowPage::Tracking,
    RailflowPage::CollisionDetection,
    RailflowPage::Scheduling,
    RailflowPage::Analytics,
    RailflowPage::Alerts,
    RailflowPage::Assistant,
];

/// Administration sidebar entries.
pub const SIDEBAR_ADMIN_PAGES: [RailflowPage; 1] = [RailflowPage::Settings];

impl RailflowPage {
    /// Pages reachable through the route table, in match order.
    pub const ROUTED: [RailflowPage; 13] = [
        Self::Dashboard,
        Self::Tracking,
        Self::CollisionDetection,
        Self::Scheduling,
        Self::Analytics,
        Self::Alerts,
        Self::Assistant,
        Self::Settings,
        Self::AllRoutes,
        Self::Emergency,
        Self::TrainDetails,
        Self::TrainChat,
        Self::RouteManagement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Tracking => "tracking",
            Self::CollisionDetection => "collision-detection",
            Self::Scheduling => "scheduling",
            Self::Analytics => "analytics",
            Self::Alerts => "alerts",
            Self::Assistant => "assistant",
            Self::Settings => "settings",
            Self::AllRoutes => "all-routes",
            Self::Emergency => "emergency",
            Self::TrainDetails => "train-details",
            Self::TrainChat => "train-chat",
            Self::RouteManagement => "route-management",
            Self::NotFound => "not-found",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Railway Control Dashboard",
            Self::Tracking => "Live Train Tracking",
            Self::CollisionDetection => "Collision Detection System",
            Self::Scheduling => "Schedule Management",
            Self::Analytics => "Analytics Dashboard",
            Self::Alerts => "Alert Management",
            Self::Assistant => "AI Assistant",
            Self::Settings => "System Settings",
            Self::AllRoutes => "All Routes",
            Self::Emergency => "Emergency Control",
            Self::TrainDetails => "Train Details",
            Self::TrainChat => "Train Chat",
            Self::RouteManagement => "Route Management",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Sidebar label, for pages listed in the sidebar.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Dashboard"),
            Self::Tracking => Some("Live Tracking"),
            Self::CollisionDetection => Some("Collision Detection"),
            Self::Scheduling => Some("Schedule Management"),
            Self::Analytics => Some("Analytics"),
            Self::Alerts => Some("Alert Management"),
            Self::Assistant => Some("AI Assistant"),
            Self::Settings => Some("System Settings"),
            _ => None,
        }
    }

    /// Route pattern of the page; `None` for the catch-all page.
    pub fn route_pattern(self) -> Option<RoutePattern> {
        let literal = |value: &str| PatternSegment::Literal(value.to_string());
        let with_train_id = |value: &str| {
            RoutePattern::from_segments(vec![
                PatternSegment::Literal(value.to_string()),
                PatternSegment::Param(TRAIN_ID_PARAM.to_string()),
            ])
        };
        let pattern = match self {
            Self::Dashboard => RoutePattern::root(),
            Self::TrainDetails => with_train_id("train-details"),
            Self::TrainChat => with_train_id("train-chat"),
            Self::RouteManagement => with_train_id("route-management"),
            Self::NotFound => return None,
            other => RoutePattern::from_segments(vec![literal(other.as_str())]),
        };
        Some(pattern)
    }

    pub fn takes_train_id(self) -> bool {
        matches!(
            self,
            Self::TrainDetails | Self::TrainChat | Self::RouteManagement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RailflowPage;
    use crate::route_table::RoutePattern;

    #[test]
    fn unit_route_patterns_render_expected_paths() {
        let rendered = RailflowPage::ROUTED
            .iter()
            .filter_map(|page| page.route_pattern())
            .map(|pattern| pattern.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            vec![
                "/",
                "/tracking",
                "/collision-detection",
                "/scheduling",
                "/analytics",
                "/alerts",
                "/assistant",
                "/settings",
                "/all-routes",
                "/emergency",
                "/train-details/:trainId",
                "/train-chat/:trainId",
                "/route-management/:trainId",
            ]
        );
        assert!(RailflowPage::NotFound.route_pattern().is_none());
    }

    #[test]
    fn unit_built_patterns_equal_parsed_patterns() {
        for page in RailflowPage::ROUTED {
            let built = page.route_pattern().expect("routed page has pattern");
            let parsed = RoutePattern::parse(&built.to_string()).expect("pattern parses");
            assert_eq!(built, parsed, "page {}", page.as_str());
        }
    }

    #[test]
    fn unit_only_per_train_pages_take_train_id() {
        let per_train = RailflowPage::ROUTED
            .iter()
            .filter(|page| page.takes_train_id())
            .map(|page| page.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            per_train,
            vec!["train-details", "train-chat", "route-management"]
        );
    }
}
