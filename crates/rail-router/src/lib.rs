//! Client-side routing for the RailFlow dashboard.
//!
//! Maps URL paths to dashboard pages, extracts the positional train-id
//! parameter, and keeps the back/forward navigation history of one session.

pub mod navigation;
pub mod page;
pub mod route_table;

pub use navigation::{NavigationChange, NavigationHistory};
pub use page::{RailflowPage, SIDEBAR_ADMIN_PAGES, SIDEBAR_NAVIGATION_PAGES, TRAIN_ID_PARAM};
pub use route_table::{
    normalize_path, PatternSegment, RouteMatch, RouteParams, RoutePattern, RoutePatternError,
    RouteTable,
};
