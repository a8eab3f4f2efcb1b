//! Dashboard session model for RailFlow.
//!
//! A [`DashboardSession`] is one operator tab: it owns the navigation history,
//! the state of the currently mounted page and that page's chat conversation.
//! Page actions are dispatched synchronously; the only deferred work is the
//! simulated assistant reply, scheduled through [`rail_chat::ReplyScheduler`].

pub mod actions;
pub mod alerts;
pub mod fixtures;
pub mod session;
pub mod snapshot;
pub mod tracking;

pub use actions::{ActionOutcome, ActionParseError, AlertAction, PageAction, TrainAction};
pub use alerts::{AlertBoard, AlertEntry};
pub use session::{DashboardConfig, DashboardSession};
pub use snapshot::{AlertView, DashboardSnapshot, PageBody};
pub use tracking::{SearchResult, TrackingSearch};
