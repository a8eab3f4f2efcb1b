use rail_chat::ConversationSnapshot;
use rail_router::{RailflowPage, RouteParams};
use serde::Serialize;

use crate::actions::{AlertAction, TrainAction};
use crate::alerts::AlertEntry;
use crate::fixtures::{AlertRecord, AlertStatus, TrainRecord};
use crate::tracking::TrackingSearch;

/// Everything needed to render the current page of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub path: String,
    pub page: RailflowPage,
    pub title: &'static str,
    pub params: RouteParams,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub body: PageBody,
}

impl DashboardSnapshot {
    pub fn chat(&self) -> Option<&ConversationSnapshot> {
        match &self.body {
            PageBody::Dashboard { chat }
            | PageBody::Assistant { chat }
            | PageBody::TrainChat { chat, .. } => Some(chat),
            _ => None,
        }
    }

    /// Whether an assistant reply is still pending on the page.
    pub fn is_typing(&self) -> bool {
        self.chat().is_some_and(|chat| chat.typing)
    }
}

/// Page-local state of the mounted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PageBody {
    Dashboard {
        chat: ConversationSnapshot,
    },
    Tracking {
        search: TrackingSearch,
    },
    Alerts {
        alerts: Vec<AlertView>,
    },
    Assistant {
        chat: ConversationSnapshot,
    },
    TrainDetails {
        train_id: String,
        train: Option<&'static TrainRecord>,
        selected_action: Option<TrainAction>,
    },
    TrainChat {
        train_id: String,
        train: Option<&'static TrainRecord>,
        chat: ConversationSnapshot,
    },
    RouteManagement {
        train_id: String,
        train: Option<&'static TrainRecord>,
    },
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertView {
    pub alert: &'static AlertRecord,
    pub status: AlertStatus,
    pub actions: Vec<AlertAction>,
}

impl From<&AlertEntry> for AlertView {
    fn from(entry: &AlertEntry) -> Self {
        Self {
            alert: entry.alert,
            status: entry.status,
            actions: entry.available_actions(),
        }
    }
}
