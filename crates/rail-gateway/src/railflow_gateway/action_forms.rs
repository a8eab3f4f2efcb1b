//! Form bodies posted by the rendered dashboard.

use serde::Deserialize;

use super::{AlertAction, PageAction, TrainAction};

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct ChatSendForm {
    #[serde(default)]
    message: String,
}

impl ChatSendForm {
    /// The draft is stored untrimmed; the conversation decides what is blank.
    pub(super) fn actions(self) -> [PageAction; 2] {
        [PageAction::SetDraft(self.message), PageAction::Send]
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct ChatQuickQueryForm {
    #[serde(default)]
    index: String,
}

impl ChatQuickQueryForm {
    pub(super) fn action(&self) -> Option<PageAction> {
        self.index
            .trim()
            .parse::<usize>()
            .ok()
            .map(PageAction::QuickQuery)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct TrainActionForm {
    #[serde(default)]
    train_id: String,
    #[serde(default)]
    action: String,
}

impl TrainActionForm {
    pub(super) fn requested_train_id(&self) -> Option<&str> {
        non_empty(&self.train_id)
    }

    pub(super) fn action(&self) -> Option<PageAction> {
        let train_id = self.requested_train_id()?;
        let action = self.action.trim().parse::<TrainAction>().ok()?;
        Some(PageAction::Train {
            train_id: train_id.to_string(),
            action,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct AlertActionForm {
    #[serde(default)]
    alert_id: String,
    #[serde(default)]
    action: String,
}

impl AlertActionForm {
    pub(super) fn requested_alert_id(&self) -> Option<&str> {
        non_empty(&self.alert_id)
    }

    pub(super) fn action(&self) -> Option<PageAction> {
        let alert_id = self.requested_alert_id()?;
        let action = self.action.trim().parse::<AlertAction>().ok()?;
        Some(PageAction::Alert {
            alert_id: alert_id.to_string(),
            action,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct TrackingSearchForm {
    #[serde(default)]
    query: String,
}

impl TrackingSearchForm {
    pub(super) fn action(self) -> PageAction {
        PageAction::Search(self.query)
    }
}

fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
