//! Page actions a button press or form post can dispatch.

use std::str::FromStr;

use rail_chat::ChatSendError;
use rail_router::RouteMatch;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {scope} action '{token}'")]
pub struct ActionParseError {
    pub scope: &'static str,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainAction {
    ViewDetails,
    Chat,
    Reroute,
    Hold,
}

impl TrainAction {
    pub const ALL: [TrainAction; 4] = [Self::ViewDetails, Self::Chat, Self::Reroute, Self::Hold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewDetails => "view-details",
            Self::Chat => "chat",
            Self::Reroute => "reroute",
            Self::Hold => "hold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewDetails => "View Details",
            Self::Chat => "Chat",
            Self::Reroute => "Reroute",
            Self::Hold => "Hold",
        }
    }
}

impl FromStr for TrainAction {
    type Err = ActionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == token)
            .ok_or(ActionParseError {
                scope: "train",
                token,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertAction {
    Acknowledge,
    Escalate,
    Resolve,
    Dismiss,
    ViewTrain,
}

impl AlertAction {
    pub const ALL: [AlertAction; 5] = [
        Self::Acknowledge,
        Self::Escalate,
        Self::Resolve,
        Self::Dismiss,
        Self::ViewTrain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acknowledge => "acknowledge",
            Self::Escalate => "escalate",
            Self::Resolve => "resolve",
            Self::Dismiss => "dismiss",
            Self::ViewTrain => "view-train",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Acknowledge => "Acknowledge",
            Self::Escalate => "Escalate",
            Self::Resolve => "Mark Resolved",
            Self::Dismiss => "Dismiss",
            Self::ViewTrain => "View Train",
        }
    }
}

impl FromStr for AlertAction {
    type Err = ActionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == token)
            .ok_or(ActionParseError {
                scope: "alert",
                token,
            })
    }
}

/// Every interaction the mounted page can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Train { train_id: String, action: TrainAction },
    Alert { alert_id: String, action: AlertAction },
    Search(String),
    ClearSearch,
    SetDraft(String),
    QuickQuery(usize),
    Send,
    Back,
    Forward,
}

impl PageAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Train { .. } => "train",
            Self::Alert { .. } => "alert",
            Self::Search(_) => "search",
            Self::ClearSearch => "clear_search",
            Self::SetDraft(_) => "set_draft",
            Self::QuickQuery(_) => "quick_query",
            Self::Send => "send",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

/// What dispatching an action did. Inapplicable actions report `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Unchanged,
    Updated,
    Navigated(RouteMatch),
    Rejected(ChatSendError),
}

impl ActionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Updated => "updated",
            Self::Navigated(_) => "navigated",
            Self::Rejected(_) => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertAction, TrainAction};

    #[test]
    fn unit_action_tokens_parse_case_insensitively() {
        assert_eq!("Hold".parse::<TrainAction>(), Ok(TrainAction::Hold));
        assert_eq!(
            " view-details ".parse::<TrainAction>(),
            Ok(TrainAction::ViewDetails)
        );
        assert_eq!(
            "VIEW-TRAIN".parse::<AlertAction>(),
            Ok(AlertAction::ViewTrain)
        );
    }

    #[test]
    fn unit_unknown_action_token_reports_scope() {
        let error = "derail".parse::<TrainAction>().expect_err("unknown");
        assert_eq!(error.to_string(), "unknown train action 'derail'");
        let error = "snooze".parse::<AlertAction>().expect_err("unknown");
        assert_eq!(error.scope, "alert");
    }

    #[test]
    fn unit_action_tokens_round_trip() {
        for action in TrainAction::ALL {
            assert_eq!(action.as_str().parse::<TrainAction>(), Ok(action));
        }
        for action in AlertAction::ALL {
            assert_eq!(action.as_str().parse::<AlertAction>(), Ok(action));
        }
    }
}
