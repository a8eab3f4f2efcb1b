//! Page-local alert lifecycle.

use serde::Serialize;
use tracing::debug;

use crate::actions::AlertAction;
use crate::fixtures::{AlertRecord, AlertStatus, ALERTS};

/// One alert as currently shown on the alerts page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertEntry {
    pub alert: &'static AlertRecord,
    pub status: AlertStatus,
    pub dismissed: bool,
}

impl AlertEntry {
    /// Buttons offered for the entry in its current status.
    pub fn available_actions(&self) -> Vec<AlertAction> {
        if self.dismissed {
            return Vec::new();
        }
        let mut actions = match self.status {
            AlertStatus::Active => vec![AlertAction::Acknowledge, AlertAction::Escalate],
            AlertStatus::Acknowledged | AlertStatus::Escalated => vec![AlertAction::Resolve],
            AlertStatus::Scheduled | AlertStatus::Resolved => Vec::new(),
        };
        if self.alert.train_id.is_some() {
            actions.push(AlertAction::ViewTrain);
        }
        actions.push(AlertAction::Dismiss);
        actions
    }

    fn transition(&self, action: AlertAction) -> Option<AlertStatus> {
        match (self.status, action) {
            (AlertStatus::Active, AlertAction::Acknowledge) => Some(AlertStatus::Acknowledged),
            (AlertStatus::Active, AlertAction::Escalate) => Some(AlertStatus::Escalated),
            (AlertStatus::Acknowledged | AlertStatus::Escalated, AlertAction::Resolve) => {
                Some(AlertStatus::Resolved)
            }
            _ => None,
        }
    }
}

/// Alert statuses for one mount of the alerts page. Discarded on unmount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBoard {
    entries: Vec<AlertEntry>,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::from_records(ALERTS)
    }
}

impl AlertBoard {
    pub fn from_records(records: &'static [AlertRecord]) -> Self {
        Self {
            entries: records
                .iter()
                .map(|alert| AlertEntry {
                    alert,
                    status: alert.status,
                    dismissed: false,
                })
                .collect(),
        }
    }

    pub fn get(&self, alert_id: &str) -> Option<&AlertEntry> {
        self.entries
            .iter()
            .find(|entry| entry.alert.alert_id.eq_ignore_ascii_case(alert_id.trim()))
    }

    fn get_mut(&mut self, alert_id: &str) -> Option<&mut AlertEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.alert.alert_id.eq_ignore_ascii_case(alert_id.trim()))
    }

    /// Alerts that have not been dismissed, in fixture order.
    pub fn visible(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter().filter(|entry| !entry.dismissed)
    }

    pub fn count_with_status(&self, status: AlertStatus) -> usize {
        self.visible().filter(|entry| entry.status == status).count()
    }

    /// Applies a status change or dismissal. Returns whether anything changed.
    /// `ViewTrain` is a navigation and never changes the board.
    pub fn apply(&mut self, alert_id: &str, action: AlertAction) -> bool {
        let Some(entry) = self.get_mut(alert_id) else {
            return false;
        };
        if entry.dismissed {
            return false;
        }
        if action == AlertAction::Dismiss {
            entry.dismissed = true;
            debug!(alert_id = entry.alert.alert_id, "alert dismissed");
            return true;
        }
        match entry.transition(action) {
            Some(next) => {
                debug!(
                    alert_id = entry.alert.alert_id,
                    from = entry.status.as_str(),
                    to = next.as_str(),
                    "alert status changed"
                );
                entry.status = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AlertBoard;
    use crate::actions::AlertAction;
    use crate::fixtures::AlertStatus;

    #[test]
    fn functional_active_alert_acknowledge_then_resolve() {
        let mut board = AlertBoard::default();
        assert!(board.apply("ALT-001", AlertAction::Acknowledge));
        assert_eq!(
            board.get("ALT-001").map(|entry| entry.status),
            Some(AlertStatus::Acknowledged)
        );
        assert!(board.apply("ALT-001", AlertAction::Resolve));
        assert_eq!(
            board.get("ALT-001").map(|entry| entry.status),
            Some(AlertStatus::Resolved)
        );
    }

    #[test]
    fn functional_escalated_alert_can_be_resolved() {
        let mut board = AlertBoard::default();
        assert!(board.apply("alt-004", AlertAction::Escalate));
        assert_eq!(
            board.get("ALT-004").map(|entry| entry.status),
            Some(AlertStatus::Escalated)
        );
        assert!(board.apply("ALT-004", AlertAction::Resolve));
    }

    #[test]
    fn unit_inapplicable_transitions_are_noops() {
        let mut board = AlertBoard::default();
        assert!(!board.apply("ALT-001", AlertAction::Resolve));
        assert!(!board.apply("ALT-002", AlertAction::Acknowledge));
        assert!(!board.apply("ALT-003", AlertAction::Escalate));
        assert!(!board.apply("ALT-001", AlertAction::ViewTrain));
        assert!(!board.apply("ALT-999", AlertAction::Dismiss));
        assert_eq!(board, AlertBoard::default());
    }

    #[test]
    fn unit_dismissed_alert_is_hidden_and_frozen() {
        let mut board = AlertBoard::default();
        assert!(board.apply("ALT-004", AlertAction::Dismiss));
        assert_eq!(board.visible().count(), 3);
        assert!(!board.apply("ALT-004", AlertAction::Acknowledge));
        assert!(!board.apply("ALT-004", AlertAction::Dismiss));
        assert_eq!(board.count_with_status(AlertStatus::Active), 1);
    }

    #[test]
    fn unit_available_actions_follow_status() {
        let mut board = AlertBoard::default();
        let actions = |board: &AlertBoard, id: &str| {
            board
                .get(id)
                .map(|entry| entry.available_actions())
                .unwrap_or_default()
        };
        assert_eq!(
            actions(&board, "ALT-001"),
            vec![
                AlertAction::Acknowledge,
                AlertAction::Escalate,
                AlertAction::ViewTrain,
                AlertAction::Dismiss,
            ]
        );
        assert_eq!(actions(&board, "ALT-003"), vec![AlertAction::Dismiss]);
        board.apply("ALT-001", AlertAction::Dismiss);
        assert!(actions(&board, "ALT-001").is_empty());
    }
}
