use std::sync::Arc;

use tracing::debug;

use crate::page::RailflowPage;
use crate::route_table::{RouteMatch, RouteTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChange {
    /// The path resolved to the current entry; nothing was pushed.
    Unchanged,
    /// A new entry was pushed and forward history was discarded.
    Pushed,
}

/// Back/forward history of resolved routes.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    table: Arc<RouteTable>,
    entries: Vec<RouteMatch>,
    cursor: usize,
}

impl NavigationHistory {
    pub fn new(table: Arc<RouteTable>, initial_path: &str) -> Self {
        let initial = table.resolve(initial_path);
        Self {
            table,
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn current(&self) -> &RouteMatch {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn navigate(&mut self, raw_path: &str) -> NavigationChange {
        let resolved = self.table.resolve(raw_path);
        if same_location(&resolved, self.current()) {
            return NavigationChange::Unchanged;
        }
        debug!(
            from = %self.current().path,
            to = %resolved.path,
            page = resolved.page.as_str(),
            "navigation push"
        );
        self.entries.truncate(self.cursor + 1);
        self.entries.push(resolved);
        self.cursor = self.entries.len() - 1;
        NavigationChange::Pushed
    }

    /// Steps back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<&RouteMatch> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        debug!(to = %self.current().path, "navigation back");
        Some(self.current())
    }

    /// Steps forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self) -> Option<&RouteMatch> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        debug!(to = %self.current().path, "navigation forward");
        Some(self.current())
    }
}

/// Routed pages are equal by page and params, so literal case does not matter.
/// Unmatched paths only equal themselves.
fn same_location(next: &RouteMatch, current: &RouteMatch) -> bool {
    if next.page == RailflowPage::NotFound || current.page == RailflowPage::NotFound {
        return next.page == current.page && next.path == current.path;
    }
    next.page == current.page && next.params == current.params
}

#[cfg(test)]
mod tests {
    use super::{NavigationChange, NavigationHistory, RailflowPage};
    use crate::route_table::RouteTable;

    fn history() -> NavigationHistory {
        NavigationHistory::new(RouteTable::railflow(), "/")
    }

    #[test]
    fn unit_new_history_starts_at_initial_path() {
        let history = history();
        assert_eq!(history.current().page, RailflowPage::Dashboard);
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn functional_navigate_pushes_and_back_restores_params() {
        let mut history = history();
        assert_eq!(
            history.navigate("/train-chat/RT-4401"),
            NavigationChange::Pushed
        );
        assert_eq!(history.navigate("/alerts"), NavigationChange::Pushed);

        let back = history.back().expect("back").clone();
        assert_eq!(back.page, RailflowPage::TrainChat);
        assert_eq!(back.train_id(), Some("RT-4401"));

        let forward = history.forward().expect("forward").clone();
        assert_eq!(forward.page, RailflowPage::Alerts);
        assert!(history.forward().is_none());
    }

    #[test]
    fn functional_navigate_after_back_discards_forward_entries() {
        let mut history = history();
        history.navigate("/tracking");
        history.navigate("/alerts");
        history.back();
        assert!(history.can_go_forward());

        history.navigate("/settings");
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert_eq!(history.back().map(|entry| entry.page), Some(RailflowPage::Tracking));
    }

    #[test]
    fn regression_same_path_navigation_is_unchanged() {
        let mut history = history();
        history.navigate("/assistant");
        assert_eq!(
            history.navigate("/assistant/?from=sidebar"),
            NavigationChange::Unchanged
        );
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn regression_literal_case_change_keeps_current_entry() {
        let mut history = history();
        history.navigate("/assistant");
        assert_eq!(history.navigate("/Assistant"), NavigationChange::Unchanged);
        history.navigate("/train-details/RT-4401");
        assert_eq!(
            history.navigate("/TRAIN-DETAILS/RT-4401"),
            NavigationChange::Unchanged
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().path, "/train-details/RT-4401");
    }

    #[test]
    fn unit_param_case_and_unknown_paths_still_push() {
        let mut history = history();
        history.navigate("/train-details/RT-4401");
        assert_eq!(
            history.navigate("/train-details/rt-4401"),
            NavigationChange::Pushed
        );
        history.navigate("/missing-a");
        assert_eq!(history.navigate("/missing-b"), NavigationChange::Pushed);
        assert_eq!(history.navigate("/missing-b"), NavigationChange::Unchanged);
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn unit_back_at_start_returns_none() {
        let mut history = history();
        assert!(history.back().is_none());
        assert_eq!(history.current().page, RailflowPage::Dashboard);
    }
}
