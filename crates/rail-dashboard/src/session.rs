use std::sync::Arc;
use std::time::Duration;

use rail_chat::profiles::{
    DEFAULT_ASSISTANT_REPLY_DELAY, DEFAULT_TRAIN_CHAT_REPLY_DELAY, DEFAULT_WIDGET_REPLY_DELAY,
};
use rail_chat::{
    Conversation, ConversationProfile, RandomSource, ReplyScheduler, SeededRandomSource,
};
use rail_router::{
    NavigationChange, NavigationHistory, RailflowPage, RouteMatch, RouteParams, RouteTable,
};
use tracing::{debug, info};

use crate::actions::{ActionOutcome, AlertAction, PageAction, TrainAction};
use crate::alerts::AlertBoard;
use crate::fixtures::find_train;
use crate::snapshot::{AlertView, DashboardSnapshot, PageBody};
use crate::tracking::TrackingSearch;

/// Reply latency per chat surface and the optional responder seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub widget_reply_delay: Duration,
    pub assistant_reply_delay: Duration,
    pub train_chat_reply_delay: Duration,
    /// Seeds the random reply pool. Each mount offsets the seed by its mount number.
    pub random_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            widget_reply_delay: DEFAULT_WIDGET_REPLY_DELAY,
            assistant_reply_delay: DEFAULT_ASSISTANT_REPLY_DELAY,
            train_chat_reply_delay: DEFAULT_TRAIN_CHAT_REPLY_DELAY,
            random_seed: None,
        }
    }
}

enum MountedPage {
    Dashboard {
        widget: Conversation,
    },
    Tracking {
        search: TrackingSearch,
    },
    Alerts {
        board: AlertBoard,
    },
    Assistant {
        conversation: Conversation,
    },
    TrainDetails {
        train_id: String,
        selected_action: Option<TrainAction>,
    },
    TrainChat {
        train_id: String,
        conversation: Conversation,
    },
    Static,
}

impl MountedPage {
    fn conversation(&self) -> Option<&Conversation> {
        match self {
            Self::Dashboard { widget } => Some(widget),
            Self::Assistant { conversation } | Self::TrainChat { conversation, .. } => {
                Some(conversation)
            }
            _ => None,
        }
    }
}

/// One operator tab: navigation history plus the state of the mounted page.
///
/// Only the current page holds state. Navigating away drops it, which closes
/// its conversation and cancels any reply still pending.
pub struct DashboardSession {
    config: DashboardConfig,
    scheduler: Arc<dyn ReplyScheduler>,
    history: NavigationHistory,
    mounted: MountedPage,
    mount_count: u64,
}

impl DashboardSession {
    pub fn new(config: DashboardConfig, scheduler: Arc<dyn ReplyScheduler>) -> Self {
        Self::with_initial_path(config, scheduler, "/")
    }

    pub fn with_initial_path(
        config: DashboardConfig,
        scheduler: Arc<dyn ReplyScheduler>,
        initial_path: &str,
    ) -> Self {
        let mut session = Self {
            config,
            scheduler,
            history: NavigationHistory::new(RouteTable::railflow(), initial_path),
            mounted: MountedPage::Static,
            mount_count: 0,
        };
        session.remount();
        session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn current(&self) -> &RouteMatch {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Conversation of the mounted page, if it has a chat surface.
    pub fn conversation(&self) -> Option<&Conversation> {
        self.mounted.conversation()
    }

    /// Navigates to `path`. Navigating to the current path keeps page state.
    pub fn navigate(&mut self, path: &str) -> NavigationChange {
        let change = self.history.navigate(path);
        if change == NavigationChange::Pushed {
            self.remount();
        }
        change
    }

    pub fn back(&mut self) -> Option<RouteMatch> {
        let restored = self.history.back()?.clone();
        self.remount();
        Some(restored)
    }

    pub fn forward(&mut self) -> Option<RouteMatch> {
        let restored = self.history.forward()?.clone();
        self.remount();
        Some(restored)
    }

    pub fn dispatch(&mut self, action: PageAction) -> ActionOutcome {
        let action_name = action.name();
        let outcome = match action {
            PageAction::Train { train_id, action } => self.dispatch_train(&train_id, action),
            PageAction::Alert { alert_id, action } => self.dispatch_alert(&alert_id, action),
            PageAction::Search(query) => match &mut self.mounted {
                MountedPage::Tracking { search } => {
                    search.search(&query);
                    ActionOutcome::Updated
                }
                _ => ActionOutcome::Unchanged,
            },
            PageAction::ClearSearch => match &mut self.mounted {
                MountedPage::Tracking { search } => {
                    search.clear();
                    ActionOutcome::Updated
                }
                _ => ActionOutcome::Unchanged,
            },
            PageAction::SetDraft(text) => match self.mounted.conversation() {
                Some(conversation) => {
                    conversation.set_draft(text);
                    ActionOutcome::Updated
                }
                None => ActionOutcome::Unchanged,
            },
            PageAction::QuickQuery(index) => match self.mounted.conversation() {
                Some(conversation) if conversation.apply_quick_query(index) => {
                    ActionOutcome::Updated
                }
                _ => ActionOutcome::Unchanged,
            },
            PageAction::Send => match self.mounted.conversation() {
                Some(conversation) => match conversation.send() {
                    Ok(_) => ActionOutcome::Updated,
                    Err(error) => ActionOutcome::Rejected(error),
                },
                None => ActionOutcome::Unchanged,
            },
            PageAction::Back => self
                .back()
                .map_or(ActionOutcome::Unchanged, ActionOutcome::Navigated),
            PageAction::Forward => self
                .forward()
                .map_or(ActionOutcome::Unchanged, ActionOutcome::Navigated),
        };
        debug!(
            action = action_name,
            outcome = outcome.as_str(),
            path = %self.current().path,
            "page action dispatched"
        );
        outcome
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let route = self.history.current();
        let train_id = route.train_id().unwrap_or_default().to_string();
        let body = match &self.mounted {
            MountedPage::Dashboard { widget } => PageBody::Dashboard {
                chat: widget.snapshot(),
            },
            MountedPage::Tracking { search } => PageBody::Tracking {
                search: search.clone(),
            },
            MountedPage::Alerts { board } => PageBody::Alerts {
                alerts: board.visible().map(AlertView::from).collect(),
            },
            MountedPage::Assistant { conversation } => PageBody::Assistant {
                chat: conversation.snapshot(),
            },
            MountedPage::TrainDetails {
                train_id,
                selected_action,
            } => PageBody::TrainDetails {
                train: find_train(train_id),
                train_id: train_id.clone(),
                selected_action: *selected_action,
            },
            MountedPage::TrainChat {
                train_id,
                conversation,
            } => PageBody::TrainChat {
                train: find_train(train_id),
                train_id: train_id.clone(),
                chat: conversation.snapshot(),
            },
            MountedPage::Static if route.page == RailflowPage::RouteManagement => {
                PageBody::RouteManagement {
                    train: find_train(&train_id),
                    train_id,
                }
            }
            MountedPage::Static => PageBody::Static,
        };
        DashboardSnapshot {
            path: route.path.clone(),
            page: route.page,
            title: route.page.title(),
            params: route.params.clone(),
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            body,
        }
    }

    fn dispatch_train(&mut self, train_id: &str, action: TrainAction) -> ActionOutcome {
        let train_id = train_id.trim();
        let target = match action {
            TrainAction::ViewDetails => RailflowPage::TrainDetails,
            TrainAction::Chat => RailflowPage::TrainChat,
            TrainAction::Reroute => RailflowPage::RouteManagement,
            TrainAction::Hold => {
                return match &mut self.mounted {
                    MountedPage::TrainDetails {
                        train_id: mounted_id,
                        selected_action,
                    } if mounted_id.eq_ignore_ascii_case(train_id)
                        && *selected_action != Some(TrainAction::Hold) =>
                    {
                        *selected_action = Some(TrainAction::Hold);
                        ActionOutcome::Updated
                    }
                    _ => ActionOutcome::Unchanged,
                };
            }
        };
        self.navigate_to(target, &RouteParams::with_train_id(train_id))
    }

    fn dispatch_alert(&mut self, alert_id: &str, action: AlertAction) -> ActionOutcome {
        let MountedPage::Alerts { board } = &mut self.mounted else {
            return ActionOutcome::Unchanged;
        };
        if action != AlertAction::ViewTrain {
            return if board.apply(alert_id, action) {
                ActionOutcome::Updated
            } else {
                ActionOutcome::Unchanged
            };
        }
        let train_id = board
            .get(alert_id)
            .filter(|entry| !entry.dismissed)
            .and_then(|entry| entry.alert.train_id);
        match train_id {
            Some(train_id) => self.navigate_to(
                RailflowPage::TrainDetails,
                &RouteParams::with_train_id(train_id),
            ),
            None => ActionOutcome::Unchanged,
        }
    }

    fn navigate_to(&mut self, page: RailflowPage, params: &RouteParams) -> ActionOutcome {
        let Some(path) = self.history.table().path_for(page, params) else {
            return ActionOutcome::Unchanged;
        };
        match self.navigate(&path) {
            NavigationChange::Pushed => ActionOutcome::Navigated(self.current().clone()),
            NavigationChange::Unchanged => ActionOutcome::Unchanged,
        }
    }

    fn remount(&mut self) {
        // The previous page unmounts before the next one opens its conversation.
        self.mounted = MountedPage::Static;
        self.mount_count = self.mount_count.saturating_add(1);
        let route = self.history.current().clone();
        self.mounted = self.mount(&route);
        info!(
            path = %route.path,
            page = route.page.as_str(),
            mount = self.mount_count,
            "dashboard page mounted"
        );
    }

    fn mount(&self, route: &RouteMatch) -> MountedPage {
        let train_id = route.train_id().unwrap_or_default().to_string();
        match route.page {
            RailflowPage::Dashboard => MountedPage::Dashboard {
                widget: self.open_conversation(
                    ConversationProfile::dashboard_widget()
                        .with_reply_delay(self.config.widget_reply_delay),
                ),
            },
            RailflowPage::Tracking => MountedPage::Tracking {
                search: TrackingSearch::default(),
            },
            RailflowPage::Alerts => MountedPage::Alerts {
                board: AlertBoard::default(),
            },
            RailflowPage::Assistant => MountedPage::Assistant {
                conversation: self.open_conversation(
                    ConversationProfile::assistant()
                        .with_reply_delay(self.config.assistant_reply_delay),
                ),
            },
            RailflowPage::TrainDetails => MountedPage::TrainDetails {
                train_id,
                selected_action: None,
            },
            RailflowPage::TrainChat => MountedPage::TrainChat {
                conversation: self.open_conversation(
                    ConversationProfile::train_chat(&train_id)
                        .with_reply_delay(self.config.train_chat_reply_delay),
                ),
                train_id,
            },
            _ => MountedPage::Static,
        }
    }

    fn open_conversation(&self, profile: ConversationProfile) -> Conversation {
        Conversation::open(profile, Arc::clone(&self.scheduler), self.random_source())
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match self.config.random_seed {
            Some(seed) => Box::new(SeededRandomSource::from_seed(
                seed.wrapping_add(self.mount_count),
            )),
            None => Box::new(SeededRandomSource::from_entropy()),
        }
    }
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("config", &self.config)
            .field("current", self.history.current())
            .field("mount_count", &self.mount_count)
            .finish_non_exhaustive()
    }
}
