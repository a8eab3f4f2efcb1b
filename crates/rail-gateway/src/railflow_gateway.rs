//! Axum server that owns one dashboard session and renders it per request.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use rail_chat::{ReplyScheduler, TokioReplyScheduler};
use rail_dashboard::{
    AlertAction, DashboardConfig, DashboardSession, DashboardSnapshot, PageAction, TrainAction,
};
use rail_dashboard_ui::{
    render_railflow_document, ALERT_ACTION_ENDPOINT, CHAT_QUICK_QUERY_ENDPOINT,
    CHAT_SEND_ENDPOINT, HISTORY_BACK_ENDPOINT, HISTORY_FORWARD_ENDPOINT, TRACKING_CLEAR_ENDPOINT,
    TRACKING_SEARCH_ENDPOINT, TRAIN_ACTION_ENDPOINT,
};
use rail_router::RailflowPage;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

mod action_forms;
mod action_handlers;
mod page_handlers;
mod server_bootstrap;

use action_forms::{
    AlertActionForm, ChatQuickQueryForm, ChatSendForm, TrackingSearchForm, TrainActionForm,
};
use action_handlers::{
    handle_alert_action, handle_chat_quick_query, handle_chat_send, handle_history_back,
    handle_history_forward, handle_tracking_clear, handle_tracking_search, handle_train_action,
};
use page_handlers::{handle_page, handle_session_snapshot, handle_static_asset};

pub use server_bootstrap::{build_railflow_router, run_railflow_gateway_server};

/// JSON view of the live session.
pub const SESSION_SNAPSHOT_ENDPOINT: &str = "/api/session";
/// Requested by browsers after every page load.
pub const FAVICON_ENDPOINT: &str = "/favicon.ico";
/// Default listen address for `railflow serve`.
pub const DEFAULT_RAILFLOW_BIND: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailflowGatewayConfig {
    pub bind: String,
    pub dashboard: DashboardConfig,
}

impl Default for RailflowGatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_RAILFLOW_BIND.to_string(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Shared server state. Every request serializes through the session mutex.
pub struct RailflowGatewayState {
    session: Mutex<DashboardSession>,
}

impl RailflowGatewayState {
    pub fn new(config: DashboardConfig, scheduler: Arc<dyn ReplyScheduler>) -> Self {
        Self {
            session: Mutex::new(DashboardSession::new(config, scheduler)),
        }
    }

    /// Builds state whose replies run on the tokio runtime of the caller.
    pub fn on_current_runtime(config: DashboardConfig) -> Result<Self> {
        let scheduler = TokioReplyScheduler::try_current()
            .context("railflow gateway state requires a tokio runtime")?;
        Ok(Self::new(config, Arc::new(scheduler)))
    }

    fn lock_session(&self) -> MutexGuard<'_, DashboardSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.lock_session().snapshot()
    }

    /// Runs `actions` in order under one lock and returns the path to redirect to.
    fn dispatch_and_locate(&self, actions: impl IntoIterator<Item = PageAction>) -> String {
        let mut session = self.lock_session();
        for action in actions {
            let outcome = session.dispatch(action);
            debug!(outcome = outcome.as_str(), "gateway action handled");
        }
        session.current().path.clone()
    }
}

impl std::fmt::Debug for RailflowGatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailflowGatewayState")
            .finish_non_exhaustive()
    }
}
