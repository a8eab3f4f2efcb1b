//! POST handlers. Each dispatches into the session and redirects back with 303.

use super::*;

macro_rules! define_session_action_handler {
    ($handler_name:ident, $action:expr) => {
        pub(super) async fn $handler_name(
            State(state): State<Arc<RailflowGatewayState>>,
        ) -> Response {
            let path = state.dispatch_and_locate([$action]);
            Redirect::to(path.as_str()).into_response()
        }
    };
}

define_session_action_handler!(handle_history_back, PageAction::Back);
define_session_action_handler!(handle_history_forward, PageAction::Forward);
define_session_action_handler!(handle_tracking_clear, PageAction::ClearSearch);

pub(super) async fn handle_chat_send(
    State(state): State<Arc<RailflowGatewayState>>,
    Form(form): Form<ChatSendForm>,
) -> Response {
    let path = state.dispatch_and_locate(form.actions());
    Redirect::to(path.as_str()).into_response()
}

pub(super) async fn handle_chat_quick_query(
    State(state): State<Arc<RailflowGatewayState>>,
    Form(form): Form<ChatQuickQueryForm>,
) -> Response {
    let path = state.dispatch_and_locate(form.action());
    Redirect::to(path.as_str()).into_response()
}

pub(super) async fn handle_train_action(
    State(state): State<Arc<RailflowGatewayState>>,
    Form(form): Form<TrainActionForm>,
) -> Response {
    let action = form.action();
    if action.is_none() {
        debug!(
            train_id = form.requested_train_id().unwrap_or_default(),
            "ignoring malformed train action form"
        );
    }
    let path = state.dispatch_and_locate(action);
    Redirect::to(path.as_str()).into_response()
}

pub(super) async fn handle_alert_action(
    State(state): State<Arc<RailflowGatewayState>>,
    Form(form): Form<AlertActionForm>,
) -> Response {
    let action = form.action();
    if action.is_none() {
        debug!(
            alert_id = form.requested_alert_id().unwrap_or_default(),
            "ignoring malformed alert action form"
        );
    }
    let path = state.dispatch_and_locate(action);
    Redirect::to(path.as_str()).into_response()
}

pub(super) async fn handle_tracking_search(
    State(state): State<Arc<RailflowGatewayState>>,
    Form(form): Form<TrackingSearchForm>,
) -> Response {
    let path = state.dispatch_and_locate([form.action()]);
    Redirect::to(path.as_str()).into_response()
}
