//! Gateway server bootstrap and router wiring.

use super::*;

/// Binds `config.bind`, serves the dashboard, and stops on ctrl-c.
pub async fn run_railflow_gateway_server(config: RailflowGatewayConfig) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind railflow gateway on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound railflow gateway address")?;

    info!(addr = %local_addr, "railflow gateway listening");
    println!("railflow gateway listening: addr=http://{local_addr}");

    let state = Arc::new(RailflowGatewayState::on_current_runtime(config.dashboard)?);
    let app = build_railflow_router(state);
    let serve_result = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                warn!(%error, "failed to listen for ctrl-c");
            }
        })
        .await;
    serve_result.context("railflow gateway exited unexpectedly")?;

    info!("railflow gateway stopped");
    Ok(())
}

pub fn build_railflow_router(state: Arc<RailflowGatewayState>) -> Router {
    Router::new()
        .route(SESSION_SNAPSHOT_ENDPOINT, get(handle_session_snapshot))
        .route(CHAT_SEND_ENDPOINT, post(handle_chat_send))
        .route(CHAT_QUICK_QUERY_ENDPOINT, post(handle_chat_quick_query))
        .route(TRAIN_ACTION_ENDPOINT, post(handle_train_action))
        .route(ALERT_ACTION_ENDPOINT, post(handle_alert_action))
        .route(TRACKING_SEARCH_ENDPOINT, post(handle_tracking_search))
        .route(TRACKING_CLEAR_ENDPOINT, post(handle_tracking_clear))
        .route(HISTORY_BACK_ENDPOINT, post(handle_history_back))
        .route(HISTORY_FORWARD_ENDPOINT, post(handle_history_forward))
        .route(FAVICON_ENDPOINT, get(handle_static_asset))
        .route("/", get(handle_page))
        .route("/{*path}", get(handle_page))
        .with_state(state)
}
