use super::*;

/// Browser-initiated asset fetch answered without a body.
pub(super) async fn handle_static_asset() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Page paths never carry a file extension; `favicon.ico`, `robots.txt` and
/// friends do, and must not navigate the session.
pub(super) fn is_static_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .is_some_and(|(stem, extension)| {
            !stem.is_empty()
                && !extension.is_empty()
                && extension.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

/// Navigates the session to the request path and renders the resulting page.
pub(super) async fn handle_page(
    State(state): State<Arc<RailflowGatewayState>>,
    uri: Uri,
) -> Response {
    if is_static_asset_path(uri.path()) {
        debug!(path = uri.path(), "static asset request ignored");
        return StatusCode::NO_CONTENT.into_response();
    }
    let snapshot = {
        let mut session = state.lock_session();
        session.navigate(uri.path());
        session.snapshot()
    };
    let status = if snapshot.page == RailflowPage::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Html(render_railflow_document(&snapshot))).into_response()
}

pub(super) async fn handle_session_snapshot(
    State(state): State<Arc<RailflowGatewayState>>,
) -> Json<DashboardSnapshot> {
    Json(state.snapshot())
}
