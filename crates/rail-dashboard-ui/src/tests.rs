use std::sync::Arc;
use std::time::Duration;

use rail_chat::ManualReplyScheduler;
use rail_dashboard::{AlertAction, DashboardConfig, DashboardSession, PageAction, TrainAction};

use super::{render_railflow_document, render_railflow_shell};

fn session() -> (Arc<ManualReplyScheduler>, DashboardSession) {
    let scheduler = Arc::new(ManualReplyScheduler::new(1_705_328_625_000));
    let config = DashboardConfig {
        random_seed: Some(3),
        ..DashboardConfig::default()
    };
    let session = DashboardSession::new(config, scheduler.clone());
    (scheduler, session)
}

fn shell_at(path: &str) -> String {
    let (_scheduler, mut session) = session();
    session.navigate(path);
    render_railflow_shell(&session.snapshot())
}

fn send(session: &mut DashboardSession, text: &str) {
    session.dispatch(PageAction::SetDraft(text.to_string()));
    session.dispatch(PageAction::Send);
}

#[test]
fn functional_document_wraps_shell_with_title() {
    let (_scheduler, session) = session();
    let html = render_railflow_document(&session.snapshot());
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Railway Control Dashboard | RailFlow</title>"));
    assert!(html.contains("id=\"railflow-shell\""));
    assert!(html.contains("<link rel=\"icon\" href=\"data:,\">"));
    assert!(!html.contains("http-equiv=\"refresh\""));
}

#[test]
fn functional_sidebar_lists_navigation_and_admin_pages() {
    let html = shell_at("/alerts");
    assert_eq!(html.matches("data-nav-item=").count(), 8);
    assert!(html.contains("id=\"railflow-nav-settings\""));
    assert!(html.contains("data-nav-item=\"alerts\" data-nav-active=\"true\""));
    assert!(html.contains("data-nav-item=\"dashboard\" data-nav-active=\"false\""));
}

#[test]
fn functional_dashboard_renders_widget_metrics_and_train_cards() {
    let html = shell_at("/");
    assert!(html.contains("data-page=\"dashboard\""));
    assert!(html.contains("data-conversation-kind=\"dashboard-widget\""));
    assert!(html.contains("data-message-count=\"1\""));
    assert!(html.contains("data-quick-query-count=\"4\""));
    assert_eq!(html.matches("data-component=\"TrainStatusCard\"").count(), 4);
    assert_eq!(html.matches("data-component=\"MetricCard\"").count(), 6);
    assert!(html.contains("data-train-action=\"chat\" data-train-id=\"RT-4401\""));
}

#[test]
fn functional_typing_state_adds_refresh_and_locks_widget_send() {
    let (scheduler, mut session) = session();
    send(&mut session, "Show me current delays");

    let html = render_railflow_document(&session.snapshot());
    assert!(html.contains("<meta http-equiv=\"refresh\" content=\"1\">"));
    assert!(html.contains("id=\"railflow-chat-typing\""));
    assert!(html.contains("data-send-locked=\"true\""));

    scheduler.advance(Duration::from_millis(1_500));
    let html = render_railflow_document(&session.snapshot());
    assert!(!html.contains("http-equiv=\"refresh\""));
    assert!(!html.contains("id=\"railflow-chat-typing\""));
    assert!(html.contains("data-message-count=\"3\""));
    assert!(html.contains("Currently, there are 3 trains with delays"));
}

#[test]
fn functional_assistant_page_keeps_send_enabled_while_typing() {
    let (_scheduler, mut session) = session();
    session.navigate("/assistant");
    send(&mut session, "network efficiency?");
    let html = render_railflow_shell(&session.snapshot());
    assert!(html.contains("data-conversation-kind=\"assistant\""));
    assert!(html.contains("data-send-locked=\"false\""));
    assert!(html.contains("data-quick-query-count=\"6\""));
    assert!(html.contains("data-sender=\"user\""));
}

#[test]
fn regression_chat_text_is_html_escaped() {
    let (_scheduler, mut session) = session();
    session.navigate("/train-chat/TR-001");
    send(&mut session, "<script>alert(1)</script>");
    let html = render_railflow_shell(&session.snapshot());
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn functional_tracking_not_found_renders_inline_message() {
    let (_scheduler, mut session) = session();
    session.navigate("/tracking");
    session.dispatch(PageAction::Search("ZZ-9".to_string()));
    let html = render_railflow_shell(&session.snapshot());
    assert!(html.contains("data-search-outcome=\"not-found\""));
    assert!(html.contains("No train found with ID"));
    assert!(html.contains("value=\"ZZ-9\""));
}

#[test]
fn functional_tracking_found_renders_train_card() {
    let (_scheduler, mut session) = session();
    session.navigate("/tracking");
    session.dispatch(PageAction::Search("tr-004".to_string()));
    let html = render_railflow_shell(&session.snapshot());
    assert!(html.contains("data-search-outcome=\"found\" data-train-id=\"TR-004\""));
}

#[test]
fn functional_alert_cards_offer_status_specific_actions() {
    let (_scheduler, mut session) = session();
    session.navigate("/alerts");
    let html = render_railflow_shell(&session.snapshot());
    assert_eq!(html.matches("data-component=\"AlertCard\"").count(), 4);
    assert!(html.contains("data-alert-action=\"acknowledge\" data-alert-id=\"ALT-001\""));
    assert!(html.contains("data-alert-action=\"resolve\" data-alert-id=\"ALT-002\""));

    session.dispatch(PageAction::Alert {
        alert_id: "ALT-001".to_string(),
        action: AlertAction::Escalate,
    });
    session.dispatch(PageAction::Alert {
        alert_id: "ALT-004".to_string(),
        action: AlertAction::Dismiss,
    });
    let html = render_railflow_shell(&session.snapshot());
    assert_eq!(html.matches("data-component=\"AlertCard\"").count(), 3);
    assert!(html.contains("data-alert-id=\"ALT-001\" data-alert-status=\"escalated\""));
    assert!(!html.contains("data-alert-action=\"acknowledge\" data-alert-id=\"ALT-001\""));
}

#[test]
fn functional_train_details_marks_selected_hold() {
    let (_scheduler, mut session) = session();
    session.navigate("/train-details/RT-4401");
    session.dispatch(PageAction::Train {
        train_id: "RT-4401".to_string(),
        action: TrainAction::Hold,
    });
    let html = render_railflow_shell(&session.snapshot());
    assert!(html.contains("data-selected-action=\"hold\""));
    assert!(html.contains("data-stop-count=\"4\""));
    assert!(html.contains("id=\"railflow-train-selected-action\""));
}

#[test]
fn functional_unknown_train_renders_not_found_panel() {
    let html = shell_at("/train-details/QQ-1");
    assert!(html.contains("id=\"railflow-train-not-found\""));
    assert!(html.contains("data-train-id=\"QQ-1\""));
}

#[test]
fn functional_not_found_page_echoes_requested_path() {
    let (_scheduler, mut session) = session();
    session.navigate("/does-not-exist");
    let snapshot = session.snapshot();
    let html = render_railflow_document(&snapshot);
    assert!(html.contains("<title>Page Not Found | RailFlow</title>"));
    assert!(html.contains("data-requested-path=\"/does-not-exist\""));
}

#[test]
fn functional_history_buttons_follow_navigation() {
    let (_scheduler, mut session) = session();
    let html = render_railflow_shell(&session.snapshot());
    assert!(html.contains("data-history-enabled=\"false\""));
    assert!(!html.contains("data-history-enabled=\"true\""));

    session.navigate("/settings");
    let html = render_railflow_shell(&session.snapshot());
    assert_eq!(html.matches("data-history-enabled=\"true\"").count(), 1);
}

#[test]
fn functional_static_pages_render_their_fixture_sections() {
    let cases = [
        ("/collision-detection", "data-warning-count=\"2\""),
        ("/scheduling", "data-entry-count=\"3\""),
        ("/analytics", "data-report-count=\"3\""),
        ("/settings", "data-account-count=\"4\""),
        ("/all-routes", "data-route-count=\"4\""),
        ("/emergency", "id=\"railflow-emergency-contacts\""),
        ("/route-management/RT-4402", "data-track-count=\"3\""),
    ];
    for (path, marker) in cases {
        let html = shell_at(path);
        assert!(html.contains(marker), "{path} missing {marker}");
    }
}
