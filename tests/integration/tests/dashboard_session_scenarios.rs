use std::sync::Arc;
use std::time::Duration;

use rail_chat::profiles::{
    ASSISTANT_RANDOM_REPLIES, DELAY_STATUS_REPLY, GENERIC_FALLBACK_REPLY,
    TRAIN_RT_4401_STATUS_REPLY,
};
use rail_chat::{ChatSendError, ChatSender, ManualReplyScheduler, TokioReplyScheduler};
use rail_dashboard::{ActionOutcome, DashboardConfig, DashboardSession, PageAction, TrainAction};
use rail_dashboard_ui::render_railflow_document;
use rail_router::RailflowPage;

fn manual_session(seed: u64) -> (Arc<ManualReplyScheduler>, DashboardSession) {
    let scheduler = Arc::new(ManualReplyScheduler::new(1_700_000_000_000));
    let session = DashboardSession::new(
        DashboardConfig {
            random_seed: Some(seed),
            ..DashboardConfig::default()
        },
        scheduler.clone(),
    );
    (scheduler, session)
}

fn send(session: &mut DashboardSession, text: &str) -> ActionOutcome {
    session.dispatch(PageAction::SetDraft(text.to_string()));
    session.dispatch(PageAction::Send)
}

fn message_texts(session: &DashboardSession) -> Vec<String> {
    session
        .snapshot()
        .chat()
        .map(|chat| chat.messages.iter().map(|message| message.text.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn integration_assistant_delay_question_is_answered_after_latency() {
    let (scheduler, mut session) = manual_session(1);
    session.navigate("/assistant");
    assert_eq!(message_texts(&session).len(), 1);

    assert_eq!(send(&mut session, "Show me current delays"), ActionOutcome::Updated);
    assert_eq!(message_texts(&session).len(), 2);
    assert!(session.snapshot().is_typing());

    scheduler.advance(Duration::from_millis(1_499));
    assert_eq!(message_texts(&session).len(), 2);

    scheduler.advance(Duration::from_millis(1));
    let snapshot = session.snapshot();
    let chat = snapshot.chat().expect("assistant chat");
    assert_eq!(chat.messages.len(), 3);
    assert_eq!(chat.messages[2].sender, ChatSender::Assistant);
    assert_eq!(chat.messages[2].text, DELAY_STATUS_REPLY);
    assert!(!chat.typing);
}

#[test]
fn integration_dashboard_widget_blocks_second_send_while_typing() {
    let (scheduler, mut session) = manual_session(1);
    assert_eq!(session.snapshot().page, RailflowPage::Dashboard);

    assert_eq!(send(&mut session, "xyz123"), ActionOutcome::Updated);
    assert_eq!(
        send(&mut session, "RT-4401 status"),
        ActionOutcome::Rejected(ChatSendError::ReplyPending)
    );

    scheduler.advance(Duration::from_millis(1_500));
    assert_eq!(send(&mut session, "RT-4401 status"), ActionOutcome::Updated);
    scheduler.advance(Duration::from_millis(1_500));

    let texts = message_texts(&session);
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[2], GENERIC_FALLBACK_REPLY);
    assert_eq!(texts[4], TRAIN_RT_4401_STATUS_REPLY);
}

#[test]
fn integration_seeded_assistant_fallback_is_reproducible() {
    let replies: Vec<String> = (0..2)
        .map(|_| {
            let (scheduler, mut session) = manual_session(99);
            session.navigate("/assistant");
            send(&mut session, "xyz123");
            scheduler.advance(Duration::from_millis(1_500));
            message_texts(&session)
                .pop()
                .expect("assistant reply present")
        })
        .collect();

    assert_eq!(replies[0], replies[1]);
    assert!(ASSISTANT_RANDOM_REPLIES.contains(&replies[0].as_str()));
}

#[test]
fn integration_train_chat_echoes_query_and_history_remounts_fresh_chat() {
    let (scheduler, mut session) = manual_session(1);
    let outcome = session.dispatch(PageAction::Train {
        train_id: "RT-4402".to_string(),
        action: TrainAction::Chat,
    });
    assert!(matches!(outcome, ActionOutcome::Navigated(_)));
    assert_eq!(session.current().path, "/train-chat/RT-4402");

    send(&mut session, "  ETA to Central Hub?  ");
    scheduler.advance(Duration::from_millis(1_000));
    let texts = message_texts(&session);
    assert_eq!(texts.len(), 3);
    assert!(texts[2].contains("\"ETA to Central Hub?\""));

    session.back();
    assert_eq!(session.current().path, "/");
    session.forward();
    assert_eq!(session.current().train_id(), Some("RT-4402"));
    assert_eq!(message_texts(&session).len(), 1);
}

#[test]
fn integration_rendered_document_tracks_typing_state() {
    let (scheduler, mut session) = manual_session(1);
    session.navigate("/assistant");
    send(&mut session, "What's the network efficiency?");

    let typing_html = render_railflow_document(&session.snapshot());
    assert!(typing_html.contains(r#"http-equiv="refresh""#));
    assert!(typing_html.contains(r#"data-typing="true""#));

    scheduler.advance(Duration::from_millis(1_500));
    let settled_html = render_railflow_document(&session.snapshot());
    assert!(!settled_html.contains(r#"http-equiv="refresh""#));
    assert!(settled_html.contains(r#"data-typing="false""#));
}

#[tokio::test(start_paused = true)]
async fn integration_tokio_scheduler_delivers_and_cancels_on_unmount() {
    let scheduler = Arc::new(TokioReplyScheduler::try_current().expect("tokio runtime"));
    let mut session = DashboardSession::with_initial_path(
        DashboardConfig::default(),
        scheduler,
        "/assistant",
    );

    send(&mut session, "any delay today?");
    tokio::time::sleep(Duration::from_millis(1_600)).await;
    assert_eq!(message_texts(&session).len(), 3);

    send(&mut session, "delay again?");
    session.navigate("/alerts");
    tokio::time::sleep(Duration::from_millis(1_600)).await;
    session.navigate("/assistant");
    assert_eq!(message_texts(&session).len(), 1);

    let snapshot = session.snapshot();
    let value = serde_json::to_value(&snapshot).expect("serialize snapshot");
    assert_eq!(value["body"]["chat"]["typing"], false);
}
