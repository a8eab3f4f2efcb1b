//! Chat panel shared by the dashboard widget, the assistant page and train chat.

use leptos::prelude::*;
use rail_chat::{ConversationKind, ConversationSnapshot};

use crate::{bool_attr, CHAT_QUICK_QUERY_ENDPOINT, CHAT_SEND_ENDPOINT};

fn input_placeholder(kind: ConversationKind) -> &'static str {
    match kind {
        ConversationKind::DashboardWidget => "Ask about trains, schedules, or alerts...",
        ConversationKind::Assistant => "Ask me anything about railway operations...",
        ConversationKind::TrainChat => "Ask about this train...",
    }
}

fn panel_heading(kind: ConversationKind) -> &'static str {
    match kind {
        ConversationKind::DashboardWidget => "RailFlow AI Assistant",
        ConversationKind::Assistant => "Operations Chat",
        ConversationKind::TrainChat => "Train Assistant",
    }
}

pub(crate) fn render_chat_panel(chat: &ConversationSnapshot) -> AnyView {
    let kind_attr = chat.kind.as_str();
    let typing = chat.typing;
    let message_count_value = chat.messages.len().to_string();
    let message_count_list_value = message_count_value.clone();
    let draft = chat.draft.clone();
    let send_locked = chat.send_locked;
    let quick_query_count_value = chat.quick_queries.len().to_string();
    let has_quick_queries = !chat.quick_queries.is_empty();

    let message_rows = chat
        .messages
        .iter()
        .map(|message| {
            let row_id = format!("railflow-chat-message-{}", message.id);
            let message_id_value = message.id.to_string();
            let sender_attr = message.sender.as_str();
            let sender_label = if message.is_from_assistant() {
                "Assistant"
            } else {
                "You"
            };
            view! {
                <li
                    id=row_id
                    data-message-id=message_id_value
                    data-sender=sender_attr
                    data-kind=message.kind.as_str()
                >
                    <span class="railflow-chat-sender">{sender_label}</span>
                    <p class="railflow-chat-text">{message.text.clone()}</p>
                    <time class="railflow-chat-time">{message.clock_label()}</time>
                </li>
            }
        })
        .collect_view();

    let quick_query_forms = chat
        .quick_queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            let form_id = format!("railflow-chat-quick-query-{index}");
            let index_value = index.to_string();
            let index_attr = index_value.clone();
            view! {
                <form id=form_id method="post" action=CHAT_QUICK_QUERY_ENDPOINT>
                    <input type="hidden" name="index" value=index_value />
                    <button type="submit" data-quick-query-index=index_attr>
                        {query.clone()}
                    </button>
                </form>
            }
        })
        .collect_view();

    view! {
        <section
            id="railflow-chat"
            data-component="ChatPanel"
            data-conversation-kind=kind_attr
            data-typing=bool_attr(typing)
            data-message-count=message_count_value
        >
            <h2>{panel_heading(chat.kind)}</h2>
            <ul id="railflow-chat-messages" data-message-count=message_count_list_value>
                {message_rows}
            </ul>
            {typing.then(|| view! {
                <p id="railflow-chat-typing" data-typing="true">"Assistant is typing..."</p>
            })}
            {has_quick_queries.then(|| view! {
                <section
                    id="railflow-chat-quick-queries"
                    data-quick-query-count=quick_query_count_value
                >
                    <h3>"Quick queries"</h3>
                    {quick_query_forms}
                </section>
            })}
            <form id="railflow-chat-form" method="post" action=CHAT_SEND_ENDPOINT>
                <label for="railflow-chat-input">"Message"</label>
                <input
                    id="railflow-chat-input"
                    type="text"
                    name="message"
                    autocomplete="off"
                    placeholder=input_placeholder(chat.kind)
                    value=draft
                />
                <button
                    id="railflow-chat-send"
                    type="submit"
                    data-send-locked=bool_attr(send_locked)
                    disabled=send_locked
                >
                    "Send"
                </button>
            </form>
        </section>
    }
    .into_any()
}
