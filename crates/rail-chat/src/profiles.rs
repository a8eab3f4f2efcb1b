//! Canned chat surfaces of the dashboard.

use std::time::Duration;

use serde::Serialize;

use crate::responder::{FallbackReply, KeywordRule, ResponsePolicy};

pub const DASHBOARD_WIDGET_GREETING: &str = "Hello! I'm your RailFlow AI assistant. I can help you with train operations, schedules, alerts, and system analytics. What would you like to know?";
pub const ASSISTANT_PAGE_GREETING: &str = "Hello! I'm the RailFlow operations assistant. Ask me about system status, delays, collision risk, or performance reports.";
pub const TRAIN_CHAT_GREETING_TEMPLATE: &str =
    "Hello! I'm the AI assistant for train {train_id}. How can I help you today?";

pub const DELAY_STATUS_REPLY: &str = "Currently, there are 3 trains with delays: RT-4402 (+12 min), RT-4407 (+8 min), RT-4412 (+5 min). The delays are primarily due to track maintenance on Sector 7. Would you like detailed information about any specific train?";
pub const TRAIN_RT_4401_STATUS_REPLY: &str = "Train RT-4401 is currently operating on schedule. Speed: 85 km/h, Location: Junction B-7, Next station: Central Hub (ETA: 14:23). All systems nominal.";
pub const NETWORK_EFFICIENCY_REPLY: &str = "Current network efficiency is 97.2% (+0.8% from yesterday). 94% of trains are on schedule. Average delay time: 3.2 minutes. Peak efficiency sectors: A1-A5 (99.1%). Areas for improvement: Sector 7 (track maintenance).";
pub const ACTIVE_ALERTS_REPLY: &str = "Active alerts: 1) Track maintenance on Sector 7 (Priority: Medium), 2) Signal check required at Junction C-3 (Priority: Low). All critical systems operational. No collision risks detected.";
pub const GENERIC_FALLBACK_REPLY: &str = "I understand you're asking about railway operations. Could you be more specific? I can help with train status, delays, scheduling, alerts, or system analytics.";
pub const TRAIN_CHAT_ECHO_TEMPLATE: &str = "I understand your query about \"{query}\". Let me check the current status and get back to you with relevant information.";

pub const ASSISTANT_RANDOM_REPLIES: [&str; 5] = [
    "I understand your query. Based on current system data, I recommend checking the real-time dashboard for the latest updates.",
    "Let me analyze the current railway operations... I've found some optimization opportunities that could improve efficiency by 12%.",
    "According to the latest data, all systems are operating within normal parameters. Would you like me to provide a detailed status report?",
    "I've processed your request and identified potential improvements. The suggested changes could reduce delays by up to 8 minutes.",
    "Based on historical patterns and current conditions, I recommend implementing route optimization on the Northern line.",
];

pub const DASHBOARD_WIDGET_QUICK_QUERIES: [&str; 4] = [
    "Show me current delays",
    "Train RT-4401 status",
    "Network efficiency report",
    "Active alerts summary",
];

pub const ASSISTANT_QUICK_QUERIES: [&str; 6] = [
    "Show me current system status",
    "Which trains are delayed?",
    "Generate today's performance report",
    "Check collision risk levels",
    "What's the weather impact?",
    "Show passenger load distribution",
];

pub const DEFAULT_WIDGET_REPLY_DELAY: Duration = Duration::from_millis(1_500);
pub const DEFAULT_ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(1_500);
pub const DEFAULT_TRAIN_CHAT_REPLY_DELAY: Duration = Duration::from_millis(1_000);

/// The three chat surfaces of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationKind {
    DashboardWidget,
    Assistant,
    TrainChat,
}

impl ConversationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DashboardWidget => "dashboard-widget",
            Self::Assistant => "assistant",
            Self::TrainChat => "train-chat",
        }
    }
}

/// Static configuration of one chat surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationProfile {
    pub kind: ConversationKind,
    pub greeting: String,
    pub policy: ResponsePolicy,
    pub reply_delay: Duration,
    pub quick_queries: Vec<String>,
    /// Disables sending while a reply is pending.
    pub blocks_while_typing: bool,
}

impl ConversationProfile {
    pub fn dashboard_widget() -> Self {
        Self {
            kind: ConversationKind::DashboardWidget,
            greeting: DASHBOARD_WIDGET_GREETING.to_string(),
            policy: ResponsePolicy::new(
                operations_keyword_rules(),
                FallbackReply::Fixed(GENERIC_FALLBACK_REPLY.to_string()),
            ),
            reply_delay: DEFAULT_WIDGET_REPLY_DELAY,
            quick_queries: to_owned_list(&DASHBOARD_WIDGET_QUICK_QUERIES),
            blocks_while_typing: true,
        }
    }

    pub fn assistant() -> Self {
        Self {
            kind: ConversationKind::Assistant,
            greeting: ASSISTANT_PAGE_GREETING.to_string(),
            policy: ResponsePolicy::new(
                operations_keyword_rules(),
                FallbackReply::RandomPick(to_owned_list(&ASSISTANT_RANDOM_REPLIES)),
            ),
            reply_delay: DEFAULT_ASSISTANT_REPLY_DELAY,
            quick_queries: to_owned_list(&ASSISTANT_QUICK_QUERIES),
            blocks_while_typing: false,
        }
    }

    pub fn train_chat(train_id: &str) -> Self {
        Self {
            kind: ConversationKind::TrainChat,
            greeting: TRAIN_CHAT_GREETING_TEMPLATE.replace("{train_id}", train_id),
            policy: ResponsePolicy::new(
                Vec::new(),
                FallbackReply::EchoTemplate(TRAIN_CHAT_ECHO_TEMPLATE.to_string()),
            ),
            reply_delay: DEFAULT_TRAIN_CHAT_REPLY_DELAY,
            quick_queries: Vec::new(),
            blocks_while_typing: false,
        }
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }
}

fn operations_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("delay", DELAY_STATUS_REPLY),
        KeywordRule::new("rt-4401", TRAIN_RT_4401_STATUS_REPLY),
        KeywordRule::new("efficiency", NETWORK_EFFICIENCY_REPLY),
        KeywordRule::new("alert", ACTIVE_ALERTS_REPLY),
    ]
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_train_chat_greeting_names_the_train() {
        let profile = ConversationProfile::train_chat("RT-4401");
        assert_eq!(
            profile.greeting,
            "Hello! I'm the AI assistant for train RT-4401. How can I help you today?"
        );
        assert!(profile.policy.rules().is_empty());
    }

    #[test]
    fn unit_widget_and_assistant_share_keyword_table_but_not_fallback() {
        let widget = ConversationProfile::dashboard_widget();
        let assistant = ConversationProfile::assistant();
        assert_eq!(widget.policy.rules(), assistant.policy.rules());
        assert!(matches!(widget.policy.fallback(), FallbackReply::Fixed(_)));
        assert!(matches!(
            assistant.policy.fallback(),
            FallbackReply::RandomPick(pool) if pool.len() == 5
        ));
    }

    #[test]
    fn unit_default_delays_match_surface() {
        assert_eq!(
            ConversationProfile::dashboard_widget().reply_delay,
            Duration::from_millis(1_500)
        );
        assert_eq!(
            ConversationProfile::train_chat("TR-001").reply_delay,
            Duration::from_millis(1_000)
        );
        assert_eq!(
            ConversationProfile::assistant()
                .with_reply_delay(Duration::from_millis(5))
                .reply_delay,
            Duration::from_millis(5)
        );
    }
}
