//! Canned-reply selection for simulated assistants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::profiles::GENERIC_FALLBACK_REPLY;

/// Placeholder replaced by the user's utterance in [`FallbackReply::EchoTemplate`].
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// One keyword → reply entry. Keywords are matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keyword: String,
    response: String,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            response: response.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    fn matches(&self, lowered_utterance: &str) -> bool {
        !self.keyword.is_empty() && lowered_utterance.contains(self.keyword.as_str())
    }
}

/// Reply used when no keyword rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReply {
    Fixed(String),
    RandomPick(Vec<String>),
    EchoTemplate(String),
}

/// Ordered keyword table plus fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    rules: Vec<KeywordRule>,
    fallback: FallbackReply,
}

impl ResponsePolicy {
    pub fn new(rules: Vec<KeywordRule>, fallback: FallbackReply) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &FallbackReply {
        &self.fallback
    }

    /// First matching keyword rule, in table order.
    pub fn keyword_reply(&self, utterance: &str) -> Option<&str> {
        let lowered = utterance.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered.as_str()))
            .map(KeywordRule::response)
    }
}

/// Source of uniform indices for random canned-reply selection.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    rng: StdRng,
}

impl SeededRandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Produces assistant replies without any inference.
pub struct SimulatedResponder {
    policy: ResponsePolicy,
    random: Box<dyn RandomSource>,
}

impl SimulatedResponder {
    pub fn new(policy: ResponsePolicy, random: Box<dyn RandomSource>) -> Self {
        Self { policy, random }
    }

    pub fn policy(&self) -> &ResponsePolicy {
        &self.policy
    }

    /// Picks the reply for `utterance`. Callers reject blank input first.
    pub fn reply_to(&mut self, utterance: &str) -> String {
        if let Some(reply) = self.policy.keyword_reply(utterance) {
            return reply.to_string();
        }
        match &self.policy.fallback {
            FallbackReply::Fixed(text) => text.clone(),
            FallbackReply::RandomPick(pool) => {
                if pool.is_empty() {
                    return GENERIC_FALLBACK_REPLY.to_string();
                }
                let index = self.random.pick_index(pool.len()).min(pool.len() - 1);
                pool[index].clone()
            }
            FallbackReply::EchoTemplate(template) => {
                template.replace(QUERY_PLACEHOLDER, utterance.trim())
            }
        }
    }
}

impl std::fmt::Debug for SimulatedResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedResponder")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{
        FallbackReply, KeywordRule, RandomSource, ResponsePolicy, SeededRandomSource,
        SimulatedResponder, GENERIC_FALLBACK_REPLY,
    };

    struct ScriptedRandomSource {
        picks: VecDeque<usize>,
    }

    impl RandomSource for ScriptedRandomSource {
        fn pick_index(&mut self, _len: usize) -> usize {
            self.picks.pop_front().unwrap_or(0)
        }
    }

    fn keyword_policy() -> ResponsePolicy {
        ResponsePolicy::new(
            vec![
                KeywordRule::new("delay", "delay report"),
                KeywordRule::new("RT-4401", "rt-4401 report"),
            ],
            FallbackReply::Fixed("generic".to_string()),
        )
    }

    fn responder(policy: ResponsePolicy, picks: Vec<usize>) -> SimulatedResponder {
        SimulatedResponder::new(
            policy,
            Box::new(ScriptedRandomSource {
                picks: picks.into(),
            }),
        )
    }

    #[test]
    fn unit_keyword_match_ignores_case() {
        let mut responder = responder(keyword_policy(), Vec::new());
        assert_eq!(responder.reply_to("Any DELAYS today?"), "delay report");
        assert_eq!(responder.reply_to("status of rt-4401"), "rt-4401 report");
    }

    #[test]
    fn unit_first_rule_in_table_order_wins() {
        let mut responder = responder(keyword_policy(), Vec::new());
        assert_eq!(responder.reply_to("RT-4401 delay"), "delay report");
    }

    #[test]
    fn unit_unmatched_input_returns_fixed_fallback() {
        let mut responder = responder(keyword_policy(), Vec::new());
        assert_eq!(responder.reply_to("xyz123"), "generic");
    }

    #[test]
    fn unit_random_pick_uses_injected_source() {
        let policy = ResponsePolicy::new(
            Vec::new(),
            FallbackReply::RandomPick(vec!["a".into(), "b".into(), "c".into()]),
        );
        let mut responder = responder(policy, vec![2, 0, 1]);
        assert_eq!(responder.reply_to("one"), "c");
        assert_eq!(responder.reply_to("two"), "a");
        assert_eq!(responder.reply_to("three"), "b");
    }

    #[test]
    fn regression_out_of_range_random_index_is_clamped() {
        let policy = ResponsePolicy::new(
            Vec::new(),
            FallbackReply::RandomPick(vec!["a".into(), "b".into()]),
        );
        let mut responder = responder(policy, vec![99]);
        assert_eq!(responder.reply_to("anything"), "b");
    }

    #[test]
    fn regression_empty_random_pool_falls_back_to_generic_reply() {
        let policy = ResponsePolicy::new(Vec::new(), FallbackReply::RandomPick(Vec::new()));
        let mut responder = responder(policy, vec![0]);
        assert_eq!(responder.reply_to("anything"), GENERIC_FALLBACK_REPLY);
    }

    #[test]
    fn unit_echo_template_quotes_trimmed_query() {
        let policy = ResponsePolicy::new(
            Vec::new(),
            FallbackReply::EchoTemplate("about \"{query}\".".to_string()),
        );
        let mut responder = responder(policy, Vec::new());
        assert_eq!(responder.reply_to("  brake check  "), "about \"brake check\".");
    }

    #[test]
    fn functional_seeded_sources_repeat_the_same_sequence() {
        let mut first = SeededRandomSource::from_seed(42);
        let mut second = SeededRandomSource::from_seed(42);
        let first_picks = (0..16).map(|_| first.pick_index(5)).collect::<Vec<_>>();
        let second_picks = (0..16).map(|_| second.pick_index(5)).collect::<Vec<_>>();
        assert_eq!(first_picks, second_picks);
        assert!(first_picks.iter().all(|index| *index < 5));
    }
}
