//! Train lookup on the live tracking page.

use serde::Serialize;

use crate::fixtures::{TrainRecord, TRAINS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchResult {
    Idle,
    Found { train: &'static TrainRecord },
    NotFound { query: String },
}

/// Search box state for one mount of the tracking page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingSearch {
    query: String,
    result: SearchResult,
}

impl Default for TrackingSearch {
    fn default() -> Self {
        Self {
            query: String::new(),
            result: SearchResult::Idle,
        }
    }
}

impl TrackingSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// First train whose id contains the query, ignoring case. A blank query
    /// clears the search instead of matching everything.
    pub fn search(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.clear();
            return;
        }
        let needle = trimmed.to_ascii_lowercase();
        self.query = trimmed.to_string();
        self.result = TRAINS
            .iter()
            .find(|train| train.train_id.to_ascii_lowercase().contains(&needle))
            .map(|train| SearchResult::Found { train })
            .unwrap_or_else(|| SearchResult::NotFound {
                query: trimmed.to_string(),
            });
        tracing::debug!(
            query = %self.query,
            found = matches!(self.result, SearchResult::Found { .. }),
            "tracking search"
        );
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.result = SearchResult::Idle;
    }
}
