use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use thiserror::Error;

use crate::page::{RailflowPage, TRAIN_ID_PARAM};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePatternError {
    #[error("route pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    #[error("route pattern '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("route pattern '{0}' declares a parameter without a name")]
    EmptyParameterName(String),
    #[error("route pattern '{pattern}' declares parameter '{name}' more than once")]
    DuplicateParameter { pattern: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Literal(String),
    Param(String),
}

/// Slash-separated route pattern such as `/train-chat/:trainId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<PatternSegment>) -> Self {
        Self { segments }
    }

    pub fn parse(raw: &str) -> Result<Self, RoutePatternError> {
        let Some(body) = raw.strip_prefix('/') else {
            return Err(RoutePatternError::MissingLeadingSlash(raw.to_string()));
        };
        if body.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for part in body.split('/') {
            if part.is_empty() {
                return Err(RoutePatternError::EmptySegment(raw.to_string()));
            }
            match part.strip_prefix(':') {
                Some("") => return Err(RoutePatternError::EmptyParameterName(raw.to_string())),
                Some(name) => {
                    let duplicate = segments.iter().any(
                        |segment| matches!(segment, PatternSegment::Param(existing) if existing == name),
                    );
                    if duplicate {
                        return Err(RoutePatternError::DuplicateParameter {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(PatternSegment::Param(name.to_string()));
                }
                None => segments.push(PatternSegment::Literal(part.to_string())),
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Matches already-normalized path segments. Literals compare ASCII
    /// case-insensitively; parameter values keep their original case.
    pub fn match_segments(&self, path_segments: &[&str]) -> Option<RouteParams> {
        if path_segments.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (pattern, actual) in self.segments.iter().zip(path_segments) {
            match pattern {
                PatternSegment::Literal(expected) => {
                    if !expected.eq_ignore_ascii_case(actual) {
                        return None;
                    }
                }
                PatternSegment::Param(name) => params.insert(name, actual),
            }
        }
        Some(params)
    }

    /// Renders a concrete path. Returns `None` when a parameter is missing
    /// or its value would not survive a round trip through `resolve`.
    pub fn render(&self, params: &RouteParams) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                PatternSegment::Literal(value) => path.push_str(value),
                PatternSegment::Param(name) => {
                    let value = params.get(name)?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return None;
                    }
                    path.push_str(value);
                }
            }
        }
        Some(path)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(value) => write!(f, "/{value}")?,
                PatternSegment::Param(name) => write!(f, "/:{name}")?,
            }
        }
        Ok(())
    }
}

/// Named parameters captured from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn with_train_id(train_id: &str) -> Self {
        let mut params = Self::default();
        params.insert(TRAIN_ID_PARAM, train_id);
        params
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn train_id(&self) -> Option<&str> {
        self.get(TRAIN_ID_PARAM)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub path: String,
    pub page: RailflowPage,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn train_id(&self) -> Option<&str> {
        self.params.train_id()
    }
}

/// Drops query and fragment, collapses empty segments and strips the
/// trailing slash. The empty path normalizes to `/`.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let segments = raw[..end]
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}", segments.join("/"))
}

#[derive(Debug, Clone)]
struct RouteEntry {
    pattern: RoutePattern,
    page: RailflowPage,
}

/// Ordered route table. First match wins; anything unmatched resolves to
/// [`RailflowPage::NotFound`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(routes: Vec<(RoutePattern, RailflowPage)>) -> Self {
        Self {
            entries: routes
                .into_iter()
                .map(|(pattern, page)| RouteEntry { pattern, page })
                .collect(),
        }
    }

    pub fn from_patterns(routes: &[(&str, RailflowPage)]) -> Result<Self, RoutePatternError> {
        let parsed = routes
            .iter()
            .map(|(raw, page)| RoutePattern::parse(raw).map(|pattern| (pattern, *page)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(parsed))
    }

    /// Shared table with every dashboard route.
    pub fn railflow() -> Arc<RouteTable> {
        static TABLE: OnceLock<Arc<RouteTable>> = OnceLock::new();
        TABLE
            .get_or_init(|| {
                Arc::new(Self::new(
                    RailflowPage::ROUTED
                        .iter()
                        .filter_map(|page| page.route_pattern().map(|pattern| (pattern, *page)))
                        .collect(),
                ))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, raw_path: &str) -> RouteMatch {
        let path = normalize_path(raw_path);
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        for entry in &self.entries {
            if let Some(params) = entry.pattern.match_segments(&segments) {
                return RouteMatch {
                    path,
                    page: entry.page,
                    params,
                };
            }
        }
        RouteMatch {
            path,
            page: RailflowPage::NotFound,
            params: RouteParams::default(),
        }
    }

    /// Reverse routing: concrete path for `page` with `params`.
    pub fn path_for(&self, page: RailflowPage, params: &RouteParams) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .and_then(|entry| entry.pattern.render(params))
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, RouteParams, RoutePattern, RoutePatternError, RouteTable};
    use crate::page::RailflowPage;

    #[test]
    fn unit_normalize_path_strips_query_fragment_and_slashes() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/tracking/"), "/tracking");
        assert_eq!(normalize_path("tracking"), "/tracking");
        assert_eq!(normalize_path("//train-chat//RT-4401/"), "/train-chat/RT-4401");
        assert_eq!(normalize_path("/alerts?tab=active#top"), "/alerts");
        assert_eq!(normalize_path("/#/tracking"), "/");
    }

    #[test]
    fn functional_resolve_maps_static_paths() {
        let table = RouteTable::railflow();
        let cases = [
            ("/", RailflowPage::Dashboard),
            ("/tracking", RailflowPage::Tracking),
            ("/collision-detection", RailflowPage::CollisionDetection),
            ("/scheduling", RailflowPage::Scheduling),
            ("/analytics", RailflowPage::Analytics),
            ("/alerts", RailflowPage::Alerts),
            ("/assistant", RailflowPage::Assistant),
            ("/settings", RailflowPage::Settings),
            ("/all-routes", RailflowPage::AllRoutes),
            ("/emergency", RailflowPage::Emergency),
        ];
        for (path, page) in cases {
            let resolved = table.resolve(path);
            assert_eq!(resolved.page, page, "path {path}");
            assert!(resolved.params.is_empty());
        }
    }

    #[test]
    fn functional_resolve_extracts_train_id_verbatim() {
        let table = RouteTable::railflow();
        let resolved = table.resolve("/train-chat/RT-4401");
        assert_eq!(resolved.page, RailflowPage::TrainChat);
        assert_eq!(resolved.train_id(), Some("RT-4401"));

        let details = table.resolve("/train-details/tr-003");
        assert_eq!(details.page, RailflowPage::TrainDetails);
        assert_eq!(details.train_id(), Some("tr-003"));

        let reroute = table.resolve("/Route-Management/RT-4402/");
        assert_eq!(reroute.page, RailflowPage::RouteManagement);
        assert_eq!(reroute.train_id(), Some("RT-4402"));
        assert_eq!(reroute.path, "/Route-Management/RT-4402");
    }

    #[test]
    fn functional_resolve_falls_back_to_not_found() {
        let table = RouteTable::railflow();
        for path in [
            "/does-not-exist",
            "/train-chat",
            "/train-chat/RT-4401/extra",
            "/tracking/RT-4401",
        ] {
            let resolved = table.resolve(path);
            assert_eq!(resolved.page, RailflowPage::NotFound, "path {path}");
            assert!(resolved.params.is_empty());
        }
    }

    #[test]
    fn unit_literals_match_case_insensitively() {
        let table = RouteTable::railflow();
        assert_eq!(table.resolve("/TRACKING").page, RailflowPage::Tracking);
        assert_eq!(table.resolve("/Assistant?x=1").page, RailflowPage::Assistant);
    }

    #[test]
    fn functional_path_for_round_trips_through_resolve() {
        let table = RouteTable::railflow();
        let params = RouteParams::with_train_id("TR-005");
        for page in [
            RailflowPage::TrainDetails,
            RailflowPage::TrainChat,
            RailflowPage::RouteManagement,
        ] {
            let path = table.path_for(page, &params).expect("path renders");
            let resolved = table.resolve(&path);
            assert_eq!(resolved.page, page);
            assert_eq!(resolved.params, params);
        }
        assert_eq!(
            table.path_for(RailflowPage::Dashboard, &RouteParams::default()),
            Some("/".to_string())
        );
    }

    #[test]
    fn unit_path_for_rejects_missing_or_unsafe_params() {
        let table = RouteTable::railflow();
        assert_eq!(
            table.path_for(RailflowPage::TrainChat, &RouteParams::default()),
            None
        );
        assert_eq!(
            table.path_for(RailflowPage::TrainChat, &RouteParams::with_train_id("a/b")),
            None
        );
        assert_eq!(
            table.path_for(RailflowPage::NotFound, &RouteParams::default()),
            None
        );
    }

    #[test]
    fn unit_parse_rejects_malformed_patterns() {
        assert_eq!(
            RoutePattern::parse("tracking"),
            Err(RoutePatternError::MissingLeadingSlash("tracking".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/a//b"),
            Err(RoutePatternError::EmptySegment("/a//b".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/train/:"),
            Err(RoutePatternError::EmptyParameterName("/train/:".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/:id/x/:id"),
            Err(RoutePatternError::DuplicateParameter {
                pattern: "/:id/x/:id".to_string(),
                name: "id".to_string(),
            })
        );
    }

    #[test]
    fn regression_first_matching_route_wins() {
        let table = RouteTable::from_patterns(&[
            ("/train-chat/latest", RailflowPage::Assistant),
            ("/train-chat/:trainId", RailflowPage::TrainChat),
        ])
        .expect("table parses");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.resolve("/train-chat/latest").page,
            RailflowPage::Assistant
        );
        assert_eq!(
            table.resolve("/train-chat/RT-4404").page,
            RailflowPage::TrainChat
        );
    }

    #[test]
    fn unit_route_match_serializes_params_as_map() {
        let resolved = RouteTable::railflow().resolve("/train-details/RT-4403");
        let value = serde_json::to_value(&resolved).expect("serialize");
        assert_eq!(value["page"], "train-details");
        assert_eq!(value["params"]["trainId"], "RT-4403");
        assert_eq!(value["path"], "/train-details/RT-4403");
    }
}
