//! Read-only sample data shown by the dashboard pages.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Stopped,
    Maintenance,
}

impl TrainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "on-time",
            Self::Delayed => "delayed",
            Self::Stopped => "stopped",
            Self::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    Completed,
    Current,
    Upcoming,
}

impl StopStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainStop {
    pub station: &'static str,
    pub arrival: &'static str,
    pub departure: &'static str,
    pub status: StopStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainRecord {
    pub train_id: &'static str,
    pub train_type: &'static str,
    pub route: &'static str,
    pub previous_station: &'static str,
    pub current_location: &'static str,
    pub next_station: &'static str,
    pub destination: &'static str,
    pub departure_time: &'static str,
    pub estimated_arrival: &'static str,
    pub speed_kmh: u32,
    pub status: TrainStatus,
    pub delay_minutes: u32,
    pub passengers: u32,
    pub capacity: u32,
    pub stops: &'static [TrainStop],
}

impl TrainRecord {
    /// Badge text: `+12min` for delayed trains, the status name otherwise.
    pub fn status_label(&self) -> String {
        match self.status {
            TrainStatus::OnTime => "On Time".to_string(),
            TrainStatus::Delayed => format!("+{}min", self.delay_minutes),
            TrainStatus::Stopped => "Stopped".to_string(),
            TrainStatus::Maintenance => "Maintenance".to_string(),
        }
    }

    pub fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        self.passengers.saturating_mul(100) / self.capacity
    }
}

const RT_4401_STOPS: [TrainStop; 4] = [
    TrainStop {
        station: "North Bridge",
        arrival: "13:30",
        departure: "13:45",
        status: StopStatus::Completed,
    },
    TrainStop {
        station: "Junction B-7",
        arrival: "14:05",
        departure: "14:08",
        status: StopStatus::Current,
    },
    TrainStop {
        station: "Central Hub",
        arrival: "14:23",
        departure: "14:25",
        status: StopStatus::Upcoming,
    },
    TrainStop {
        station: "South Terminal",
        arrival: "14:45",
        departure: "14:47",
        status: StopStatus::Upcoming,
    },
];

const RT_4402_STOPS: [TrainStop; 3] = [
    TrainStop {
        station: "Sector 7",
        arrival: "14:10",
        departure: "14:14",
        status: StopStatus::Current,
    },
    TrainStop {
        station: "Bridge Station",
        arrival: "14:47",
        departure: "14:50",
        status: StopStatus::Upcoming,
    },
    TrainStop {
        station: "North Terminal",
        arrival: "15:20",
        departure: "15:20",
        status: StopStatus::Upcoming,
    },
];

pub const TRAINS: &[TrainRecord] = &[
    TrainRecord {
        train_id: "RT-4401",
        train_type: "Express",
        route: "Central Line",
        previous_station: "North Bridge",
        current_location: "Junction B-7",
        next_station: "Central Hub",
        destination: "Central Hub",
        departure_time: "13:45",
        estimated_arrival: "14:23",
        speed_kmh: 85,
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        passengers: 245,
        capacity: 300,
        stops: &RT_4401_STOPS,
    },
    TrainRecord {
        train_id: "RT-4402",
        train_type: "Regional",
        route: "Northern Line",
        previous_station: "Central Hub",
        current_location: "Sector 7",
        next_station: "Bridge Station",
        destination: "North Terminal",
        departure_time: "13:50",
        estimated_arrival: "14:47",
        speed_kmh: 45,
        status: TrainStatus::Delayed,
        delay_minutes: 12,
        passengers: 180,
        capacity: 250,
        stops: &RT_4402_STOPS,
    },
    TrainRecord {
        train_id: "RT-4403",
        train_type: "Commuter",
        route: "Eastern Route",
        previous_station: "Central Hub",
        current_location: "South Station",
        next_station: "Platform 3",
        destination: "East Hub",
        departure_time: "14:40",
        estimated_arrival: "15:12",
        speed_kmh: 0,
        status: TrainStatus::Stopped,
        delay_minutes: 0,
        passengers: 96,
        capacity: 220,
        stops: &[],
    },
    TrainRecord {
        train_id: "RT-4404",
        train_type: "Express",
        route: "Western Loop",
        previous_station: "North Terminal",
        current_location: "North Bridge",
        next_station: "Junction A-4",
        destination: "West Terminal",
        departure_time: "14:02",
        estimated_arrival: "14:35",
        speed_kmh: 78,
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        passengers: 210,
        capacity: 300,
        stops: &[],
    },
    TrainRecord {
        train_id: "RT-4405",
        train_type: "Freight",
        route: "Industrial Branch",
        previous_station: "Junction B-7",
        current_location: "Industrial Spur",
        next_station: "Industrial Park",
        destination: "Industrial Park",
        departure_time: "13:55",
        estimated_arrival: "14:58",
        speed_kmh: 52,
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        passengers: 0,
        capacity: 0,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-001",
        train_type: "Express",
        route: "Central Line",
        previous_station: "North Bridge",
        current_location: "Central Approach",
        next_station: "Central Station",
        destination: "South Terminal",
        departure_time: "13:40",
        estimated_arrival: "14:32",
        speed_kmh: 75,
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        passengers: 245,
        capacity: 300,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-002",
        train_type: "Express",
        route: "Northern Express",
        previous_station: "Junction 7A",
        current_location: "Northern Corridor",
        next_station: "North Terminal",
        destination: "North Terminal",
        departure_time: "13:52",
        estimated_arrival: "14:47",
        speed_kmh: 95,
        status: TrainStatus::Delayed,
        delay_minutes: 8,
        passengers: 180,
        capacity: 260,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-003",
        train_type: "Regional",
        route: "Eastern Route",
        previous_station: "Eastern Bridge",
        current_location: "Eastern Bridge Section",
        next_station: "East Junction",
        destination: "East Hub",
        departure_time: "13:58",
        estimated_arrival: "14:25",
        speed_kmh: 68,
        status: TrainStatus::OnTime,
        delay_minutes: 0,
        passengers: 320,
        capacity: 360,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-004",
        train_type: "Commuter",
        route: "Western Loop",
        previous_station: "West Junction",
        current_location: "West Plaza Siding",
        next_station: "West Plaza",
        destination: "West Terminal",
        departure_time: "14:20",
        estimated_arrival: "15:15",
        speed_kmh: 0,
        status: TrainStatus::Stopped,
        delay_minutes: 0,
        passengers: 156,
        capacity: 240,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-005",
        train_type: "Regional",
        route: "Central Line",
        previous_station: "Junction 4B",
        current_location: "Junction 7A",
        next_station: "Central Station",
        destination: "Central Hub",
        departure_time: "13:35",
        estimated_arrival: "14:52",
        speed_kmh: 40,
        status: TrainStatus::Delayed,
        delay_minutes: 15,
        passengers: 198,
        capacity: 260,
        stops: &[],
    },
    TrainRecord {
        train_id: "TR-008",
        train_type: "Commuter",
        route: "Eastern Route",
        previous_station: "East Depot",
        current_location: "East Depot",
        next_station: "Eastern Bridge Section",
        destination: "East Hub",
        departure_time: "14:40",
        estimated_arrival: "15:05",
        speed_kmh: 0,
        status: TrainStatus::Maintenance,
        delay_minutes: 0,
        passengers: 0,
        capacity: 240,
        stops: &[],
    },
];

/// Trains shown as status cards on the home dashboard.
pub const DASHBOARD_TRAIN_IDS: [&str; 4] = ["RT-4401", "RT-4402", "RT-4403", "RT-4404"];

/// Trains listed on the live tracking page.
pub const TRACKED_TRAIN_IDS: [&str; 4] = ["TR-001", "TR-002", "TR-003", "TR-004"];

/// Looks a train up by id, ignoring ASCII case.
pub fn find_train(train_id: &str) -> Option<&'static TrainRecord> {
    let needle = train_id.trim();
    TRAINS
        .iter()
        .find(|train| train.train_id.eq_ignore_ascii_case(needle))
}

pub fn trains_by_ids(ids: &[&str]) -> Vec<&'static TrainRecord> {
    ids.iter().filter_map(|id| find_train(id)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Moving,
    Delayed,
    Stopped,
}

impl MarkerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Moving => "moving",
            Self::Delayed => "delayed",
            Self::Stopped => "stopped",
        }
    }
}

/// Train position on the schematic network map, in percent of the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkMarker {
    pub train_id: &'static str,
    pub x_percent: u8,
    pub y_percent: u8,
    pub status: MarkerStatus,
}

pub const NETWORK_MARKERS: &[NetworkMarker] = &[
    NetworkMarker {
        train_id: "RT-4401",
        x_percent: 20,
        y_percent: 30,
        status: MarkerStatus::Moving,
    },
    NetworkMarker {
        train_id: "RT-4402",
        x_percent: 60,
        y_percent: 45,
        status: MarkerStatus::Delayed,
    },
    NetworkMarker {
        train_id: "RT-4403",
        x_percent: 40,
        y_percent: 70,
        status: MarkerStatus::Stopped,
    },
    NetworkMarker {
        train_id: "RT-4404",
        x_percent: 80,
        y_percent: 25,
        status: MarkerStatus::Moving,
    },
    NetworkMarker {
        train_id: "RT-4405",
        x_percent: 15,
        y_percent: 60,
        status: MarkerStatus::Moving,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const SYSTEM_STATUS_METRICS: &[MetricCard] = &[
    MetricCard {
        label: "Active Trains",
        value: "47",
        change: "+3",
        trend: Trend::Up,
    },
    MetricCard {
        label: "On Schedule",
        value: "94%",
        change: "+2%",
        trend: Trend::Up,
    },
    MetricCard {
        label: "Delays",
        value: "3",
        change: "-1",
        trend: Trend::Down,
    },
    MetricCard {
        label: "Alerts",
        value: "2",
        change: "0",
        trend: Trend::Flat,
    },
    MetricCard {
        label: "Network Efficiency",
        value: "97.2%",
        change: "+0.8%",
        trend: Trend::Up,
    },
    MetricCard {
        label: "Controllers Online",
        value: "8",
        change: "0",
        trend: Trend::Flat,
    },
];

pub const SCHEDULE_METRICS: &[MetricCard] = &[
    MetricCard {
        label: "On-Time Performance",
        value: "94.2%",
        change: "+2.1%",
        trend: Trend::Up,
    },
    MetricCard {
        label: "Average Delay",
        value: "3.4 min",
        change: "-0.8min",
        trend: Trend::Down,
    },
    MetricCard {
        label: "Cancelled Trains",
        value: "2",
        change: "-1",
        trend: Trend::Down,
    },
    MetricCard {
        label: "Efficiency Score",
        value: "8.7/10",
        change: "+0.3",
        trend: Trend::Up,
    },
];

pub const PERFORMANCE_METRICS: &[MetricCard] = &[
    MetricCard {
        label: "Network Efficiency",
        value: "96.8%",
        change: "+2.1%",
        trend: Trend::Up,
    },
    MetricCard {
        label: "Average Speed",
        value: "87.4 km/h",
        change: "+1.2 km/h",
        trend: Trend::Up,
    },
    MetricCard {
        label: "Delay Incidents",
        value: "23",
        change: "-5",
        trend: Trend::Down,
    },
    MetricCard {
        label: "Passenger Satisfaction",
        value: "4.7/5",
        change: "+0.2",
        trend: Trend::Up,
    },
];

pub const ALERT_STATS: &[MetricCard] = &[
    MetricCard {
        label: "Active Alerts",
        value: "7",
        change: "",
        trend: Trend::Flat,
    },
    MetricCard {
        label: "Resolved Today",
        value: "23",
        change: "",
        trend: Trend::Flat,
    },
    MetricCard {
        label: "Avg Response Time",
        value: "2.4min",
        change: "",
        trend: Trend::Flat,
    },
    MetricCard {
        label: "Critical Pending",
        value: "1",
        change: "",
        trend: Trend::Flat,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Escalated,
    Scheduled,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Acknowledged => "acknowledged",
            Self::Escalated => "escalated",
            Self::Scheduled => "scheduled",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Acknowledged => "Acknowledged",
            Self::Escalated => "Escalated",
            Self::Scheduled => "Scheduled",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRecord {
    pub alert_id: &'static str,
    pub category: &'static str,
    pub priority: Priority,
    pub description: &'static str,
    pub raised: &'static str,
    pub status: AlertStatus,
    pub train_id: Option<&'static str>,
}

pub const ALERTS: &[AlertRecord] = &[
    AlertRecord {
        alert_id: "ALT-001",
        category: "Collision Warning",
        priority: Priority::Critical,
        description: "Potential collision detected at Junction 7A",
        raised: "2 minutes ago",
        status: AlertStatus::Active,
        train_id: Some("TR-002"),
    },
    AlertRecord {
        alert_id: "ALT-002",
        category: "Delay Notice",
        priority: Priority::High,
        description: "TR-005 experiencing 15-minute delay due to signal failure",
        raised: "8 minutes ago",
        status: AlertStatus::Acknowledged,
        train_id: Some("TR-005"),
    },
    AlertRecord {
        alert_id: "ALT-003",
        category: "Maintenance Alert",
        priority: Priority::Medium,
        description: "Scheduled maintenance window approaching for Eastern Line",
        raised: "15 minutes ago",
        status: AlertStatus::Scheduled,
        train_id: None,
    },
    AlertRecord {
        alert_id: "ALT-004",
        category: "Weather Warning",
        priority: Priority::Medium,
        description: "Heavy rainfall expected in Northern sector - speed restrictions advised",
        raised: "32 minutes ago",
        status: AlertStatus::Active,
        train_id: None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub train_id: &'static str,
    pub route: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub status: &'static str,
    pub platform: &'static str,
    pub passengers: u32,
}

pub const TODAY_SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry {
        train_id: "TR-001",
        route: "Central Express",
        departure: "14:30",
        arrival: "16:45",
        status: "On Time",
        platform: "A1",
        passengers: 245,
    },
    ScheduleEntry {
        train_id: "TR-002",
        route: "Northern Line",
        departure: "14:45",
        arrival: "17:20",
        status: "Delayed +8min",
        platform: "B3",
        passengers: 180,
    },
    ScheduleEntry {
        train_id: "TR-003",
        route: "Eastern Route",
        departure: "15:00",
        arrival: "16:30",
        status: "On Time",
        platform: "A4",
        passengers: 320,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationSuggestion {
    pub suggestion_id: u32,
    pub category: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub priority: Priority,
}

pub const OPTIMIZATION_SUGGESTIONS: &[OptimizationSuggestion] = &[
    OptimizationSuggestion {
        suggestion_id: 1,
        category: "Route Optimization",
        description: "Adjust TR-005 route via Junction 4B to reduce congestion",
        impact: "Save 4 minutes",
        priority: Priority::Medium,
    },
    OptimizationSuggestion {
        suggestion_id: 2,
        category: "Schedule Adjustment",
        description: "Delay TR-008 departure by 3 minutes to improve connection timing",
        impact: "Improve passenger flow",
        priority: Priority::Low,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskLevel {
    pub level: Priority,
    pub count: u32,
    pub description: &'static str,
}

pub const RISK_LEVELS: &[RiskLevel] = &[
    RiskLevel {
        level: Priority::Low,
        count: 12,
        description: "Normal operations",
    },
    RiskLevel {
        level: Priority::Medium,
        count: 3,
        description: "Requires monitoring",
    },
    RiskLevel {
        level: Priority::High,
        count: 1,
        description: "Immediate attention needed",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionWarning {
    pub warning_id: &'static str,
    pub priority: Priority,
    pub train_ids: &'static [&'static str],
    pub location: &'static str,
    pub time_to_collision: &'static str,
    pub recommended_action: &'static str,
    pub status: &'static str,
}

pub const COLLISION_WARNINGS: &[CollisionWarning] = &[
    CollisionWarning {
        warning_id: "COL-001",
        priority: Priority::High,
        train_ids: &["TR-002", "TR-005"],
        location: "Junction 7A - Central Line",
        time_to_collision: "4 minutes",
        recommended_action: "Reduce speed TR-002 to 45 km/h",
        status: "Active",
    },
    CollisionWarning {
        warning_id: "COL-002",
        priority: Priority::Medium,
        train_ids: &["TR-003", "TR-008"],
        location: "Eastern Bridge Section",
        time_to_collision: "12 minutes",
        recommended_action: "Delay TR-008 departure by 2 minutes",
        status: "Monitoring",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Active,
    Maintenance,
}

impl RouteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailRoute {
    pub route_id: &'static str,
    pub name: &'static str,
    pub start_station: &'static str,
    pub end_station: &'static str,
    pub distance: &'static str,
    pub duration: &'static str,
    pub status: RouteStatus,
    pub frequency: &'static str,
    pub last_maintenance: &'static str,
}

pub const RAIL_ROUTES: &[RailRoute] = &[
    RailRoute {
        route_id: "R001",
        name: "Central-North Express",
        start_station: "Central Hub",
        end_station: "North Terminal",
        distance: "45.2 km",
        duration: "32 min",
        status: RouteStatus::Active,
        frequency: "Every 15 min",
        last_maintenance: "2024-01-15",
    },
    RailRoute {
        route_id: "R002",
        name: "East-West Connector",
        start_station: "East Hub",
        end_station: "West Terminal",
        distance: "38.7 km",
        duration: "28 min",
        status: RouteStatus::Active,
        frequency: "Every 20 min",
        last_maintenance: "2024-01-10",
    },
    RailRoute {
        route_id: "R003",
        name: "South Circle Line",
        start_station: "South Station",
        end_station: "Central Hub",
        distance: "52.1 km",
        duration: "38 min",
        status: RouteStatus::Maintenance,
        frequency: "Every 25 min",
        last_maintenance: "2024-01-20",
    },
    RailRoute {
        route_id: "R004",
        name: "Industrial Branch",
        start_station: "Junction B-7",
        end_station: "Industrial Park",
        distance: "29.3 km",
        duration: "22 min",
        status: RouteStatus::Active,
        frequency: "Every 30 min",
        last_maintenance: "2024-01-12",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    Available,
    Busy,
}

impl TrackStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackOption {
    pub track_id: &'static str,
    pub name: &'static str,
    pub status: TrackStatus,
    pub capacity: &'static str,
    pub distance: &'static str,
}

pub const TRACK_OPTIONS: &[TrackOption] = &[
    TrackOption {
        track_id: "TR-A1",
        name: "Main Line A",
        status: TrackStatus::Available,
        capacity: "85%",
        distance: "12.5 km",
    },
    TrackOption {
        track_id: "TR-B2",
        name: "Express Route B",
        status: TrackStatus::Busy,
        capacity: "95%",
        distance: "10.2 km",
    },
    TrackOption {
        track_id: "TR-C3",
        name: "Alternative Route C",
        status: TrackStatus::Available,
        capacity: "60%",
        distance: "15.8 km",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSuggestion {
    pub suggestion_id: &'static str,
    pub route: &'static str,
    pub estimated_time: &'static str,
    pub efficiency: &'static str,
    pub reason: &'static str,
}

pub const ROUTE_SUGGESTIONS: &[RouteSuggestion] = &[
    RouteSuggestion {
        suggestion_id: "AI-1",
        route: "Main Line A + Bypass Junction",
        estimated_time: "18 min",
        efficiency: "92%",
        reason: "Optimal balance of speed and traffic",
    },
    RouteSuggestion {
        suggestion_id: "AI-2",
        route: "Alternative Route C",
        estimated_time: "22 min",
        efficiency: "88%",
        reason: "Lower traffic, more stable timing",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    pub report_id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

pub const ANALYTICS_REPORTS: &[AnalyticsReport] = &[
    AnalyticsReport {
        report_id: "RPT-001",
        title: "Weekly Performance Summary",
        date: "2024-01-15",
        status: "Completed",
    },
    AnalyticsReport {
        report_id: "RPT-002",
        title: "Delay Analysis Report",
        date: "2024-01-14",
        status: "In Progress",
    },
    AnalyticsReport {
        report_id: "RPT-003",
        title: "Safety Incident Review",
        date: "2024-01-13",
        status: "Completed",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub role: &'static str,
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Control Center",
        number: "+1-800-RAIL-911",
        role: "Primary",
    },
    EmergencyContact {
        name: "Emergency Services",
        number: "911",
        role: "Critical",
    },
    EmergencyContact {
        name: "Technical Support",
        number: "+1-800-TECH-SUP",
        role: "Technical",
    },
    EmergencyContact {
        name: "Management",
        number: "+1-800-MGMT-001",
        role: "Management",
    },
];

/// Emergency action buttons. They render but dispatch nothing.
pub const EMERGENCY_ACTIONS: [&str; 4] = [
    "EMERGENCY STOP ALL TRAINS",
    "STOP SPECIFIC TRAIN",
    "ACTIVATE SAFETY PROTOCOL",
    "CALL EMERGENCY SERVICES",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemCheck {
    pub system: &'static str,
    pub status: &'static str,
    pub priority: Priority,
}

pub const SYSTEM_CHECKS: &[SystemCheck] = &[
    SystemCheck {
        system: "Emergency Brakes",
        status: "operational",
        priority: Priority::Critical,
    },
    SystemCheck {
        system: "Communication",
        status: "operational",
        priority: Priority::High,
    },
    SystemCheck {
        system: "Power Grid",
        status: "operational",
        priority: Priority::Critical,
    },
    SystemCheck {
        system: "Signal Systems",
        status: "operational",
        priority: Priority::High,
    },
    SystemCheck {
        system: "Backup Power",
        status: "standby",
        priority: Priority::Medium,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingToggle {
    pub setting_id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

pub const SETTING_TOGGLES: &[SettingToggle] = &[
    SettingToggle {
        setting_id: "notifications",
        label: "Email Notifications",
        description: "Receive alerts via email",
        enabled: true,
    },
    SettingToggle {
        setting_id: "sounds",
        label: "Audio Alerts",
        description: "Play sounds for critical alerts",
        enabled: true,
    },
    SettingToggle {
        setting_id: "auto-optimize",
        label: "Auto Optimization",
        description: "Allow AI to make automatic adjustments",
        enabled: false,
    },
    SettingToggle {
        setting_id: "dark-mode",
        label: "Dark Mode",
        description: "Use dark theme interface",
        enabled: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorAccount {
    pub operator_id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub active: bool,
    pub last_login: &'static str,
}

pub const OPERATOR_ACCOUNTS: &[OperatorAccount] = &[
    OperatorAccount {
        operator_id: 1,
        name: "John Controller",
        role: "Traffic Controller",
        active: true,
        last_login: "2 hours ago",
    },
    OperatorAccount {
        operator_id: 2,
        name: "Sarah Supervisor",
        role: "Operations Supervisor",
        active: true,
        last_login: "5 minutes ago",
    },
    OperatorAccount {
        operator_id: 3,
        name: "Mike Admin",
        role: "System Administrator",
        active: true,
        last_login: "1 hour ago",
    },
    OperatorAccount {
        operator_id: 4,
        name: "Lisa Analyst",
        role: "Data Analyst",
        active: false,
        last_login: "2 days ago",
    },
];
