//! Page bodies rendered inside the dashboard shell.

use leptos::prelude::*;
use rail_chat::ConversationSnapshot;
use rail_dashboard::fixtures::{
    trains_by_ids, MetricCard, TrainRecord, ALERT_STATS, ANALYTICS_REPORTS, COLLISION_WARNINGS,
    DASHBOARD_TRAIN_IDS, EMERGENCY_ACTIONS, EMERGENCY_CONTACTS, NETWORK_MARKERS,
    OPERATOR_ACCOUNTS, OPTIMIZATION_SUGGESTIONS, PERFORMANCE_METRICS, RAIL_ROUTES, RISK_LEVELS,
    ROUTE_SUGGESTIONS, SCHEDULE_METRICS, SETTING_TOGGLES, SYSTEM_CHECKS, SYSTEM_STATUS_METRICS,
    TODAY_SCHEDULE, TRACKED_TRAIN_IDS, TRACK_OPTIONS,
};
use rail_dashboard::{
    AlertAction, AlertView, DashboardSnapshot, PageBody, SearchResult, TrackingSearch,
    TrainAction,
};
use rail_router::RailflowPage;

use crate::chat::render_chat_panel;
use crate::{
    bool_attr, ALERT_ACTION_ENDPOINT, TRACKING_CLEAR_ENDPOINT, TRACKING_SEARCH_ENDPOINT,
    TRAIN_ACTION_ENDPOINT,
};

pub(crate) fn render_page_body(snapshot: &DashboardSnapshot) -> AnyView {
    match &snapshot.body {
        PageBody::Dashboard { chat } => dashboard_page(chat),
        PageBody::Tracking { search } => tracking_page(search),
        PageBody::Alerts { alerts } => alerts_page(alerts),
        PageBody::Assistant { chat } => assistant_page(chat),
        PageBody::TrainDetails {
            train_id,
            train,
            selected_action,
        } => train_details_page(train_id, *train, *selected_action),
        PageBody::TrainChat {
            train_id,
            train,
            chat,
        } => train_chat_page(train_id, *train, chat),
        PageBody::RouteManagement { train_id, train } => route_management_page(train_id, *train),
        PageBody::Static => match snapshot.page {
            RailflowPage::CollisionDetection => collision_detection_page(),
            RailflowPage::Scheduling => scheduling_page(),
            RailflowPage::Analytics => analytics_page(),
            RailflowPage::Settings => settings_page(),
            RailflowPage::AllRoutes => all_routes_page(),
            RailflowPage::Emergency => emergency_page(),
            _ => not_found_page(&snapshot.path),
        },
    }
}

fn metric_cards(section_id: &'static str, cards: &'static [MetricCard]) -> AnyView {
    let card_count_value = cards.len().to_string();
    view! {
        <section id=section_id data-metric-card-count=card_count_value>
            {cards
                .iter()
                .map(|card| {
                    view! {
                        <article
                            data-component="MetricCard"
                            data-metric-label=card.label
                            data-trend=card.trend.as_str()
                        >
                            <h3>{card.label}</h3>
                            <p>{card.value}</p>
                            <small>{card.change}</small>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
    .into_any()
}

fn train_action_form(train_id: &str, action: TrainAction) -> AnyView {
    let train_id_value = train_id.to_string();
    let train_id_attr = train_id_value.clone();
    view! {
        <form
            method="post"
            action=TRAIN_ACTION_ENDPOINT
            data-train-action=action.as_str()
            data-train-id=train_id_attr
        >
            <input type="hidden" name="train_id" value=train_id_value />
            <input type="hidden" name="action" value=action.as_str() />
            <button type="submit">{action.label()}</button>
        </form>
    }
    .into_any()
}

fn train_summary(train: &'static TrainRecord) -> AnyView {
    view! {
        <dl data-component="TrainSummary" data-train-id=train.train_id>
            <dt>"Route"</dt>
            <dd>{train.route}</dd>
            <dt>"Status"</dt>
            <dd data-train-status=train.status.as_str()>{train.status_label()}</dd>
            <dt>"Speed"</dt>
            <dd>{format!("{} km/h", train.speed_kmh)}</dd>
            <dt>"Current location"</dt>
            <dd>{train.current_location}</dd>
            <dt>"Next station"</dt>
            <dd>{train.next_station}</dd>
            <dt>"ETA"</dt>
            <dd>{train.estimated_arrival}</dd>
        </dl>
    }
    .into_any()
}

fn train_status_card(train: &'static TrainRecord) -> AnyView {
    view! {
        <article
            data-component="TrainStatusCard"
            data-train-id=train.train_id
            data-train-status=train.status.as_str()
        >
            <h3>{train.train_id}</h3>
            <p>{train.status_label()}</p>
            <p>{format!("Speed: {} km/h", train.speed_kmh)}</p>
            <p>{format!("ETA: {}", train.estimated_arrival)}</p>
            <p>{format!("Current: {}", train.current_location)}</p>
            <p>{format!("Next: {}", train.next_station)}</p>
            <p>{format!("Destination: {}", train.destination)}</p>
            {train_action_form(train.train_id, TrainAction::ViewDetails)}
            {train_action_form(train.train_id, TrainAction::Chat)}
        </article>
    }
    .into_any()
}

fn network_map() -> AnyView {
    let marker_count_value = NETWORK_MARKERS.len().to_string();
    view! {
        <section id="railflow-network-map" data-component="NetworkMap" data-marker-count=marker_count_value>
            <h2>"Railway Network"</h2>
            <ul>
                {NETWORK_MARKERS
                    .iter()
                    .map(|marker| {
                        let position = format!("{}% / {}%", marker.x_percent, marker.y_percent);
                        view! {
                            <li
                                data-train-id=marker.train_id
                                data-marker-status=marker.status.as_str()
                            >
                                <a href={format!("/train-details/{}", marker.train_id)}>{marker.train_id}</a>
                                " "
                                <span>{position}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

fn dashboard_page(chat: &ConversationSnapshot) -> AnyView {
    let active_trains = trains_by_ids(&DASHBOARD_TRAIN_IDS);
    let train_count_value = active_trains.len().to_string();
    view! {
        <section id="railflow-page-dashboard" data-page-body="dashboard">
            <p>"Real-time monitoring and control of railway operations"</p>
            {metric_cards("railflow-system-status", SYSTEM_STATUS_METRICS)}
            {network_map()}
            {render_chat_panel(chat)}
            <section id="railflow-active-trains" data-train-count=train_count_value>
                <h2>"Active Trains"</h2>
                {active_trains.into_iter().map(train_status_card).collect_view()}
            </section>
        </section>
    }
    .into_any()
}

fn tracking_result(search: &TrackingSearch) -> AnyView {
    match search.result() {
        SearchResult::Idle => view! {
            <p id="railflow-tracking-result" data-search-outcome="idle">
                "Enter a train ID to locate it on the network."
            </p>
        }
        .into_any(),
        SearchResult::Found { train } => {
            let train: &'static TrainRecord = *train;
            view! {
                <article
                    id="railflow-tracking-result"
                    data-search-outcome="found"
                    data-train-id=train.train_id
                >
                    <h3>{train.train_id}</h3>
                    {train_summary(train)}
                    <p>{format!("Passengers: {}", train.passengers)}</p>
                    {train_action_form(train.train_id, TrainAction::ViewDetails)}
                </article>
            }
            .into_any()
        }
        SearchResult::NotFound { query } => view! {
            <div id="railflow-tracking-result" data-search-outcome="not-found">
                <p id="railflow-tracking-not-found">{format!("No train found with ID \"{query}\"")}</p>
                <p>"Please check the train ID and try again"</p>
            </div>
        }
        .into_any(),
    }
}

fn tracking_page(search: &TrackingSearch) -> AnyView {
    let query_value = search.query().to_string();
    let tracked = trains_by_ids(&TRACKED_TRAIN_IDS);
    let tracked_count_value = tracked.len().to_string();
    view! {
        <section id="railflow-page-tracking" data-page-body="tracking">
            <p>"Real-time monitoring of all active trains"</p>
            {network_map()}
            <section id="railflow-tracking-search" data-component="TrainSearch">
                <h2>"Train Search"</h2>
                <form id="railflow-tracking-search-form" method="post" action=TRACKING_SEARCH_ENDPOINT>
                    <label for="railflow-tracking-query">"Train ID"</label>
                    <input
                        id="railflow-tracking-query"
                        type="text"
                        name="query"
                        placeholder="Enter train ID (e.g., TR-001)"
                        value=query_value
                    />
                    <button type="submit">"Search"</button>
                </form>
                <form id="railflow-tracking-clear-form" method="post" action=TRACKING_CLEAR_ENDPOINT>
                    <button type="submit">"Clear"</button>
                </form>
                {tracking_result(search)}
            </section>
            <section id="railflow-tracked-trains" data-train-count=tracked_count_value>
                <h2>"Active Trains"</h2>
                <table>
                    <thead>
                        <tr>
                            <th scope="col">"Train"</th>
                            <th scope="col">"Route"</th>
                            <th scope="col">"Speed"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Passengers"</th>
                            <th scope="col">"Next station"</th>
                            <th scope="col">"ETA"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {tracked
                            .into_iter()
                            .map(|train| {
                                view! {
                                    <tr data-train-id=train.train_id>
                                        <td><a href={format!("/train-details/{}", train.train_id)}>{train.train_id}</a></td>
                                        <td>{train.route}</td>
                                        <td>{format!("{} km/h", train.speed_kmh)}</td>
                                        <td>{train.status_label()}</td>
                                        <td>{train.passengers}</td>
                                        <td>{train.next_station}</td>
                                        <td>{train.estimated_arrival}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </section>
    }
    .into_any()
}

fn collision_detection_page() -> AnyView {
    view! {
        <section id="railflow-page-collision-detection" data-page-body="collision-detection">
            <p>"AI-powered collision prevention and risk assessment"</p>
            <section id="railflow-risk-levels">
                {RISK_LEVELS
                    .iter()
                    .map(|risk| {
                        view! {
                            <article data-risk-level=risk.level.as_str() data-risk-count=risk.count.to_string()>
                                <h3>{format!("{} Risk", risk.level.label())}</h3>
                                <p>{risk.count}</p>
                                <small>{risk.description}</small>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="railflow-collision-warnings" data-warning-count=COLLISION_WARNINGS.len().to_string()>
                <h2>"Active Collision Warnings"</h2>
                {COLLISION_WARNINGS
                    .iter()
                    .map(|warning| {
                        view! {
                            <article
                                data-warning-id=warning.warning_id
                                data-priority=warning.priority.as_str()
                            >
                                <h3>{warning.warning_id}</h3>
                                <p>{warning.location}</p>
                                <p>{format!("Time to collision: {}", warning.time_to_collision)}</p>
                                <p>{format!("Recommended: {}", warning.recommended_action)}</p>
                                <p>{warning.status}</p>
                                <ul>
                                    {warning
                                        .train_ids
                                        .iter()
                                        .map(|train_id| view! {
                                            <li>{train_action_form(train_id, TrainAction::ViewDetails)}</li>
                                        })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </section>
    }
    .into_any()
}

fn scheduling_page() -> AnyView {
    view! {
        <section id="railflow-page-scheduling" data-page-body="scheduling">
            <p>"AI-optimized train scheduling and route planning"</p>
            {metric_cards("railflow-schedule-metrics", SCHEDULE_METRICS)}
            <section id="railflow-today-schedule" data-entry-count=TODAY_SCHEDULE.len().to_string()>
                <h2>"Today's Schedule"</h2>
                <table>
                    <thead>
                        <tr>
                            <th scope="col">"Train"</th>
                            <th scope="col">"Route"</th>
                            <th scope="col">"Departure"</th>
                            <th scope="col">"Arrival"</th>
                            <th scope="col">"Platform"</th>
                            <th scope="col">"Passengers"</th>
                            <th scope="col">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TODAY_SCHEDULE
                            .iter()
                            .map(|entry| {
                                view! {
                                    <tr data-train-id=entry.train_id>
                                        <td>{entry.train_id}</td>
                                        <td>{entry.route}</td>
                                        <td>{entry.departure}</td>
                                        <td>{entry.arrival}</td>
                                        <td>{entry.platform}</td>
                                        <td>{entry.passengers}</td>
                                        <td>{entry.status}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
            <section id="railflow-optimization-suggestions">
                <h2>"AI Optimization Suggestions"</h2>
                {OPTIMIZATION_SUGGESTIONS
                    .iter()
                    .map(|suggestion| {
                        view! {
                            <article
                                data-suggestion-id=suggestion.suggestion_id.to_string()
                                data-priority=suggestion.priority.as_str()
                            >
                                <h3>{suggestion.category}</h3>
                                <p>{suggestion.description}</p>
                                <small>{suggestion.impact}</small>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </section>
    }
    .into_any()
}

fn analytics_page() -> AnyView {
    view! {
        <section id="railflow-page-analytics" data-page-body="analytics">
            <p>"Performance insights and operational reports"</p>
            {metric_cards("railflow-performance-metrics", PERFORMANCE_METRICS)}
            <section id="railflow-reports" data-report-count=ANALYTICS_REPORTS.len().to_string()>
                <h2>"Recent Reports"</h2>
                <ul>
                    {ANALYTICS_REPORTS
                        .iter()
                        .map(|report| {
                            view! {
                                <li data-report-id=report.report_id>
                                    <span>{report.title}</span>
                                    " "
                                    <time>{report.date}</time>
                                    " "
                                    <span>{report.status}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </section>
    }
    .into_any()
}

fn alert_action_form(alert_id: &'static str, action: AlertAction) -> AnyView {
    view! {
        <form
            method="post"
            action=ALERT_ACTION_ENDPOINT
            data-alert-action=action.as_str()
            data-alert-id=alert_id
        >
            <input type="hidden" name="alert_id" value=alert_id />
            <input type="hidden" name="action" value=action.as_str() />
            <button type="submit">{action.label()}</button>
        </form>
    }
    .into_any()
}

fn alerts_page(alerts: &[AlertView]) -> AnyView {
    let alert_count_value = alerts.len().to_string();
    let alert_cards = alerts
        .iter()
        .map(|view_model| {
            let alert = view_model.alert;
            let actions = view_model.actions.clone();
            let action_count_value = actions.len().to_string();
            view! {
                <article
                    data-component="AlertCard"
                    data-alert-id=alert.alert_id
                    data-alert-status=view_model.status.as_str()
                    data-priority=alert.priority.as_str()
                >
                    <h3>{alert.category}</h3>
                    <p>{alert.description}</p>
                    <p>
                        <span>{alert.priority.label()}</span>
                        " "
                        <span>{view_model.status.label()}</span>
                        " "
                        <time>{alert.raised}</time>
                    </p>
                    {alert.train_id.map(|train_id| view! { <p>{format!("Train: {train_id}")}</p> })}
                    <div data-alert-actions=action_count_value>
                        {actions
                            .into_iter()
                            .map(|action| alert_action_form(alert.alert_id, action))
                            .collect_view()}
                    </div>
                </article>
            }
        })
        .collect_view();
    view! {
        <section id="railflow-page-alerts" data-page-body="alerts">
            <p>"Monitor and respond to system alerts"</p>
            {metric_cards("railflow-alert-stats", ALERT_STATS)}
            <section id="railflow-alert-list" data-alert-count=alert_count_value>
                <h2>"Active Alerts"</h2>
                {alert_cards}
            </section>
        </section>
    }
    .into_any()
}

fn assistant_page(chat: &ConversationSnapshot) -> AnyView {
    view! {
        <section id="railflow-page-assistant" data-page-body="assistant">
            <p>"Intelligent railway operations support"</p>
            {render_chat_panel(chat)}
        </section>
    }
    .into_any()
}

fn train_not_found(train_id: &str) -> AnyView {
    let message = format!("No train with ID \"{train_id}\" is known to the control center.");
    view! {
        <section id="railflow-train-not-found" data-train-id=train_id.to_string()>
            <h2>"Train not found"</h2>
            <p>{message}</p>
            <a href="/tracking">"Search live tracking"</a>
        </section>
    }
    .into_any()
}

fn train_details_page(
    train_id: &str,
    train: Option<&'static TrainRecord>,
    selected_action: Option<TrainAction>,
) -> AnyView {
    let Some(train) = train else {
        return view! {
            <section id="railflow-page-train-details" data-page-body="train-details">
                {train_not_found(train_id)}
            </section>
        }
        .into_any();
    };
    let selected_action_attr = selected_action.map_or("none", TrainAction::as_str);
    view! {
        <section
            id="railflow-page-train-details"
            data-page-body="train-details"
            data-train-id=train.train_id
            data-selected-action=selected_action_attr
        >
            <h2>{format!("{} {}", train.train_type, train.train_id)}</h2>
            {train_summary(train)}
            <section id="railflow-train-load">
                <h3>"Passenger Load"</h3>
                <p>{format!("{} / {} ({}%)", train.passengers, train.capacity, train.occupancy_percent())}</p>
            </section>
            <section id="railflow-train-route">
                <h3>"Route Information"</h3>
                <p>{format!("Previous: {}", train.previous_station)}</p>
                <p>{format!("Departed: {}", train.departure_time)}</p>
                <p>{format!("Destination: {}", train.destination)}</p>
            </section>
            <section id="railflow-train-schedule" data-stop-count=train.stops.len().to_string()>
                <h3>"Schedule"</h3>
                {if train.stops.is_empty() {
                    view! { <p>"No timetable published for this service."</p> }.into_any()
                } else {
                    view! {
                        <ol>
                            {train
                                .stops
                                .iter()
                                .map(|stop| view! {
                                    <li data-stop-status=stop.status.as_str()>
                                        <span>{stop.station}</span>
                                        " "
                                        <span>{format!("{} - {}", stop.arrival, stop.departure)}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    }
                    .into_any()
                }}
            </section>
            <section id="railflow-train-actions">
                <h3>"Quick Actions"</h3>
                {train_action_form(train.train_id, TrainAction::Hold)}
                {train_action_form(train.train_id, TrainAction::Reroute)}
                {train_action_form(train.train_id, TrainAction::Chat)}
                {selected_action.map(|action| view! {
                    <p id="railflow-train-selected-action">{format!("Selected action: {}", action.label())}</p>
                })}
            </section>
        </section>
    }
    .into_any()
}

fn train_chat_page(
    train_id: &str,
    train: Option<&'static TrainRecord>,
    chat: &ConversationSnapshot,
) -> AnyView {
    let heading = format!("Chat with {train_id}");
    view! {
        <section id="railflow-page-train-chat" data-page-body="train-chat" data-train-id=train_id.to_string()>
            <h2>{heading}</h2>
            {train.map(train_summary)}
            {render_chat_panel(chat)}
        </section>
    }
    .into_any()
}

fn route_management_page(train_id: &str, train: Option<&'static TrainRecord>) -> AnyView {
    let heading = format!("Route Management - {train_id}");
    view! {
        <section
            id="railflow-page-route-management"
            data-page-body="route-management"
            data-train-id=train_id.to_string()
        >
            <h2>{heading}</h2>
            {match train {
                Some(train) => train_summary(train),
                None => train_not_found(train_id),
            }}
            <section id="railflow-track-options" data-track-count=TRACK_OPTIONS.len().to_string()>
                <h3>"Available Tracks"</h3>
                {TRACK_OPTIONS
                    .iter()
                    .map(|track| {
                        view! {
                            <article
                                data-track-id=track.track_id
                                data-track-status=track.status.as_str()
                            >
                                <h4>{track.name}</h4>
                                <p>{format!("Capacity: {}", track.capacity)}</p>
                                <p>{format!("Distance: {}", track.distance)}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="railflow-route-suggestions">
                <h3>"AI Route Suggestions"</h3>
                {ROUTE_SUGGESTIONS
                    .iter()
                    .map(|suggestion| {
                        view! {
                            <article data-suggestion-id=suggestion.suggestion_id>
                                <h4>{suggestion.route}</h4>
                                <p>{format!("Estimated time: {}", suggestion.estimated_time)}</p>
                                <p>{format!("Efficiency: {}", suggestion.efficiency)}</p>
                                <small>{suggestion.reason}</small>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </section>
    }
    .into_any()
}

fn settings_page() -> AnyView {
    view! {
        <section id="railflow-page-settings" data-page-body="settings">
            <p>"Configure system preferences and user management"</p>
            <section id="railflow-setting-toggles">
                <h2>"System Preferences"</h2>
                {SETTING_TOGGLES
                    .iter()
                    .map(|setting| {
                        let input_id = format!("railflow-setting-{}", setting.setting_id);
                        let label_for = input_id.clone();
                        view! {
                            <div data-setting-id=setting.setting_id data-enabled=bool_attr(setting.enabled)>
                                <input id=input_id type="checkbox" checked=setting.enabled disabled=true />
                                <label for=label_for>{setting.label}</label>
                                <small>{setting.description}</small>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="railflow-operator-accounts" data-account-count=OPERATOR_ACCOUNTS.len().to_string()>
                <h2>"User Management"</h2>
                <table>
                    <tbody>
                        {OPERATOR_ACCOUNTS
                            .iter()
                            .map(|account| {
                                view! {
                                    <tr
                                        data-operator-id=account.operator_id.to_string()
                                        data-active=bool_attr(account.active)
                                    >
                                        <td>{account.name}</td>
                                        <td>{account.role}</td>
                                        <td>{if account.active { "Active" } else { "Inactive" }}</td>
                                        <td>{account.last_login}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </section>
    }
    .into_any()
}

fn all_routes_page() -> AnyView {
    view! {
        <section id="railflow-page-all-routes" data-page-body="all-routes">
            <p>"Complete overview of the railway network routes"</p>
            <section id="railflow-route-list" data-route-count=RAIL_ROUTES.len().to_string()>
                {RAIL_ROUTES
                    .iter()
                    .map(|route| {
                        view! {
                            <article
                                data-route-id=route.route_id
                                data-route-status=route.status.as_str()
                            >
                                <h3>{route.name}</h3>
                                <p>{format!("{} to {}", route.start_station, route.end_station)}</p>
                                <p>{format!("{} / {}", route.distance, route.duration)}</p>
                                <p>{route.frequency}</p>
                                <small>{format!("Last maintenance: {}", route.last_maintenance)}</small>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </section>
    }
    .into_any()
}

fn emergency_page() -> AnyView {
    view! {
        <section id="railflow-page-emergency" data-page-body="emergency">
            <p>"Critical system controls and emergency procedures"</p>
            <section id="railflow-emergency-actions">
                <h2>"Emergency Actions"</h2>
                {EMERGENCY_ACTIONS
                    .iter()
                    .map(|label| view! { <button type="button">{*label}</button> })
                    .collect_view()}
            </section>
            <section id="railflow-emergency-contacts">
                <h2>"Emergency Contacts"</h2>
                <ul>
                    {EMERGENCY_CONTACTS
                        .iter()
                        .map(|contact| {
                            view! {
                                <li data-contact-role=contact.role>
                                    <span>{contact.name}</span>
                                    " "
                                    <a href={format!("tel:{}", contact.number)}>{contact.number}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <section id="railflow-system-checks">
                <h2>"Critical Systems Status"</h2>
                <ul>
                    {SYSTEM_CHECKS
                        .iter()
                        .map(|check| {
                            view! {
                                <li data-system-status=check.status data-priority=check.priority.as_str()>
                                    {format!("{}: {}", check.system, check.status)}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </section>
    }
    .into_any()
}

fn not_found_page(path: &str) -> AnyView {
    let message = format!("Oops! No page exists at {path}");
    view! {
        <section id="railflow-page-not-found" data-page-body="not-found" data-requested-path=path.to_string()>
            <h2>"404"</h2>
            <p>{message}</p>
            <a href="/">"Return to Home"</a>
        </section>
    }
    .into_any()
}
