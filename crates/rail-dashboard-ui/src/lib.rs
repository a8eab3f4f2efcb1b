//! Leptos SSR rendering for the RailFlow dashboard.

use leptos::prelude::*;
use rail_dashboard::DashboardSnapshot;
use rail_router::{RailflowPage, SIDEBAR_ADMIN_PAGES, SIDEBAR_NAVIGATION_PAGES};

mod chat;
mod pages;

/// Form endpoint for sending the chat draft.
pub const CHAT_SEND_ENDPOINT: &str = "/actions/chat/send";
/// Form endpoint for copying a quick query into the chat draft.
pub const CHAT_QUICK_QUERY_ENDPOINT: &str = "/actions/chat/quick-query";
pub const TRAIN_ACTION_ENDPOINT: &str = "/actions/train";
pub const ALERT_ACTION_ENDPOINT: &str = "/actions/alerts";
pub const TRACKING_SEARCH_ENDPOINT: &str = "/actions/tracking/search";
pub const TRACKING_CLEAR_ENDPOINT: &str = "/actions/tracking/clear";
pub const HISTORY_BACK_ENDPOINT: &str = "/actions/history/back";
pub const HISTORY_FORWARD_ENDPOINT: &str = "/actions/history/forward";

/// Seconds between automatic reloads while an assistant reply is pending.
pub const TYPING_REFRESH_SECONDS: u32 = 1;

pub(crate) fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn sidebar_path(page: RailflowPage) -> String {
    page.route_pattern()
        .map(|pattern| pattern.to_string())
        .unwrap_or_else(|| "/".to_string())
}

fn sidebar_items(pages: &[RailflowPage], active: RailflowPage) -> AnyView {
    pages
        .iter()
        .map(|page| {
            let item_id = format!("railflow-nav-{}", page.as_str());
            let label = page.nav_label().unwrap_or(page.title());
            let current = if *page == active { Some("page") } else { None };
            view! {
                <li id=item_id>
                    <a
                        data-nav-item=page.as_str()
                        data-nav-active=bool_attr(*page == active)
                        aria-current=current
                        href=sidebar_path(*page)
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view()
        .into_any()
}

/// Renders the dashboard shell (header, sidebar, current page) as an HTML fragment.
pub fn render_railflow_shell(snapshot: &DashboardSnapshot) -> String {
    let page_attr = snapshot.page.as_str();
    let path_attr = snapshot.path.clone();
    let typing_attr = bool_attr(snapshot.is_typing());
    let can_go_back = snapshot.can_go_back;
    let can_go_forward = snapshot.can_go_forward;
    let title = snapshot.title;
    let navigation_items = sidebar_items(&SIDEBAR_NAVIGATION_PAGES, snapshot.page);
    let admin_items = sidebar_items(&SIDEBAR_ADMIN_PAGES, snapshot.page);
    let page_body = pages::render_page_body(snapshot);

    let shell = view! {
        <div
            id="railflow-shell"
            data-app="railflow-dashboard"
            data-page=page_attr
            data-path=path_attr
            data-typing=typing_attr
        >
            <header id="railflow-header">
                <h1>"RailFlow"</h1>
                <p>"Railway Operations Control"</p>
                <nav id="railflow-history-controls" aria-label="History">
                    <form id="railflow-history-back" method="post" action=HISTORY_BACK_ENDPOINT>
                        <button
                            type="submit"
                            data-history-enabled=bool_attr(can_go_back)
                            disabled={!can_go_back}
                        >
                            "Back"
                        </button>
                    </form>
                    <form id="railflow-history-forward" method="post" action=HISTORY_FORWARD_ENDPOINT>
                        <button
                            type="submit"
                            data-history-enabled=bool_attr(can_go_forward)
                            disabled={!can_go_forward}
                        >
                            "Forward"
                        </button>
                    </form>
                </nav>
                <nav id="railflow-quick-links" aria-label="Quick links">
                    <a id="railflow-link-all-routes" href="/all-routes">"All Routes"</a>
                    <a id="railflow-link-emergency" href="/emergency">"Emergency"</a>
                </nav>
            </header>
            <div id="railflow-layout">
                <aside id="railflow-sidebar">
                    <nav aria-label="RailFlow navigation">
                        <h2>"Navigation"</h2>
                        <ul id="railflow-nav-main">{navigation_items}</ul>
                        <h2>"Administration"</h2>
                        <ul id="railflow-nav-admin">{admin_items}</ul>
                    </nav>
                    <p id="railflow-system-health" data-health-state="operational">
                        "All Systems Operational"
                    </p>
                </aside>
                <main id="railflow-main" data-page=page_attr>
                    <h1 id="railflow-page-title">{title}</h1>
                    {page_body}
                </main>
            </div>
        </div>
    };
    shell.to_html()
}

/// Renders a complete HTML document for the snapshot.
///
/// While a reply is pending the document asks the browser to reload after
/// [`TYPING_REFRESH_SECONDS`], so the reply shows up without user action.
pub fn render_railflow_document(snapshot: &DashboardSnapshot) -> String {
    let refresh = if snapshot.is_typing() {
        format!("<meta http-equiv=\"refresh\" content=\"{TYPING_REFRESH_SECONDS}\">\n")
    } else {
        String::new()
    };
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <link rel=\"icon\" href=\"data:,\">\n\
         {refresh}<title>{title} | RailFlow</title>\n</head>\n<body>\n{shell}\n</body>\n</html>\n",
        title = snapshot.title,
        shell = render_railflow_shell(snapshot),
    )
}

#[cfg(test)]
mod tests;
