use std::sync::Arc;

use anyhow::{Context, Result};
use rail_chat::ManualReplyScheduler;
use rail_dashboard::{DashboardConfig, DashboardSession};
use rail_dashboard_ui::render_railflow_document;
use rail_gateway::run_railflow_gateway_server;
use tracing::info;

use crate::{Cli, CliCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Html,
    Json,
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    match cli.command.clone().unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => run_railflow_gateway_server(cli.gateway_config()).await,
        CliCommand::Render { path, json } => {
            let format = if json {
                RenderFormat::Json
            } else {
                RenderFormat::Html
            };
            let output = render_path(cli.dashboard_config(), &path, format)?;
            println!("{output}");
            Ok(())
        }
    }
}

/// Mounts `path` in a fresh session and renders it once.
///
/// Replies never fire here: the session runs on a virtual clock nobody advances.
pub fn render_path(config: DashboardConfig, path: &str, format: RenderFormat) -> Result<String> {
    let scheduler = Arc::new(ManualReplyScheduler::new(
        rail_core::current_unix_timestamp_ms(),
    ));
    let session = DashboardSession::with_initial_path(config, scheduler, path);
    let snapshot = session.snapshot();
    info!(path = %snapshot.path, page = snapshot.page.as_str(), "rendering page");
    match format {
        RenderFormat::Html => Ok(render_railflow_document(&snapshot)),
        RenderFormat::Json => serde_json::to_string_pretty(&snapshot)
            .with_context(|| format!("failed to serialize snapshot for '{path}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functional_render_path_produces_train_details_document() {
        let html = render_path(
            DashboardConfig::default(),
            "/train-details/RT-4401",
            RenderFormat::Html,
        )
        .expect("render html");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(r#"data-page="train-details""#));
        assert!(html.contains("RT-4401"));
    }

    #[test]
    fn functional_render_path_json_reports_route_params() {
        let json = render_path(
            DashboardConfig::default(),
            "/train-chat/TR-003",
            RenderFormat::Json,
        )
        .expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["page"], "train-chat");
        assert_eq!(value["params"]["trainId"], "TR-003");
        assert_eq!(value["body"]["chat"]["messages"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn regression_render_unknown_path_yields_not_found_page() {
        let html = render_path(
            DashboardConfig::default(),
            "/does-not-exist",
            RenderFormat::Html,
        )
        .expect("render html");
        assert!(html.contains(r#"id="railflow-page-not-found""#));
    }
}
