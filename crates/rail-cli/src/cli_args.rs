use std::time::Duration;

use clap::{Parser, Subcommand};
use rail_dashboard::DashboardConfig;
use rail_gateway::{RailflowGatewayConfig, DEFAULT_RAILFLOW_BIND};

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "railflow",
    about = "Railway operations dashboard served as server-rendered HTML",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "RAILFLOW_BIND",
        default_value = DEFAULT_RAILFLOW_BIND,
        global = true,
        help = "Socket address the dashboard gateway listens on"
    )]
    pub bind: String,

    #[arg(
        long = "widget-reply-delay-ms",
        env = "RAILFLOW_WIDGET_REPLY_DELAY_MS",
        default_value_t = 1_500,
        value_parser = parse_positive_u64,
        global = true,
        help = "Simulated reply latency of the dashboard chat widget"
    )]
    pub widget_reply_delay_ms: u64,

    #[arg(
        long = "assistant-reply-delay-ms",
        env = "RAILFLOW_ASSISTANT_REPLY_DELAY_MS",
        default_value_t = 1_500,
        value_parser = parse_positive_u64,
        global = true,
        help = "Simulated reply latency of the AI assistant page"
    )]
    pub assistant_reply_delay_ms: u64,

    #[arg(
        long = "train-chat-reply-delay-ms",
        env = "RAILFLOW_TRAIN_CHAT_REPLY_DELAY_MS",
        default_value_t = 1_000,
        value_parser = parse_positive_u64,
        global = true,
        help = "Simulated reply latency of per-train chat"
    )]
    pub train_chat_reply_delay_ms: u64,

    #[arg(
        long = "random-seed",
        env = "RAILFLOW_RANDOM_SEED",
        global = true,
        help = "Seed for the assistant's random fallback replies. Omit for entropy."
    )]
    pub random_seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Serve the dashboard over HTTP (default).
    Serve,
    /// Render one page to stdout and exit.
    Render {
        /// Page path, e.g. `/train-details/RT-4401`.
        path: String,
        #[arg(long, help = "Print the session snapshot as JSON instead of HTML")]
        json: bool,
    },
}

impl Cli {
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            widget_reply_delay: Duration::from_millis(self.widget_reply_delay_ms),
            assistant_reply_delay: Duration::from_millis(self.assistant_reply_delay_ms),
            train_chat_reply_delay: Duration::from_millis(self.train_chat_reply_delay_ms),
            random_seed: self.random_seed,
        }
    }

    pub fn gateway_config(&self) -> RailflowGatewayConfig {
        RailflowGatewayConfig {
            bind: self.bind.trim().to_string(),
            dashboard: self.dashboard_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("railflow").chain(args.iter().copied()))
    }

    #[test]
    fn unit_defaults_match_dashboard_defaults() {
        let cli = parse(&[]).expect("parse defaults");
        assert_eq!(cli.command, None);
        assert_eq!(cli.bind, DEFAULT_RAILFLOW_BIND);
        assert_eq!(cli.dashboard_config(), DashboardConfig::default());
    }

    #[test]
    fn unit_render_subcommand_accepts_global_flags_after_path() {
        let cli = parse(&[
            "render",
            "/train-details/RT-4401",
            "--json",
            "--random-seed",
            "42",
            "--assistant-reply-delay-ms",
            "250",
        ])
        .expect("parse render");
        assert_eq!(
            cli.command,
            Some(CliCommand::Render {
                path: "/train-details/RT-4401".to_string(),
                json: true,
            })
        );
        let config = cli.dashboard_config();
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.assistant_reply_delay, Duration::from_millis(250));
    }

    #[test]
    fn regression_zero_reply_delay_is_rejected() {
        let error = parse(&["--train-chat-reply-delay-ms", "0"]).expect_err("zero delay");
        assert!(error.to_string().contains("value must be greater than 0"));
    }

    #[test]
    fn unit_gateway_config_trims_bind_address() {
        let cli = parse(&["serve", "--bind", " 0.0.0.0:9000 "]).expect("parse serve");
        assert_eq!(cli.command, Some(CliCommand::Serve));
        assert_eq!(cli.gateway_config().bind, "0.0.0.0:9000");
    }

    #[test]
    fn unit_parse_positive_u64_reports_non_numeric_input() {
        assert_eq!(parse_positive_u64("15"), Ok(15));
        assert!(parse_positive_u64("fast")
            .expect_err("non numeric")
            .starts_with("failed to parse integer"));
    }
}
