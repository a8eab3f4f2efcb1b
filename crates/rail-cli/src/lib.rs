//! Command-line entry points for the RailFlow dashboard.

pub mod cli_args;
pub mod runtime;

pub use cli_args::{Cli, CliCommand};
pub use runtime::{render_path, run_cli, RenderFormat};
