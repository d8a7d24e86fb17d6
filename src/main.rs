// Main entry point - Configuration, gateway wiring and command dispatch
mod presentation;

use screenboard_client::infrastructure::config::load_screenboard_config;
use screenboard_client::infrastructure::datadog_gateway::DataDogScreenboardGateway;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::{cli, Command};
use crate::presentation::handlers::{print_sample, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so board JSON on stdout can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli().run();

    if let Command::Sample = cli.command {
        return print_sample();
    }

    let config = load_screenboard_config()?;
    tracing::debug!("Using screenboard API at {}", config.datadog.api_url);
    let gateway = DataDogScreenboardGateway::from_settings(&config.datadog);

    run(cli.command, &gateway).await
}
