//! ODE Relay Server
//!
//! Serves the solver page and relays `/solve_ode` requests to the chat model.
//! Settings come from the environment (see `RelayConfig::from_env`); flags
//! given on the command line win.

use anyhow::Result;
use clap::Parser;
use ode_relay::{run_server, RelayConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ode-relay-server")]
#[command(about = "Relays ODE solve requests to a chat-completion model")]
struct Args {
    /// Server host [env: RELAY_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<String>,

    /// Server port [env: RELAY_PORT, default: 8080]
    #[arg(short, long)]
    port: Option<u16>,

    /// Upstream API key [env: DEEPSEEK_API_KEY]
    #[arg(long)]
    api_key: Option<String>,

    /// Chat-completion endpoint [env: DEEPSEEK_API_URL]
    #[arg(long)]
    api_url: Option<String>,

    /// Model name sent upstream [env: DEEPSEEK_MODEL, default: deepseek-chat]
    #[arg(long)]
    model: Option<String>,
}

impl Args {
    fn apply(self, base: RelayConfig) -> RelayConfig {
        let api_key = self.api_key.or(base.api_key);
        RelayConfig {
            api_key: None,
            api_url: self.api_url.unwrap_or(base.api_url),
            model: self.model.unwrap_or(base.model),
            host: self.host.unwrap_or(base.host),
            port: self.port.unwrap_or(base.port),
        }
        .with_api_key(api_key)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,ode_relay=debug")
            }),
        )
        .init();

    let config = Args::parse().apply(RelayConfig::from_env());

    info!(
        host = %config.host,
        port = config.port,
        model = %config.model,
        credential_configured = config.has_api_key(),
        "Starting ODE Relay"
    );

    run_server(config).await
}
