//! Form Interrogatories MCP Server - Entry point
//!
//! Usage: `form-interrogatories [RESOURCE_DIR...]`
//!
//! Resource directories restrict path sources and output paths. Set
//! `FORM_INTERROGATORIES_TEMPLATE_DIR` to serve blank templates from disk
//! instead of downloading them.

use form_interrogatories::{run_server_with_config, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TEMPLATE_DIR_ENV: &str = "FORM_INTERROGATORIES_TEMPLATE_DIR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_interrogatories=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig {
        resource_dirs: std::env::args().skip(1).collect(),
        template_dir: std::env::var(TEMPLATE_DIR_ENV).ok().filter(|d| !d.is_empty()),
        ..ServerConfig::default()
    };

    tracing::info!(
        resource_dirs = ?config.resource_dirs,
        template_dir = ?config.template_dir,
        "Starting Form Interrogatories MCP Server"
    );

    run_server_with_config(config).await
}
