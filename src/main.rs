//! Hello-Kube service binary.
//!
//! Startup sequence: parse args → load config → init logging → bind
//! listener → announce port → serve. Any startup failure is fatal and
//! exits non-zero; there is no retry.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use hello_kube::config::load_config;
use hello_kube::{observability, HttpServer};

#[derive(Parser)]
#[command(name = "hello-kube")]
#[command(about = "Single-route HTTP greeting service", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides PORT and the config file).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.port)?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.socket_addr()).await?;
    let port = listener.local_addr()?.port();

    println!("App listening on port {port}");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
