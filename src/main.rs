use mcp_slab_server::client::SlabClient;
use mcp_slab_server::config::ServerConfig;
use mcp_slab_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-slab-server: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let client = match SlabClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-slab-server: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(Box::new(client));
    if let Err(e) = server.run().await {
        eprintln!("mcp-slab-server: fatal error: {e}");
        std::process::exit(1);
    }
}
