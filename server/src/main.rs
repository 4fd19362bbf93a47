use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    todo_server::logging::init(&config.log_level, config.json_logs)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        database_url = %config.database_url,
        "starting todo-server"
    );

    let router = todo_server::build(&config).await?;
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    todo_server::run(listener, router).await
}
