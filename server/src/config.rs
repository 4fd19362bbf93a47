//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "HTTP CRUD API for todo items", long_about = None)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "TODO_LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todos.db")]
    pub database_url: String,

    /// Upper bound on pooled database connections
    #[arg(long, env = "TODO_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Insert sample rows into an empty database at startup
    #[arg(long, env = "TODO_SEED", default_value_t = true, action = ArgAction::Set)]
    pub seed: bool,

    /// Origins allowed to call the API from a browser (comma-separated)
    #[arg(
        long = "cors-origin",
        env = "TODO_CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:3000", "https://localhost:3000"]
    )]
    pub cors_origins: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "JSON_LOGS")]
    pub json_logs: bool,
}
