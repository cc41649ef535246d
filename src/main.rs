//! ctfbot - chat-integrated CTF assistant bot.
//!
//! Local console gateway: reads one command line per stdin line and feeds it
//! through the dispatch core. The real chat-platform transport plugs in
//! through the same [`ChatTransport`](ctfbot::transport::ChatTransport)
//! trait this binary uses for stdout.

use ctfbot::config::Config;
use ctfbot::handlers::{Dispatcher, default_registry};
use ctfbot::storage::{MemoryStorage, Storage};
use ctfbot::transport::{ChatTransport, ConsoleTransport};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        bot = %config.bot.name,
        admins = config.bot.admin_users.len(),
        "Starting ctfbot"
    );

    let bot_config = Arc::new(RwLock::new(config.bot));
    let transport: Arc<dyn ChatTransport> = Arc::new(ConsoleTransport);
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

    // Create the handler registry and thread the collaborators through.
    let registry = Arc::new(default_registry());
    let dispatcher = Dispatcher::new(registry, bot_config, transport, storage);

    info!("Console gateway ready; type commands, Ctrl-D to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, message) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim_start()),
            None => (line, ""),
        };

        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        dispatcher
            .process(command, message, &timestamp, "console", "local-user")
            .await;
    }

    info!("Shutting down");
    Ok(())
}
