//! Welcome page server
//!
//! ## Usage
//! ```bash
//! WHOAMI_UPSTREAM=http://127.0.0.1:9000 cargo run --bin welcome-server --features server
//! ```

use welcome::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; values can come from the real environment
    let _ = dotenvy::dotenv();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load()?;
    log::info!("Welcome Server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    server::serve(config).await
}
