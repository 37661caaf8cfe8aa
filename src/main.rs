//! simple_commerce - entry point
//!
//! Boot order: config, logging, database, gateway. A database that cannot be
//! reached at startup stops the process instead of serving degraded traffic.

use simple_commerce::config::AppConfig;
use simple_commerce::db::Database;
use simple_commerce::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);

    let _guard = logging::init_logging(&config);
    tracing::info!(
        env,
        git = env!("GIT_HASH"),
        "starting simple_commerce {}",
        env!("CARGO_PKG_VERSION")
    );

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("FATAL: cannot reach database: {}", e);
            std::process::exit(1);
        }
    };

    gateway::run_server(&config, db).await;
}
