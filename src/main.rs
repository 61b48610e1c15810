use dotenvy::dotenv;
mod application;
mod config;
mod domain;
mod infrastructure;
#[cfg(test)]
mod test_utils;
mod utils;
use crate::config::AppConfig;
use crate::infrastructure::terminal::run_app;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = AppConfig::from_env();
    utils::setup_logging(config.log_level);

    if let Err(e) = run_app(config).await {
        error!("Error running agenda: {:#}", e);
    }
}
