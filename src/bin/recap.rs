use recap::RecapBot;
use recap::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is fine; the real environment still applies
    dotenvy::dotenv().ok();
    recap::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;
    info!(
        model = %config.openai_model,
        log_channel_id = config.log_channel_id,
        "Starting recap bot"
    );

    recap::discord::run(RecapBot::new(config)).await?;
    Ok(())
}
