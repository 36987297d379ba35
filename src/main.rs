mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::{serenity::SerenityConnector, BotConnection},
    config::Config,
    error::AppError,
    router,
    scheduler::bot_status,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let bot = BotConnection::new(Arc::new(SerenityConnector::new(db.clone())));
    match &config.discord_bot_token {
        Some(token) => {
            if let Err(e) = bot.connect(token).await {
                tracing::error!("Failed to connect Discord bot: {}", e);
            }
        }
        None => tracing::warn!("DISCORD_BOT_TOKEN not set, running without the bot"),
    }

    let mut scheduler = bot_status::start_scheduler(db.clone(), bot.clone()).await?;

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(db, http_client, oauth_client, bot.clone(), Arc::new(config));

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop scheduler: {}", e);
    }
    bot.disconnect().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
