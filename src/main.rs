use log::{error, info};

mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod store;

#[cfg(test)]
mod tests;

use config::Config;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("Failed to start rsvp-service: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let pool = store::mysql::create_pool(&config).await?;

    // Confirm the database is reachable before binding the listen socket.
    info!("Pinging database...");
    store::mysql::ping(&pool).await?;
    info!("Database ping succeeded");

    let app = routes::create_router(pool);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.app_port)).await?;
    info!("Application started on port {}", config.app_port);
    axum::serve(listener, app).await?;

    Ok(())
}
