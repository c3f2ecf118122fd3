use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_core::GameTracker;
use game_persistence::{
    GameRepository, TryRepository, WordRepository, connection::connect_and_migrate,
};
use game_server::{auth::AuthService, config::Config, create_routes};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Word Game server...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let word_repository = Arc::new(WordRepository::new(db.clone()));
    let game_tracker = Arc::new(GameTracker::with_algorithm(
        word_repository.clone(),
        Arc::new(TryRepository::new(db.clone())),
        Arc::new(GameRepository::new(db)),
        config.algorithm,
    ));
    info!("Scoring guesses with the {} algorithm", config.algorithm);

    let auth_service = if config.auth_dev_mode {
        info!("Starting in development authentication mode - JWT validation disabled");
        Arc::new(AuthService::new_dev_mode())
    } else {
        Arc::new(AuthService::new(&config.jwt_secret))
    };

    let routes = create_routes(game_tracker, word_repository, auth_service);

    let addr = match config.host.parse::<std::net::IpAddr>() {
        Ok(ip) => (ip, config.port),
        Err(e) => {
            tracing::error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let (Ok(mut sigint), Ok(mut sigterm)) = (
                signal::unix::signal(signal::unix::SignalKind::interrupt()),
                signal::unix::signal(signal::unix::SignalKind::terminate()),
            ) else {
                tracing::error!("Failed to install signal handlers");
                return;
            };

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl+c: {}", e);
                return;
            }
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
