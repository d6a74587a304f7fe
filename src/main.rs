use ideaboard::config::Config;
use ideaboard::services::auth_service::AuthClient;
use ideaboard::services::vote_service::VoteService;
use ideaboard::store::IdeaStore;
use ideaboard::{AppState, create_app};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ideaboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Configuration loaded successfully");

    // Seed the in-memory idea collection
    let store = Arc::new(IdeaStore::with_seed_data());
    tracing::info!("Idea store seeded with {} ideas", store.len().await);

    // Create vote service
    let votes = Arc::new(VoteService::new(
        store.clone(),
        Duration::from_millis(config.vote_confirm_delay_ms),
    ));

    // Create auth backend client
    let auth = Arc::new(AuthClient::new(&config.auth_backend_url)?);
    tracing::info!("Auth backend: {}", config.auth_backend_url);

    // Create application state
    let state = AppState {
        store,
        votes,
        auth,
        config: Arc::new(config.clone()),
    };

    // Create application
    let app = create_app(state);

    // Create listener
    let listener = TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    tracing::info!("Server listening on {}:{}", config.host, config.port);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
