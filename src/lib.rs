pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    },
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    services::{auth_service::AuthClient, vote_service::VoteService},
    store::IdeaStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IdeaStore>,
    pub votes: Arc<VoteService>,
    pub auth: Arc<AuthClient>,
    pub config: Arc<Config>,
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .allowed_origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>().unwrap())
                .collect::<Vec<_>>(),
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        // Feed routes
        .route("/api/ideas", get(handlers::ideas::list_ideas))
        .route("/api/ideas", post(handlers::ideas::create_idea))
        .route("/api/ideas/{idea_id}", get(handlers::ideas::get_idea))
        .route(
            "/api/ideas/{idea_id}/vote",
            post(handlers::ideas::vote_idea),
        )
        // Sidebar routes
        .route("/api/tags/popular", get(handlers::tags::popular_tags))
        // Auth proxy routes
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/profile", get(handlers::auth::profile))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "IdeaBoard API is running!" }))
}
