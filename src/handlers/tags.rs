use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, error::Result, services::feed_service};

// Sidebar shows 5 tags collapsed
const DEFAULT_TAG_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct PopularTagsQuery {
    pub limit: Option<usize>,
}

pub async fn popular_tags(
    State(state): State<AppState>,
    Query(params): Query<PopularTagsQuery>,
) -> Result<Json<Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_TAG_LIMIT).min(50);
    let ideas = state.store.list().await;
    let tags = feed_service::popular_tags(&ideas, limit);

    Ok(Json(json!({ "tags": tags })))
}
