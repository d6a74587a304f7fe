use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateIdeaRequest, Idea, IdeaAuthor, IdeaResponse, VoteRequest, VoteResponse, VoteTally},
    services::feed_service,
};

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub q: Option<String>,
}

pub async fn list_ideas(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> Result<Json<Value>> {
    let query = params.q.unwrap_or_default();
    let ideas = state.store.list().await;
    let filtered = feed_service::filter_ideas(&ideas, &query);

    let total = filtered.len();
    let ideas: Vec<IdeaResponse> = filtered.into_iter().map(Into::into).collect();

    Ok(Json(json!({
        "ideas": ideas,
        "total": total,
        "query": query
    })))
}

pub async fn get_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<Uuid>,
) -> Result<Json<IdeaResponse>> {
    // Fetching the detail page counts as a view
    let idea = state
        .store
        .record_view(idea_id)
        .await
        .ok_or_else(|| AppError::NotFound("Idea not found".to_string()))?;

    Ok(Json(idea.into()))
}

pub async fn create_idea(
    State(state): State<AppState>,
    Json(payload): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    // Validate input
    payload.validate()?;

    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::BadRequest("Description is required".to_string()));
    }

    let idea = Idea {
        id: Uuid::new_v4(),
        title: payload.title.trim().to_string(),
        description: payload.description.trim().to_string(),
        // TODO: take the author from the session once profile data is wired in
        author: IdeaAuthor {
            name: "Anonymous".to_string(),
            initials: "AN".to_string(),
            avatar_url: None,
        },
        tags: payload.tags,
        votes: VoteTally::default(),
        comments: 0,
        views: 0,
        created_at: Utc::now(),
    };
    let idea_id = idea.id;

    state.store.insert(idea).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Idea created successfully",
            "idea_id": idea_id
        })),
    ))
}

pub async fn vote_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<VoteResponse>> {
    let response = state.votes.vote(idea_id, payload.direction).await?;

    Ok(Json(response))
}
