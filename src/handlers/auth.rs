use axum::{Form, extract::State, http::StatusCode, response::Json};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use serde_json::Value;

use crate::{AppState, error::Result, models::LoginForm};

// These three handlers proxy the upstream auth backend verbatim; any
// upstream error shape is the client's to interpret.

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let (status, body) = state.auth.signup(&payload).await?;

    Ok((status, Json(body)))
}

pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> Result<(StatusCode, Json<Value>)> {
    let (status, body) = state.auth.login(&payload).await?;

    Ok((status, Json(body)))
}

pub async fn profile(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<(StatusCode, Json<Value>)> {
    let (status, body) = state.auth.profile(bearer.token()).await?;

    Ok((status, Json(body)))
}
