use axum::http::StatusCode;
use serde_json::Value;

use crate::error::Result;
use crate::models::LoginForm;

/// Thin client for the upstream auth backend. The three calls carry no
/// retry or error typing of their own: the upstream status and JSON body
/// pass through unmodified, and only transport failures surface as errors.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: &str) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn signup(&self, payload: &Value) -> Result<(StatusCode, Value)> {
        let response = self
            .http
            .post(format!("{}/signup", self.base_url))
            .json(payload)
            .send()
            .await?;
        passthrough(response).await
    }

    pub async fn login(&self, form: &LoginForm) -> Result<(StatusCode, Value)> {
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .form(form)
            .send()
            .await?;
        passthrough(response).await
    }

    pub async fn profile(&self, token: &str) -> Result<(StatusCode, Value)> {
        let response = self
            .http
            .get(format!("{}/profile", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        passthrough(response).await
    }
}

async fn passthrough(response: reqwest::Response) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let body = response.json::<Value>().await?;
    Ok((status, body))
}
