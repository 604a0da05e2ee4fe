use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use serde::{Deserialize, Serialize};

use super::cors::cors_layer;
use crate::ai::ModelError;
use crate::booster::PromptBooster;
use crate::config::ServerConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub user_prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub enhanced_prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Any pipeline failure, reported as a 500 with the error text as `detail`.
struct ApiError(ModelError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub fn build_router(booster: PromptBooster, config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origin)?;

    Ok(Router::new()
        .route("/enhance", post(enhance_prompt))
        .with_state(booster)
        .layer(cors))
}

async fn enhance_prompt(
    State(booster): State<PromptBooster>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    info!(
        "Received raw prompt ({} bytes)",
        request.user_prompt.len()
    );

    match booster.boost(&request.user_prompt).await {
        Ok(polished) => Ok(Json(EnhanceResponse {
            enhanced_prompt: polished.into_string(),
        })),
        Err(e) => {
            error!("Prompt enhancement failed: {e}");
            Err(ApiError(e))
        }
    }
}
