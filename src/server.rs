//! HTTP surface: routes, handlers and the OpenAPI document

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::debug;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::request::{CommentRequest, CommentResult};
use crate::service::CommentService;

pub type SharedService = Arc<CommentService>;

/// Health check body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck
{   #[schema(example = "ok")]
    pub status: String
  , pub version: String
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Commenter API",
        description = "Generates documentation comments for code snippets"
    ),
    tags(
        (name = "comment", description = "Documentation comment generation"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(generate_comment_handler, health_handler, openapi_handler),
    components(schemas(CommentRequest, CommentResult, HealthCheck))
)]
pub struct ApiDoc;

/// Generate a documentation comment.
/// Provider failures are reported in the body, never as an HTTP error.
#[utoipa::path(
    post,
    path = "/api/comment",
    tag = "comment",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Result of the generation attempt", body = CommentResult),
    )
)]
pub async fn generate_comment_handler(
  State(service): State<SharedService>
, Json(request): Json<CommentRequest>
) -> Json<CommentResult>
{   debug!("POST /api/comment ({} bytes of code)", request.code.len());
    Json(service.generate_comment(&request).await)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck),
    )
)]
pub async fn health_handler() -> Json<HealthCheck>
{   Json(HealthCheck
    {   status: "ok".to_string()
      , version: env!("CARGO_PKG_VERSION").to_string()
    })
}

#[utoipa::path(
    get,
    path = "/api-docs/openapi.json",
    tag = "health",
    responses(
        (status = 200, description = "OpenAPI document"),
    )
)]
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi>
{   Json(ApiDoc::openapi())
}

/// Create the application router
pub fn create_router(service: SharedService) -> Router
{   Router::new()
      .route("/api/comment", post(generate_comment_handler))
      .route("/health", get(health_handler))
      .route("/api-docs/openapi.json", get(openapi_handler))
      .with_state(service)
}
