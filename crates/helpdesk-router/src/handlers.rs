//! HTTP request handlers for the Router service.
//!
//! Exposes classification, validation, deep-link resolution and catalog
//! lookups using axum.

use crate::catalog::{Resource, ResourceSummary};
use crate::deep_link::DeepLink;
use crate::supervisor::Supervisor;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use helpdesk_domain::Domain;
use helpdesk_gatekeeper::{GateDecision, GateRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Classifier, catalog and gate shared by every request
    pub supervisor: Arc<Supervisor>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of catalog resources
    pub resource_count: usize,
}

/// Classification request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// The user's message
    pub query: String,
}

/// Classification response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Routed domain
    pub domain: Domain,
    /// Routing confidence
    pub confidence: f64,
    /// Whether the query asks for a link
    pub redirectional: bool,
}

/// Deep-link request
#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    /// The user's message
    pub query: String,
    /// Restrict matching to one domain
    #[serde(default)]
    pub domain: Option<Domain>,
}

/// Catalog search parameters
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    /// Category filter; takes precedence over `domain`
    pub category: Option<String>,
    /// Domain filter
    pub domain: Option<Domain>,
}

/// Catalog search response
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceListResponse {
    /// Matching resources
    pub resources: Vec<ResourceSummary>,
    /// Number of matches
    pub count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// The query that failed to resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed request
    BadRequest(String),
    /// No deep link matched the query
    NoMatchingResource(String),
    /// Unknown resource id
    ResourceNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    query: None,
                },
            ),
            AppError::NoMatchingResource(query) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "No matching resource found".to_string(),
                    query: Some(query),
                },
            ),
            AppError::ResourceNotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: format!("Resource not found: {}", id),
                    query: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

fn require_query(query: &str) -> Result<&str, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("Query must not be empty".to_string()));
    }
    Ok(query)
}

/// GET /health - Service health
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        resource_count: state.supervisor.catalog().len(),
    })
}

/// POST /classify - Route a query to a domain
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let query = require_query(&request.query)?;
    let classification = state.supervisor.classify(query);

    Ok(Json(ClassifyResponse {
        domain: classification.domain,
        confidence: classification.confidence,
        redirectional: state.supervisor.redirects().is_redirectional(query),
    }))
}

/// POST /validate - Run a candidate answer through the safety gate
async fn validate(
    State(state): State<AppState>,
    Json(request): Json<GateRequest>,
) -> Json<GateDecision> {
    let decision = state.supervisor.gate().evaluate(&request);
    info!(
        "Validated {} answer: safe={} level={}",
        request.domain, decision.safe_to_respond, decision.confidence_level
    );
    Json(decision)
}

/// POST /links - Resolve a deep link
async fn resolve_link(
    State(state): State<AppState>,
    Json(request): Json<LinkRequest>,
) -> Result<Json<DeepLink>, AppError> {
    let query = require_query(&request.query)?;
    state
        .supervisor
        .links()
        .resolve(query, request.domain)
        .map(Json)
        .ok_or_else(|| AppError::NoMatchingResource(query.to_string()))
}

/// GET /resources - Search the catalog
async fn list_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceQuery>,
) -> Json<ResourceListResponse> {
    let resources = state
        .supervisor
        .catalog()
        .search(params.category.as_deref(), params.domain);

    Json(ResourceListResponse {
        count: resources.len(),
        resources,
    })
}

/// GET /resources/:id - Fetch one catalog resource
async fn get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    state
        .supervisor
        .catalog()
        .get(&resource_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ResourceNotFound(resource_id))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health_check))
        .route("/classify", post(classify))
        .route("/validate", post(validate))
        .route("/links", post(resolve_link))
        .route("/resources", get(list_resources))
        .route("/resources/:id", get(get_resource))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            supervisor: Arc::new(Supervisor::default()),
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_classify_empty_query() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(post_json("/classify", r#"{"query": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_links_not_found() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(post_json("/links", r#"{"query": "what is for lunch"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let app = create_router(create_test_state());
        let request = Request::builder()
            .uri("/resources/jira")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
