use axum::{
    extract::{DefaultBodyLimit, Query},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::codec::{
    generate_vrs_ids, is_valid_vrs_id, parse_vrs_id, EncodingError, InvalidIdentifierError,
};
use crate::core::types::{IdOutcome, ParsedVrsId};
use crate::core::variant::VariantDescriptor;
use crate::storage::{build_variant_query, VariantQuery};
use crate::utils::validation::{
    validate_batch_size, validate_descriptor, validate_id_length, ValidationError,
};

/// Maximum request body size (a full batch of typical variants fits well under this)
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024; // 2MB

/// Request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of in-flight requests
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Error body returned for every 4xx/5xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// An error response: status code plus JSON body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn bad_request(error_type: &str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: message.into(),
                error_type: error_type.to_string(),
            },
        }
    }

    /// Hide internal details from the client while logging them server-side
    fn internal(internal_msg: &str) -> Self {
        tracing::error!("Internal error: {}", internal_msg);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: "Failed to generate identifier".to_string(),
                error_type: "encoding_error".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request("validation_error", err.to_string())
    }
}

impl From<InvalidIdentifierError> for ApiError {
    fn from(err: InvalidIdentifierError) -> Self {
        Self::bad_request("invalid_identifier", err.to_string())
    }
}

impl From<EncodingError> for ApiError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::Unrepresentable { .. } => {
                Self::bad_request("unrepresentable_variant", err.to_string())
            }
            EncodingError::Digest { .. } => Self::internal(&err.to_string()),
        }
    }
}

/// Batch generation request
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub variants: Vec<VariantDescriptor>,
}

/// Batch parse or query request
#[derive(Debug, Serialize, Deserialize)]
pub struct IdBatchRequest {
    pub vrs_ids: Vec<String>,
}

/// Per-identifier results, in request order
#[derive(Debug, Serialize)]
pub struct BatchResponse<T> {
    pub results: Vec<IdOutcome<T>>,
}

/// Query parameters carrying a single identifier
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub vrs_id: String,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes without the rate-limiting and hardening layers
pub fn api_router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/parse", get(parse_handler).post(parse_batch_handler))
        .route("/api/validate", get(validate_handler))
        .route("/api/query", get(query_handler).post(query_batch_handler))
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router() -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    let app = api_router().layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(REQUEST_TIMEOUT_SECS),
            ))
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    tracing::info!("Starting aiva-vrs API at http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Generate identifiers for a batch of variants
async fn generate_handler(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_batch_size(request.variants.len())?;
    for variant in &request.variants {
        validate_descriptor(variant)?;
    }

    let results = generate_vrs_ids(&request.variants)
        .into_iter()
        .map(|result| {
            result
                .map(|vrs_id| serde_json::json!({ "vrs_id": vrs_id.to_string() }))
                .map_err(ApiError::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(serde_json::json!({ "results": results })))
}

async fn parse_handler(Query(params): Query<IdParams>) -> Result<Json<ParsedVrsId>, ApiError> {
    validate_id_length(&params.vrs_id)?;
    Ok(Json(parse_vrs_id(&params.vrs_id)?))
}

async fn validate_handler(
    Query(params): Query<IdParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_id_length(&params.vrs_id)?;
    Ok(Json(serde_json::json!({
        "vrs_id": params.vrs_id,
        "valid": is_valid_vrs_id(&params.vrs_id),
    })))
}

async fn query_handler(Query(params): Query<IdParams>) -> Result<Json<VariantQuery>, ApiError> {
    validate_id_length(&params.vrs_id)?;
    Ok(Json(build_variant_query(&params.vrs_id)?))
}

/// Apply `op` to every identifier, recording oversized or failing ones per entry
fn per_id<T>(
    vrs_ids: &[String],
    op: impl Fn(&str) -> Result<T, InvalidIdentifierError>,
) -> Result<BatchResponse<T>, ApiError> {
    validate_batch_size(vrs_ids.len())?;
    let results = vrs_ids
        .iter()
        .map(|id| match validate_id_length(id) {
            Ok(()) => IdOutcome::from_result(id, op(id.as_str())),
            Err(e) => IdOutcome::from_result(id, Err(e)),
        })
        .collect();
    Ok(BatchResponse { results })
}

async fn parse_batch_handler(
    Json(request): Json<IdBatchRequest>,
) -> Result<Json<BatchResponse<ParsedVrsId>>, ApiError> {
    Ok(Json(per_id(&request.vrs_ids, parse_vrs_id)?))
}

async fn query_batch_handler(
    Json(request): Json<IdBatchRequest>,
) -> Result<Json<BatchResponse<VariantQuery>>, ApiError> {
    Ok(Json(per_id(&request.vrs_ids, build_variant_query)?))
}
