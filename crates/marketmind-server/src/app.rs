// Application state and router assembly.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, FromRequest, Request};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use marketmind_llm::{ServiceError, TextGenerator};

use crate::error::ApiError;
use crate::handlers;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Per-process state shared by every handler. Holds no mutable data; the
/// generator is built once at start-up.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run one upstream generation for `capability` (used only for logging).
    pub async fn generate(
        &self,
        capability: &'static str,
        prompt: &str,
    ) -> Result<String, ServiceError> {
        match self.generator.generate(prompt).await {
            Ok(text) => {
                info!(capability, output_len = text.len(), "generation complete");
                Ok(text)
            }
            Err(e) => {
                warn!(capability, "generation failed: {e}");
                Err(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// JSON extractor
// ---------------------------------------------------------------------------

/// `axum::Json` restricted to object bodies, with rejections rendered as
/// `ApiError::Validation`.
///
/// Derived struct deserializers also accept a JSON array and fill fields
/// positionally, so the top-level shape is checked on a `Value` first.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        if !value.is_object() {
            return Err(ApiError::Validation {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!(
                    "Failed to deserialize the JSON body into the target type: \
                     expected a JSON object, found {}",
                    json_kind(&value)
                ),
            });
        }

        // Round-trip through bytes so field errors keep their path.
        let bytes = serde_json::to_vec(&value).map_err(|e| ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        })?;
        let Json(parsed) = Json::<T>::from_bytes(&bytes)?;
        Ok(ApiJson(parsed))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the full HTTP router.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/campaign/generate", post(handlers::generate_campaign))
        .route("/api/pitch/generate", post(handlers::generate_pitch))
        .route("/api/leads/analyze", post(handlers::analyze_lead))
        .route("/api/analytics/predict", post(handlers::predict_analytics))
        .route("/api/dashboard/stats", get(handlers::dashboard_stats))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, method and header, with credentials. The request's own
/// origin is echoed back since `*` cannot be combined with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
