//! HTTP API for intent resolution.

use crate::service::IntentService;
use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::{IntoResponse, Json, Response},
	routing::{get, post},
	Router,
};
use intent_resolver::Resolution;
use intent_types::{IntentError, IntentRequest, TokenInfo};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, warn};

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Intent(#[from] IntentError),

	#[error("Malformed request body: {0}")]
	InvalidRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub details: serde_json::Value,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let message = self.to_string();
		let (error, details) = match &self {
			ApiError::Intent(IntentError::UnsupportedAsset { symbol, supported }) => (
				"UNSUPPORTED_ASSET",
				serde_json::json!({ "symbol": symbol, "supported": supported }),
			),
			ApiError::Intent(IntentError::InvalidAmount { field, value }) => (
				"INVALID_AMOUNT",
				serde_json::json!({ "field": field, "value": value }),
			),
			ApiError::Intent(IntentError::OverrideOutOfRange { field, value }) => (
				"OVERRIDE_OUT_OF_RANGE",
				serde_json::json!({ "field": field, "value": value }),
			),
			ApiError::Intent(err) => (err.code(), serde_json::Value::Null),
			ApiError::InvalidRequest(_) => ("INVALID_REQUEST", serde_json::Value::Null),
		};

		warn!(error, %message, "Rejected intent request");

		let body = ErrorResponse {
			error: error.to_string(),
			message,
			details,
		};
		(StatusCode::BAD_REQUEST, Json(body)).into_response()
	}
}

/// Builds the API router.
pub fn router(service: Arc<IntentService>) -> Router {
	Router::new()
		.route("/health", get(health_check))
		.route("/api/v1/tokens", get(list_tokens))
		.route("/api/v1/intents/resolve", post(resolve_intent))
		.with_state(service)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

/// Serves the API until `shutdown` completes.
pub async fn start_http_server(
	service: Arc<IntentService>,
	shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
	let bind_address = service.config().bind_address();
	let listener = tokio::net::TcpListener::bind(&bind_address).await?;

	info!("API server listening on {}", bind_address);

	axum::serve(listener, router(service))
		.with_graceful_shutdown(shutdown)
		.await?;

	Ok(())
}

/// Liveness check
async fn health_check(State(service): State<Arc<IntentService>>) -> Json<serde_json::Value> {
	Json(serde_json::json!({
		"status": "ok",
		"client": service.config().client_info(),
		"timestamp": chrono::Utc::now().timestamp()
	}))
}

async fn list_tokens(State(service): State<Arc<IntentService>>) -> Json<Vec<TokenInfo>> {
	Json(service.tokens())
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn resolve_intent(
	State(service): State<Arc<IntentService>>,
	payload: Result<Json<IntentRequest>, JsonRejection>,
) -> Result<Json<Resolution>, ApiError> {
	let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
	let resolution = service.resolve(&request).await?;
	Ok(Json(resolution))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;
	use axum::http::{header, Request};
	use intent_config::IntentConfig;
	use intent_types::FixedClock;
	use tower::ServiceExt;

	const OWNER: &str = "0x1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a";

	fn app() -> Router {
		let service = IntentService::with_clock(
			IntentConfig::default(),
			Arc::new(FixedClock(1_700_000_000)),
		);
		router(Arc::new(service))
	}

	fn resolve_request(body: serde_json::Value) -> Request<Body> {
		Request::builder()
			.method("POST")
			.uri("/api/v1/intents/resolve")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap()
	}

	async fn json_body(response: Response) -> serde_json::Value {
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	fn swap(output: &str) -> serde_json::Value {
		serde_json::json!({
			"user_address": OWNER,
			"description": "Swap 100 SUI for USDC",
			"input": { "symbol": "SUI", "decimals": 9, "amount": "100000000000" },
			"output": { "symbol": output, "decimals": 6 },
			"priority": "maximize_output"
		})
	}

	#[tokio::test]
	async fn test_health() {
		let response = app()
			.oneshot(Request::get("/health").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);

		let body = json_body(response).await;
		assert_eq!(body["status"], "ok");
		assert_eq!(body["client"]["name"], "intent-resolver");
	}

	#[tokio::test]
	async fn test_list_tokens() {
		let response = app()
			.oneshot(Request::get("/api/v1/tokens").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);

		let body = json_body(response).await;
		let symbols: Vec<&str> = body
			.as_array()
			.unwrap()
			.iter()
			.filter_map(|t| t["symbol"].as_str())
			.collect();
		assert!(symbols.contains(&"SUI"));
		assert!(symbols.contains(&"USDC"));
	}

	#[tokio::test]
	async fn test_resolve_success() {
		let response = app().oneshot(resolve_request(swap("USDC"))).await.unwrap();
		assert_eq!(response.status(), StatusCode::OK);

		let body = json_body(response).await;
		assert_eq!(body["parameters"]["slippage_bps"], 100);
		assert_eq!(body["intent"]["constraints"]["routing"]["max_hops"], 4);
		assert_eq!(body["intent"]["operation"]["outputs"][0]["amount"]["type"], "all");
		assert!(body["intent_hash"].as_str().unwrap().starts_with("0x"));
	}

	#[tokio::test]
	async fn test_unsupported_asset_is_bad_request() {
		let response = app().oneshot(resolve_request(swap("DOGE"))).await.unwrap();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let body = json_body(response).await;
		assert_eq!(body["error"], "UNSUPPORTED_ASSET");
		assert!(body["message"].as_str().unwrap().contains("DOGE"));
		let supported = body["details"]["supported"].as_array().unwrap();
		assert!(supported.iter().any(|s| s == "SUI"));
	}

	#[tokio::test]
	async fn test_invalid_address_is_bad_request() {
		let mut request = swap("USDC");
		request["user_address"] = serde_json::json!("0x1234");

		let response = app().oneshot(resolve_request(request)).await.unwrap();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(json_body(response).await["error"], "INVALID_ADDRESS");
	}

	#[tokio::test]
	async fn test_null_priority_resolves_as_balanced() {
		let mut request = swap("USDC");
		request["priority"] = serde_json::Value::Null;
		request["urgency"] = serde_json::json!(2);

		let response = app().oneshot(resolve_request(request)).await.unwrap();
		assert_eq!(response.status(), StatusCode::OK);

		let body = json_body(response).await;
		assert_eq!(body["intent"]["preferences"]["optimization_goal"], "balanced");
	}

	#[tokio::test]
	async fn test_malformed_body_is_bad_request() {
		let request = Request::builder()
			.method("POST")
			.uri("/api/v1/intents/resolve")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from("{ not json"))
			.unwrap();

		let response = app().oneshot(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(json_body(response).await["error"], "INVALID_REQUEST");
	}
}
