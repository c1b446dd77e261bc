pub mod cors;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::core::forwarder::InflationForwarder;
use crate::domain::model::InflationRequest;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::ProxyError;

pub fn router<C>(forwarder: Arc<InflationForwarder<C>>) -> Router
where
    C: ConfigProvider + 'static,
{
    Router::new()
        .route("/api/inflation", post(inflation_handler::<C>))
        .with_state(forwarder)
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer())
}

async fn inflation_handler<C>(
    State(forwarder): State<Arc<InflationForwarder<C>>>,
    Json(body): Json<Value>,
) -> Response
where
    C: ConfigProvider + 'static,
{
    let request = match InflationRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    match forwarder.forward(request).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(&e),
    }
}

// Failures keep the original wire contract: a 500 with the error text, no
// further taxonomy exposed to the caller.
fn error_response(error: &ProxyError) -> Response {
    tracing::error!("Proxy error: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}
