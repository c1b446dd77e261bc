#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
use inflation_proxy::server::cors;
#[cfg(feature = "lambda")]
use inflation_proxy::utils::error::ProxyError;
#[cfg(feature = "lambda")]
use inflation_proxy::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use inflation_proxy::{InflationForwarder, InflationRequest, LambdaConfig};
#[cfg(feature = "lambda")]
use lambda_http::http::{header::CONTENT_TYPE, Method, StatusCode};
#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, Response};
#[cfg(feature = "lambda")]
use serde_json::{json, Value};

#[cfg(feature = "lambda")]
async fn function_handler(
    forwarder: &InflationForwarder<LambdaConfig>,
    event: Request,
) -> Result<Response<Body>, Error> {
    // 預檢請求直接回應,不呼叫上游
    if event.method() == Method::OPTIONS {
        return cors_response(StatusCode::OK, Body::Empty);
    }

    let result = async {
        let body: Value = serde_json::from_slice(event.body())
            .map_err(|e| ProxyError::InvalidRequest {
                message: e.to_string(),
            })?;
        let request = InflationRequest::from_body(&body)?;
        forwarder.forward(request).await
    }
    .await;

    match result {
        Ok(data) => cors_response(StatusCode::OK, Body::from(serde_json::to_string(&data)?)),
        Err(e) => {
            tracing::error!("Proxy error: {}", e);
            let body = json!({ "error": e.to_string() }).to_string();
            cors_response(StatusCode::INTERNAL_SERVER_ERROR, Body::from(body))
        }
    }
}

#[cfg(feature = "lambda")]
fn cors_response(status: StatusCode, body: Body) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(status);
    for (name, value) in cors::response_headers() {
        builder = builder.header(name, value);
    }
    if !matches!(body, Body::Empty) {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    Ok(builder.body(body)?)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    tracing::info!("Starting inflation-proxy lambda function");

    let config = LambdaConfig::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(Box::new(e) as Error);
    }

    let forwarder = Arc::new(
        InflationForwarder::new(config).map_err(|e| Box::new(e) as Error)?,
    );

    run(service_fn(move |event| {
        let forwarder = Arc::clone(&forwarder);
        async move { function_handler(&forwarder, event).await }
    }))
    .await
}
