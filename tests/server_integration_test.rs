use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use inflation_proxy::{ConfigProvider, InflationForwarder};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Clone)]
struct TestConfig {
    endpoint: String,
    api_key: Option<String>,
    bearer_auth: bool,
}

impl ConfigProvider for TestConfig {
    fn upstream_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn bearer_auth(&self) -> bool {
        self.bearer_auth
    }

    fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(5)
    }
}

fn test_router(endpoint: String, api_key: Option<String>) -> axum::Router {
    let config = TestConfig {
        endpoint,
        api_key,
        bearer_auth: false,
    };
    let forwarder = Arc::new(InflationForwarder::new(config).unwrap());
    inflation_proxy::server::router(forwarder)
}

fn inflation_post(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/inflation")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

/// 成功路徑:上游回應原封不動轉發給呼叫端
#[tokio::test]
async fn test_post_inflation_relays_upstream_payload() -> Result<()> {
    let server = MockServer::start();
    let payload = json!({
        "status": "REQUEST_SUCCEEDED",
        "responseTime": 150,
        "message": [],
        "Results": {
            "series": [{"seriesID": "CUUR0000SA0", "data": [{"year": "2020", "value": "258.811"}]}]
        }
    });
    let bls_mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "seriesid": ["CUUR0000SA0"],
            "startyear": "2015",
            "endyear": "2020",
            "registrationkey": "test-key-123"
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload.clone());
    });

    let app = test_router(server.url("/"), Some("test-key-123".to_string()));
    let response = app
        .oneshot(inflation_post(&json!({"startYear": 2015, "endYear": 2020})))
        .await?;

    bls_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(response_json(response).await?, payload);
    Ok(())
}

/// 預檢請求由 CORS 中介層回應,不會呼叫上游
#[tokio::test]
async fn test_options_preflight_never_reaches_upstream() -> Result<()> {
    let server = MockServer::start();
    let bls_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({"status": "REQUEST_SUCCEEDED"}));
    });

    let app = test_router(server.url("/"), None);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/inflation")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()?
        .contains("POST"));
    assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()?
        .to_ascii_lowercase()
        .contains("x-csrf-token"));

    let bytes = response.into_body().collect().await?.to_bytes();
    assert!(bytes.is_empty());
    assert_eq!(bls_mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_500_with_error_body() -> Result<()> {
    // Nothing listens on port 1.
    let app = test_router("http://127.0.0.1:1/".to_string(), None);

    let response = app
        .oneshot(inflation_post(&json!({"startYear": 2015, "endYear": 2020})))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await?;
    assert!(!body["error"].as_str().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_upstream_logical_failure_maps_to_500() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({
            "status": "REQUEST_NOT_PROCESSED",
            "message": ["Series does not exist for series CUUR0000SA0"]
        }));
    });

    let app = test_router(server.url("/"), None);
    let response = app
        .oneshot(inflation_post(&json!({"startYear": 2015, "endYear": 2020})))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await?;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Series does not exist"));
    Ok(())
}

#[tokio::test]
async fn test_missing_year_field_maps_to_500_without_upstream_call() -> Result<()> {
    let server = MockServer::start();
    let bls_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({"status": "REQUEST_SUCCEEDED"}));
    });

    let app = test_router(server.url("/"), None);
    let response = app
        .oneshot(inflation_post(&json!({"startYear": 2015})))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await?;
    assert!(body["error"].as_str().unwrap().contains("endYear"));
    assert_eq!(bls_mock.hits(), 0);
    Ok(())
}

/// 未設定金鑰時,上游請求不可帶 registrationkey 欄位
#[tokio::test]
async fn test_missing_key_is_omitted_from_upstream_body() -> Result<()> {
    let server = MockServer::start();
    let bls_mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "seriesid": ["CUUR0000SA0"],
            "startyear": "2015",
            "endyear": "2020"
        }));
        then.status(200).json_body(json!({"status": "REQUEST_SUCCEEDED", "Results": {}}));
    });

    let app = test_router(server.url("/"), None);
    let response = app
        .oneshot(inflation_post(&json!({"startYear": 2015, "endYear": 2020})))
        .await?;

    bls_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}
