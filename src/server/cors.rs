use axum::http::header::{
    HeaderName, HeaderValue, ACCEPT, ACCESS_CONTROL_ALLOW_CREDENTIALS,
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_LENGTH, CONTENT_TYPE, DATE,
};
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

pub const ALLOW_METHODS: &str = "GET,OPTIONS,POST";
pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
     Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Cross-origin middleware for the standalone server binding. Preflight
/// requests are answered by the layer itself, so `OPTIONS` never reaches the
/// inflation handler.
///
/// tower-http rejects `Allow-Origin: *` combined with credentials, so this
/// layer advertises the wildcard origin without the credentials header; the
/// lambda binding writes the full literal header set instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS, Method::POST])
        .allow_headers(allow_header_names())
}

/// Literal header set applied to every response of the serverless binding.
pub fn response_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ),
        (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
    ]
}

fn allow_header_names() -> [HeaderName; 9] {
    [
        HeaderName::from_static("x-csrf-token"),
        HeaderName::from_static("x-requested-with"),
        ACCEPT,
        HeaderName::from_static("accept-version"),
        CONTENT_LENGTH,
        HeaderName::from_static("content-md5"),
        CONTENT_TYPE,
        DATE,
        HeaderName::from_static("x-api-version"),
    ]
}
