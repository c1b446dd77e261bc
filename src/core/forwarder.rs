use reqwest::Client;
use serde_json::Value;

use crate::domain::model::{InflationRequest, UpstreamQuery, REQUEST_SUCCEEDED};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ProxyError, Result};

/// Forwards one inflation query to the BLS API and relays the payload back.
/// Shared by both transport bindings; holds only read-only configuration and
/// a reusable HTTP client.
pub struct InflationForwarder<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> InflationForwarder<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub async fn forward(&self, request: InflationRequest) -> Result<Value> {
        tracing::info!(
            start_year = %request.start_year,
            end_year = %request.end_year,
            "Received inflation request"
        );
        tracing::info!(
            "Using API key: {}",
            if self.config.api_key().is_some() {
                "Present"
            } else {
                "Missing"
            }
        );

        let query = UpstreamQuery::build(&request, self.config.api_key());

        let mut outbound = self
            .client
            .post(self.config.upstream_endpoint())
            .json(&query);
        if self.config.bearer_auth() {
            if let Some(key) = self.config.api_key() {
                outbound = outbound.bearer_auth(key);
            }
        }

        let response = outbound.send().await?;
        tracing::debug!("Upstream response status: {}", response.status());

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;
        tracing::debug!("BLS API response: {}", data);

        if data.get("status").and_then(Value::as_str) != Some(REQUEST_SUCCEEDED) {
            return Err(ProxyError::UpstreamStatus {
                message: upstream_message(&data),
            });
        }

        Ok(data)
    }
}

// BLS failure payloads carry `message` as an array of strings; older error
// shapes use a plain string. Fall back to the raw payload otherwise.
fn upstream_message(data: &Value) -> String {
    match data.get("message") {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|m| match m.as_str() {
                Some(s) => s.to_owned(),
                None => m.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(Value::String(s)) => s.clone(),
        _ => data.to_string(),
    }
}
