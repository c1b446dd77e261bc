use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error::{ProxyError, Result};

/// U.S. city-average, all-items CPI series (not seasonally adjusted).
pub const CPI_SERIES_ID: &str = "CUUR0000SA0";

/// Status value the BLS API reports on a logically successful response.
pub const REQUEST_SUCCEEDED: &str = "REQUEST_SUCCEEDED";

/// Inbound request body. Year values are kept as raw JSON scalars; callers
/// historically send both numbers and strings, so no type check is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationRequest {
    pub start_year: Value,
    pub end_year: Value,
}

impl InflationRequest {
    /// Requires both `startYear` and `endYear` to be present.
    pub fn from_body(body: &Value) -> Result<Self> {
        serde_json::from_value(body.clone())
            .map_err(|e| ProxyError::InvalidRequest {
                message: e.to_string(),
            })
    }
}

/// Body of the outbound POST to the BLS time-series endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamQuery {
    pub seriesid: Vec<String>,
    pub startyear: String,
    pub endyear: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrationkey: Option<String>,
}

impl UpstreamQuery {
    pub fn build(request: &InflationRequest, api_key: Option<&str>) -> Self {
        Self {
            seriesid: vec![CPI_SERIES_ID.to_string()],
            startyear: render_year(&request.start_year),
            endyear: render_year(&request.end_year),
            registrationkey: api_key.map(str::to_owned),
        }
    }
}

// JSON strings pass through without quotes; any other scalar keeps its JSON
// rendering (2015 -> "2015").
fn render_year(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}
