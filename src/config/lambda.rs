use std::env;
use std::time::Duration;

use crate::config::{BLS_API_KEY_VAR, DEFAULT_BLS_ENDPOINT};
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub bearer_auth: bool,
    pub timeout_secs: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("BLS_ENDPOINT").unwrap_or_else(|_| DEFAULT_BLS_ENDPOINT.to_string()),
            api_key: env::var(BLS_API_KEY_VAR).ok(),
            // 此綁定預設同時送出 bearer 標頭,設 BLS_BEARER_AUTH=false 可關閉
            bearer_auth: env::var("BLS_BEARER_AUTH")
                .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
                .unwrap_or(true),
            timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl ConfigProvider for LambdaConfig {
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
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
