#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

/// Public BLS time-series endpoint.
pub const DEFAULT_BLS_ENDPOINT: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Environment variable holding the BLS registration key.
pub const BLS_API_KEY_VAR: &str = "BLS_API_KEY";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "inflation-proxy")]
#[command(about = "HTTP proxy forwarding CPI inflation queries to the BLS public API")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_BLS_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Also send the API key as an Authorization bearer header")]
    pub bearer_auth: bool,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Read from the environment, never from the command line.
    #[arg(skip)]
    pub api_key: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parse CLI arguments and pick up the registration key from the environment.
    pub fn load() -> Self {
        let mut config = Self::parse();
        config.api_key = std::env::var(BLS_API_KEY_VAR).ok();
        config
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
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

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
