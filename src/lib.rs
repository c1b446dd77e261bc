pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use crate::core::forwarder::InflationForwarder;
pub use domain::model::{InflationRequest, UpstreamQuery};
pub use domain::ports::ConfigProvider;
pub use utils::error::{ProxyError, Result};
