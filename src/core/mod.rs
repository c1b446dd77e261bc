pub mod forwarder;

pub use crate::domain::model::{InflationRequest, UpstreamQuery};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
