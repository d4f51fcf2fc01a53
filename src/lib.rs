pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::TomlConfig, AppConfig};

pub use crate::adapters::ReqwestFetcher;
pub use crate::core::{
    completion::PassTimesPromise, engine::PassTimesEngine,
    orchestrator::next_pass_times_for_location,
};
pub use crate::domain::model::{Coordinates, Endpoints, HttpResponse, IpAddress, PassTime};
pub use crate::domain::ports::{ConfigProvider, HttpFetcher};
pub use crate::utils::error::{ErrorKind, IssError, Result};
