pub mod toml_config;

use crate::core::{ConfigProvider, Endpoints};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Fully resolved settings for a lookup run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub timeout_seconds: Option<u64>,
}

impl ConfigProvider for AppConfig {
    fn ip_endpoint(&self) -> &str {
        &self.endpoints.ip
    }

    fn geo_endpoint(&self) -> &str {
        &self.endpoints.geo
    }

    fn pass_times_endpoint(&self) -> &str {
        &self.endpoints.pass_times
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.ip", &self.endpoints.ip)?;
        validate_url("endpoints.geo", &self.endpoints.geo)?;
        validate_url("endpoints.pass_times", &self.endpoints.pass_times)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "iss-spotter")]
#[command(about = "Find the next ISS passes over your current location")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with [endpoints] and [http] tables")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "IP discovery endpoint")]
    pub ip_endpoint: Option<String>,

    #[arg(long, help = "Geolocation base URL; the IP is appended as a path segment")]
    pub geo_endpoint: Option<String>,

    #[arg(long, help = "Pass-time endpoint; lat/lon are added as query parameters")]
    pub pass_times_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file if given, then explicit flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.into_app_config(),
            None => AppConfig::default(),
        };

        if let Some(ip) = &self.ip_endpoint {
            config.endpoints.ip = ip.clone();
        }
        if let Some(geo) = &self.geo_endpoint {
            config.endpoints.geo = geo.clone();
        }
        if let Some(pass_times) = &self.pass_times_endpoint {
            config.endpoints.pass_times = pass_times.clone();
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }

        Ok(config)
    }
}
