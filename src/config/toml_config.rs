use crate::config::AppConfig;
use crate::utils::error::{IssError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoints: Option<EndpointsConfig>,
    pub http: Option<HttpConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub ip: Option<String>,
    pub geo: Option<String>,
    pub pass_times: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IssError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IssError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IssError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over the built-in defaults.
    pub fn into_app_config(self) -> AppConfig {
        let mut config = AppConfig::default();

        if let Some(endpoints) = self.endpoints {
            if let Some(ip) = endpoints.ip {
                config.endpoints.ip = ip;
            }
            if let Some(geo) = endpoints.geo {
                config.endpoints.geo = geo;
            }
            if let Some(pass_times) = endpoints.pass_times {
                config.endpoints.pass_times = pass_times;
            }
        }

        if let Some(http) = self.http {
            config.timeout_seconds = http.timeout_seconds;
        }

        config
    }
}
