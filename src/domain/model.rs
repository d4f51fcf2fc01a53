use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public IP address as reported by the discovery service. Not validated further.
pub type IpAddress = String;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One upcoming ISS fly-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTime {
    /// Epoch seconds, UTC.
    pub risetime: i64,
    /// Seconds the station stays visible.
    pub duration: i64,
}

impl PassTime {
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}

/// Raw HTTP answer handed back by a [`crate::domain::ports::HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Service locations used by the three lookup stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub ip: String,
    pub geo: String,
    pub pass_times: String,
}

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org/?format=json";
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipvigilante.com/";
pub const DEFAULT_PASS_TIMES_ENDPOINT: &str = "http://api.open-notify.org/iss-pass.json";

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP_ENDPOINT.to_string(),
            geo: DEFAULT_GEO_ENDPOINT.to_string(),
            pass_times: DEFAULT_PASS_TIMES_ENDPOINT.to_string(),
        }
    }
}
