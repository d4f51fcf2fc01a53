use crate::domain::model::{Endpoints, HttpResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Issues a GET and reports whatever came back.
///
/// Only transport failures (nothing received) are `Err`; every received
/// response, whatever its status, is `Ok`.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn pass_times_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;

    fn endpoints(&self) -> Endpoints {
        Endpoints {
            ip: self.ip_endpoint().to_string(),
            geo: self.geo_endpoint().to_string(),
            pass_times: self.pass_times_endpoint().to_string(),
        }
    }
}
