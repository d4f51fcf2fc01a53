use crate::adapters::ReqwestFetcher;
use crate::core::completion::{deliver, PassTimesPromise};
use crate::core::orchestrator::next_pass_times_for_location;
use crate::domain::model::{Endpoints, PassTime};
use crate::domain::ports::{ConfigProvider, HttpFetcher};
use crate::utils::error::{IssError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Entry point for pass-time lookups, offered as a plain future, a promise,
/// or a callback. Every form drives the same orchestrator.
///
/// Cloning is cheap; clones share the HTTP client and endpoints but no
/// per-run state.
#[derive(Clone)]
pub struct PassTimesEngine {
    fetcher: Arc<dyn HttpFetcher>,
    endpoints: Arc<Endpoints>,
}

impl PassTimesEngine {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints: Arc::new(endpoints),
        }
    }

    /// Builds an engine backed by `reqwest` with the configured endpoints.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let fetcher = ReqwestFetcher::with_timeout(config.request_timeout())?;
        Ok(Self::new(Arc::new(fetcher), config.endpoints()))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn run(&self) -> Result<Vec<PassTime>> {
        next_pass_times_for_location(self.fetcher.as_ref(), &self.endpoints).await
    }

    /// Starts a run on the tokio runtime right away.
    pub fn promise(&self) -> PassTimesPromise {
        let engine = self.clone();
        PassTimesPromise::spawn(async move { engine.run().await })
    }

    pub async fn run_with_callback<F>(&self, callback: F)
    where
        F: FnOnce(Option<IssError>, Option<Vec<PassTime>>),
    {
        deliver(self.run().await, callback);
    }

    pub fn spawn_with_callback<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<IssError>, Option<Vec<PassTime>>) + Send + 'static,
    {
        let engine = self.clone();
        tokio::spawn(async move { engine.run_with_callback(callback).await })
    }
}

impl std::fmt::Debug for PassTimesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassTimesEngine")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
