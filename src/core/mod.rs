pub mod completion;
pub mod engine;
pub mod fetch;
pub mod orchestrator;
pub mod report;
pub mod stages;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{Coordinates, Endpoints, HttpResponse, IpAddress, PassTime};
pub use crate::domain::ports::{ConfigProvider, HttpFetcher};
pub use crate::utils::error::Result;
