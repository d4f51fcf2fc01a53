use crate::core::stages::{fetch_coords_by_ip, fetch_my_ip, fetch_pass_times};
use crate::domain::model::{Coordinates, Endpoints, IpAddress, PassTime};
use crate::domain::ports::HttpFetcher;
use crate::utils::error::{IssError, Result};
use std::time::Instant;

/// Progress of one lookup run.
///
/// `Done` and `Failed` are terminal; advancing them is a no-op.
#[derive(Debug)]
pub enum RunState {
    FetchingIp,
    FetchingCoords { ip: IpAddress },
    FetchingPasses { coords: Coordinates },
    Done(Vec<PassTime>),
    Failed(IssError),
}

impl RunState {
    pub fn name(&self) -> &'static str {
        match self {
            RunState::FetchingIp => "fetching_ip",
            RunState::FetchingCoords { .. } => "fetching_coords",
            RunState::FetchingPasses { .. } => "fetching_passes",
            RunState::Done(_) => "done",
            RunState::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done(_) | RunState::Failed(_))
    }
}

/// Runs the stage belonging to `state` and returns the next state.
pub async fn advance(fetcher: &dyn HttpFetcher, endpoints: &Endpoints, state: RunState) -> RunState {
    match state {
        RunState::FetchingIp => match fetch_my_ip(fetcher, endpoints).await {
            Ok(ip) => RunState::FetchingCoords { ip },
            Err(e) => RunState::Failed(e),
        },
        RunState::FetchingCoords { ip } => match fetch_coords_by_ip(fetcher, endpoints, &ip).await {
            Ok(coords) => RunState::FetchingPasses { coords },
            Err(e) => RunState::Failed(e),
        },
        RunState::FetchingPasses { coords } => {
            match fetch_pass_times(fetcher, endpoints, coords).await {
                Ok(passes) => RunState::Done(passes),
                Err(e) => RunState::Failed(e),
            }
        }
        terminal => terminal,
    }
}

/// Upcoming ISS passes for the caller's public IP location.
///
/// The three lookups run one after another; the first failing stage ends the
/// run and its error is returned as-is.
pub async fn next_pass_times_for_location(
    fetcher: &dyn HttpFetcher,
    endpoints: &Endpoints,
) -> Result<Vec<PassTime>> {
    let start = Instant::now();
    let mut state = RunState::FetchingIp;

    loop {
        let from = state.name();
        state = advance(fetcher, endpoints, state).await;
        tracing::debug!("Lookup state {} -> {}", from, state.name());

        match state {
            RunState::Done(passes) => {
                tracing::info!(
                    "Found {} upcoming passes in {:?}",
                    passes.len(),
                    start.elapsed()
                );
                return Ok(passes);
            }
            RunState::Failed(e) => {
                tracing::warn!("Lookup failed while {}: {}", from, e);
                return Err(e);
            }
            next => state = next,
        }
    }
}
