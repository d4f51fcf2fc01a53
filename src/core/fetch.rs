use crate::domain::ports::HttpFetcher;
use crate::utils::error::{IssError, Result};

/// GETs `url` and hands back the raw body of a 200 response.
///
/// A transport failure returns before any status or body is looked at.
/// Any other status becomes [`IssError::HttpStatusError`] with the body
/// attached. `resource` names what was being fetched, for diagnostics.
pub async fn fetch_body(fetcher: &dyn HttpFetcher, url: &str, resource: &str) -> Result<String> {
    let response = fetcher.get(url).await?;

    if response.status != 200 {
        tracing::debug!(
            "{} request to {} answered with status {}",
            resource,
            url,
            response.status
        );
        return Err(IssError::HttpStatusError {
            resource: resource.to_string(),
            status: response.status,
            body: response.body,
        });
    }

    Ok(response.body)
}
