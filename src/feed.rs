//! HTTP client side of the device feed.

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::constants::{FLOOR_PLACEHOLDER, MAX_FLOOR_ID_LEN};
use crate::feature::FeatureCollection;

/// Fills the `{floor}` placeholder of a feed URL template. Templates
/// without a placeholder are used as-is.
pub fn resolve_endpoint(template: &str, floor_id: &str) -> String {
    template.replace(FLOOR_PLACEHOLDER, floor_id)
}

/// Floor ids end up in a URL path, so only `[A-Za-z0-9_-]` is accepted.
pub fn is_valid_floor_id(floor_id: &str) -> bool {
    !floor_id.is_empty()
        && floor_id.len() <= MAX_FLOOR_ID_LEN
        && floor_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Fetches and decodes one feature collection.
///
/// Connection failures, non-success statuses and non-JSON bodies are errors.
/// A JSON body of any other shape decodes to an empty collection.
pub async fn fetch_feature_collection(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<FeatureCollection> {
    let response = client
        .get(endpoint)
        .send()
        .await
        .with_context(|| format!("Request to {endpoint} failed"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Feed {endpoint} answered HTTP {status}");
    }

    let body = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body from {endpoint}"))?;
    debug!("Feed {endpoint} returned {} bytes", body.len());

    FeatureCollection::from_slice(&body)
        .with_context(|| format!("Feed {endpoint} did not return JSON"))
}
