//! Skip listing source backed by the We Want Waste API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use skipper_core::{
    model::{Location, SkipOffering},
    ports::{SkipSource, SourceError},
};

/// Production API root.
pub const BASE_URL: &str = "https://app.wewantwaste.co.uk/api";

/// Lists skips for a single location via `GET /skips/by-location`.
pub struct WeWantWasteSource {
    client: Client,
    base_url: String,
    location: Location,
}

impl WeWantWasteSource {
    /// Create a source for `location` against the production API.
    #[must_use]
    pub fn new(client: Client, location: Location) -> Self {
        Self::with_base_url(client, BASE_URL, location)
    }

    /// Create a source against another API root, e.g. a staging host.
    #[must_use]
    pub fn with_base_url<U: Into<String>>(client: Client, base_url: U, location: Location) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client,
            base_url,
            location,
        }
    }

    /// API root requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_request(&self) -> RequestBuilder {
        self.client
            .get(format!("{}/skips/by-location", self.base_url))
            .query(&[
                ("postcode", self.location.postcode.as_str()),
                ("area", self.location.area.as_str()),
            ])
    }
}

#[async_trait]
impl SkipSource for WeWantWasteSource {
    fn location(&self) -> &Location {
        &self.location
    }

    async fn skips(&self) -> Result<Vec<SkipOffering>, SourceError> {
        debug!(
            base_url = %self.base_url,
            postcode = %self.location.postcode,
            area = %self.location.area,
            "requesting skip listing"
        );
        fetch_json::<Vec<SkipOffering>>(self.listing_request()).await
    }
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, SourceError> {
    req.send()
        .await
        .map_err(SourceError::from)?
        .error_for_status()
        .map_err(SourceError::from)?
        .json()
        .await
        .map_err(SourceError::from)
}
