//! Trait describing skip listing backends and their error type.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{Location, SkipOffering};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while fetching skip offerings.
pub enum SourceError {
    /// Network layer failed, the server answered with an error status, or the body
    /// was not a valid listing.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Internal source error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Backend returning the skips offered at one location.
pub trait SkipSource: Send + Sync {
    /// Location this source lists skips for.
    fn location(&self) -> &Location;

    /// Fetch every skip offered at [`SkipSource::location`].
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the response cannot be decoded.
    async fn skips(&self) -> Result<Vec<SkipOffering>, SourceError>;
}
