//! HTTP-backed card surface.
//!
//! Fetches the artwork with a plain anonymous GET (no credentials, no
//! cookies) so any image host that allows cross-origin fetching works, then
//! hands the bytes to the bundled compositor. A host that refuses the fetch
//! surfaces as a capture error rather than a silently artwork-less card.

use async_trait::async_trait;
use utsav::card::{CaptureError, CardFace, CardSurface, compose_card_png};

/// [`CardSurface`] that fetches artwork over HTTP and composes the card
/// with the bundled compositor.
#[derive(Debug, Default)]
pub(crate) struct HttpCardSurface {
    http: reqwest::Client,
}

impl HttpCardSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardSurface for HttpCardSurface {
    async fn capture(&self, face: &CardFace, scale: u32) -> Result<Vec<u8>, CaptureError> {
        let response = self
            .http
            .get(&face.artwork_url)
            .send()
            .await
            .map_err(|error| CaptureError::ArtworkFetch(error.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(CaptureError::ArtworkFetch(format!(
                "artwork fetch returned status {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| CaptureError::ArtworkFetch(error.to_string()))?;

        compose_card_png(&bytes, face, scale)
    }
}
