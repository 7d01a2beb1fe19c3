//! Card export pipeline.
//!
//! The capture step fundamentally depends on a rendering surface, so it stays
//! behind the [`CardSurface`] capability; what lives here is everything
//! around it: the composed card model, the at-most-one-in-flight guard, the
//! download naming, and the failure-to-notice conversion. A bundled
//! [`compose_card_png`] compositor renders the artwork-and-chrome layers of
//! the card with the `image` crate.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    greeting::{ARTWORKS, GreetingComposer},
    notice::Notice,
    share::{IncompleteGreeting, SharePayload},
};

mod compose;

pub use compose::compose_card_png;

/// Fixed upscale factor for exports, so the saved card is share quality
/// regardless of the on-screen pixel density.
pub const EXPORT_SCALE: u32 = 3;

/// Card width in layout pixels (before upscaling).
pub const CARD_WIDTH: u32 = 800;

/// Card height in layout pixels (before upscaling).
pub const CARD_HEIGHT: u32 = 1000;

/// Everything needed to render one greeting card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Recipient name shown after "To:".
    pub to: String,

    /// Sender name shown after "From:".
    pub from: String,

    /// The greeting text.
    pub message: String,

    /// Background artwork URL.
    pub artwork_url: String,

    /// CSS hex color for text over the artwork.
    pub text_color: String,

    /// CSS hex color for accents and panels.
    pub overlay_color: String,
}

impl CardFace {
    /// Build the card for the current composer state, enforcing the
    /// completeness gate.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteGreeting`] when the composer cannot be shared yet.
    pub fn from_composer(composer: &GreetingComposer) -> Result<Self, IncompleteGreeting> {
        let payload = SharePayload::from_composer(composer)?;
        let artwork = composer.artwork();

        Ok(Self {
            to: payload.to,
            from: payload.from,
            message: payload.message,
            artwork_url: payload.artwork,
            text_color: artwork.text_color.to_owned(),
            overlay_color: artwork.overlay_color.to_owned(),
        })
    }

    /// Build the card for a decoded share payload.
    ///
    /// When the artwork URL matches a known catalog artwork its colors are
    /// used; otherwise the card falls back to the house palette.
    #[must_use]
    pub fn from_payload(payload: &SharePayload) -> Self {
        let known = ARTWORKS
            .iter()
            .find(|artwork| artwork.url == payload.artwork);

        Self {
            to: payload.to.clone(),
            from: payload.from.clone(),
            message: payload.message.clone(),
            artwork_url: payload.artwork.clone(),
            text_color: known.map_or("#1f2937", |artwork| artwork.text_color).to_owned(),
            overlay_color: known.map_or("#ea580c", |artwork| artwork.overlay_color).to_owned(),
        }
    }
}

/// Errors from capturing a card as pixels.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The artwork could not be fetched from its URL. The fetch must be
    /// anonymous-origin; a source that refuses such requests lands here
    /// rather than silently omitting the image.
    #[error("artwork could not be fetched: {0}")]
    ArtworkFetch(String),

    /// The fetched artwork bytes were not a decodable image.
    #[error("artwork image could not be decoded: {0}")]
    ArtworkDecode(#[source] image::ImageError),

    /// A card style color was not a `#rrggbb` value.
    #[error("invalid color `{0}` in card style")]
    InvalidColor(String),

    /// PNG encoding failed.
    #[error("card image could not be encoded: {0}")]
    Encode(#[source] image::ImageError),
}

/// The injected rendering capability: captures a laid-out card as PNG bytes
/// at the given upscale factor.
#[async_trait]
pub trait CardSurface: Send + Sync {
    /// Render `face` and return PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] when the artwork cannot be fetched or the
    /// card cannot be rasterized.
    async fn capture(&self, face: &CardFace, scale: u32) -> Result<Vec<u8>, CaptureError>;
}

/// Errors from the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A capture is already pending for this card; at most one runs at a
    /// time so the user never gets duplicate downloads.
    #[error("a card download is already in progress")]
    CaptureInFlight,

    /// The capture itself failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl ExportError {
    /// The transient notification shown for this failure; composer state is
    /// untouched so the user can retry.
    #[must_use]
    pub fn to_notice(&self) -> Notice {
        Notice::export_failed(&self.to_string())
    }
}

/// A finished export, ready to hand to the download surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDownload {
    /// Suggested file name.
    pub filename: String,

    /// PNG bytes.
    pub png: Vec<u8>,
}

/// Derive the download file name from the recipient, keeping only
/// alphanumerics, with a generic fallback.
#[must_use]
pub fn download_filename(recipient: &str) -> String {
    let sanitized: String = recipient
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if sanitized.is_empty() {
        "diwali-greeting-card.png".to_owned()
    } else {
        format!("diwali-greeting-{sanitized}.png")
    }
}

/// Runs card exports against an injected surface, one at a time.
pub struct CardExporter {
    surface: Arc<dyn CardSurface>,
    in_flight: AtomicBool,
}

impl fmt::Debug for CardExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardExporter")
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl CardExporter {
    /// Create an exporter over the given surface.
    #[must_use]
    pub fn new(surface: Arc<dyn CardSurface>) -> Self {
        Self {
            surface,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Capture `face` at [`EXPORT_SCALE`] and package it for download.
    ///
    /// While a capture is pending, further calls fail fast with
    /// [`ExportError::CaptureInFlight`]; the slot is released when the
    /// capture completes or fails, so a retry after an error proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::CaptureInFlight`] when another export is
    /// pending, or the underlying [`CaptureError`].
    pub async fn export(&self, face: &CardFace) -> Result<CardDownload, ExportError> {
        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(ExportError::CaptureInFlight)?;

        let png = self.surface.capture(face, EXPORT_SCALE).await?;

        Ok(CardDownload {
            filename: download_filename(&face.to),
            png,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicU32, Ordering},
    };

    use testresult::TestResult;
    use tokio::sync::{Notify, oneshot};

    use super::*;

    fn face() -> CardFace {
        CardFace {
            to: "Raj".to_owned(),
            from: "Aparna".to_owned(),
            message: "Happy Diwali!".to_owned(),
            artwork_url: "https://x/img.png".to_owned(),
            text_color: "#7c2d12".to_owned(),
            overlay_color: "#ea580c".to_owned(),
        }
    }

    struct FixedSurface {
        calls: AtomicU32,
        result: fn() -> Result<Vec<u8>, CaptureError>,
    }

    #[async_trait]
    impl CardSurface for FixedSurface {
        async fn capture(&self, _face: &CardFace, _scale: u32) -> Result<Vec<u8>, CaptureError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    struct BlockingSurface {
        started: Notify,
        release: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl CardSurface for BlockingSurface {
        async fn capture(&self, _face: &CardFace, _scale: u32) -> Result<Vec<u8>, CaptureError> {
            self.started.notify_one();

            let release = self.release.lock().unwrap().take();
            if let Some(release) = release {
                let _ = release.await;
            }

            Ok(vec![1, 2, 3])
        }
    }

    #[test]
    fn filename_sanitizes_the_recipient() {
        assert_eq!(
            download_filename("Raj Kumar!"),
            "diwali-greeting-RajKumar.png"
        );
        assert_eq!(download_filename("✨✨"), "diwali-greeting-card.png");
        assert_eq!(download_filename(""), "diwali-greeting-card.png");
    }

    #[tokio::test]
    async fn export_names_the_file_after_the_recipient() -> TestResult {
        let surface = Arc::new(FixedSurface {
            calls: AtomicU32::new(0),
            result: || Ok(vec![0_u8; 4]),
        });
        let exporter = CardExporter::new(surface);

        let download = exporter.export(&face()).await?;

        assert_eq!(download.filename, "diwali-greeting-Raj.png");
        assert_eq!(download.png, vec![0_u8; 4]);

        Ok(())
    }

    #[tokio::test]
    async fn second_export_while_pending_is_rejected() -> TestResult {
        let (release_tx, release_rx) = oneshot::channel();
        let surface = Arc::new(BlockingSurface {
            started: Notify::new(),
            release: Mutex::new(Some(release_rx)),
        });
        let exporter = Arc::new(CardExporter::new(Arc::clone(&surface) as Arc<dyn CardSurface>));

        let pending = tokio::spawn({
            let exporter = Arc::clone(&exporter);
            async move { exporter.export(&face()).await }
        });

        surface.started.notified().await;

        let second = exporter.export(&face()).await;

        assert!(
            matches!(second, Err(ExportError::CaptureInFlight)),
            "expected busy error, got {second:?}"
        );

        release_tx.send(()).ok();

        let first = pending.await?;

        assert!(first.is_ok(), "pending export completes: {first:?}");

        Ok(())
    }

    #[tokio::test]
    async fn failed_capture_releases_the_slot() {
        let surface = Arc::new(FixedSurface {
            calls: AtomicU32::new(0),
            result: || Err(CaptureError::ArtworkFetch("boom".to_owned())),
        });
        let exporter = CardExporter::new(Arc::clone(&surface) as Arc<dyn CardSurface>);

        let first = exporter.export(&face()).await;

        assert!(matches!(first, Err(ExportError::Capture(_))), "first fails");

        let second = exporter.export(&face()).await;

        assert!(
            matches!(second, Err(ExportError::Capture(_))),
            "retry reached the surface instead of the busy error"
        );
        assert_eq!(surface.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn export_error_converts_to_a_notice() {
        let error = ExportError::CaptureInFlight;

        let notice = error.to_notice();

        assert_eq!(notice.title, "Download Failed");
    }

    #[test]
    fn face_from_payload_uses_known_artwork_colors() {
        let known_url = ARTWORKS.first().map(|artwork| artwork.url).unwrap_or("");
        let payload = SharePayload {
            to: "Raj".to_owned(),
            from: "Aparna".to_owned(),
            message: "Hi".to_owned(),
            artwork: known_url.to_owned(),
        };

        let card = CardFace::from_payload(&payload);

        assert_eq!(card.overlay_color, "#ea580c");
        assert_eq!(card.text_color, "#7c2d12");
    }

    #[test]
    fn face_from_payload_falls_back_to_house_palette() {
        let payload = SharePayload {
            to: "Raj".to_owned(),
            from: "Aparna".to_owned(),
            message: "Hi".to_owned(),
            artwork: "https://elsewhere/bg.png".to_owned(),
        };

        let card = CardFace::from_payload(&payload);

        assert_eq!(card.text_color, "#1f2937");
        assert_eq!(card.overlay_color, "#ea580c");
    }

    #[test]
    fn face_from_composer_requires_completeness() {
        let composer = GreetingComposer::new();

        assert_eq!(
            CardFace::from_composer(&composer),
            Err(IncompleteGreeting)
        );
    }
}
