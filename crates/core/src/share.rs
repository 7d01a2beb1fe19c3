//! Shareable greeting links.
//!
//! A composed greeting is serialized into four query parameters (`to`,
//! `from`, `message`, `artwork`) so a single URL reconstructs a read-only
//! view. Decoding is all-or-nothing: a link missing any parameter is an
//! error state, never a partially filled card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::greeting::GreetingComposer;

/// Raised when a greeting fails the completeness gate before sharing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("greeting is incomplete; recipient, sender and message are required")]
pub struct IncompleteGreeting;

/// Errors from decoding a share query string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareDecodeError {
    /// A required parameter was absent or blank.
    #[error("missing greeting parameter `{0}`")]
    MissingParam(&'static str),

    /// The query string itself did not parse.
    #[error("could not parse greeting query string: {0}")]
    Invalid(String),
}

/// Errors from encoding a share query string.
#[derive(Debug, Error)]
pub enum ShareEncodeError {
    /// The payload could not be serialized to a query string.
    #[error(transparent)]
    Query(#[from] serde_urlencoded::ser::Error),
}

/// The minimal field set embedded in a URL to reconstruct a shared greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Recipient name.
    pub to: String,

    /// Sender name.
    pub from: String,

    /// The greeting text (already personalized).
    pub message: String,

    /// Background artwork URL.
    pub artwork: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawShareQuery {
    to: Option<String>,
    from: Option<String>,
    message: Option<String>,
    artwork: Option<String>,
}

fn require(value: Option<String>, name: &'static str) -> Result<String, ShareDecodeError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) | None => Err(ShareDecodeError::MissingParam(name)),
    }
}

impl SharePayload {
    /// Build the payload from a composer, enforcing the completeness gate.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteGreeting`] when recipient, sender or the effective
    /// message is empty.
    pub fn from_composer(composer: &GreetingComposer) -> Result<Self, IncompleteGreeting> {
        if !composer.is_complete() {
            return Err(IncompleteGreeting);
        }

        Ok(Self {
            to: composer.recipient_name().to_owned(),
            from: composer.sender_name().to_owned(),
            message: composer.personalized_message(),
            artwork: composer.artwork().url.to_owned(),
        })
    }

    /// Percent-encode the payload into a query string.
    ///
    /// # Errors
    ///
    /// Returns a [`ShareEncodeError`] when serialization fails.
    pub fn encode(&self) -> Result<String, ShareEncodeError> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Build the full shareable URL under `base`, e.g.
    /// `https://example.com/greeting?to=…`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShareEncodeError`] when serialization fails.
    pub fn share_url(&self, base: &str) -> Result<String, ShareEncodeError> {
        Ok(format!(
            "{}/greeting?{}",
            base.trim_end_matches('/'),
            self.encode()?
        ))
    }

    /// Decode a query string back into a payload.
    ///
    /// All four parameters must be present and non-empty; a present-but-blank
    /// parameter counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ShareDecodeError::MissingParam`] naming the first absent
    /// parameter, or [`ShareDecodeError::Invalid`] when the query string does
    /// not parse at all.
    pub fn decode(query: &str) -> Result<Self, ShareDecodeError> {
        let raw: RawShareQuery = serde_urlencoded::from_str(query)
            .map_err(|error| ShareDecodeError::Invalid(error.to_string()))?;

        Ok(Self {
            to: require(raw.to, "to")?,
            from: require(raw.from, "from")?,
            message: require(raw.message, "message")?,
            artwork: require(raw.artwork, "artwork")?,
        })
    }

    /// The decorated plain-text greeting used for the clipboard and
    /// messaging share targets.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "🪔 Happy Diwali! 🪔\n\nDear {},\n\n{}\n\nWith love and warm wishes,\n{}\n\n\
             ✨ Wishing you joy, prosperity & happiness! ✨",
            self.to, self.message, self.from
        )
    }

    /// A messaging-app compose link prefilled with [`Self::share_text`].
    ///
    /// # Errors
    ///
    /// Returns a [`ShareEncodeError`] when the text cannot be encoded.
    pub fn whatsapp_url(&self) -> Result<String, ShareEncodeError> {
        let query = serde_urlencoded::to_string([("text", self.share_text())])?;

        Ok(format!("https://wa.me/?{query}"))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::greeting::{GreetingComposer, Relationship};

    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            to: "Raj".to_owned(),
            from: "Aparna".to_owned(),
            message: "Happy Diwali!".to_owned(),
            artwork: "https://x/img.png".to_owned(),
        }
    }

    #[test]
    fn encode_decode_round_trips() -> TestResult {
        let original = payload();

        let decoded = SharePayload::decode(&original.encode()?)?;

        assert_eq!(decoded, original);

        Ok(())
    }

    #[test]
    fn round_trip_preserves_punctuation_and_emoji() -> TestResult {
        let original = SharePayload {
            to: "Raj & Simran".to_owned(),
            from: "Aparna+Co".to_owned(),
            message: "शुभ दीपावली! 🪔✨ 100% joy & \"light\"?".to_owned(),
            artwork: "https://x/img.png?crop=1&q=85".to_owned(),
        };

        let decoded = SharePayload::decode(&original.encode()?)?;

        assert_eq!(decoded, original);

        Ok(())
    }

    #[test]
    fn decode_missing_artwork_is_an_error() {
        let result = SharePayload::decode("to=Raj&from=Aparna&message=Hi");

        assert_eq!(result, Err(ShareDecodeError::MissingParam("artwork")));
    }

    #[test]
    fn decode_blank_parameter_counts_as_missing() {
        let result = SharePayload::decode("to=&from=Aparna&message=Hi&artwork=x");

        assert_eq!(result, Err(ShareDecodeError::MissingParam("to")));
    }

    #[test]
    fn decode_plus_and_percent_escapes() -> TestResult {
        let decoded = SharePayload::decode("to=Raj+Kumar&from=Aparna&message=Hi%20there&artwork=x")?;

        assert_eq!(decoded.to, "Raj Kumar");
        assert_eq!(decoded.message, "Hi there");

        Ok(())
    }

    #[test]
    fn from_composer_enforces_the_gate() {
        let mut composer = GreetingComposer::new();

        composer.set_recipient("Raj");

        assert_eq!(
            SharePayload::from_composer(&composer),
            Err(IncompleteGreeting)
        );
    }

    #[test]
    fn from_composer_uses_the_personalized_message() -> TestResult {
        let mut composer = GreetingComposer::new();

        composer.set_recipient("Raj");
        composer.set_sender("Aparna");
        composer.set_relationship(Relationship::Friends);
        composer.set_custom_message("Greetings, [Recipient]!");

        let payload = SharePayload::from_composer(&composer)?;

        assert_eq!(payload.message, "Greetings, Raj!");
        assert_eq!(payload.artwork, composer.artwork().url);

        Ok(())
    }

    #[test]
    fn share_url_hits_the_greeting_route() -> TestResult {
        let url = payload().share_url("https://example.com/")?;

        assert!(
            url.starts_with("https://example.com/greeting?"),
            "got {url}"
        );

        Ok(())
    }

    #[test]
    fn share_text_carries_names_and_message() {
        let text = payload().share_text();

        assert!(text.contains("Dear Raj,"), "recipient line");
        assert!(text.contains("Happy Diwali!"), "message");
        assert!(text.contains("Aparna"), "sender");
    }

    #[test]
    fn whatsapp_url_is_percent_encoded() -> TestResult {
        let url = payload().whatsapp_url()?;

        assert!(url.starts_with("https://wa.me/?text="), "got {url}");
        assert!(!url.contains('\n'), "newlines are encoded");

        Ok(())
    }
}
