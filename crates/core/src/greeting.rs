//! Greeting-card composer.
//!
//! Holds the in-progress greeting (names, relationship, message choice,
//! artwork) and derives the effective message with custom-text-over-template
//! precedence. Incompleteness is state that disables sharing controls, never
//! an error.

use serde::{Deserialize, Serialize};

mod artworks;
mod templates;

pub use artworks::{ARTWORKS, Artwork, artwork};
pub use templates::templates;

/// Fallback greeting used when neither a template nor custom text is set.
pub const DEFAULT_MESSAGE: &str = "May this Diwali bring endless joy, prosperity, and happiness \
     to your life. Wishing you a festival filled with light, love, and sweet moments!";

/// Who the greeting is for, relative to the sender.
///
/// Each relationship carries its own set of message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// The sender's parents.
    Parents,
    /// Friends.
    Friends,
    /// Work colleagues.
    Colleagues,
    /// A sister.
    Sister,
    /// A brother.
    Brother,
    /// An uncle.
    Uncle,
    /// An aunty.
    Aunty,
}

impl Relationship {
    /// Every relationship, in display order.
    pub const ALL: [Self; 7] = [
        Self::Parents,
        Self::Friends,
        Self::Colleagues,
        Self::Sister,
        Self::Brother,
        Self::Uncle,
        Self::Aunty,
    ];

    /// Stable key used in wire formats and stored state.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Parents => "parents",
            Self::Friends => "friends",
            Self::Colleagues => "colleagues",
            Self::Sister => "sister",
            Self::Brother => "brother",
            Self::Uncle => "uncle",
            Self::Aunty => "aunty",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parents => "Parents",
            Self::Friends => "Friends",
            Self::Colleagues => "Colleagues",
            Self::Sister => "Sister",
            Self::Brother => "Brother",
            Self::Uncle => "Uncle",
            Self::Aunty => "Aunty",
        }
    }

    /// Decorative emoji shown next to the label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Parents => "👨‍👩‍👧‍👦",
            Self::Friends => "👫",
            Self::Colleagues => "💼",
            Self::Sister => "👭",
            Self::Brother => "👬",
            Self::Uncle => "👨",
            Self::Aunty => "👩",
        }
    }

    /// Parse a stable key back into a relationship.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// The in-progress greeting being composed.
///
/// Created fresh per visit to the greeting page and thrown away on
/// navigation; there is no persistence.
#[derive(Debug, Clone)]
pub struct GreetingComposer {
    recipient_name: String,
    sender_name: String,
    relationship: Option<Relationship>,
    selected_template: String,
    custom_message: String,
    artwork: Artwork,
}

impl Default for GreetingComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingComposer {
    /// Start a fresh greeting with the first artwork preselected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recipient_name: String::new(),
            sender_name: String::new(),
            relationship: None,
            selected_template: String::new(),
            custom_message: String::new(),
            artwork: artworks::default_artwork(),
        }
    }

    /// Set who the greeting is addressed to.
    pub fn set_recipient(&mut self, name: impl Into<String>) {
        self.recipient_name = name.into();
    }

    /// Set who the greeting is from.
    pub fn set_sender(&mut self, name: impl Into<String>) {
        self.sender_name = name.into();
    }

    /// Switch the relationship.
    ///
    /// Switching categories invalidates the previous template choice, so the
    /// selection snaps to the first template of the new relationship and any
    /// custom text is cleared.
    pub fn set_relationship(&mut self, relationship: Relationship) {
        self.relationship = Some(relationship);
        self.selected_template = templates(relationship)
            .first()
            .copied()
            .unwrap_or_default()
            .to_owned();
        self.custom_message.clear();
    }

    /// Pick a message template. Clears any custom text; template selection
    /// and custom text are mutually exclusive, last write wins.
    pub fn select_template(&mut self, text: impl Into<String>) {
        self.selected_template = text.into();
        self.custom_message.clear();
    }

    /// Set free-form custom text. The template selection is kept, but
    /// [`Self::effective_message`] prefers custom text whenever non-empty.
    pub fn set_custom_message(&mut self, text: impl Into<String>) {
        self.custom_message = text.into();
    }

    /// Replace the selected background artwork.
    pub fn select_artwork(&mut self, artwork: Artwork) {
        self.artwork = artwork;
    }

    /// Recipient name as entered.
    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Sender name as entered.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Currently selected relationship, if any.
    #[must_use]
    pub fn relationship(&self) -> Option<Relationship> {
        self.relationship
    }

    /// Currently selected template text (may be empty).
    #[must_use]
    pub fn selected_template(&self) -> &str {
        &self.selected_template
    }

    /// Current custom text (may be empty).
    #[must_use]
    pub fn custom_message(&self) -> &str {
        &self.custom_message
    }

    /// Currently selected artwork.
    #[must_use]
    pub fn artwork(&self) -> Artwork {
        self.artwork
    }

    /// The greeting text that would be displayed or shared right now:
    /// custom text if non-empty, else the selected template, else
    /// [`DEFAULT_MESSAGE`]. Pure.
    #[must_use]
    pub fn effective_message(&self) -> &str {
        if !self.custom_message.is_empty() {
            &self.custom_message
        } else if !self.selected_template.is_empty() {
            &self.selected_template
        } else {
            DEFAULT_MESSAGE
        }
    }

    /// The effective message with `[Recipient]` and `[Sender]` placeholders
    /// substituted; unset names fall back to bracketed hints.
    #[must_use]
    pub fn personalized_message(&self) -> String {
        let recipient = if self.recipient_name.is_empty() {
            "[Recipient Name]"
        } else {
            &self.recipient_name
        };
        let sender = if self.sender_name.is_empty() {
            "[Your Name]"
        } else {
            &self.sender_name
        };

        self.effective_message()
            .replace("[Recipient]", recipient)
            .replace("[Sender]", sender)
    }

    /// Whether the greeting can be shared or exported: recipient, sender and
    /// the effective message must all be non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.recipient_name.is_empty()
            && !self.sender_name.is_empty()
            && !self.effective_message().is_empty()
    }
}
