//! Fixed catalog of card background artworks.
//!
//! Each artwork carries the text and overlay colors the card view uses so
//! the message stays readable over the image.

use serde::Serialize;

/// One background artwork for the greeting card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Artwork {
    /// Stable identifier.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Image URL; must permit anonymous fetching for card export.
    pub url: &'static str,

    /// CSS hex color for text rendered over this artwork.
    pub text_color: &'static str,

    /// CSS hex color for panels and accents layered on this artwork.
    pub overlay_color: &'static str,

    /// Theme bucket the picker groups by.
    pub category: &'static str,
}

/// All available artworks, in picker order.
pub const ARTWORKS: &[Artwork] = &[
    Artwork {
        id: "diya-glow",
        name: "Glowing Diyas",
        url: "https://images.unsplash.com/photo-1574265933571-e25eb1a49fbb",
        text_color: "#7c2d12",
        overlay_color: "#ea580c",
        category: "traditional",
    },
    Artwork {
        id: "rangoli-burst",
        name: "Rangoli Burst",
        url: "https://images.unsplash.com/photo-1604423043492-41303788de37",
        text_color: "#701a75",
        overlay_color: "#c026d3",
        category: "traditional",
    },
    Artwork {
        id: "marigold-garland",
        name: "Marigold Garland",
        url: "https://images.unsplash.com/photo-1604604994333-f1b0e9471186",
        text_color: "#713f12",
        overlay_color: "#d97706",
        category: "floral",
    },
    Artwork {
        id: "lantern-sky",
        name: "Lantern Sky",
        url: "https://images.unsplash.com/photo-1605018203978-9c1b8ef04b6e",
        text_color: "#1e3a8a",
        overlay_color: "#f59e0b",
        category: "modern",
    },
    Artwork {
        id: "fireworks-night",
        name: "Fireworks Night",
        url: "https://images.unsplash.com/photo-1514912885225-5c9ec8507d68",
        text_color: "#f8fafc",
        overlay_color: "#6d28d9",
        category: "modern",
    },
    Artwork {
        id: "sweets-platter",
        name: "Festive Sweets Platter",
        url: "https://images.unsplash.com/photo-1589786742305-f24d19eedbe5",
        text_color: "#7c2d12",
        overlay_color: "#ca8a04",
        category: "floral",
    },
];

/// Look up an artwork by id.
#[must_use]
pub fn artwork(id: &str) -> Option<Artwork> {
    ARTWORKS.iter().copied().find(|artwork| artwork.id == id)
}

/// The artwork preselected on a fresh composer.
pub(crate) fn default_artwork() -> Artwork {
    ARTWORKS.first().copied().unwrap_or(Artwork {
        id: "blank",
        name: "Blank",
        url: "",
        text_color: "#1f2937",
        overlay_color: "#ea580c",
        category: "traditional",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(artwork("diya-glow").map(|a| a.name), Some("Glowing Diyas"));
        assert_eq!(artwork("nope"), None);
    }

    #[test]
    fn artwork_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();

        for artwork in ARTWORKS {
            assert!(seen.insert(artwork.id), "duplicate artwork id {}", artwork.id);
        }
    }

    #[test]
    fn colors_are_css_hex() {
        for artwork in ARTWORKS {
            assert!(artwork.text_color.starts_with('#'), "{}", artwork.id);
            assert!(artwork.overlay_color.starts_with('#'), "{}", artwork.id);
        }
    }
}
