//! Server-rendered greeting pages.

use maud::{DOCTYPE, Markup, html};
use utsav::{card::CardFace, share::{SharePayload, ShareDecodeError}};

/// Preview description: the first hundred characters of the message.
fn preview_description(message: &str) -> String {
    let mut preview: String = message.chars().take(100).collect();

    if preview.len() < message.len() {
        preview.push('…');
    }

    preview
}

/// The read-only card view for a successfully decoded greeting, including
/// the page title and social preview tags third-party platforms read.
pub(crate) fn greeting_page(payload: &SharePayload, face: &CardFace, page_url: &str) -> Markup {
    let title = format!("🪔 Diwali Greeting from {}", payload.from);
    let description = preview_description(&payload.message);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title {
                    "Diwali Greeting from " (payload.from) " to " (payload.to)
                }
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:image" content=(payload.artwork);
                meta property="og:url" content=(page_url);
                meta property="og:type" content="website";
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(title);
                meta name="twitter:description" content=(description);
                meta name="twitter:image" content=(payload.artwork);
            }
            body {
                main.greeting-card {
                    header {
                        h1 { "🪔 Happy Diwali! 🪔" }
                        p {
                            "A special greeting from " (payload.from)
                            " to " (payload.to)
                        }
                    }
                    section.card {
                        img src=(payload.artwork) alt="Diwali artwork";
                        div.card-text style=(format!("color: {}", face.text_color)) {
                            p.to { b { "To: " } (payload.to) }
                            blockquote
                                style=(format!("border-left: 4px solid {}", face.overlay_color)) {
                                (payload.message)
                            }
                            p.from { b { "From: " } (payload.from) }
                        }
                        footer {
                            p { "✨ Wishing you joy & prosperity! ✨" }
                        }
                    }
                    p.attribution {
                        "Created with ❤️ at Aparna's Diwali Delights"
                    }
                    p { a href="/" { "Create your own Diwali greeting →" } }
                }
            }
        }
    }
}

/// The distinct error page shown when any share parameter is missing; no
/// part of the greeting is rendered.
pub(crate) fn missing_parameters_page(error: &ShareDecodeError) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Invalid greeting link" }
            }
            body {
                main.greeting-error {
                    h1 { "Missing greeting parameters" }
                    p { "This greeting link is incomplete: " (error) "." }
                    p { a href="/" { "Create a new Diwali greeting →" } }
                }
            }
        }
    }
}
