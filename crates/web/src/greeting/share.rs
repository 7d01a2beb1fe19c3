//! Shared greeting view handler.

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use utsav::{card::CardFace, share::SharePayload};

use crate::{extensions::*, greeting::view, state::State};

/// Renders the read-only greeting for a share link, or the error page when
/// any of the four parameters is missing.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let query = req.uri().query().unwrap_or_default();

    match SharePayload::decode(query) {
        Ok(payload) => {
            let face = CardFace::from_payload(&payload);
            let page_url = payload
                .share_url(&state.public_base_url)
                .or_500("failed to build the share url")?;

            res.render(Text::Html(
                view::greeting_page(&payload, &face, &page_url).into_string(),
            ));
        }
        Err(error) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Html(
                view::missing_parameters_page(&error).into_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{service_with, test_state};

    use super::*;

    fn routes() -> Router {
        Router::with_path("greeting").get(handler)
    }

    #[tokio::test]
    async fn test_complete_link_renders_the_card() -> TestResult {
        let mut res = TestClient::get(
            "http://example.com/greeting?to=Raj&from=Aparna&message=Happy+Diwali!&artwork=https%3A%2F%2Fx%2Fimg.png",
        )
        .send(&service_with(test_state(), routes()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body = res.take_string().await?;

        assert!(body.contains("To: "), "card text present");
        assert!(body.contains("Raj"), "recipient rendered");
        assert!(body.contains("Aparna"), "sender rendered");
        assert!(
            body.contains(r#"property="og:image""#),
            "social preview tags present"
        );
        assert!(
            body.contains("https://x/img.png"),
            "artwork url in the page"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_parameter_renders_the_error_page() -> TestResult {
        let mut res =
            TestClient::get("http://example.com/greeting?to=Raj&from=Aparna&message=Hi")
                .send(&service_with(test_state(), routes()))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body = res.take_string().await?;

        assert!(
            body.contains("Missing greeting parameters"),
            "error page shown"
        );
        assert!(!body.contains("To: "), "no partial card is rendered");

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_parameter_is_treated_as_missing() {
        let res = TestClient::get(
            "http://example.com/greeting?to=&from=Aparna&message=Hi&artwork=https%3A%2F%2Fx%2Fimg.png",
        )
        .send(&service_with(test_state(), routes()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
