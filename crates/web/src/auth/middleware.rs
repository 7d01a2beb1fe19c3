//! Admin auth middleware.
//!
//! Every route under `/admin` requires the shared secret in the `admin_key`
//! query parameter. Missing or wrong keys are rejected before the handler
//! runs.

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(candidate) = req.query::<String>("admin_key") else {
        res.render(StatusError::forbidden().brief("Admin access required"));

        return;
    };

    let Ok(state) = depot.obtain_or_500::<Arc<State>>() else {
        res.render(StatusError::internal_server_error());

        return;
    };

    if !state.admin_key.verify(&candidate) {
        res.render(StatusError::forbidden().brief("Admin access required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN_KEY, test_state};

    use super::*;

    #[salvo::handler]
    async fn protected() -> &'static str {
        "through"
    }

    fn make_service() -> Service {
        let router = Router::new()
            .hoop(inject(test_state()))
            .hoop(handler)
            .push(Router::new().get(protected));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_missing_key_returns_403() {
        let res = TestClient::get("http://example.com")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_wrong_key_returns_403() {
        let res = TestClient::get("http://example.com?admin_key=guess")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_correct_key_reaches_the_handler() -> TestResult {
        let mut res = TestClient::get(format!("http://example.com?admin_key={TEST_ADMIN_KEY}"))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "through");

        Ok(())
    }
}
